//! Error types for the table renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a table
#[derive(Error, Debug)]
pub enum Error {
    /// The header has no cells
    #[error("Table header is empty")]
    EmptyHeader,

    /// The leaderboard grid has no rows at all
    #[error("Leaderboard is empty")]
    EmptyLeaderboard,

    /// The leaderboard has a column-title row but no data rows
    #[error("Leaderboard has no data rows (need at least one row below the column titles)")]
    MissingDataRows,

    /// The column-title row has no cells
    #[error("Leaderboard rows have no columns")]
    EmptyColumns,

    /// A row's cell count does not match the column-title row
    #[error("Leaderboard row {row} has {found} cells, expected {expected}")]
    RaggedColumns {
        /// Index of the offending row
        row: usize,
        /// Cell count of row 0
        expected: usize,
        /// Cell count actually found
        found: usize,
    },

    /// No usable font could be loaded, neither bundled nor from the fallback pool
    #[error("No usable font: {0}")]
    FontUnavailable(String),

    /// Encoding the finished canvas failed
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
