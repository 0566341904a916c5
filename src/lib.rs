//! statpic
//!
//! Renders leaderboard tables to PNG bytes: a header band, a sub-header line,
//! a grid of leaderboard cells (row 0 holds the column titles) and an optional
//! side thumbnail, laid out with a two-pass measure-then-draw algorithm driven
//! by real font metrics.
//!
//! # Example
//!
//! ```no_run
//! use statpic::{TableSpec, TableImageGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = TableSpec::new(
//!     vec!["Java Games".to_string()],
//!     "Global - Wins".to_string(),
//!     vec![
//!         vec!["Game".to_string(), "Wins".to_string()],
//!         vec!["SkyWars".to_string(), "500".to_string()],
//!     ],
//!     None,
//! )?;
//!
//! let generator = TableImageGenerator::new()?;
//! let png = generator.generate(&spec)?;
//! std::fs::write("leaderboard.png", png)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod font;
pub use font::FontSet;

pub mod metrics;

pub mod rendering;
pub use rendering::TableImageGenerator;

use image::RgbaImage;

/// A validated table to render.
///
/// Construction is the validation boundary: a `TableSpec` that exists is
/// well-formed, so layout and drawing never index out of bounds. The value is
/// immutable and owned by the caller; renders only borrow it.
#[derive(Debug, Clone)]
pub struct TableSpec {
    header: Vec<String>,
    sub_header: String,
    leaderboard: Vec<Vec<String>>,
    side_image: Option<RgbaImage>,
}

impl TableSpec {
    /// Build a spec, rejecting malformed input.
    ///
    /// `leaderboard` row 0 is the column-title row; at least one data row must
    /// follow it and every row must have the same, non-zero cell count.
    pub fn new(
        header: Vec<String>,
        sub_header: String,
        leaderboard: Vec<Vec<String>>,
        side_image: Option<RgbaImage>,
    ) -> Result<Self> {
        if header.is_empty() {
            return Err(Error::EmptyHeader);
        }
        if leaderboard.is_empty() {
            return Err(Error::EmptyLeaderboard);
        }
        if leaderboard.len() < 2 {
            return Err(Error::MissingDataRows);
        }
        let columns = leaderboard[0].len();
        if columns == 0 {
            return Err(Error::EmptyColumns);
        }
        for (row, cells) in leaderboard.iter().enumerate().skip(1) {
            if cells.len() != columns {
                return Err(Error::RaggedColumns {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }

        Ok(Self {
            header,
            sub_header,
            leaderboard,
            side_image,
        })
    }

    /// Header cells, left to right
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Sub-header line drawn below the header band
    pub fn sub_header(&self) -> &str {
        &self.sub_header
    }

    /// Leaderboard grid; row 0 holds the column titles
    pub fn leaderboard(&self) -> &[Vec<String>] {
        &self.leaderboard
    }

    /// Optional thumbnail placed beside the leaderboard body
    pub fn side_image(&self) -> Option<&RgbaImage> {
        self.side_image.as_ref()
    }
}

/// Render `spec` with the process font set and the default PNG backend.
pub fn render_table(spec: &TableSpec) -> Result<Vec<u8>> {
    TableImageGenerator::new()?.generate(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_spec_passes_validation() {
        let spec = TableSpec::new(
            vec!["Games".to_string()],
            "Daily".to_string(),
            vec![
                vec!["Game".to_string()],
                vec!["SkyWars".to_string()],
            ],
            None,
        );
        assert!(spec.is_ok());
    }

    #[test]
    fn empty_header_is_rejected() {
        let err = TableSpec::new(
            vec![],
            "Daily".to_string(),
            vec![vec!["A".to_string()], vec!["B".to_string()]],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyHeader));
    }

    #[test]
    fn empty_leaderboard_is_rejected() {
        let err = TableSpec::new(vec!["Games".to_string()], String::new(), vec![], None)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyLeaderboard));
    }

    #[test]
    fn header_only_leaderboard_is_rejected() {
        let err = TableSpec::new(
            vec!["Games".to_string()],
            String::new(),
            vec![vec!["Game".to_string()]],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingDataRows));
    }

    #[test]
    fn ragged_rows_are_rejected_with_location() {
        let err = TableSpec::new(
            vec!["Games".to_string()],
            String::new(),
            vec![
                vec!["Game".to_string(), "Wins".to_string()],
                vec!["SkyWars".to_string(), "500".to_string(), "extra".to_string()],
            ],
            None,
        )
        .unwrap_err();
        match err {
            Error::RaggedColumns {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_column_rows_are_rejected() {
        let err = TableSpec::new(
            vec!["Games".to_string()],
            String::new(),
            vec![vec![], vec![]],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyColumns));
    }
}
