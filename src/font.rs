//! Font loading and the process-wide font set.
//!
//! The base typeface ships with the crate (`assets/fonts/table.ttf`). When
//! that resource is missing or unreadable we fall back to the first loadable
//! entry of a small pool of well-known system fonts instead of failing the
//! process. The fallback decision is made once at first use and is fixed for
//! the process lifetime.

use std::path::Path;
use std::sync::OnceLock;

use ab_glyph::{FontArc, PxScale};
use log::warn;

use crate::error::{Error, Result};

/// Title row pixel size
pub const TITLE_PX: u32 = 42;
/// Sub-header pixel size
pub const SUB_HEADER_PX: u32 = 33;
/// Leaderboard column-title row pixel size
pub const LEADERBOARD_HEADER_PX: u32 = 38;
/// Leaderboard data row pixel size
pub const LEADERBOARD_BODY_PX: u32 = 30;

const BUNDLED_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/table.ttf");

// Tried in order when the bundled resource cannot be loaded.
const FALLBACK_POOL: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
];

/// A typeface paired with the pixel size it is measured and drawn at.
#[derive(Debug, Clone)]
pub struct ScaledFont {
    font: FontArc,
    px: u32,
}

impl ScaledFont {
    fn new(font: FontArc, px: u32) -> Self {
        Self { font, px }
    }

    /// The underlying typeface handle
    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Scale passed to the glyph backend for both measurement and drawing
    pub fn scale(&self) -> PxScale {
        PxScale::from(self.px as f32)
    }

    /// Nominal pixel size, used by vertical layout
    pub fn px(&self) -> u32 {
        self.px
    }
}

/// The four fonts used by table rendering, all derived from one base typeface.
///
/// Loaded once and reused across renders; `FontArc` makes clones cheap and the
/// set is read-only after construction, so concurrent renders may share it.
#[derive(Debug, Clone)]
pub struct FontSet {
    /// Header band font (42px)
    pub title: ScaledFont,
    /// Sub-header band font (33px)
    pub sub_header: ScaledFont,
    /// Leaderboard column-title row font (38px)
    pub leaderboard_header: ScaledFont,
    /// Leaderboard data row font (30px)
    pub leaderboard_body: ScaledFont,
}

impl FontSet {
    /// Font set backed by the bundled typeface, or the fallback pool when the
    /// bundled resource is unavailable.
    pub fn load() -> Result<Self> {
        Ok(Self::from_base(base_font()?.clone()))
    }

    /// Derive the four render sizes from an explicit base typeface.
    pub fn from_base(base: FontArc) -> Self {
        Self {
            title: ScaledFont::new(base.clone(), TITLE_PX),
            sub_header: ScaledFont::new(base.clone(), SUB_HEADER_PX),
            leaderboard_header: ScaledFont::new(base.clone(), LEADERBOARD_HEADER_PX),
            leaderboard_body: ScaledFont::new(base, LEADERBOARD_BODY_PX),
        }
    }
}

/// Load a scalable font from a file path.
pub fn load_font(path: impl AsRef<Path>) -> Result<FontArc> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| Error::FontUnavailable(format!("{}: {}", path.display(), e)))?;
    FontArc::try_from_vec(bytes)
        .map_err(|e| Error::FontUnavailable(format!("{}: {}", path.display(), e)))
}

/// Base typeface for the process. The bundled resource wins; otherwise the
/// first loadable pool entry is selected and kept for the process lifetime.
fn base_font() -> Result<&'static FontArc> {
    static BASE: OnceLock<Option<FontArc>> = OnceLock::new();

    let base = BASE.get_or_init(|| {
        match load_font(BUNDLED_FONT) {
            Ok(font) => return Some(font),
            Err(e) => warn!("Bundled font unavailable, trying fallback pool: {}", e),
        }
        for candidate in FALLBACK_POOL {
            if let Ok(font) = load_font(candidate) {
                warn!("Using fallback font {}", candidate);
                return Some(font);
            }
        }
        None
    });

    base.as_ref().ok_or_else(|| {
        Error::FontUnavailable("bundled resource and all fallback pool entries failed".to_string())
    })
}
