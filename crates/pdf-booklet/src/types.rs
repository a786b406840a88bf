use crate::constants::mm_to_pt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error(
        "{actual} pages cannot form a booklet: the page count must be a multiple of 4 (nearest valid: {})",
        nearest_hint(.lower, .upper)
    )]
    InvalidPageCount {
        actual: usize,
        lower: Option<usize>,
        upper: Option<usize>,
    },
    #[error("Source page {index} is malformed: {reason}")]
    MalformedPage { index: usize, reason: String },
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    NoPages,
}

fn nearest_hint(lower: &Option<usize>, upper: &Option<usize>) -> String {
    match (lower, upper) {
        (Some(lower), Some(upper)) => format!("{} or {}", lower, upper),
        (Some(only), None) | (None, Some(only)) => only.to_string(),
        (None, None) => "none".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Short and long edge in millimeters, regardless of how a custom size was entered
    pub fn short_long_mm(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (w.min(h), w.max(h))
    }
}

/// Physical sheet fed to the printer.
///
/// Both variants produce a landscape sheet split into two equal halves,
/// one booklet page per half.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetFormat {
    /// The sheet is this paper size turned landscape; folding it yields
    /// pages half its size (an A4 sheet folds into A5 pages)
    Folded(PaperSize),
    /// Two pages of this size side by side: width is twice the page's short
    /// edge, height is its long edge
    Spread(PaperSize),
}

impl Default for SheetFormat {
    fn default() -> Self {
        SheetFormat::Folded(PaperSize::A4)
    }
}

impl SheetFormat {
    /// Sheet width and height in millimeters (landscape)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            SheetFormat::Folded(paper) => {
                let (short, long) = paper.short_long_mm();
                (long, short)
            }
            SheetFormat::Spread(page) => {
                let (short, long) = page.short_long_mm();
                (2.0 * short, long)
            }
        }
    }

    /// Sheet width and height in points (landscape)
    pub fn dimensions_pt(self) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        (mm_to_pt(w), mm_to_pt(h))
    }

    pub fn paper(self) -> PaperSize {
        match self {
            SheetFormat::Folded(paper) | SheetFormat::Spread(paper) => paper,
        }
    }
}

/// How a source page is sized into its half of the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalingMode {
    /// Scale up or down until the page touches the slot (preserve aspect ratio)
    #[default]
    Fit,
    /// Like `Fit`, but pages smaller than the slot keep their natural size
    ShrinkToFit,
}

/// Summary of a booklet job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Physical sheets to print (front and back)
    pub sheets: usize,
    /// Pages in the generated PDF (one per sheet side)
    pub output_pages: usize,
}
