//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Booklet Geometry
// =============================================================================

/// Source pages carried by one physical sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Source pages printed on one side of a sheet
pub const PAGES_PER_SIDE: usize = 2;

/// Rotation applied to back sides for long-edge duplex printing
pub const BACK_SIDE_ROTATION: i64 = 180;

// =============================================================================
// Printer's Marks
// =============================================================================

/// Line width for the fold line (points)
pub const FOLD_LINE_WIDTH: f32 = 0.5;

/// Dash pattern for the fold line: 6pt dash, 3pt gap
pub const FOLD_LINE_DASH: &str = "[6 3] 0 d";

// =============================================================================
// Page Tree
// =============================================================================

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic Parent chains in damaged files
pub const MAX_PAGE_TREE_DEPTH: usize = 64;
