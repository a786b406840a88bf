//! Layout data types for booklet imposition
//!
//! These types represent the intermediate layout calculations between
//! page ordering and PDF rendering.

use crate::order::SheetSide;

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Whether `other` lies inside this rect, allowing `tolerance` points of slack
    pub fn contains(&self, other: &Rect, tolerance: f32) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.top() <= self.top() + tolerance
    }
}

/// Final placement of one source page on a sheet side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPlacement {
    /// Zero-based source page index
    pub source_page: usize,
    /// The half of the sheet reserved for this page
    pub slot: Rect,
    /// Where the scaled page content lands
    pub content_rect: Rect,
    /// Uniform scale factor applied to the source page
    pub scale: f32,
}

/// Everything needed to render one face of a physical sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// Position in print order (0-based)
    pub pair_index: usize,
    /// Which face of the physical sheet
    pub side: SheetSide,
    /// Sheet width in points
    pub width_pt: f32,
    /// Sheet height in points
    pub height_pt: f32,
    /// Page rotation applied to the whole composed sheet (0 or 180)
    pub rotation_degrees: i64,
    pub left: SlotPlacement,
    pub right: SlotPlacement,
}

impl SheetLayout {
    pub fn placements(&self) -> [&SlotPlacement; 2] {
        [&self.left, &self.right]
    }

    /// 1-based physical sheet number
    pub fn sheet_number(&self) -> usize {
        self.pair_index / 2 + 1
    }
}
