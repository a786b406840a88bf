//! Content placement within sheet halves
//!
//! A sheet is split into two equal-width halves. Each source page is scaled
//! uniformly to fit its half, centered horizontally within the half and
//! vertically within the full sheet height.

use crate::constants::BACK_SIDE_ROTATION;
use crate::order::{SheetPair, SheetSide};
use crate::types::{ScalingMode, SheetFormat};

use super::{Rect, SheetLayout, SlotPlacement};

/// Sheet width and height in points for a sheet format (always landscape)
pub fn sheet_dimensions_pt(format: SheetFormat) -> (f32, f32) {
    format.dimensions_pt()
}

/// Left and right halves of a sheet
pub fn half_slots(sheet_width_pt: f32, sheet_height_pt: f32) -> (Rect, Rect) {
    let half_width = sheet_width_pt / 2.0;
    (
        Rect::new(0.0, 0.0, half_width, sheet_height_pt),
        Rect::new(half_width, 0.0, half_width, sheet_height_pt),
    )
}

/// Calculate scale factor for fitting source to target dimensions.
pub fn calculate_scale(
    src_width: f32,
    src_height: f32,
    target_width: f32,
    target_height: f32,
    mode: ScalingMode,
) -> f32 {
    let fit = (target_width / src_width).min(target_height / src_height);
    match mode {
        ScalingMode::Fit => fit,
        ScalingMode::ShrinkToFit => fit.min(1.0),
    }
}

/// Scale a source page into `slot` and center it there.
pub fn place_in_slot(
    slot: Rect,
    source_page: usize,
    source_width: f32,
    source_height: f32,
    scaling_mode: ScalingMode,
) -> SlotPlacement {
    let scale = calculate_scale(
        source_width,
        source_height,
        slot.width,
        slot.height,
        scaling_mode,
    );

    let scaled_width = source_width * scale;
    let scaled_height = source_height * scale;

    let x = slot.x + (slot.width - scaled_width) / 2.0;
    let y = slot.y + (slot.height - scaled_height) / 2.0;

    SlotPlacement {
        source_page,
        slot,
        content_rect: Rect::new(x, y, scaled_width, scaled_height),
        scale,
    }
}

/// Lay out one sheet face: the pair's left page in the left half, right page
/// in the right half, and a 180° turn for back sides.
///
/// `left_dims` and `right_dims` are the source page sizes in points.
pub fn layout_sheet(
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    pair_index: usize,
    pair: SheetPair,
    left_dims: (f32, f32),
    right_dims: (f32, f32),
    scaling_mode: ScalingMode,
) -> SheetLayout {
    let side = SheetSide::for_pair_index(pair_index);
    let (left_slot, right_slot) = half_slots(sheet_width_pt, sheet_height_pt);

    SheetLayout {
        pair_index,
        side,
        width_pt: sheet_width_pt,
        height_pt: sheet_height_pt,
        rotation_degrees: if side.is_back() { BACK_SIDE_ROTATION } else { 0 },
        left: place_in_slot(left_slot, pair.left, left_dims.0, left_dims.1, scaling_mode),
        right: place_in_slot(
            right_slot,
            pair.right,
            right_dims.0,
            right_dims.1,
            scaling_mode,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaperSize;

    const A4_LANDSCAPE: (f32, f32) = (841.89, 595.28);

    #[test]
    fn test_scale_fit() {
        // Source is 800x600, target is 400x400
        // To fit, we need to scale by 0.5 (width-limited)
        let scale = calculate_scale(800.0, 600.0, 400.0, 400.0, ScalingMode::Fit);
        assert!((scale - 0.5).abs() < 0.001);

        // Source is 400x800, target is 400x400
        // To fit, we need to scale by 0.5 (height-limited)
        let scale = calculate_scale(400.0, 800.0, 400.0, 400.0, ScalingMode::Fit);
        assert!((scale - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_scale_fit_enlarges_small_pages() {
        let scale = calculate_scale(100.0, 100.0, 400.0, 300.0, ScalingMode::Fit);
        assert!((scale - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_shrink_to_fit_keeps_small_pages() {
        let scale = calculate_scale(100.0, 100.0, 400.0, 300.0, ScalingMode::ShrinkToFit);
        assert_eq!(scale, 1.0);

        let scale = calculate_scale(800.0, 600.0, 400.0, 400.0, ScalingMode::ShrinkToFit);
        assert!((scale - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_half_slots_split_evenly() {
        let (left, right) = half_slots(A4_LANDSCAPE.0, A4_LANDSCAPE.1);
        assert_eq!(left.x, 0.0);
        assert!((left.width - right.width).abs() < 0.001);
        assert!((right.x - A4_LANDSCAPE.0 / 2.0).abs() < 0.001);
        assert!((right.right() - A4_LANDSCAPE.0).abs() < 0.001);
        assert_eq!(left.height, A4_LANDSCAPE.1);
    }

    #[test]
    fn test_portrait_a4_page_in_folded_a4_half() {
        // A4 portrait page into half of an A4 landscape sheet: height-limited
        let (left, _) = half_slots(A4_LANDSCAPE.0, A4_LANDSCAPE.1);
        let placement = place_in_slot(left, 0, 595.28, 841.89, ScalingMode::Fit);

        let expected_scale = (420.945_f32 / 595.28).min(595.28 / 841.89);
        assert!((placement.scale - expected_scale).abs() < 0.0001);
        assert!(left.contains(&placement.content_rect, 0.01));

        // Centered within the half
        assert!((placement.content_rect.center_x() - left.center_x()).abs() < 0.01);
        assert!((placement.content_rect.center_y() - left.center_y()).abs() < 0.01);
    }

    #[test]
    fn test_back_side_rotated() {
        let pair = SheetPair::new(1, 6);
        let front = layout_sheet(
            A4_LANDSCAPE.0,
            A4_LANDSCAPE.1,
            0,
            pair,
            (612.0, 792.0),
            (612.0, 792.0),
            ScalingMode::Fit,
        );
        let back = layout_sheet(
            A4_LANDSCAPE.0,
            A4_LANDSCAPE.1,
            1,
            pair,
            (612.0, 792.0),
            (612.0, 792.0),
            ScalingMode::Fit,
        );

        assert_eq!(front.side, SheetSide::Front);
        assert_eq!(front.rotation_degrees, 0);
        assert_eq!(back.side, SheetSide::Back);
        assert_eq!(back.rotation_degrees, 180);
        assert_eq!(back.sheet_number(), 1);
    }

    #[test]
    fn test_pair_pages_land_in_their_halves() {
        let layout = layout_sheet(
            A4_LANDSCAPE.0,
            A4_LANDSCAPE.1,
            2,
            SheetPair::new(5, 2),
            (612.0, 792.0),
            (500.0, 500.0),
            ScalingMode::Fit,
        );

        assert_eq!(layout.left.source_page, 5);
        assert_eq!(layout.right.source_page, 2);
        assert!(layout.left.content_rect.right() <= A4_LANDSCAPE.0 / 2.0 + 0.01);
        assert!(layout.right.content_rect.x >= A4_LANDSCAPE.0 / 2.0 - 0.01);
        assert_eq!(layout.sheet_number(), 2);
    }

    #[test]
    fn test_spread_sheet_dimensions() {
        let (w, h) = sheet_dimensions_pt(SheetFormat::Spread(PaperSize::A5));
        let (folded_w, folded_h) = sheet_dimensions_pt(SheetFormat::Folded(PaperSize::A4));

        // Two A5 pages side by side: 296mm x 210mm, close to A4 landscape
        assert!((w - crate::constants::mm_to_pt(296.0)).abs() < 0.01);
        assert!((h - folded_h).abs() < 0.01);
        assert!(w < folded_w);
    }
}
