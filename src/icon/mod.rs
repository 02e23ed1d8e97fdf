//! Icon geometry
//!
//! Every measurement in the artwork is a fixed ratio of the canvas size.
//! `Metrics` resolves those ratios for one size so the drawing code and the
//! tests share a single source of proportions.

pub mod artwork;

/// Base resolutions rendered into the iconset, in render order.
pub const BASE_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Slots that also get a double-density variant, copied from the 2x render.
pub const RETINA_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Proportional measurements for one canvas size.
///
/// Coordinates use a top-left origin, matching the raster layout. The
/// artwork was authored bottom-up, so vertical placements are mirrored
/// here; the chevron is vertically symmetric and unaffected by the flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Canvas edge length in pixels.
    pub canvas: f32,
    /// Plate inset from each canvas edge.
    pub plate_inset: f32,
    /// Plate corner radius.
    pub corner_radius: f32,
    /// Plate outline stroke width.
    pub border_width: f32,
    /// Left edge of the chevron.
    pub prompt_x: f32,
    /// Top of the chevron's vertical span.
    pub prompt_top: f32,
    /// Horizontal reach of the chevron tip.
    pub prompt_width: f32,
    /// Vertical span of the chevron.
    pub prompt_height: f32,
    /// Chevron stroke width.
    pub prompt_stroke: f32,
    /// Cursor block as x, y, width, height.
    pub cursor: (f32, f32, f32, f32),
}

impl Metrics {
    pub fn for_size(size: u32) -> Self {
        let s = size as f32;
        let prompt_height = s * 0.24;
        // Baseline shared by the chevron's lower arm and the cursor block,
        // 38% up from the bottom edge in the original orientation.
        let baseline = s - s * 0.38;
        let cursor_h = (s * 0.045).max(2.0);
        Self {
            canvas: s,
            plate_inset: s * 0.08,
            corner_radius: s * 0.18,
            border_width: (s * 0.015).max(1.0),
            prompt_x: s * 0.25,
            prompt_top: baseline - prompt_height,
            prompt_width: s * 0.18,
            prompt_height,
            prompt_stroke: (s * 0.055).max(2.0),
            cursor: (s * 0.5, baseline - cursor_h, s * 0.22, cursor_h),
        }
    }
}
