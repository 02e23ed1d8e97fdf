//! Artwork rasterization
//!
//! Paints one icon canvas: near-black background, rounded plate with an
//! outline, green prompt chevron, and the cursor block.

use thiserror::Error;
use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use super::Metrics;

/// Cubic control-point offset approximating a quarter arc.
const ARC_K: f32 = 0.552_284_75;

#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("cannot allocate a {size}x{size} canvas")]
    CanvasAlloc { size: u32 },
    #[error("degenerate geometry at size {size}")]
    Geometry { size: u32 },
}

/// Paint the full artwork for one size.
pub fn render(size: u32) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(size, size).ok_or(RenderError::CanvasAlloc { size })?;
    let m = Metrics::for_size(size);

    pixmap.fill(Color::from_rgba8(20, 20, 26, 255));

    // Plate: rounded rectangle filled, then the same path outlined.
    let plate = rounded_rect(
        m.plate_inset,
        m.plate_inset,
        m.canvas - 2.0 * m.plate_inset,
        m.canvas - 2.0 * m.plate_inset,
        m.corner_radius,
    )
    .ok_or(RenderError::Geometry { size })?;
    pixmap.fill_path(
        &plate,
        &solid(31, 31, 38, 255),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    let border = Stroke {
        width: m.border_width,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &plate,
        &solid(64, 64, 77, 255),
        &border,
        Transform::identity(),
        None,
    );

    // Prompt chevron.
    let mut pb = PathBuilder::new();
    pb.move_to(m.prompt_x, m.prompt_top);
    pb.line_to(m.prompt_x + m.prompt_width, m.prompt_top + m.prompt_height / 2.0);
    pb.line_to(m.prompt_x, m.prompt_top + m.prompt_height);
    let chevron = pb.finish().ok_or(RenderError::Geometry { size })?;
    let stroke = Stroke {
        width: m.prompt_stroke,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &chevron,
        &solid(0, 217, 115, 255),
        &stroke,
        Transform::identity(),
        None,
    );

    // Cursor block, slightly translucent.
    let (cx, cy, cw, ch) = m.cursor;
    let cursor = Rect::from_xywh(cx, cy, cw, ch).ok_or(RenderError::Geometry { size })?;
    pixmap.fill_rect(cursor, &solid(242, 242, 242, 230), Transform::identity(), None);

    Ok(pixmap)
}

fn solid(r: u8, g: u8, b: u8, a: u8) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Option<Path> {
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = radius.min(w / 2.0).min(h / 2.0);
    let k = r * ARC_K;
    let (right, bottom) = (x + w, y + h);

    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(right - r, y);
    pb.cubic_to(right - r + k, y, right, y + r - k, right, y + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(x + r, bottom);
    pb.cubic_to(x + r - k, bottom, x, bottom - r + k, x, bottom - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::BASE_SIZES;

    #[test]
    fn test_render_dimensions() {
        let pixmap = render(64).unwrap();
        assert_eq!(pixmap.width(), 64);
        assert_eq!(pixmap.height(), 64);
    }

    #[test]
    fn test_every_base_size_renders() {
        for &size in &BASE_SIZES {
            assert!(render(size).is_ok(), "size {} failed to render", size);
        }
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            render(0),
            Err(RenderError::CanvasAlloc { size: 0 })
        ));
    }

    #[test]
    fn test_background_reaches_the_corner() {
        let pixmap = render(256).unwrap();
        let px = pixmap.pixel(1, 1).unwrap();
        assert_eq!(
            (px.red(), px.green(), px.blue(), px.alpha()),
            (20, 20, 26, 255)
        );
    }

    #[test]
    fn test_chevron_is_green_dominant() {
        let pixmap = render(256).unwrap();
        // Midpoint of the chevron's upper arm, well inside the stroke.
        let px = pixmap.pixel(87, 112).unwrap();
        assert!(px.green() > 150, "green channel too weak: {:?}", px);
        assert!(px.green() > px.red() && px.green() > px.blue());
    }

    #[test]
    fn test_cursor_is_near_white() {
        let pixmap = render(256).unwrap();
        let (cx, cy, cw, ch) = Metrics::for_size(256).cursor;
        let px = pixmap
            .pixel((cx + cw / 2.0) as u32, (cy + ch / 2.0) as u32)
            .unwrap();
        assert!(
            px.red() > 200 && px.green() > 200 && px.blue() > 200,
            "cursor pixel not near-white: {:?}",
            px
        );
    }

    #[test]
    fn test_plate_interior_is_lighter_than_background() {
        let pixmap = render(128).unwrap();
        let corner = pixmap.pixel(1, 1).unwrap();
        // Between the plate edge and the chevron there is bare plate.
        let plate = pixmap.pixel(64, 20).unwrap();
        assert!(plate.blue() > corner.blue());
    }
}
