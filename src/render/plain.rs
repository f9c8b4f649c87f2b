use kurbo::{Point, Rect, Vec2};

use crate::{
    foundation::error::TreemapResult,
    model::block::Block,
    render::backend::{
        CpuCanvas, FrameRGBA, RenderSettings, Renderer, check_colors, check_footprint,
    },
};

/// Top-down projection: every block footprint as a filled rectangle, children painted
/// over their parent. The root footprint is stretched to fill the whole frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    #[tracing::instrument(skip_all, fields(width = settings.width, height = settings.height))]
    fn render(&self, root: &Block, settings: &RenderSettings) -> TreemapResult<FrameRGBA> {
        check_colors(root)?;
        check_footprint(root)?;

        let mut canvas = CpuCanvas::new(settings)?;
        let size = canvas.size();
        let scale = Vec2::new(size.width / root.node.width, size.height / root.node.depth);
        let center = Point::new(size.width / 2.0, size.height / 2.0);

        draw_block(&mut canvas, root, center, scale)?;
        Ok(canvas.finish())
    }
}

fn draw_block(
    canvas: &mut CpuCanvas,
    block: &Block,
    parent_center: Point,
    scale: Vec2,
) -> TreemapResult<()> {
    let p = block.node.position;
    let center = parent_center + Vec2::new(p.x * scale.x, p.y * scale.y);
    let half = Vec2::new(
        block.node.width * scale.x / 2.0,
        block.node.depth * scale.y / 2.0,
    );

    let color = block.info.color.decode()?;
    canvas.fill_rect(Rect::from_points(center - half, center + half), color);

    for child in &block.children {
        draw_block(canvas, child, center, scale)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/plain.rs"]
mod tests;
