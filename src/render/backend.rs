use crate::{
    foundation::error::{TreemapError, TreemapResult},
    model::{block::Block, color::Rgba8},
    render::{plain::PlainRenderer, volume::VolumeRenderer},
    tree::walk::walk,
};

/// A rendered frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Straight RGBA8, row-major, tightly packed.
    pub data: Vec<u8>,
}

/// Output surface configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Output width in pixels, `1..=65535`.
    pub width: u32,
    /// Output height in pixels, `1..=65535`.
    pub height: u32,
    /// Background painted before the first block. `None` leaves it transparent.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 720,
            height: 720,
            clear_rgba: None,
        }
    }
}

/// Turns a laid-out tree into pixels.
pub trait Renderer {
    /// Render the tree rooted at `root`.
    ///
    /// Every block color must decode; the first one that does not aborts the render.
    fn render(&self, root: &Block, settings: &RenderSettings) -> TreemapResult<FrameRGBA>;
}

/// Available renderer families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    /// Top-down projection of every block footprint.
    Plain,
    /// Oblique view of every block as a box.
    Volume,
}

/// Build the renderer for `kind`.
pub fn create_renderer(kind: RendererKind) -> Box<dyn Renderer> {
    match kind {
        RendererKind::Plain => Box::new(PlainRenderer),
        RendererKind::Volume => Box::new(VolumeRenderer),
    }
}

/// Fail on the first block whose color does not decode.
pub(crate) fn check_colors(root: &Block) -> TreemapResult<()> {
    walk(root, |b: &Block| b.info.color.decode().map(|_| ()))
}

/// Fail on a root without a footprint to scale against.
pub(crate) fn check_footprint(root: &Block) -> TreemapResult<()> {
    if root.node.width > 0.0 && root.node.depth > 0.0 {
        Ok(())
    } else {
        Err(TreemapError::render(format!(
            "root '{}' has no footprint ({}x{}); was the tree laid out?",
            root.info.name, root.node.width, root.node.depth
        )))
    }
}

/// CPU raster target shared by the renderers.
pub(crate) struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuCanvas {
    pub(crate) fn new(settings: &RenderSettings) -> TreemapResult<Self> {
        let width = surface_dim(settings.width, "width")?;
        let height = surface_dim(settings.height, "height")?;

        let mut canvas = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
        };
        if let Some([r, g, b, a]) = settings.clear_rgba {
            let full = kurbo::Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
            canvas.fill_rect(full, Rgba8 { r, g, b, a });
        }
        Ok(canvas)
    }

    pub(crate) fn size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }

    pub(crate) fn fill_rect(&mut self, rect: kurbo::Rect, color: Rgba8) {
        self.set_color(color);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }

    pub(crate) fn fill_polygon(&mut self, points: &[kurbo::Point], color: Rgba8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();

        self.set_color(color);
        self.ctx.fill_path(&path);
    }

    pub(crate) fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }

    fn set_color(&mut self, c: Rgba8) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
    }
}

fn surface_dim(v: u32, what: &str) -> TreemapResult<u16> {
    let dim: u16 = v
        .try_into()
        .map_err(|_| TreemapError::render(format!("surface {what} {v} exceeds u16")))?;
    if dim == 0 {
        return Err(TreemapError::render(format!("surface {what} must be > 0")));
    }
    Ok(dim)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
