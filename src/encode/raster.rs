use std::io::Cursor;

use crate::{
    foundation::error::{TreemapError, TreemapResult},
    model::block::Block,
    render::backend::{FrameRGBA, RenderSettings, RendererKind, create_renderer},
};

/// Output encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Lossless PNG (RGBA).
    Png,
    /// Lossy JPEG (RGB, alpha dropped).
    Jpeg,
    /// Palette GIF.
    Gif,
    /// No image: the laid-out tree as indented JSON.
    None,
}

impl Encoding {
    fn image_format(self) -> Option<image::ImageFormat> {
        match self {
            Self::Png => Some(image::ImageFormat::Png),
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Gif => Some(image::ImageFormat::Gif),
            Self::None => None,
        }
    }
}

/// Encode a rendered frame. [`Encoding::None`] has no image form and is an error here.
pub fn encode_frame(frame: &FrameRGBA, encoding: Encoding) -> TreemapResult<Vec<u8>> {
    let format = encoding
        .image_format()
        .ok_or_else(|| TreemapError::encode("encoding 'none' cannot hold a frame"))?;

    let rgba = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| {
            TreemapError::encode(format!(
                "frame buffer of {} bytes does not match {}x{}",
                frame.data.len(),
                frame.width,
                frame.height
            ))
        })?;
    let img = image::DynamicImage::ImageRgba8(rgba);
    let img = match encoding {
        Encoding::Jpeg => image::DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };

    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), format)
        .map_err(|e| TreemapError::encode(format!("{format:?}: {e}")))?;
    Ok(out)
}

/// Render `root` with `renderer` and encode it, or serialize it when `encoding` is
/// [`Encoding::None`].
#[tracing::instrument(skip(root, settings))]
pub fn encode_tree(
    root: &Block,
    renderer: RendererKind,
    encoding: Encoding,
    settings: &RenderSettings,
) -> TreemapResult<Vec<u8>> {
    if encoding == Encoding::None {
        return Ok(root.to_json_pretty()?.into_bytes());
    }
    let frame = create_renderer(renderer).render(root, settings)?;
    let bytes = encode_frame(&frame, encoding)?;
    tracing::debug!(bytes = bytes.len(), "encoded frame");
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/raster.rs"]
mod tests;
