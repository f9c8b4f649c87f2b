use std::f64::consts::PI;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::{
    foundation::{core::Position, error::TreemapResult},
    model::{block::Block, color::Rgba8},
    render::backend::{
        CpuCanvas, FrameRGBA, RenderSettings, Renderer, check_colors, check_footprint,
    },
};

/// Scale applied to heights, relative to the unit-sized root footprint.
const HEIGHT_SCALE: f64 = 0.01;
/// Camera rotation about the X axis, applied first.
const CAMERA_PITCH: f64 = -2.0 * PI / 3.0;
/// Camera rotation about the Y axis, applied second.
const CAMERA_YAW: f64 = PI / 7.0;
/// Fraction of the frame left empty around the projected scene.
const FIT_PADDING: f64 = 0.05;

/// Oblique view of the treemap: every block is a box `[x ± w/2] × [y ± d/2] × [z, z + h]`
/// seen through a fixed camera, with faces shaded per orientation.
#[derive(Clone, Copy, Debug, Default)]
pub struct VolumeRenderer;

impl Renderer for VolumeRenderer {
    #[tracing::instrument(skip_all, fields(width = settings.width, height = settings.height))]
    fn render(&self, root: &Block, settings: &RenderSettings) -> TreemapResult<FrameRGBA> {
        check_colors(root)?;
        check_footprint(root)?;

        let unit = 1.0 / root.node.width.max(root.node.depth);
        let scale = Position::new(unit, unit, HEIGHT_SCALE);

        let mut faces = Vec::new();
        collect_faces(root, Position::ZERO, scale, &mut faces)?;
        // Far faces first; the sort is stable so ties keep traversal order.
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        let mut canvas = CpuCanvas::new(settings)?;
        let to_screen = fit_to_frame(&faces, canvas.size());
        for face in &faces {
            let points = face.corners.map(|c| to_screen * c);
            canvas.fill_polygon(&points, face.color);
        }
        Ok(canvas.finish())
    }
}

#[derive(Clone, Copy, Debug)]
struct Face {
    corners: [Point; 4],
    depth: f64,
    color: Rgba8,
}

/// Corner indices into the box vertex list, outward normal, and shade.
const BOX_FACES: [([usize; 4], Position, f64); 6] = [
    ([0, 1, 3, 2], Position::new(0.0, 0.0, -1.0), 0.5),
    ([4, 6, 7, 5], Position::new(0.0, 0.0, 1.0), 1.0),
    ([0, 4, 5, 1], Position::new(0.0, -1.0, 0.0), 0.65),
    ([2, 3, 7, 6], Position::new(0.0, 1.0, 0.0), 0.65),
    ([0, 2, 6, 4], Position::new(-1.0, 0.0, 0.0), 0.8),
    ([1, 5, 7, 3], Position::new(1.0, 0.0, 0.0), 0.8),
];

fn collect_faces(
    block: &Block,
    parent_offset: Position,
    scale: Position,
    out: &mut Vec<Face>,
) -> TreemapResult<()> {
    let p = block.node.position;
    let offset = parent_offset + Position::new(p.x, p.y, 0.0);
    let color = block.info.color.decode()?;

    let (hw, hd) = (block.node.width / 2.0, block.node.depth / 2.0);
    let (z0, z1) = (p.z, p.z + block.node.height);
    let mut vertices = [Position::ZERO; 8];
    for (i, v) in vertices.iter_mut().enumerate() {
        let x = if i & 1 == 0 { offset.x - hw } else { offset.x + hw };
        let y = if i & 2 == 0 { offset.y - hd } else { offset.y + hd };
        let z = if i & 4 == 0 { z0 } else { z1 };
        *v = camera(Position::new(x * scale.x, y * scale.y, z * scale.z));
    }

    for (idx, normal, shade) in BOX_FACES {
        // The camera looks down +z: only faces turned towards -z are visible.
        if camera(normal).z >= 0.0 {
            continue;
        }
        let corners = idx.map(|i| Point::new(vertices[i].x, vertices[i].y));
        let depth = idx.iter().map(|&i| vertices[i].z).sum::<f64>() / 4.0;
        out.push(Face {
            corners,
            depth,
            color: color.shade(shade),
        });
    }

    for child in &block.children {
        collect_faces(child, offset, scale, out)?;
    }
    Ok(())
}

fn camera(p: Position) -> Position {
    rotate_y(rotate_x(p, CAMERA_PITCH), CAMERA_YAW)
}

fn rotate_x(p: Position, angle: f64) -> Position {
    let (s, c) = angle.sin_cos();
    Position::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c)
}

fn rotate_y(p: Position, angle: f64) -> Position {
    let (s, c) = angle.sin_cos();
    Position::new(p.x * c + p.z * s, p.y, -p.x * s + p.z * c)
}

/// Map camera-plane coordinates to pixels, keeping the aspect ratio and flipping `y`
/// so the stacking axis points up.
fn fit_to_frame(faces: &[Face], frame: kurbo::Size) -> Affine {
    let mut corners = faces.iter().flat_map(|f| f.corners);
    let Some(first) = corners.next() else {
        return Affine::IDENTITY;
    };
    let bbox = corners.fold(Rect::from_points(first, first), |r, p| r.union_pt(p));

    let avail = frame * (1.0 - 2.0 * FIT_PADDING);
    let k = (avail.width / bbox.width().max(f64::EPSILON))
        .min(avail.height / bbox.height().max(f64::EPSILON));
    let frame_center = Vec2::new(frame.width / 2.0, frame.height / 2.0);

    Affine::translate(frame_center)
        * Affine::scale_non_uniform(k, -k)
        * Affine::translate(-bbox.center().to_vec2())
}

#[cfg(test)]
#[path = "../../tests/unit/render/volume.rs"]
mod tests;
