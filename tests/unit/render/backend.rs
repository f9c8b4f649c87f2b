use super::*;
use crate::{BlockInfo, CancelToken, new_block, new_tree};

fn settings(width: u32, height: u32) -> RenderSettings {
    RenderSettings {
        width,
        height,
        clear_rgba: None,
    }
}

#[test]
fn surface_size_must_fit_u16_and_be_non_zero() {
    assert!(CpuCanvas::new(&settings(0, 10)).is_err());
    assert!(CpuCanvas::new(&settings(10, 70_000)).is_err());
    assert!(CpuCanvas::new(&settings(1, 1)).is_ok());
}

#[test]
fn clear_color_fills_the_frame() {
    let s = RenderSettings {
        clear_rgba: Some([10, 20, 30, 255]),
        ..settings(4, 3)
    };
    let frame = CpuCanvas::new(&s).unwrap().finish();
    assert_eq!((frame.width, frame.height), (4, 3));
    assert_eq!(frame.data.len(), 4 * 3 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px == [10, 20, 30, 255]));
}

#[test]
fn untouched_frame_is_transparent() {
    let frame = CpuCanvas::new(&settings(2, 2)).unwrap().finish();
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = [64, 0, 32, 128, 0, 0, 0, 0, 9, 8, 7, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 0, 64, 128, 0, 0, 0, 0, 9, 8, 7, 255]);
}

#[test]
fn bad_color_anywhere_fails_both_renderers() {
    let tree = new_tree(
        BlockInfo::new("root", 1, 1, 1).with_color("0x102030"),
        &CancelToken::new(),
        vec![new_block(
            BlockInfo::new("bad", 1, 1, 1).with_color("0xzzzzzz"),
            vec![],
        )],
    )
    .unwrap();

    for kind in [RendererKind::Plain, RendererKind::Volume] {
        let err = create_renderer(kind)
            .render(&tree, &settings(16, 16))
            .unwrap_err();
        assert!(matches!(err, TreemapError::Color(_)), "{kind:?}: {err}");
    }
}

#[test]
fn tree_without_layout_is_rejected() {
    let tree = new_block(BlockInfo::new("raw", 1, 1, 1), vec![]);
    let err = create_renderer(RendererKind::Plain)
        .render(&tree, &settings(8, 8))
        .unwrap_err();
    assert!(matches!(err, TreemapError::Render(_)));
}
