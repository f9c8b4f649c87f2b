use super::*;
use crate::Position;

fn leaf(name: &str, d1: u64, d2: u64, d3: u64) -> Block {
    new_block(BlockInfo::new(name, d1, d2, d3), vec![])
}

fn two_children_root() -> Block {
    new_tree(
        BlockInfo::new("root", 5, 5, 10).with_color("0x0000ff"),
        &CancelToken::new(),
        vec![
            new_block(BlockInfo::new("b1", 1, 10, 5).with_color("0x00ff00"), vec![]),
            new_block(BlockInfo::new("b2", 10, 1, 2).with_color("0xff0000"), vec![]),
        ],
    )
    .unwrap()
}

#[test]
fn root_with_two_leaves_matches_reference_layout() {
    let root = two_children_root();
    assert_eq!(root.node.width, 21.0);
    assert_eq!(root.node.depth, 28.0);
    assert_eq!(root.node.height, 13.0);
    assert_eq!(root.node.position, Position::ZERO);

    let b1 = &root.children[0].node;
    assert_eq!((b1.width, b1.depth, b1.height), (4.0, 13.0, 8.0));
    assert_eq!(b1.position, Position::new(-4.5, -3.5, 13.0));

    let b2 = &root.children[1].node;
    assert_eq!((b2.width, b2.depth, b2.height), (13.0, 4.0, 5.0));
    assert_eq!(b2.position, Position::new(0.0, 8.0, 13.0));
}

#[test]
fn childless_root_is_sized_from_its_magnitudes() {
    let root = new_tree(BlockInfo::new("root", 5, 5, 10), &CancelToken::new(), vec![]).unwrap();
    assert_eq!(
        (root.node.width, root.node.depth, root.node.height),
        (8.0, 8.0, 13.0)
    );
}

#[test]
fn new_block_leaves_geometry_untouched() {
    let b = new_block(BlockInfo::new("x", 1, 2, 3), vec![leaf("y", 1, 1, 1)]);
    assert_eq!(b.node, BlockNode::default());
    assert_eq!(b.children[0].node, BlockNode::default());
}

#[test]
fn layout_is_idempotent() {
    let mut root = two_children_root();
    let first = root.to_json_pretty().unwrap();
    prepare_node(&mut root, &CancelToken::new(), 0.0).unwrap();
    assert_eq!(root.to_json_pretty().unwrap(), first);
}

#[test]
fn children_stack_on_top_of_their_parent() {
    let mut root = new_block(
        BlockInfo::new("root", 0, 0, 4),
        vec![
            new_block(BlockInfo::new("mid", 0, 0, 2), vec![leaf("a", 0, 0, 0)]),
            leaf("b", 0, 0, 9),
        ],
    );
    prepare_node(&mut root, &CancelToken::new(), 10.0).unwrap();

    assert_eq!(root.node.position.z, 10.0);
    assert_eq!(root.children[0].node.position.z, 17.0);
    assert_eq!(root.children[1].node.position.z, 17.0);
    assert_eq!(root.children[0].children[0].node.position.z, 22.0);
}

#[test]
fn own_magnitudes_are_added_after_centering() {
    let root = new_tree(
        BlockInfo::new("root", 100, 0, 0),
        &CancelToken::new(),
        vec![leaf("only", 0, 0, 0)],
    )
    .unwrap();

    // Tiler bounds are 6x6; the child sits at the center of that area, not of the
    // 106-wide footprint.
    assert_eq!(root.node.width, 106.0);
    assert_eq!(root.node.depth, 6.0);
    assert_eq!(root.children[0].node.position, Position::new(0.0, 0.0, 3.0));
}

#[test]
fn margin_setting_changes_packing() {
    let settings = LayoutSettings { margin: 0.0 };
    let root = new_tree_with(
        BlockInfo::new("root", 0, 0, 0),
        &CancelToken::new(),
        vec![leaf("a", 1, 1, 0), leaf("b", 1, 1, 0)],
        &settings,
    )
    .unwrap();
    assert_eq!((root.node.width, root.node.depth), (4.0, 8.0));
    assert_eq!(root.children[0].node.position, Position::new(0.0, -2.0, 3.0));
    assert_eq!(root.children[1].node.position, Position::new(0.0, 2.0, 3.0));
}

#[test]
fn canceled_layout_stops_before_the_first_child() {
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut root = new_block(
        BlockInfo::new("root", 5, 5, 10),
        vec![leaf("a", 1, 1, 1), leaf("b", 1, 1, 1)],
    );
    let err = prepare_node(&mut root, &cancel, 0.0).unwrap_err();
    assert!(err.is_canceled());

    assert_eq!(root.node.height, 13.0);
    assert_eq!(root.node.width, 0.0);
    assert_eq!(root.node.depth, 0.0);
    assert_eq!(root.children[0].node, BlockNode::default());
}

#[test]
fn canceled_new_tree_returns_error() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let res = new_tree(BlockInfo::new("r", 0, 0, 0), &cancel, vec![leaf("a", 0, 0, 0)]);
    assert!(matches!(res, Err(TreemapError::Canceled)));
}

#[test]
fn leaves_ignore_cancellation() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let root = new_tree(BlockInfo::new("r", 1, 2, 3), &cancel, vec![]).unwrap();
    assert_eq!((root.node.width, root.node.depth), (4.0, 5.0));
}

#[test]
fn deep_chain_lays_out_on_a_default_stack() {
    const LEVELS: usize = 1_000;
    let mut block = leaf("level 0", 0, 0, 0);
    for i in 1..LEVELS {
        block = new_block(BlockInfo::new(format!("level {i}"), 0, 0, 0), vec![block]);
    }
    prepare_node(&mut block, &CancelToken::new(), 0.0).unwrap();

    // Every level adds one margin around its only child.
    assert_eq!(block.node.width, 3.0 * LEVELS as f64);
    assert_eq!(block.node.depth, 3.0 * LEVELS as f64);

    let mut deepest = &block;
    while let Some(child) = deepest.children.first() {
        deepest = child;
    }
    assert_eq!(deepest.node.position.z, 3.0 * (LEVELS - 1) as f64);
}
