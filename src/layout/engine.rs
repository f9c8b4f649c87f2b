use crate::{
    foundation::{
        core::CancelToken,
        error::{TreemapError, TreemapResult},
    },
    layout::tiler::{DEFAULT_MARGIN, Tiler},
    model::block::{Block, BlockInfo, BlockNode},
};

/// Padding added to every block's own magnitudes.
pub const BLOCK_PADDING: f64 = 3.0;

/// Tunables for [`prepare_node_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutSettings {
    /// Spacing between sibling blocks and between children and their parent's edge.
    pub margin: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Assemble a block from its description and children without laying anything out.
pub fn new_block(info: BlockInfo, children: Vec<Block>) -> Block {
    Block {
        node: BlockNode::default(),
        info,
        children,
    }
}

/// Assemble a block and lay out the whole tree with its base at `z = 0`.
///
/// The result can also be nested inside a bigger tree; laying out the bigger tree
/// recomputes every geometry from scratch.
#[tracing::instrument(skip_all, fields(name = %info.name))]
pub fn new_tree(
    info: BlockInfo,
    cancel: &CancelToken,
    children: Vec<Block>,
) -> TreemapResult<Block> {
    new_tree_with(info, cancel, children, &LayoutSettings::default())
}

/// [`new_tree`] with explicit settings.
pub fn new_tree_with(
    info: BlockInfo,
    cancel: &CancelToken,
    children: Vec<Block>,
    settings: &LayoutSettings,
) -> TreemapResult<Block> {
    let mut block = new_block(info, children);
    prepare_node_with(&mut block, cancel, 0.0, settings)?;
    tracing::debug!(
        width = block.node.width,
        depth = block.node.depth,
        height = block.node.height,
        "layout complete"
    );
    Ok(block)
}

/// Compute size and position of `block` and all its descendants, with `block`'s base at
/// `z_base`.
///
/// Fails with [`TreemapError::Canceled`] when `cancel` fires; the tree is then only
/// partially laid out and must be discarded.
///
/// Layout recurses once per level, so nesting depth is bounded by the calling thread's
/// stack. Trees parsed from JSON are already limited to 128 levels; trees built in code
/// that nest tens of thousands of levels deep need a thread with a larger stack.
pub fn prepare_node(block: &mut Block, cancel: &CancelToken, z_base: f64) -> TreemapResult<()> {
    prepare_node_with(block, cancel, z_base, &LayoutSettings::default())
}

/// [`prepare_node`] with explicit settings.
pub fn prepare_node_with(
    block: &mut Block,
    cancel: &CancelToken,
    z_base: f64,
    settings: &LayoutSettings,
) -> TreemapResult<()> {
    let res = layout_block(block, cancel, z_base, settings.margin);
    if let Err(TreemapError::Canceled) = &res {
        tracing::warn!(name = %block.info.name, "layout canceled; tree is incomplete");
    }
    res
}

fn layout_block(
    block: &mut Block,
    cancel: &CancelToken,
    z: f64,
    margin: f64,
) -> TreemapResult<()> {
    block.node.position.z = z;
    block.node.height = block.info.dimm3 as f64 + BLOCK_PADDING;

    if block.children.is_empty() {
        block.node.width = block.info.dimm1 as f64 + BLOCK_PADDING;
        block.node.depth = block.info.dimm2 as f64 + BLOCK_PADDING;
        return Ok(());
    }

    let child_z = z + block.node.height;
    let mut tiler = Tiler::with_margin(block.children.len(), margin);
    for child in &mut block.children {
        if cancel.is_canceled() {
            return Err(TreemapError::Canceled);
        }
        layout_block(child, cancel, child_z, margin)?;
        let p = tiler.next_position(child.node.width, child.node.depth);
        child.node.position.x = p.x;
        child.node.position.y = p.y;
    }

    let bounds = tiler.bounds();
    block.node.width = bounds.x;
    block.node.depth = bounds.y;

    // Center on the packed area only; dimm1/dimm2 extend the far side.
    for child in &mut block.children {
        child.node.position.x -= block.node.width / 2.0;
        child.node.position.y -= block.node.depth / 2.0;
    }

    block.node.width += block.info.dimm1 as f64;
    block.node.depth += block.info.dimm2 as f64;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
