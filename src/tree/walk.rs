use crate::{
    foundation::{core::CancelToken, error::TreemapError},
    model::block::Block,
};

/// Visit every block of the tree rooted at `root`, depth-first, parent before children,
/// children in order.
///
/// The first error returned by `visit` stops the walk and is returned unchanged; no block
/// is visited after it.
pub fn walk<E, F>(root: &Block, mut visit: F) -> Result<(), E>
where
    F: FnMut(&Block) -> Result<(), E>,
{
    walk_from(root, &mut visit)
}

fn walk_from<E, F>(block: &Block, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&Block) -> Result<(), E>,
{
    visit(block)?;
    for child in &block.children {
        walk_from(child, visit)?;
    }
    Ok(())
}

/// Wrap `visit` so that each call first checks `cancel` and fails with
/// [`TreemapError::Canceled`] once it has fired.
///
/// ```
/// use treemap::{BlockInfo, CancelToken, TreemapError, new_block, walk, with_cancel};
///
/// let tree = new_block(BlockInfo::new("root", 1, 1, 1), vec![]);
/// let cancel = CancelToken::new();
/// cancel.cancel();
///
/// let res = walk(&tree, with_cancel(cancel, |_| Ok::<(), TreemapError>(())));
/// assert!(matches!(res, Err(TreemapError::Canceled)));
/// ```
pub fn with_cancel<E, F>(cancel: CancelToken, mut visit: F) -> impl FnMut(&Block) -> Result<(), E>
where
    F: FnMut(&Block) -> Result<(), E>,
    E: From<TreemapError>,
{
    move |block: &Block| {
        if cancel.is_canceled() {
            return Err(TreemapError::Canceled.into());
        }
        visit(block)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/walk.rs"]
mod tests;
