//! Nested 3D treemaps for hierarchical data.
//!
//! Every node of the input tree carries a name, three magnitudes (`dimm1`, `dimm2`,
//! `dimm3`) and a color. Layout turns it into a tree of blocks where `dimm1` widens a
//! block, `dimm2` deepens it and `dimm3` raises it, children are packed side by side
//! inside their parent's footprint and stacked on top of it.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: JSON -> [`TreeInfo`] (pure description)
//! 2. **Layout**: [`TreeInfo::tree`] / [`new_tree`] -> [`Block`] (sizes and positions)
//! 3. **Render** (optional): [`Block`] -> [`FrameRGBA`] via a [`Renderer`]
//! 4. **Encode** (optional): PNG, JPEG or GIF bytes, or the laid-out tree as JSON
//!
//! ```
//! use treemap::{BlockInfo, CancelToken, new_block, new_tree};
//!
//! let cancel = CancelToken::new();
//! let root = new_tree(
//!     BlockInfo::new("root", 5, 5, 10),
//!     &cancel,
//!     vec![
//!         new_block(BlockInfo::new("a", 1, 10, 5), vec![]),
//!         new_block(BlockInfo::new("b", 10, 1, 2), vec![]),
//!     ],
//! )?;
//! assert_eq!((root.node.width, root.node.depth, root.node.height), (21.0, 28.0, 13.0));
//! # Ok::<(), treemap::TreemapError>(())
//! ```
//!
//! Layout is single-threaded and deterministic. Long layouts and walks can be stopped
//! through a [`CancelToken`]; a canceled layout leaves the tree half computed.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod layout;
mod model;
mod render;
mod tree;

pub use encode::raster::{Encoding, encode_frame, encode_tree};
pub use foundation::core::{CancelToken, Position};
pub use foundation::error::{TreemapError, TreemapResult};
pub use layout::engine::{
    BLOCK_PADDING, LayoutSettings, new_block, new_tree, new_tree_with, prepare_node,
    prepare_node_with,
};
pub use layout::tiler::{DEFAULT_MARGIN, Tiler};
pub use model::block::{Block, BlockInfo, BlockNode};
pub use model::color::{Color, Rgba8};
pub use model::tree::TreeInfo;
pub use render::backend::{FrameRGBA, RenderSettings, Renderer, RendererKind, create_renderer};
pub use render::plain::PlainRenderer;
pub use render::volume::VolumeRenderer;
pub use tree::walk::{walk, with_cancel};
