use std::{
    fmt,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    foundation::{core::CancelToken, error::TreemapResult},
    layout::engine::{LayoutSettings, new_block, new_tree_with},
    model::block::{Block, BlockInfo, null_as_empty},
};

/// Pure description of a treemap, as read from JSON.
///
/// ```json
/// {
///   "name": "mypackage",
///   "dimm1": 1, "dimm2": 2, "dimm3": 3,
///   "color": "0xff00ff",
///   "children": [
///     { "name": "mypackage/sub0", "dimm1": 5, "dimm2": 6, "dimm3": 7, "color": "0x00ffff" }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TreeInfo {
    /// Description of this node.
    #[serde(flatten)]
    pub info: BlockInfo,
    /// Child descriptions, in order. `null`, `[]` and a missing field are equivalent.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub children: Vec<TreeInfo>,
}

impl TreeInfo {
    /// A description node with the given children.
    pub fn new(info: BlockInfo, children: Vec<TreeInfo>) -> Self {
        Self { info, children }
    }

    /// Parse a description from a JSON string.
    pub fn from_json_str(s: &str) -> TreemapResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a description from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> TreemapResult<Self> {
        Ok(serde_json::from_reader(r)?)
    }

    /// Read and parse a JSON description file.
    pub fn from_path(path: &Path) -> TreemapResult<Self> {
        let f = File::open(path).with_context(|| format!("open tree '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// The block tree described by `self`, without layout.
    pub fn block(&self) -> Block {
        let children = self.children.iter().map(TreeInfo::block).collect();
        new_block(self.info.clone(), children)
    }

    /// The block tree described by `self`, laid out from the root.
    pub fn tree(&self, cancel: &CancelToken) -> TreemapResult<Block> {
        self.tree_with(cancel, &LayoutSettings::default())
    }

    /// [`TreeInfo::tree`] with explicit settings.
    #[tracing::instrument(skip_all, fields(name = %self.info.name))]
    pub fn tree_with(
        &self,
        cancel: &CancelToken,
        settings: &LayoutSettings,
    ) -> TreemapResult<Block> {
        let children = self.children.iter().map(TreeInfo::block).collect();
        new_tree_with(self.info.clone(), cancel, children, settings)
    }
}

impl fmt::Display for TreeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/tree.rs"]
mod tests;
