use std::{convert::Infallible, fmt};

use serde::{Deserialize, Deserializer};

use crate::{foundation::core::Position, model::color::Color, tree::walk::walk};

/// User supplied description of a block.
///
/// `dimm1` drives the block's width, `dimm2` its depth and `dimm3` its height.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockInfo {
    /// Label of the block.
    pub name: String,
    /// First magnitude (width).
    pub dimm1: u64,
    /// Second magnitude (depth).
    pub dimm2: u64,
    /// Third magnitude (height).
    pub dimm3: u64,
    /// Fill color, `0xRRGGBB`. Empty means black.
    #[serde(skip_serializing_if = "Color::is_empty")]
    pub color: Color,
}

impl BlockInfo {
    /// A description with the given name and magnitudes and no color.
    pub fn new(name: impl Into<String>, dimm1: u64, dimm2: u64, dimm3: u64) -> Self {
        Self {
            name: name.into(),
            dimm1,
            dimm2,
            dimm3,
            color: Color::default(),
        }
    }

    /// Same description with `color` set.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }
}

/// Geometry computed by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlockNode {
    /// Extent along `y`.
    pub depth: f64,
    /// Extent along `z`, the stacking axis.
    pub height: f64,
    /// Extent along `x`.
    pub width: f64,
    /// Center offset from the parent's center (`x`, `y`) and base along the stacking
    /// axis (`z`).
    pub position: Position,
}

/// A block of the treemap: its description, its geometry and its children.
///
/// Each block exclusively owns its children. Geometry is all zero until the tree goes
/// through [`crate::prepare_node`] or is built with [`crate::new_tree`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    /// Computed geometry.
    #[serde(flatten)]
    pub node: BlockNode,
    /// Input description.
    #[serde(flatten)]
    pub info: BlockInfo,
    /// Child blocks, in input order.
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub children: Vec<Block>,
}

impl Block {
    /// True when the block has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of blocks in this subtree, including `self`.
    pub fn count(&self) -> usize {
        let mut n = 0usize;
        let _ = walk(self, |_: &Block| -> Result<(), Infallible> {
            n += 1;
            Ok(())
        });
        n
    }

    /// Indented JSON of the subtree.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_json_pretty().map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}

/// Accept `null` wherever a list of children is expected.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "../../tests/unit/model/block.rs"]
mod tests;
