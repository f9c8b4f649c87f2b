pub(crate) mod block;
pub(crate) mod color;
pub(crate) mod tree;
