pub(crate) mod backend;
pub(crate) mod plain;
pub(crate) mod volume;
