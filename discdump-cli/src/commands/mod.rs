pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod hash;
pub(crate) mod list;
pub(crate) mod tables;
