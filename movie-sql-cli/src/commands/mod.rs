pub(crate) mod config;
pub(crate) mod load;
pub(crate) mod query;
