use crate::*;
use confique::Config as _;

#[derive(Debug, confique::Config)]
pub struct Config {
    /// Spaces used for continuation lines in formatted queries.
    #[config(env = "SQLVIEW_INDENT", default = 2)]
    pub indent: usize,
    /// Prefix of the class attached to each highlighted span.
    #[config(env = "SQLVIEW_CLASS_PREFIX", default = "sql-")]
    pub class_prefix: String,
    /// Maximum number of rendered queries kept by a `Renderer`.
    #[config(env = "SQLVIEW_CACHE_CAPACITY", default = 256)]
    pub cache_capacity: u64,
}

impl Config {
    /// Load from the current environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }
}
