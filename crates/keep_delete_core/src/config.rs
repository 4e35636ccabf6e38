use std::path::PathBuf;

/// Name prefix shared by every staging directory, used to find leftovers.
pub const STAGING_PREFIX: &str = "keep_delete_";

/// Settings for a review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Directory in which the session's staging directory is created.
    pub staging_root: PathBuf,
    pub staging_prefix: String,
    /// Remove leftover staging directories from earlier runs at startup.
    pub sweep_stale: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            staging_root: std::env::temp_dir(),
            staging_prefix: STAGING_PREFIX.to_string(),
            sweep_stale: true,
        }
    }
}
