use std::path::PathBuf;

/// Configuration for seedscrub
///
/// Values are fixed in code; there is no config file or environment lookup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed file rewritten in place, relative to the working directory
    pub target: PathBuf,

    /// URL substituted for every quoted URL literal (without quotes)
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: default_target(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_target() -> PathBuf {
    PathBuf::from("supabase/seed_cloud.sql")
}

fn default_placeholder() -> String {
    "http://onlinekompas.cz/".to_string()
}
