use crate::settings::Settings;
use std::env;
use std::path::PathBuf;

pub struct Config {
    // Falls back to the embedded fixtures when unset
    pub fixtures_path: Option<PathBuf>,
    pub settings: Settings,
}

impl Config {
    pub fn from_env() -> Self {
        let fixtures_path = env::var("IWA_FIXTURES")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            fixtures_path,
            settings: Settings::from_env(),
        }
    }
}
