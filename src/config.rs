use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    /// Path to the session database (CLI --db takes precedence)
    #[serde(default)]
    pub(crate) db: Option<PathBuf>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
}

impl Config {
    pub(crate) fn load() -> Self {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/confbrowse/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("confbrowse").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/confbrowse/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("confbrowse").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.confbrowse.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".confbrowse.toml"));
        }

        paths
    }
}
