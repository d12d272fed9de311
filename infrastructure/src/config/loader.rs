//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const PROJECT_CONFIG_FILES: [&str; 2] = ["genomechat.toml", ".genomechat.toml"];

/// Environment variables that can carry the API key, lowest priority first.
pub const API_KEY_ENV_VARS: [&str; 2] = ["ALPHAGENOME_API_KEY", "GENOMECHAT_API_KEY"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `GENOMECHAT_API_KEY`, then `ALPHAGENOME_API_KEY` (API key only)
    /// 2. `GENOMECHAT_<SECTION>__<KEY>` environment variables
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./genomechat.toml` or `./.genomechat.toml`
    /// 5. XDG config: `$XDG_CONFIG_HOME/genomechat/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Self::file_figment(config_path);

        figment = figment.merge(Env::prefixed("GENOMECHAT_").split("__"));
        for var in API_KEY_ENV_VARS {
            figment = figment.merge(Env::raw().only(&[var]).map(|_| "api.api_key".into()));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    ///
    /// The API key environment variables are still honoured.
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        config.api.api_key = Self::api_key_from_env();
        config
    }

    /// Defaults merged with every config file that exists.
    fn file_figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Load a single file on top of the defaults, ignoring every other source.
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// First non-blank API key found in the environment.
    pub fn api_key_from_env() -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .rev()
            .filter_map(|var| std::env::var(var).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/genomechat/config.toml if set,
    /// otherwise falls back to ~/.config/genomechat/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("genomechat").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        for var in API_KEY_ENV_VARS.iter().rev() {
            let state = if std::env::var(var).is_ok() { "SET  " } else { "     " };
            println!("  [{}] Env:     {}", state, var);
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./genomechat.toml or ./.genomechat.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
