use shared_types::ShowcaseConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<ShowcaseConfig> = OnceLock::new();

/// Default config path, relative to the working directory.
const CONFIG_PATH: &str = "showcase.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

/// Parse the config file at `path`. A missing or unparseable file yields
/// the defaults.
///
/// Runs before the logger is installed, so problems go to stderr.
pub fn read_config(path: &Path) -> ShowcaseConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!(
                "[config] Failed to parse {}: {e} — using defaults",
                path.display()
            );
            ShowcaseConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {} not found ({e}) — using defaults", path.display());
            ShowcaseConfig::default()
        }
    }
}

/// Load the showcase config into the global `OnceLock`. Only the first call
/// reads the file.
pub fn load_showcase_config() -> &'static ShowcaseConfig {
    CONFIG.get_or_init(|| {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        read_config(Path::new(&path))
    })
}

/// The loaded config, or defaults if [`load_showcase_config`] hasn't run.
pub fn showcase_config() -> ShowcaseConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
