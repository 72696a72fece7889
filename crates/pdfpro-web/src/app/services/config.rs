use pdfpro_app::AppConfig;

const EMBEDDED: &str = include_str!("../../../config/app.toml");

/// Load the configuration compiled into the bundle, falling back to defaults
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(EMBEDDED) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default configuration: {e}");
            AppConfig::default()
        }
    }
}
