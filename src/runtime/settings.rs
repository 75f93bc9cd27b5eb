use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults when the config is broken.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a catalog run.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
