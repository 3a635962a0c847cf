use crate::config;

/// Settings plus a warning to log once logging is up.
pub struct Loaded {
    pub settings: config::Settings,
    pub warning: Option<String>,
}

pub fn load_settings() -> Loaded {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                Loaded {
                    settings: config::Settings::default(),
                    warning: Some(format!("invalid config, using defaults: {msg}")),
                }
            } else {
                Loaded {
                    settings: s,
                    warning: None,
                }
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => Loaded {
            settings: config::Settings::default(),
            warning: Some(format!("failed to load config, using defaults: {e}")),
        },
    }
}
