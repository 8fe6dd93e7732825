//! Runtime gesture settings.
//!
//! Defaults come from `productlens_core::DEFAULT_GESTURE_CONFIG`. A JSON
//! override can be stored in localStorage (useful for tuning thresholds on a
//! real device without a rebuild).

use productlens_core::{ConfigError, GestureConfig};
use std::cell::Cell;

#[cfg(target_arch = "wasm32")]
const GESTURE_CONFIG_STORAGE_KEY: &str = "productlens_gesture_config";

thread_local! {
    /// Cached config. None = not yet loaded from localStorage.
    static GESTURE_CONFIG_CACHE: Cell<Option<GestureConfig>> = const { Cell::new(None) };
}

/// Load the override from localStorage. Invalid overrides are logged and ignored.
fn load_gesture_config_from_storage() -> Option<GestureConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let json = storage.get_item(GESTURE_CONFIG_STORAGE_KEY).ok()??;
        match GestureConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded gesture config override from localStorage");
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring stored gesture config: {}", e);
                None
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn save_gesture_config_to_storage(config: Option<&GestureConfig>) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        match config.map(serde_json::to_string) {
            Some(Ok(json)) => {
                let _ = storage.set_item(GESTURE_CONFIG_STORAGE_KEY, &json);
            }
            Some(Err(e)) => log::warn!("Failed to serialize gesture config: {}", e),
            None => {
                let _ = storage.remove_item(GESTURE_CONFIG_STORAGE_KEY);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = config;
    }
}

/// Current gesture config: stored override if valid, otherwise defaults.
pub fn get_gesture_config() -> GestureConfig {
    GESTURE_CONFIG_CACHE.with(|cell| {
        if let Some(config) = cell.get() {
            return config;
        }
        let config = load_gesture_config_from_storage().unwrap_or_default();
        cell.set(Some(config));
        config
    })
}

/// Persist an override. Takes effect for galleries created afterwards.
/// Invalid configs are rejected and the current one is kept.
pub fn set_gesture_config(config: GestureConfig) -> Result<(), ConfigError> {
    config.validate()?;
    GESTURE_CONFIG_CACHE.with(|cell| cell.set(Some(config)));
    save_gesture_config_to_storage(Some(&config));
    Ok(())
}

/// Drop the override and go back to defaults.
pub fn clear_gesture_config() {
    GESTURE_CONFIG_CACHE.with(|cell| cell.set(Some(GestureConfig::default())));
    save_gesture_config_to_storage(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use productlens_core::{PanClamping, DEFAULT_GESTURE_CONFIG};

    #[test]
    fn defaults_without_storage() {
        clear_gesture_config();
        assert_eq!(get_gesture_config(), DEFAULT_GESTURE_CONFIG);
    }

    #[test]
    fn override_is_cached() {
        let config = GestureConfig {
            pan_clamping: PanClamping::KeepVisible,
            ..DEFAULT_GESTURE_CONFIG
        };
        assert!(set_gesture_config(config).is_ok());
        assert_eq!(get_gesture_config().pan_clamping, PanClamping::KeepVisible);
        clear_gesture_config();
        assert_eq!(get_gesture_config().pan_clamping, PanClamping::Unbounded);
    }

    #[test]
    fn invalid_override_is_rejected() {
        clear_gesture_config();
        let config = GestureConfig {
            min_zoom: 400.0,
            ..DEFAULT_GESTURE_CONFIG
        };
        assert!(matches!(
            set_gesture_config(config),
            Err(ConfigError::Invalid(_))
        ));
        assert_eq!(get_gesture_config(), DEFAULT_GESTURE_CONFIG);
    }
}
