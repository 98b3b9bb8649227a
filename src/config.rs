// src/config.rs

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Variable de entorno con la ruta de un YAML que sustituye a la config embebida.
pub const CONFIG_ENV_VAR: &str = "MONGO_HUB_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HubConfig {
    pub window_title: String,
    pub notification_ttl_secs: f64,
    pub export_file_name: String,
    pub start_dark: bool,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            window_title: "MongoDB Learning Hub".to_owned(),
            notification_ttl_secs: 3.0,
            export_file_name: "mongodb-learning-progress.json".to_owned(),
            start_dark: true,
        }
    }
}

impl HubConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Config embebida; en nativo `MONGO_HUB_CONFIG` apunta a un YAML que la sustituye.
    pub fn load() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let path = std::env::var_os(CONFIG_ENV_VAR);
        #[cfg(target_arch = "wasm32")]
        let path: Option<std::ffi::OsString> = None;

        Self::load_from(path.as_deref().map(Path::new))
    }

    /// Con `Some(path)` lee ese fichero; los campos ausentes toman el valor por defecto.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading config from {}", path.display());
                let text = std::fs::read_to_string(path)?;
                Self::from_yaml(&text)
            }
            None => Self::from_yaml(include_str!("data/hub.yaml")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;

    #[test]
    fn embedded_config_matches_defaults() {
        let cfg = HubConfig::from_yaml(include_str!("data/hub.yaml")).unwrap();
        assert_eq!(cfg, HubConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = HubConfig::from_yaml("notification_ttl_secs: 5.0").unwrap();
        assert_eq!(cfg.notification_ttl_secs, 5.0);
        assert_eq!(cfg.export_file_name, "mongodb-learning-progress.json");
        assert!(cfg.start_dark);
    }

    #[test]
    fn without_override_uses_embedded_config() {
        assert_eq!(HubConfig::load_from(None).unwrap(), HubConfig::default());
    }

    #[test]
    fn override_file_replaces_embedded_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.yaml");
        std::fs::write(
            &path,
            "window_title: Custom hub\nnotification_ttl_secs: 1.5\nexport_file_name: out.json\nstart_dark: false\n",
        )
        .unwrap();

        let cfg = HubConfig::load_from(Some(&path)).unwrap();
        assert_eq!(
            cfg,
            HubConfig {
                window_title: "Custom hub".to_owned(),
                notification_ttl_secs: 1.5,
                export_file_name: "out.json".to_owned(),
                start_dark: false,
            }
        );
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.yaml");
        std::fs::write(&path, "start_dark: false\n").unwrap();

        let cfg = HubConfig::load_from(Some(&path)).unwrap();
        assert!(!cfg.start_dark);
        assert_eq!(cfg.window_title, "MongoDB Learning Hub");
        assert_eq!(cfg.notification_ttl_secs, 3.0);
        assert_eq!(cfg.export_file_name, "mongodb-learning-progress.json");
    }

    #[test]
    fn missing_override_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HubConfig::load_from(Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, HubError::Io(_)));
    }
}
