use std::path::Path;

use super::{ConfigError, SceneConfig};

/// Load a scene configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: SceneConfig = serde_yaml::from_str(&content)?;

    tracing::debug!(path = %path.display(), solid = %config.solid.kind(), "Loaded scene configuration");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolidConfig;

    #[test]
    fn test_load_missing_config() {
        let result = load_config("/nonexistent/scene.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_config_invalid_yaml() {
        let temp_file = std::env::temp_dir().join("asciisolid_invalid_scene.yaml");
        std::fs::write(&temp_file, "solid: [kind: torus").unwrap();

        let result = load_config(&temp_file);
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));

        let _ = std::fs::remove_file(&temp_file);
    }

    #[test]
    fn test_load_config_valid() {
        let temp_file = std::env::temp_dir().join("asciisolid_valid_scene.yaml");

        let content = r#"
solid:
  kind: sphere
  radius: 2.0
resolution: 64
render:
  window: [40, 20]
"#;
        std::fs::write(&temp_file, content).unwrap();

        let config = load_config(&temp_file).unwrap();
        assert_eq!(config.solid, SolidConfig::Sphere { radius: 2.0, center: [0.0; 3] });
        assert_eq!(config.resolution, 64);
        assert_eq!(config.render.window, [40, 20]);
        assert_eq!(config.render.light, [1.0, 1.0, 1.0]);

        let _ = std::fs::remove_file(&temp_file);
    }
}
