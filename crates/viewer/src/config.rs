//! Viewer settings, optionally read from a YAML file.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//! ```yaml
//! data_dir: data_sequence
//! start_frame: 10
//! move_speed: 40.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding `<index>.json` frames.
    pub data_dir: PathBuf,
    pub start_frame: usize,
    /// Camera speed in world units per second.
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Vertical field of view.
    pub fov_degrees: f32,
    /// Max center distance for removing a block.
    pub remove_reach: f32,
    /// Max center distance for a block to anchor a placement.
    pub place_reach: f32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            start_frame: 0,
            move_speed: 100.0,
            mouse_sensitivity: 0.003,
            fov_degrees: 80.0,
            remove_reach: 12.0,
            place_reach: 14.0,
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text, path)?;
        tracing::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values that would break the camera or picking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("remove_reach", self.remove_reach),
            ("place_reach", self.place_reach),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if !(self.fov_degrees > 1.0 && self.fov_degrees < 179.0) {
            return Err(ConfigError::Invalid {
                field: "fov_degrees",
                reason: format!("must be between 1 and 179, got {}", self.fov_degrees),
            });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window size",
                reason: "must be non-zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ViewerConfig::from_yaml_str("{}", Path::new("c.yaml")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let yaml = "data_dir: data_sequence\nstart_frame: 7\nremove_reach: 20.0\n";
        let config = ViewerConfig::from_yaml_str(yaml, Path::new("c.yaml")).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data_sequence"));
        assert_eq!(config.start_frame, 7);
        assert_eq!(config.remove_reach, 20.0);
        assert_eq!(config.place_reach, 14.0);
    }

    #[test]
    fn negative_reach_is_rejected() {
        let err = ViewerConfig::from_yaml_str("place_reach: -1.0", Path::new("c.yaml"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "place_reach",
                ..
            }
        ));
    }

    #[test]
    fn fov_outside_range_is_rejected() {
        for fov in ["fov_degrees: 0.5", "fov_degrees: 179.0", "fov_degrees: .nan"] {
            let err = ViewerConfig::from_yaml_str(fov, Path::new("c.yaml")).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    field: "fov_degrees",
                    ..
                }
            ));
        }
        assert!(ViewerConfig::from_yaml_str("fov_degrees: 120.0", Path::new("c.yaml")).is_ok());
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let config = ViewerConfig {
            window_height: 0,
            ..ViewerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "window size",
                ..
            })
        ));
    }

    #[test]
    fn bad_yaml_is_parse_error() {
        let err = ViewerConfig::from_yaml_str("start_frame: [", Path::new("c.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viewer.yaml");
        std::fs::write(&path, "fov_degrees: 60.0\n").unwrap();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.fov_degrees, 60.0);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ViewerConfig::load(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
