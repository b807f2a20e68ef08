use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Configuration for the track-level beat and tempo analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Window size in samples for energy and spectrum windows
    pub window_size: usize,

    /// Hop size in samples between consecutive analysis windows
    pub hop_size: usize,

    /// Mean-square energy a window must exceed to count as a beat candidate
    pub energy_threshold: f32,

    /// High-pass cutoff in Hz applied before beat detection
    pub highpass_cutoff_hz: f32,

    /// Minimum spacing in seconds between two retained beats
    pub min_beat_gap: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: 1024,
            hop_size: 512,
            energy_threshold: 0.3,
            highpass_cutoff_hz: 100.0,
            min_beat_gap: 0.1,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: AnalysisConfig =
            toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
                path: path.display().to_string(),
            })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 || !self.window_size.is_power_of_two() {
            return Err(ConfigError::InvalidValue {
                key: "window_size".to_string(),
                value: self.window_size.to_string(),
            }
            .into());
        }

        if self.hop_size == 0 || self.hop_size > self.window_size {
            return Err(ConfigError::InvalidValue {
                key: "hop_size".to_string(),
                value: self.hop_size.to_string(),
            }
            .into());
        }

        if self.highpass_cutoff_hz <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "highpass_cutoff_hz".to_string(),
                value: self.highpass_cutoff_hz.to_string(),
            }
            .into());
        }

        if self.min_beat_gap < 0.0 {
            return Err(ConfigError::InvalidValue {
                key: "min_beat_gap".to_string(),
                value: self.min_beat_gap.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// A named frequency range tracked by the band energy analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSpec {
    /// Band name (e.g. "bass")
    pub name: String,

    /// Lower edge of the band in Hz
    pub low_hz: f32,

    /// Upper edge of the band in Hz
    pub high_hz: f32,
}

/// Ordered table of frequency bands, supplied as deployment configuration.
///
/// The table is an explicit parameter to the snapshot analyzer rather than
/// process-wide state, so multiple presets can coexist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandTable {
    pub bands: Vec<BandSpec>,
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            bands: vec![
                BandSpec {
                    name: "bass".to_string(),
                    low_hz: 20.0,
                    high_hz: 250.0,
                },
                BandSpec {
                    name: "mid".to_string(),
                    low_hz: 250.0,
                    high_hz: 4000.0,
                },
                BandSpec {
                    name: "treble".to_string(),
                    low_hz: 4000.0,
                    high_hz: 20000.0,
                },
            ],
        }
    }
}

impl BandTable {
    /// Load a band table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let table: BandTable = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Validate band ranges
    pub fn validate(&self) -> Result<()> {
        for band in &self.bands {
            if band.low_hz < 0.0 || band.high_hz <= band.low_hz {
                return Err(ConfigError::InvalidValue {
                    key: format!("bands.{}", band.name),
                    value: format!("{}-{} Hz", band.low_hz, band.high_hz),
                }
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("analysis.toml");

        let original = AnalysisConfig::default();
        original.save_to_file(&file_path).unwrap();
        let loaded = AnalysisConfig::from_file(&file_path).unwrap();

        assert_eq!(original.window_size, loaded.window_size);
        assert_eq!(original.hop_size, loaded.hop_size);
        assert_eq!(original.energy_threshold, loaded.energy_threshold);
    }

    #[test]
    fn test_invalid_window_size() {
        let config = AnalysisConfig {
            window_size: 1000, // Not a power of two
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hop_larger_than_window() {
        let config = AnalysisConfig {
            hop_size: 2048,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_band_table() {
        let table = BandTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.bands.len(), 3);
        assert_eq!(table.bands[0].name, "bass");
    }

    #[test]
    fn test_band_table_rejects_inverted_range() {
        let table = BandTable {
            bands: vec![BandSpec {
                name: "broken".to_string(),
                low_hz: 500.0,
                high_hz: 100.0,
            }],
        };
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_band_table_from_toml() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bands.toml");
        std::fs::write(
            &file_path,
            r#"
[[bands]]
name = "sub"
low_hz = 20.0
high_hz = 60.0

[[bands]]
name = "kick"
low_hz = 60.0
high_hz = 130.0
"#,
        )
        .unwrap();

        let table = BandTable::from_file(&file_path).unwrap();
        assert_eq!(table.bands.len(), 2);
        assert_eq!(table.bands[1].name, "kick");
        assert_eq!(table.bands[1].low_hz, 60.0);
    }
}
