//! # Beatgrid
//!
//! Tempo, beat-grid and per-frame spectral analysis for music-synced video
//! editing.
//!
//! Beatgrid is a pure in-process computation library: the host decodes audio
//! into a [`Waveform`](audio::types::Waveform) and this crate derives BPM,
//! beat and bar timestamps plus per-instant spectral snapshots from it. It
//! owns no files, sockets or persistent state.
//!
//! ## Quick Start
//!
//! ```rust
//! use beatgrid::{audio::AudioAnalyzer, config::BandTable};
//! use beatgrid::audio::types::Waveform;
//!
//! # fn main() -> beatgrid::Result<()> {
//! // Decoded samples come from the host's audio decoder
//! let waveform = Waveform::new(vec![0.0; 44100], 44100);
//!
//! let analyzer = AudioAnalyzer::new();
//!
//! // Once per loaded track: tempo and the beat/bar grid
//! let grid = analyzer.detect_bpm(&waveform)?;
//! println!("{} BPM over {} beats", grid.bpm, grid.beat_times.len());
//!
//! // Once per rendered frame: spectral snapshot at the playhead
//! let bands = BandTable::default();
//! let snapshot = analyzer.analyze_at(&waveform, 0.25, &bands);
//! println!("bass energy: {}", snapshot.frequency_bands[0].energy);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`audio`] - beat detection, tempo estimation and spectral snapshots
//! - [`config`] - analysis parameters and the frequency band table
//! - [`error`] - error taxonomy; analysis degrades gracefully and only
//!   configuration or decode boundaries produce hard errors

pub mod audio;
pub mod config;
pub mod error;

// Re-export commonly used types for convenience
pub use crate::{
    audio::{AudioAnalyzer, BpmAnalysis, Waveform},
    config::{AnalysisConfig, BandTable},
    error::{AnalysisError, Result},
};
