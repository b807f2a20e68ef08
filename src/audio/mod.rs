//! # Audio Analysis Module
//!
//! Derives tempo, beat/bar timing and per-instant spectral characteristics
//! from a decoded waveform so visual effects and cuts can be aligned to
//! music.
//!
//! ## Core Features
//!
//! - **Beat Detection**: high-pass filtered energy peak picking with
//!   deduplication
//! - **Tempo Analysis**: median inter-beat interval BPM with a confidence
//!   score
//! - **Bar Grid**: 4/4 bar boundaries extrapolated from the estimated tempo
//! - **Instant Snapshots**: band energies, RMS, peak, spectral centroid and
//!   zero-crossing rate at arbitrary playback positions
//!
//! ## Usage
//!
//! ```rust
//! use beatgrid::audio::{AudioAnalyzer, types::Waveform};
//! use beatgrid::config::BandTable;
//!
//! # fn main() -> beatgrid::error::Result<()> {
//! let waveform = Waveform::new(vec![0.0; 44100], 44100);
//! let analyzer = AudioAnalyzer::new();
//!
//! let grid = analyzer.detect_bpm(&waveform)?;
//! println!("Detected BPM: {}", grid.bpm);
//!
//! let snapshot = analyzer.analyze_at(&waveform, 0.5, &BandTable::default());
//! println!("RMS at 0.5s: {}", snapshot.rms);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod filter;
pub mod snapshot;
pub mod spectrum;
pub mod types;

pub use analyzer::AudioAnalyzer;
pub use types::{AudioAnalysis, BpmAnalysis, FrequencyBand, TimeSignature, Waveform};
