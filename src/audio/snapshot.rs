//! Per-instant snapshot assembly: band energies plus RMS, peak, spectral
//! centroid and zero-crossing rate for one playback position.

use crate::audio::types::{AudioAnalysis, FrequencyBand};
use crate::config::BandTable;

/// Normalized band energy above this value marks the band as triggered
const TRIGGER_THRESHOLD: f32 = 0.7;

/// Magnitudes are divided by this before clamping to [0, 1]
const ENERGY_SCALE: f32 = 100.0;

/// Aggregate a magnitude spectrum into the configured named bands.
///
/// Bin ranges use floor mapping on both edges and are clamped to the
/// spectrum; a band entirely above Nyquist reports zero energy.
pub fn band_energies(spectrum: &[f32], sample_rate: u32, table: &BandTable) -> Vec<FrequencyBand> {
    let nyquist = sample_rate as f32 / 2.0;

    table
        .bands
        .iter()
        .map(|spec| {
            let energy = if spectrum.is_empty() {
                0.0
            } else {
                let bin_size = nyquist / spectrum.len() as f32;
                let low_bin = (spec.low_hz / bin_size).floor() as usize;
                let high_bin = ((spec.high_hz / bin_size).floor() as usize).min(spectrum.len() - 1);

                if low_bin >= spectrum.len() || low_bin > high_bin {
                    0.0
                } else {
                    let sum: f32 = spectrum[low_bin..=high_bin].iter().sum();
                    let avg = sum / (high_bin - low_bin + 1) as f32;
                    (avg / ENERGY_SCALE).min(1.0)
                }
            };

            FrequencyBand {
                name: spec.name.clone(),
                low_hz: spec.low_hz,
                high_hz: spec.high_hz,
                energy,
                threshold: TRIGGER_THRESHOLD,
                triggered: energy > TRIGGER_THRESHOLD,
            }
        })
        .collect()
}

/// Combine a sample window and its spectrum into one immutable snapshot
pub fn build(
    window: &[f32],
    spectrum: &[f32],
    sample_rate: u32,
    table: &BandTable,
) -> AudioAnalysis {
    let frequency_bands = band_energies(spectrum, sample_rate, table);

    if window.is_empty() {
        return AudioAnalysis {
            frequency_bands,
            rms: 0.0,
            peak: 0.0,
            spectral_centroid: 0.0,
            zcr: 0.0,
        };
    }

    let rms = (window.iter().map(|&x| x * x).sum::<f32>() / window.len() as f32).sqrt();
    let peak = window.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);

    let total_magnitude: f32 = spectrum.iter().sum();
    let spectral_centroid = if total_magnitude > 0.0 {
        let weighted: f32 = spectrum
            .iter()
            .enumerate()
            .map(|(k, &mag)| k as f32 * sample_rate as f32 / (2.0 * spectrum.len() as f32) * mag)
            .sum();
        weighted / total_magnitude
    } else {
        0.0
    };

    let zero_crossings = window
        .windows(2)
        .filter(|pair| (pair[0] >= 0.0) != (pair[1] >= 0.0))
        .count();
    let zcr = zero_crossings as f32 / window.len() as f32;

    AudioAnalysis {
        frequency_bands,
        rms,
        peak,
        spectral_centroid,
        zcr,
    }
}
