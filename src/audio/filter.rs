//! One-pole RC high-pass filter used to isolate percussive transients
//! before beat detection.

use std::f32::consts::PI;

/// Apply a single-pole high-pass filter over the whole sample buffer.
///
/// `alpha = RC / (RC + dt)` with `RC = 1/(2π·cutoff)` and `dt = 1/sample_rate`;
/// the streaming recurrence is `y[i] = alpha * (y[i-1] + x[i] - x[i-1])` with
/// `y[0] = x[0]`. Implemented as a pure scan; same length out as in.
pub fn high_pass(samples: &[f32], sample_rate: u32, cutoff_hz: f32) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let rc = 1.0 / (2.0 * PI * cutoff_hz);
    let dt = 1.0 / sample_rate as f32;
    let alpha = rc / (rc + dt);

    let mut filtered = Vec::with_capacity(samples.len());
    filtered.push(samples[0]);

    let mut prev_in = samples[0];
    let mut prev_out = samples[0];
    for &x in &samples[1..] {
        let y = alpha * (prev_out + x - prev_in);
        filtered.push(y);
        prev_in = x;
        prev_out = y;
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    fn rms(samples: &[f32]) -> f32 {
        (samples.iter().map(|&x| x * x).sum::<f32>() / samples.len() as f32).sqrt()
    }

    #[test]
    fn test_preserves_length() {
        let input = vec![0.1; 4096];
        assert_eq!(high_pass(&input, 44100, 100.0).len(), 4096);
        assert!(high_pass(&[], 44100, 100.0).is_empty());
    }

    #[test]
    fn test_attenuates_low_frequencies() {
        let sample_rate = 44100;
        let low = sine(30.0, sample_rate, 44100);
        let high = sine(4000.0, sample_rate, 44100);

        // Skip the initial transient when measuring steady-state level
        let low_out = high_pass(&low, sample_rate, 100.0);
        let high_out = high_pass(&high, sample_rate, 100.0);

        let low_rms = rms(&low_out[4410..]);
        let high_rms = rms(&high_out[4410..]);

        assert!(low_rms < 0.4, "30 Hz should be strongly attenuated, got {low_rms}");
        assert!(high_rms > 0.6, "4 kHz should pass nearly unchanged, got {high_rms}");
    }

    #[test]
    fn test_dc_is_removed() {
        let input = vec![0.8; 44100];
        let output = high_pass(&input, 44100, 100.0);
        // After the decay transient a constant input settles to zero
        assert!(output[44099].abs() < 1e-3);
    }

    #[test]
    fn test_first_sample_passes_through() {
        let input = vec![0.25, 0.5, -0.5];
        let output = high_pass(&input, 44100, 100.0);
        assert_eq!(output[0], 0.25);
    }
}
