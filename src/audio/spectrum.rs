//! Magnitude spectrum computation.
//!
//! The output contract is `N/2` magnitude bins for an `N`-sample window,
//! identical to the direct discrete transform. The production path uses
//! [`realfft`] for speed; [`dft_magnitudes`] is the O(N²) reference kept for
//! odd-length windows and for verifying the FFT path.

use realfft::RealFftPlanner;
use rustfft::num_complex::Complex;

/// Compute the magnitude spectrum of a sample window.
///
/// Returns `window.len() / 2` bins; windows shorter than 2 samples yield an
/// empty spectrum.
pub fn magnitude_spectrum(window: &[f32]) -> Vec<f32> {
    let n = window.len();
    if n < 2 {
        return Vec::new();
    }

    let mut planner = RealFftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(n);
    let mut input = fft.make_input_vec();
    let mut spectrum: Vec<Complex<f32>> = fft.make_output_vec();
    input.copy_from_slice(window);

    // realfft only errors on mismatched buffer lengths; ours come from the plan
    if fft.process(&mut input, &mut spectrum).is_err() {
        return dft_magnitudes(window);
    }

    spectrum[..n / 2].iter().map(|c| c.norm()).collect()
}

/// Direct O(N²) discrete transform producing the same `N/2` magnitude bins.
pub fn dft_magnitudes(window: &[f32]) -> Vec<f32> {
    let n = window.len();
    if n < 2 {
        return Vec::new();
    }

    let mut magnitudes = Vec::with_capacity(n / 2);
    for k in 0..n / 2 {
        let mut real = 0.0f64;
        let mut imag = 0.0f64;
        for (i, &x) in window.iter().enumerate() {
            let angle = -2.0 * std::f64::consts::PI * k as f64 * i as f64 / n as f64;
            real += x as f64 * angle.cos();
            imag += x as f64 * angle.sin();
        }
        magnitudes.push((real * real + imag * imag).sqrt() as f32);
    }

    magnitudes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_bin_count_is_half_window() {
        assert_eq!(magnitude_spectrum(&vec![0.0; 1024]).len(), 512);
        assert_eq!(magnitude_spectrum(&vec![0.0; 100]).len(), 50);
        assert!(magnitude_spectrum(&[0.5]).is_empty());
        assert!(magnitude_spectrum(&[]).is_empty());
    }

    #[test]
    fn test_silence_yields_zero_magnitudes() {
        let spectrum = magnitude_spectrum(&vec![0.0; 1024]);
        assert!(spectrum.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_pure_tone_concentrates_in_one_bin() {
        let sample_rate = 44100;
        let n = 1024;
        // Place the tone exactly on bin 8 so there is no spectral leakage
        let freq = 8.0 * sample_rate as f32 / n as f32;
        let spectrum = magnitude_spectrum(&sine(freq, sample_rate, n));

        let peak_bin = spectrum
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 8);
        // An on-bin unit sine has magnitude N/2 at its bin
        assert!((spectrum[8] - n as f32 / 2.0).abs() < 1.0);
        assert!(spectrum[100] < 1.0);
    }

    #[test]
    fn test_fft_path_matches_direct_transform() {
        // Deterministic pseudo-random-ish window
        let window: Vec<f32> = (0..256)
            .map(|i| ((i * 7919 % 997) as f32 / 997.0 - 0.5) * 1.6)
            .collect();

        let fast = magnitude_spectrum(&window);
        let reference = dft_magnitudes(&window);

        assert_eq!(fast.len(), reference.len());
        for (f, r) in fast.iter().zip(reference.iter()) {
            assert!((f - r).abs() < 1e-2, "fft {f} vs dft {r}");
        }
    }

    #[test]
    fn test_odd_length_window() {
        let window = sine(1000.0, 44100, 333);
        let spectrum = magnitude_spectrum(&window);
        assert_eq!(spectrum.len(), 166);
    }
}
