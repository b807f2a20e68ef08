use crate::audio::filter::high_pass;
use crate::audio::snapshot;
use crate::audio::spectrum::magnitude_spectrum;
use crate::audio::types::{AudioAnalysis, BpmAnalysis, TimeSignature, Waveform};
use crate::config::{AnalysisConfig, BandTable};
use crate::error::Result;

/// Core audio analyzer deriving tempo, beat grid and per-instant spectral
/// snapshots from a decoded waveform.
///
/// Holds only configuration; every analysis call is a pure function of its
/// inputs, so concurrent snapshot calls from the host are safe.
pub struct AudioAnalyzer {
    config: AnalysisConfig,
}

impl AudioAnalyzer {
    /// Create a new analyzer with default configuration
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create a new analyzer with custom configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Detect tempo and build the beat/bar grid for a whole track.
    ///
    /// Called once per loaded track; O(samples) and comparatively expensive,
    /// so hosts with an interactive thread should invoke it off that thread.
    /// Fewer than two detected beats degrades to the 120 BPM default with
    /// low confidence rather than erroring.
    pub fn detect_bpm(&self, waveform: &Waveform) -> Result<BpmAnalysis> {
        self.config.validate()?;

        tracing::info!(
            "Starting BPM analysis for {:.1}s of audio at {} Hz",
            waveform.duration,
            waveform.sample_rate
        );

        tracing::debug!("High-pass filtering for percussive content...");
        let filtered = high_pass(
            &waveform.samples,
            waveform.sample_rate,
            self.config.highpass_cutoff_hz,
        );

        tracing::debug!("Picking energy peaks...");
        let energies = self.window_energies(&filtered);
        let candidates = self.pick_peak_times(&energies, waveform.sample_rate);
        let beat_times = self.dedup_beats(candidates);

        let (bpm, confidence) = self.estimate_tempo(&beat_times);
        let time_signature = TimeSignature::default();
        let bars = self.build_bar_grid(&beat_times, bpm, time_signature);

        tracing::info!(
            "Analysis complete: {} beats, {} BPM (confidence: {:.2}), {} bars",
            beat_times.len(),
            bpm,
            confidence,
            bars.len()
        );

        Ok(BpmAnalysis {
            bpm,
            confidence,
            beat_times,
            bars,
            time_signature,
        })
    }

    /// Compute a spectral snapshot at an arbitrary playback time.
    ///
    /// Called once per rendered frame during playback. Windows that run past
    /// the end of the buffer silently shrink; an empty window yields an
    /// all-zero snapshot.
    pub fn analyze_at(&self, waveform: &Waveform, time: f64, bands: &BandTable) -> AudioAnalysis {
        let window = waveform.window_at(time, self.config.window_size);
        let spectrum = magnitude_spectrum(window);
        snapshot::build(window, &spectrum, waveform.sample_rate, bands)
    }

    /// Mean-square energy of each hop-aligned window
    fn window_energies(&self, samples: &[f32]) -> Vec<f32> {
        if samples.len() < self.config.window_size {
            return Vec::new();
        }

        samples
            .windows(self.config.window_size)
            .step_by(self.config.hop_size)
            .map(|w| w.iter().map(|&x| x * x).sum::<f32>() / self.config.window_size as f32)
            .collect()
    }

    /// Candidate beat times: non-edge windows that are a strict local energy
    /// maximum and exceed the absolute threshold
    fn pick_peak_times(&self, energies: &[f32], sample_rate: u32) -> Vec<f64> {
        let mut candidates = Vec::new();
        if energies.len() < 3 {
            return candidates;
        }

        for i in 1..energies.len() - 1 {
            let e = energies[i];
            if e > energies[i - 1] && e > energies[i + 1] && e > self.config.energy_threshold {
                candidates.push((i * self.config.hop_size) as f64 / sample_rate as f64);
            }
        }

        tracing::debug!("{} beat candidates before deduplication", candidates.len());
        candidates
    }

    /// Drop candidates closer than the minimum gap to the last *retained*
    /// beat. Comparing against the last retained timestamp (not the previous
    /// raw candidate) changes which beats survive once three or more
    /// candidates cluster inside one gap.
    fn dedup_beats(&self, candidates: Vec<f64>) -> Vec<f64> {
        let mut beats: Vec<f64> = Vec::with_capacity(candidates.len());
        for t in candidates {
            match beats.last() {
                Some(&last) if t - last < self.config.min_beat_gap => {}
                _ => beats.push(t),
            }
        }
        beats
    }

    /// Median inter-beat interval tempo estimate plus a jitter-based
    /// confidence score.
    ///
    /// Fewer than 2 beats falls back to 120 BPM; fewer than 4 beats reports
    /// constant 0.1 confidence. The median is robust to a small number of
    /// spurious or missed beats, unlike the mean.
    fn estimate_tempo(&self, beats: &[f64]) -> (u32, f32) {
        if beats.len() < 2 {
            return (120, 0.1);
        }

        let intervals: Vec<f64> = beats.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let mut sorted = intervals.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let median = sorted[sorted.len() / 2];
        let bpm = (60.0 / median).round() as u32;

        if beats.len() < 4 {
            return (bpm, 0.1);
        }

        let expected = 60.0 / bpm as f64;
        let avg_error = intervals
            .iter()
            .map(|&interval| (interval - expected).abs() / expected)
            .sum::<f64>()
            / intervals.len() as f64;
        let confidence = (1.0 - 2.0 * avg_error).clamp(0.0, 1.0) as f32;

        tracing::debug!(
            "Tempo estimation: {} BPM (confidence: {:.2}) from {} intervals",
            bpm,
            confidence,
            intervals.len()
        );

        (bpm, confidence)
    }

    /// Extrapolate bar boundaries from 0 until the last beat is passed
    fn build_bar_grid(&self, beats: &[f64], bpm: u32, signature: TimeSignature) -> Vec<f64> {
        let bar = signature.numerator as f64 * 60.0 / bpm as f64;
        let mut bars = vec![0.0];

        if let Some(&last_beat) = beats.last() {
            let mut t = 0.0;
            while t < last_beat {
                t += bar;
                bars.push(t);
            }
        }

        bars
    }
}

impl Default for AudioAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
