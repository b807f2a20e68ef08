use serde::{Deserialize, Serialize};

/// Decoded mono waveform, produced once by the caller's decode facility.
///
/// This core never decodes, resamples or mutates audio; it only reads the
/// samples handed to it.
#[derive(Debug, Clone)]
pub struct Waveform {
    /// Mono samples in [-1, 1]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Duration in seconds
    pub duration: f64,
}

impl Waveform {
    /// Wrap an already-mono sample buffer
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        let duration = samples.len() as f64 / sample_rate as f64;
        Self {
            samples,
            sample_rate,
            duration,
        }
    }

    /// Downmix interleaved multi-channel PCM to mono by averaging channels
    pub fn mono_from_interleaved(samples: &[f32], channels: u16, sample_rate: u32) -> Self {
        if channels <= 1 {
            return Self::new(samples.to_vec(), sample_rate);
        }

        let channels = channels as usize;
        let mut mono = Vec::with_capacity(samples.len() / channels);
        for frame in samples.chunks(channels) {
            let sum: f32 = frame.iter().sum();
            mono.push(sum / frame.len() as f32);
        }

        Self::new(mono, sample_rate)
    }

    /// Slice a window of up to `len` samples starting at `time` seconds.
    ///
    /// Requests near or past the end of the buffer silently shrink to
    /// whatever samples remain (possibly an empty slice); no error is raised.
    pub fn window_at(&self, time: f64, len: usize) -> &[f32] {
        if time < 0.0 {
            return &[];
        }
        let start = (time * self.sample_rate as f64) as usize;
        if start >= self.samples.len() {
            return &[];
        }
        let end = (start + len).min(self.samples.len());
        &self.samples[start..end]
    }

    /// Time in seconds for a sample index
    pub fn time_for_sample(&self, sample_index: usize) -> f64 {
        sample_index as f64 / self.sample_rate as f64
    }
}

/// Time signature information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per bar (numerator)
    pub numerator: u8,

    /// Note value for one beat (denominator, e.g. 4 for quarter note)
    pub denominator: u8,
}

impl Default for TimeSignature {
    fn default() -> Self {
        // Fixed assumption of the engine; other signatures are not detected.
        Self {
            numerator: 4,
            denominator: 4,
        }
    }
}

/// Track-level tempo and beat-grid analysis, computed once per loaded track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BpmAnalysis {
    /// Estimated tempo in beats per minute
    pub bpm: u32,

    /// Confidence in the tempo estimate (0.0-1.0)
    pub confidence: f32,

    /// Detected beat timestamps in seconds, strictly increasing
    pub beat_times: Vec<f64>,

    /// Bar boundary timestamps in seconds, starting at 0
    pub bars: Vec<f64>,

    /// Time signature the bar grid was built under
    pub time_signature: TimeSignature,
}

impl BpmAnalysis {
    /// Duration of one bar in seconds
    pub fn bar_duration(&self) -> f64 {
        self.time_signature.numerator as f64 * 60.0 / self.bpm as f64
    }

    /// Beats within a time range (inclusive)
    pub fn beats_in_range(&self, start: f64, end: f64) -> Vec<f64> {
        self.beat_times
            .iter()
            .copied()
            .filter(|&t| t >= start && t <= end)
            .collect()
    }

    /// Find the next beat after a given time
    pub fn next_beat_after(&self, time: f64) -> Option<f64> {
        self.beat_times.iter().copied().find(|&t| t > time)
    }
}

/// A frequency band's aggregated energy at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyBand {
    /// Band name (e.g. "bass")
    pub name: String,

    /// Lower edge of the band in Hz
    pub low_hz: f32,

    /// Upper edge of the band in Hz
    pub high_hz: f32,

    /// Normalized band energy (0.0-1.0)
    pub energy: f32,

    /// Trigger threshold the energy was compared against
    pub threshold: f32,

    /// Whether the energy exceeded the threshold
    pub triggered: bool,
}

/// Per-instant spectral snapshot, recomputed fresh on every call.
///
/// Cheap enough to request once per rendered frame during playback; never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    /// Per-band normalized energies
    pub frequency_bands: Vec<FrequencyBand>,

    /// RMS (Root Mean Square) amplitude of the window
    pub rms: f32,

    /// Peak absolute amplitude of the window
    pub peak: f32,

    /// Magnitude-weighted average frequency in Hz (brightness)
    pub spectral_centroid: f32,

    /// Zero crossing rate (0.0-1.0, roughness indicator)
    pub zcr: f32,
}
