use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};

use beatgrid::{
    audio::{types::Waveform, AudioAnalyzer},
    config::{AnalysisConfig, BandTable},
    error::AnalysisError,
};

#[derive(Parser)]
#[command(
    name = "track-info",
    version,
    about = "Analyze a WAV file for tempo, beats and spectral content",
    long_about = "Decodes a WAV file and prints the detected BPM, beat/bar grid and a handful of per-instant spectral snapshots, the same analysis an editor uses for beat-snapping and visualizers."
)]
struct Cli {
    /// Audio file path (WAV)
    #[arg(short, long)]
    audio: PathBuf,

    /// Analysis configuration file (optional, TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frequency band table file (optional, TOML)
    #[arg(short, long)]
    bands: Option<PathBuf>,

    /// Number of evenly spaced snapshot positions to print
    #[arg(short, long, default_value_t = 5)]
    snapshots: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Starting track-info v{}", env!("CARGO_PKG_VERSION"));
    info!("Audio: {:?}", cli.audio);

    let config = match cli.config {
        Some(path) => {
            info!("Loading analysis configuration from {:?}", path);
            AnalysisConfig::from_file(&path)?
        }
        None => AnalysisConfig::default(),
    };

    let bands = match cli.bands {
        Some(path) => {
            info!("Loading band table from {:?}", path);
            BandTable::from_file(&path)?
        }
        None => BandTable::default(),
    };

    let waveform = load_wav(&cli.audio)?;
    info!(
        "Decoded {:.2}s at {} Hz ({} samples)",
        waveform.duration,
        waveform.sample_rate,
        waveform.samples.len()
    );

    let analyzer = AudioAnalyzer::with_config(config);
    let grid = analyzer.detect_bpm(&waveform)?;

    println!("BPM:        {} (confidence {:.2})", grid.bpm, grid.confidence);
    println!("Beats:      {}", grid.beat_times.len());
    println!(
        "Bars:       {} of {:.3}s each ({}/{})",
        grid.bars.len(),
        grid.bar_duration(),
        grid.time_signature.numerator,
        grid.time_signature.denominator
    );
    if let Some(first) = grid.beat_times.first() {
        println!("First beat: {:.3}s", first);
    }

    if cli.snapshots > 0 {
        println!();
        for i in 0..cli.snapshots {
            let time = waveform.duration * i as f64 / cli.snapshots as f64;
            let snapshot = analyzer.analyze_at(&waveform, time, &bands);
            let band_summary: Vec<String> = snapshot
                .frequency_bands
                .iter()
                .map(|b| format!("{} {:.2}{}", b.name, b.energy, if b.triggered { "*" } else { "" }))
                .collect();
            println!(
                "t={:6.2}s  rms {:.3}  peak {:.3}  centroid {:7.1} Hz  zcr {:.3}  [{}]",
                time,
                snapshot.rms,
                snapshot.peak,
                snapshot.spectral_centroid,
                snapshot.zcr,
                band_summary.join(", ")
            );
        }
    }

    Ok(())
}

/// Decode a WAV file into a mono waveform. This is the decode boundary: any
/// failure here surfaces as the one hard error of the analysis pipeline.
fn load_wav(path: &PathBuf) -> Result<Waveform> {
    let decode_failed = || AnalysisError::DecodeFailed {
        path: path.display().to_string(),
    };

    let mut reader = hound::WavReader::open(path).map_err(|_| decode_failed())?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| decode_failed())?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(|_| decode_failed())?
        }
    };

    Ok(Waveform::mono_from_interleaved(
        &samples,
        spec.channels,
        spec.sample_rate,
    ))
}
