use clap::Parser;
use digitclip_core::{
    pipeline, voice, ClipConfig, ClipError, EspeakEngine, FfmpegTranscoder, SpeechEngine,
    Transcoder,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "digitclip")]
#[command(about = "Generate 0..9 digit PCM clips via an offline TTS engine", version)]
struct Cli {
    /// Optional voice name/id substring (for example: 'english', 'zira', 'david')
    #[arg(long, default_value = "")]
    voice: String,

    /// Speech rate in words per minute
    #[arg(long, default_value_t = digitclip_core::DEFAULT_RATE_WPM)]
    rate_wpm: i32,

    /// Output sample rate in Hz for generated .s16 files
    #[arg(long, default_value_t = digitclip_core::DEFAULT_SAMPLE_RATE_HZ)]
    sample_rate: i64,

    /// Output directory for generated .s16 files
    #[arg(long, default_value = digitclip_core::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// List available voices and exit
    #[arg(long)]
    list_voices: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), ClipError> {
    let list_voices = cli.list_voices;
    let config = ClipConfig {
        voice_query: cli.voice,
        rate_wpm: cli.rate_wpm,
        sample_rate_hz: cli.sample_rate,
        out_dir: cli.out_dir,
    };
    tracing::debug!(?config, "resolved configuration");

    let transcoder = FfmpegTranscoder::new();
    transcoder.ensure_available()?;
    config.validate()?;

    let mut engine = EspeakEngine::initialize()?;
    engine.set_rate(config.rate_wpm);
    voice::apply_selection(&mut engine, &config.voice_query)?;

    if list_voices {
        pipeline::list_voices(&mut engine)?;
        engine.shutdown();
        return Ok(());
    }

    pipeline::run(&config, &mut engine, &transcoder)?;
    engine.shutdown();
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
