//! # digitclip-core
//!
//! Offline generation of spoken digit clips (0-9) as raw mono signed
//! 16-bit little-endian PCM files, for playback by a device simulation
//! that memory-maps headerless `.s16` clips.
//!
//! ## Pipeline
//!
//! Each digit is synthesized to a temporary waveform by an offline
//! speech engine (espeak-ng by default), then converted by an external
//! transcoder (ffmpeg) to `<out-dir>/<digit>_<sample_rate>.s16`. Both
//! tools sit behind capability traits so backends can be swapped
//! without touching orchestration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use digitclip_core::{pipeline, voice, ClipConfig, EspeakEngine, FfmpegTranscoder};
//! use digitclip_core::{SpeechEngine, Transcoder};
//!
//! fn main() -> digitclip_core::ClipResult<()> {
//!     let config = ClipConfig::default();
//!     let transcoder = FfmpegTranscoder::new();
//!     transcoder.ensure_available()?;
//!     config.validate()?;
//!
//!     let mut engine = EspeakEngine::initialize()?;
//!     engine.set_rate(config.rate_wpm);
//!     voice::apply_selection(&mut engine, &config.voice_query)?;
//!
//!     pipeline::run(&config, &mut engine, &transcoder)?;
//!     engine.shutdown();
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod espeak;
pub mod pipeline;
pub mod transcoder;
pub mod voice;

// Re-export main types for convenience
pub use config::ClipConfig;
pub use engine::SpeechEngine;
pub use error::{ClipError, ClipResult};
pub use espeak::EspeakEngine;
pub use transcoder::{FfmpegTranscoder, Transcoder};
pub use voice::Voice;

/// Version information for the digitclip-core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default speech rate in words per minute
pub const DEFAULT_RATE_WPM: i32 = 170;

/// Default output sample rate in Hz (22.05 kHz)
pub const DEFAULT_SAMPLE_RATE_HZ: i64 = 22_050;

/// Default output directory for generated `.s16` files
pub const DEFAULT_OUT_DIR: &str = "data/audio/digits";
