//! # phoneme-samples
//!
//! Generates a fixed catalog of short phoneme pronunciation clips by sending
//! SSML phoneme markup to the Gemini TTS API and saving each response as a
//! WAV file.
//!
//! The catalog maps a sample word (e.g. `"popular"`) to the IPA symbol it
//! illustrates and the SSML markup that steers the service's pronunciation.
//! Generation is a single sequential batch: entries whose output file already
//! exists are skipped, and a fixed pause separates successive requests to
//! respect the service's usage policy.
//!
//! ## Quick Start
//!
//! ```ignore
//! use phoneme_samples::batch::{run_batch, BatchConfig};
//! use phoneme_samples::catalog;
//! use phoneme_samples::gemini::{GeminiConfigBuilder, GeminiTts};
//! use std::sync::atomic::AtomicBool;
//!
//! let samples = catalog::resolve(&[])?;
//! let config = GeminiConfigBuilder::default().api_key(api_key).build()?;
//! let client = GeminiTts::new(config);
//!
//! let interrupt = AtomicBool::new(false);
//! let summary = run_batch(&client, &samples, &BatchConfig::default(), &interrupt)?;
//! println!("{} written, {} skipped", summary.written, summary.skipped);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod audio;
pub mod batch;
pub mod catalog;
pub mod gemini;

use crate::gemini::SynthesisError;

/// A single synthesis request: what to say and which voice/model to use.
///
/// The markup is SSML with a `<phoneme>` tag; voice and model are opaque
/// identifiers validated by the remote service, not locally.
#[derive(Debug, Clone, Copy)]
pub struct SpeechRequest<'a> {
    /// SSML markup to synthesize.
    pub markup: &'a str,
    /// Prebuilt voice name (e.g. `"Kore"`).
    pub voice: &'a str,
    /// Model identifier (e.g. `"gemini-2.5-flash-preview-tts"`).
    pub model: &'a str,
}

/// Common interface for speech synthesis backends.
///
/// The batch driver only depends on this trait, so it can run against the
/// real Gemini client or a stub in tests.
pub trait SpeechSynthesizer {
    /// Synthesize one request into raw PCM bytes
    /// (mono, 16-bit little-endian, 24000 Hz).
    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, SynthesisError>;
}
