//! Sequential batch driver.
//!
//! Walks the selected samples in order: an entry whose output file already
//! exists is skipped without I/O; everything else goes through one synthesis
//! round-trip and one WAV write. A fixed pause separates successive requests
//! (a self-imposed rate limit for the service's usage policy) and is taken
//! only between generated items, never after the last one. Any synthesis or
//! write failure aborts the rest of the batch; files written before the
//! failure stay on disk, so a rerun picks up where it left off.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::audio::{AudioClip, WavWriteError};
use crate::catalog::PhonemeSample;
use crate::gemini::{SynthesisError, DEFAULT_MODEL, DEFAULT_VOICE};
use crate::{SpeechRequest, SpeechSynthesizer};

/// Default destination directory for generated samples.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio/phonemes";

/// Pause between successive synthesis requests.
pub const REQUEST_PAUSE: Duration = Duration::from_secs(10);

/// How often a pending interrupt is noticed during the pause.
const INTERRUPT_POLL: Duration = Duration::from_millis(100);

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("synthesis failed for '{word}': {source}")]
    Synthesis {
        word: &'static str,
        source: SynthesisError,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: WavWriteError,
    },
    #[error("interrupted")]
    Interrupted,
}

/// Batch parameters: where files go and how requests are made.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub voice: String,
    pub model: String,
    pub pause: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            voice: DEFAULT_VOICE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            pause: REQUEST_PAUSE,
        }
    }
}

/// What a completed batch did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Process the selected samples in order.
///
/// `interrupt` is checked before each item and while pausing; once it is set
/// the batch stops with [`BatchError::Interrupted`].
pub fn run_batch(
    synth: &dyn SpeechSynthesizer,
    samples: &[&PhonemeSample],
    config: &BatchConfig,
    interrupt: &AtomicBool,
) -> Result<BatchSummary, BatchError> {
    fs::create_dir_all(&config.output_dir).map_err(|source| BatchError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut summary = BatchSummary::default();
    for sample in samples {
        if interrupt.load(Ordering::Relaxed) {
            return Err(BatchError::Interrupted);
        }

        let path = config.output_dir.join(format!("{}.wav", sample.word));
        if path.exists() {
            println!("Skipping existing file: {}", path.display());
            summary.skipped += 1;
            continue;
        }

        if summary.written > 0 {
            pause(config.pause, interrupt)?;
        }

        println!("Requesting audio for word: {}", sample.word);
        let request = SpeechRequest {
            markup: sample.ssml,
            voice: &config.voice,
            model: &config.model,
        };
        let pcm = synth
            .synthesize(&request)
            .map_err(|source| BatchError::Synthesis {
                word: sample.word,
                source,
            })?;

        let clip = AudioClip::new(pcm);
        log::debug!(
            "{}: {} bytes, {:.2}s of audio",
            sample.word,
            clip.pcm.len(),
            clip.duration_secs()
        );
        clip.write_wav(&path).map_err(|source| BatchError::Write {
            path: path.clone(),
            source,
        })?;

        println!("Wrote {} ({})", path.display(), sample.description);
        summary.written += 1;
    }

    Ok(summary)
}

/// Sleep for `total`, in short slices so an interrupt is honored promptly.
fn pause(total: Duration, interrupt: &AtomicBool) -> Result<(), BatchError> {
    let mut remaining = total;
    while !remaining.is_zero() {
        if interrupt.load(Ordering::Relaxed) {
            return Err(BatchError::Interrupted);
        }
        let step = remaining.min(INTERRUPT_POLL);
        thread::sleep(step);
        remaining -= step;
    }
    Ok(())
}
