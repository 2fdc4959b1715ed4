//! Command-line entry point.
//!
//! Wires the pieces together in a fixed order: parse arguments, select the
//! catalog entries, pick up the API key from the environment, then hand off
//! to the batch driver. Everything that can fail before network activity
//! (unknown words, missing credentials) is checked here first and exits with
//! a message rather than a stack trace. Ctrl-C flips a flag the driver
//! polls, so an interrupted run ends with a clean "aborted" line and exit
//! code zero.

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use nix::libc;
use nix::sys::signal::{self, SigHandler, Signal};

use phoneme_samples::batch::{run_batch, BatchConfig, BatchError, DEFAULT_OUTPUT_DIR};
use phoneme_samples::catalog;
use phoneme_samples::gemini::{GeminiConfigBuilder, GeminiTts, DEFAULT_MODEL, DEFAULT_VOICE};

/// Set by the SIGINT handler and polled by the batch driver.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_sigint(_: libc::c_int) {
    INTERRUPTED.store(true, Ordering::Relaxed);
}

#[derive(Parser, Debug)]
#[command(version, about = "Generate phoneme audio samples with Gemini TTS.")]
struct Cli {
    /// Subset of phoneme keys to generate (defaults to all).
    #[arg(long, num_args = 0..)]
    words: Vec<String>,

    /// Directory where the audio files will be written.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Gemini prebuilt voice to use.
    #[arg(long, default_value = DEFAULT_VOICE)]
    voice: String,

    /// Gemini model identifier.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,
}

/// API key lookup at the process boundary; the client itself takes the key
/// as an explicit dependency.
fn api_key_from_env() -> Option<String> {
    ["GOOGLE_API_KEY", "GEMINI_API_KEY"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|key| !key.trim().is_empty()))
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();

    let samples = match catalog::resolve(&cli.words) {
        Ok(samples) => samples,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let Some(api_key) = api_key_from_env() else {
        eprintln!(
            "Failed to construct the Gemini client: no API key found. \
             Set the GOOGLE_API_KEY (or GEMINI_API_KEY) environment variable."
        );
        process::exit(1);
    };

    let gemini_config = match GeminiConfigBuilder::default().api_key(api_key).build() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to construct the Gemini client: {err}");
            process::exit(1);
        }
    };
    let client = GeminiTts::new(gemini_config);

    if let Err(err) = unsafe { signal::signal(Signal::SIGINT, SigHandler::Handler(handle_sigint)) }
    {
        log::warn!("Could not install SIGINT handler: {err}");
    }

    let config = BatchConfig {
        output_dir: cli.output_dir,
        voice: cli.voice,
        model: cli.model,
        ..BatchConfig::default()
    };

    match run_batch(&client, &samples, &config, &INTERRUPTED) {
        Ok(summary) => {
            println!(
                "Done: {} generated, {} skipped.",
                summary.written, summary.skipped
            );
        }
        Err(BatchError::Interrupted) => {
            println!("Aborted by user.");
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}
