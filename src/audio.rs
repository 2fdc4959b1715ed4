//! WAV persistence for raw PCM audio returned by the synthesis service.
//!
//! The service emits headerless PCM: mono, 16-bit little-endian samples at
//! 24000 Hz. `AudioClip` wraps those bytes in a standard uncompressed WAV
//! container. Writes go to a `<path>.part` file that is renamed onto the
//! target only after the header is finalized, so a failed write never leaves
//! a file that looks valid.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Channel count of service audio.
pub const CHANNELS: u16 = 1;

/// Sample rate of service audio.
pub const SAMPLE_RATE: u32 = 24000;

/// Sample width of service audio. The writer decodes the payload as
/// little-endian byte pairs, so this is fixed.
pub const BITS_PER_SAMPLE: u16 = 16;

#[derive(Error, Debug)]
pub enum WavWriteError {
    #[error("WAV encoding failed: {0}")]
    Encode(#[from] hound::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PCM payload of {0} bytes is not a whole number of 16-bit frames")]
    PartialFrame(usize),
}

/// Raw PCM bytes plus the container parameters to persist them with.
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Raw 16-bit little-endian samples.
    pub pcm: Vec<u8>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl AudioClip {
    /// Wrap service PCM with the default parameters (mono, 24000 Hz).
    pub fn new(pcm: Vec<u8>) -> Self {
        Self {
            pcm,
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
        }
    }

    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        let frame_bytes = (self.channels as usize) * 2;
        if frame_bytes == 0 || self.pcm.is_empty() {
            return 0.0;
        }
        (self.pcm.len() / frame_bytes) as f64 / self.sample_rate as f64
    }

    /// Write the clip as a WAV file at `path`.
    ///
    /// The declared data-chunk size of the result always equals the payload
    /// byte count. A payload that does not divide into whole 16-bit frames is
    /// rejected before anything touches the filesystem, and any failure mid
    /// write removes the partial file and leaves the target absent.
    pub fn write_wav(&self, path: &Path) -> Result<(), WavWriteError> {
        if self.pcm.len() % 2 != 0 {
            return Err(WavWriteError::PartialFrame(self.pcm.len()));
        }

        let part = partial_path(path);
        if let Err(err) = self.write_frames(&part) {
            let _ = fs::remove_file(&part);
            return Err(err);
        }

        if let Err(err) = fs::rename(&part, path) {
            let _ = fs::remove_file(&part);
            return Err(err.into());
        }
        Ok(())
    }

    fn write_frames(&self, path: &Path) -> Result<(), WavWriteError> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec)?;
        for frame in self.pcm.chunks_exact(2) {
            writer.write_sample(i16::from_le_bytes([frame[0], frame[1]]))?;
        }
        writer.finalize()?;
        Ok(())
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
