//! Sound effects
//!
//! Short clips are decoded from 16-bit little-endian WAV files once at
//! startup and pushed onto an SDL audio queue whenever they are played.

use crate::error::GameError;
use sdl2::AudioSubsystem;
use sdl2::audio::{AudioFormat, AudioQueue, AudioSpecDesired, AudioSpecWAV};

pub struct SoundEffect {
    queue: AudioQueue<i16>,
    samples: Vec<i16>,
}

impl SoundEffect {
    /// Loads `path` and opens a playback queue matching its format.
    pub fn load(audio: &AudioSubsystem, path: &str) -> Result<Self, GameError> {
        let failed = |reason: String| GameError::Audio {
            path: path.to_string(),
            reason,
        };

        let wav = AudioSpecWAV::load_wav(path).map_err(failed)?;
        if wav.format != AudioFormat::S16LSB {
            return Err(failed(format!(
                "unsupported sample format {:?}, expected signed 16-bit little-endian",
                wav.format
            )));
        }

        let desired = AudioSpecDesired {
            freq: Some(wav.freq),
            channels: Some(wav.channels),
            samples: None,
        };
        let queue = audio.open_queue::<i16, _>(None, &desired).map_err(failed)?;
        queue.resume();

        Ok(SoundEffect {
            queue,
            samples: decode_s16le(wav.buffer()),
        })
    }

    /// Starts the clip from the beginning, cutting off any earlier playback.
    pub fn play(&self) -> Result<(), String> {
        self.queue.clear();
        self.queue.queue_audio(&self.samples)
    }
}

fn decode_s16le(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_s16le() {
        let bytes = [0x00, 0x00, 0xFF, 0x7F, 0x00, 0x80, 0x34, 0x12];
        assert_eq!(decode_s16le(&bytes), vec![0, i16::MAX, i16::MIN, 0x1234]);
    }

    #[test]
    fn test_decode_drops_trailing_odd_byte() {
        assert_eq!(decode_s16le(&[0x01, 0x00, 0x02]), vec![1]);
    }
}
