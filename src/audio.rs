//! Looping background music
//!
//! Uses SDL2's core audio: the WAV file is loaded with `AudioSpecWAV`,
//! converted to the device format with `AudioCVT` and played back in a
//! loop from an `AudioCallback`. Any failure leaves the app silent.

use sdl2::audio::{AudioCVT, AudioCallback, AudioDevice, AudioSpecDesired, AudioSpecWAV};
use sdl2::AudioSubsystem;
use std::path::Path;

/// Unsigned 8-bit silence level
const SILENCE: u8 = 128;

/// Converted sample data played back from the start once it runs out
pub struct LoopingTrack {
    data: Vec<u8>,
    volume: f32,
    pos: usize,
}

impl LoopingTrack {
    pub fn new(data: Vec<u8>, volume: f32) -> Self {
        LoopingTrack {
            data,
            volume: volume.clamp(0.0, 1.0),
            pos: 0,
        }
    }

    fn silent() -> Self {
        Self::new(Vec::new(), 0.0)
    }
}

impl AudioCallback for LoopingTrack {
    type Channel = u8;

    fn callback(&mut self, out: &mut [u8]) {
        if self.data.is_empty() {
            out.fill(SILENCE);
            return;
        }

        for dst in out.iter_mut() {
            let sample = self.data[self.pos] as f32 - SILENCE as f32;
            *dst = (sample * self.volume + SILENCE as f32) as u8;
            self.pos = (self.pos + 1) % self.data.len();
        }
    }
}

/// Background music for the lifetime of the window
///
/// Dropping it closes the audio device.
pub struct Music {
    _device: Option<AudioDevice<LoopingTrack>>,
}

impl Music {
    /// Starts looping the WAV file at `path`
    ///
    /// A missing or unreadable file, or an audio device that can't be
    /// opened, is logged and results in silence.
    pub fn start(audio: &AudioSubsystem, path: &Path, volume: f32) -> Self {
        match open_track(audio, path, volume) {
            Ok(device) => {
                device.resume();
                log::info!("Playing {}", path.display());
                Music {
                    _device: Some(device),
                }
            }
            Err(e) => {
                log::warn!("Failed to load music {}: {}, continuing without music", path.display(), e);
                Music::silent()
            }
        }
    }

    pub fn silent() -> Self {
        Music { _device: None }
    }
}

fn open_track(
    audio: &AudioSubsystem,
    path: &Path,
    volume: f32,
) -> Result<AudioDevice<LoopingTrack>, String> {
    let wav = AudioSpecWAV::load_wav(path)?;

    let desired_spec = AudioSpecDesired {
        freq: Some(44_100),
        channels: Some(2),
        samples: None,
    };

    let mut conversion_error = None;
    let device = audio.open_playback(None, &desired_spec, |spec| {
        match AudioCVT::new(
            wav.format,
            wav.channels,
            wav.freq,
            spec.format,
            spec.channels,
            spec.freq,
        ) {
            Ok(cvt) => LoopingTrack::new(cvt.convert(wav.buffer().to_vec()), volume),
            Err(e) => {
                conversion_error = Some(e);
                LoopingTrack::silent()
            }
        }
    })?;

    match conversion_error {
        Some(e) => Err(format!("could not convert audio: {}", e)),
        None => Ok(device),
    }
}
