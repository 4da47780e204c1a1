//! Alert sound playback.
//!
//! Each countdown unit owns one [`AlertPlayer`]. Players are created by an
//! [`AudioBackend`]: [`RodioAudio`] for a real output device, or
//! [`NullAudio`] when no device is available. Every `play_from_start`
//! restarts the sound at position zero and replaces whatever the player was
//! doing.

mod null;
mod rodio_backend;

pub use null::{NullAudio, PlaybackEvent};
pub use rodio_backend::RodioAudio;

use crate::models::sound::AlertSound;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    Output(#[from] rodio::StreamError),
    #[error("failed to open sound file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sound file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}

/// Playback handle owned by a single timer.
pub trait AlertPlayer {
    /// Stop anything in progress and play `sound` from the beginning.
    fn play_from_start(&mut self, sound: &'static AlertSound);

    /// Stop playback and rewind; no-op when idle.
    fn stop(&mut self);

    /// True while a sound is audibly playing.
    fn is_playing(&self) -> bool;
}

/// Source of per-timer players.
pub trait AudioBackend {
    fn create_player(&self) -> Box<dyn AlertPlayer>;
}

/// Open the default output device, falling back to silence.
pub fn open_backend(sounds_dir: PathBuf, volume: f32) -> Rc<dyn AudioBackend> {
    match RodioAudio::open_default(sounds_dir, volume) {
        Ok(audio) => Rc::new(audio),
        Err(e) => {
            log::warn!("Alert sounds disabled: {}", e);
            Rc::new(NullAudio::new())
        }
    }
}
