use super::{AlertPlayer, AudioBackend, AudioError};
use crate::models::sound::AlertSound;
use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

/// Tone used when a preset file cannot be played
const FALLBACK_TONE_HZ: f32 = 880.0;
const FALLBACK_TONE_LENGTH: Duration = Duration::from_secs(2);

/// Output device shared by every timer's player.
pub struct RodioAudio {
    stream: Rc<OutputStream>,
    sounds_dir: PathBuf,
    volume: f32,
}

impl RodioAudio {
    pub fn open_default(sounds_dir: PathBuf, volume: f32) -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        stream.log_on_drop(false);
        log::info!(
            "Audio output ready; alert sounds from {}",
            sounds_dir.display()
        );
        Ok(Self {
            stream: Rc::new(stream),
            sounds_dir,
            volume: volume.clamp(0.0, 1.0),
        })
    }
}

impl AudioBackend for RodioAudio {
    fn create_player(&self) -> Box<dyn AlertPlayer> {
        Box::new(RodioPlayer {
            stream: Rc::clone(&self.stream),
            sounds_dir: self.sounds_dir.clone(),
            volume: self.volume,
            sink: None,
        })
    }
}

struct RodioPlayer {
    stream: Rc<OutputStream>,
    sounds_dir: PathBuf,
    volume: f32,
    sink: Option<Sink>,
}

impl RodioPlayer {
    fn open_sound(&self, sound: &AlertSound) -> Result<Decoder<BufReader<File>>, AudioError> {
        let path = self.sounds_dir.join(sound.file_name);
        let file = File::open(&path).map_err(|source| AudioError::Open {
            path: path.clone(),
            source,
        })?;
        Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode { path, source })
    }
}

impl AlertPlayer for RodioPlayer {
    fn play_from_start(&mut self, sound: &'static AlertSound) {
        self.stop();

        // A fresh sink and decoder always start at position zero.
        let sink = Sink::connect_new(self.stream.mixer());
        match self.open_sound(sound) {
            Ok(decoder) => sink.append(decoder),
            Err(e) => {
                log::warn!("Playing fallback tone for '{}': {}", sound.display_name, e);
                sink.append(
                    SineWave::new(FALLBACK_TONE_HZ)
                        .take_duration(FALLBACK_TONE_LENGTH)
                        .amplify(0.2),
                );
            }
        }
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| !sink.empty() && !sink.is_paused())
    }
}

impl Drop for RodioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
