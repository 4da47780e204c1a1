use super::{AlertPlayer, AudioBackend};
use crate::models::sound::AlertSound;
use std::cell::RefCell;
use std::rc::Rc;

/// What a silent player was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Play {
        player: usize,
        sound_id: &'static str,
    },
    Stop {
        player: usize,
    },
}

/// Backend without an output device. Players keep their playing flag until
/// stopped and record every request in a shared history.
#[derive(Debug, Default, Clone)]
pub struct NullAudio {
    history: Rc<RefCell<Vec<PlaybackEvent>>>,
    players_created: Rc<RefCell<usize>>,
}

impl NullAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<PlaybackEvent> {
        self.history.borrow().clone()
    }

    /// Number of `Play` requests recorded so far
    pub fn play_count(&self) -> usize {
        self.history
            .borrow()
            .iter()
            .filter(|event| matches!(event, PlaybackEvent::Play { .. }))
            .count()
    }
}

impl AudioBackend for NullAudio {
    fn create_player(&self) -> Box<dyn AlertPlayer> {
        let mut created = self.players_created.borrow_mut();
        let index = *created;
        *created += 1;
        Box::new(NullPlayer {
            index,
            playing: false,
            history: Rc::clone(&self.history),
        })
    }
}

struct NullPlayer {
    index: usize,
    playing: bool,
    history: Rc<RefCell<Vec<PlaybackEvent>>>,
}

impl AlertPlayer for NullPlayer {
    fn play_from_start(&mut self, sound: &'static AlertSound) {
        self.playing = true;
        self.history.borrow_mut().push(PlaybackEvent::Play {
            player: self.index,
            sound_id: sound.id,
        });
    }

    fn stop(&mut self) {
        if self.playing {
            self.playing = false;
            self.history
                .borrow_mut()
                .push(PlaybackEvent::Stop { player: self.index });
        }
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Drop for NullPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
