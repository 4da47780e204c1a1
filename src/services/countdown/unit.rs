use std::time::{Duration, Instant};

use super::fields::FieldEditState;
use super::ticker::{TickClock, TickRegistration};
use crate::models::sound::AlertSound;
use crate::models::timer::{Hms, TimeField, TimerId, TimerState};
use crate::services::audio::AlertPlayer;

/// Reported when a unit's countdown reaches zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerExpired {
    pub id: TimerId,
    pub label: String,
}

/// One independent countdown timer.
///
/// A unit is running exactly when it holds a [`TickRegistration`]; the
/// registration and the audio player are released when the unit is dropped.
pub struct CountdownUnit {
    id: TimerId,
    label: String,
    label_editing: bool,
    remaining_seconds: u32,
    ticker: Option<TickRegistration>,
    sound: &'static AlertSound,
    player: Box<dyn AlertPlayer>,
    alert_playing: bool,
    fields: FieldEditState,
}

impl CountdownUnit {
    pub fn new(id: TimerId, label: impl Into<String>, player: Box<dyn AlertPlayer>) -> Self {
        Self {
            id,
            label: label.into(),
            label_editing: false,
            remaining_seconds: 0,
            ticker: None,
            sound: AlertSound::default_sound(),
            player,
            alert_playing: false,
            fields: FieldEditState::Displaying,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn state(&self) -> TimerState {
        TimerState::from_parts(self.remaining_seconds, self.is_running())
    }

    pub fn sound(&self) -> &'static AlertSound {
        self.sound
    }

    pub fn alert_playing(&self) -> bool {
        self.alert_playing
    }

    /// Remaining time split into the three fields
    pub fn hms(&self) -> Hms {
        Hms::from_total_seconds(self.remaining_seconds)
    }

    pub fn field_state(&self) -> &FieldEditState {
        &self.fields
    }

    /// Text shown in one duration field: the raw buffer while that field is
    /// being edited, otherwise the padded derived value.
    pub fn field_text(&self, field: TimeField) -> String {
        self.fields.text(field, self.hms())
    }

    pub fn can_start(&self) -> bool {
        self.state() == TimerState::Armed
    }

    /// Begin counting down. Only an armed timer can start; 00:00:00 and an
    /// already running timer are left untouched.
    pub fn start(&mut self, clock: &TickClock, now: Instant) -> bool {
        if self.fields.editing_field().is_some() {
            self.commit_edit();
        }
        if !self.can_start() {
            log::debug!("Ignoring start for timer {} in state {:?}", self.id, self.state());
            return false;
        }

        self.ticker = Some(clock.register(now));
        log::info!(
            "Started timer {} ('{}') at {}",
            self.id,
            self.label,
            self.hms()
        );
        true
    }

    /// Stop counting down, keeping the remaining time
    pub fn pause(&mut self) -> bool {
        if self.ticker.take().is_none() {
            return false;
        }
        log::info!("Paused timer {} at {}", self.id, self.hms());
        true
    }

    /// Apply every tick that has come due. Returns the expiry when the
    /// countdown reaches zero; later ticks are discarded.
    pub fn advance(&mut self, now: Instant) -> Option<TimerExpired> {
        let due = self.ticker.as_mut()?.due_ticks(now);
        if due == 0 {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(due);
        if self.remaining_seconds > 0 {
            return None;
        }

        self.ticker = None;
        self.player.play_from_start(self.sound);
        self.alert_playing = true;
        log::info!("Timer {} ('{}') expired", self.id, self.label);

        Some(TimerExpired {
            id: self.id,
            label: self.label.clone(),
        })
    }

    /// Wait until the next tick is due; `None` when not running
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker
            .as_ref()
            .map(|ticker| ticker.time_until_next(now))
    }

    /// Back to 00:00:00 from any state, silencing the alert
    pub fn reset(&mut self) {
        self.ticker = None;
        self.remaining_seconds = 0;
        self.fields = FieldEditState::Displaying;
        self.player.stop();
        self.alert_playing = false;
        log::info!("Reset timer {}", self.id);
    }

    /// Focus a duration field. Not allowed while running; switching from
    /// another field commits that one first.
    pub fn begin_edit(&mut self, field: TimeField) -> bool {
        if self.is_running() {
            return false;
        }
        match self.fields.editing_field() {
            Some(current) if current == field => return true,
            Some(_) => self.commit_edit(),
            None => {}
        }
        self.fields = FieldEditState::begin(self.hms(), field);
        true
    }

    /// Keystrokes into the focused field
    pub fn update_edit(&mut self, input: &str) {
        self.fields.update(input);
    }

    /// Field lost focus: recompute the remaining time from all three fields
    pub fn commit_edit(&mut self) {
        if let Some(hms) = self.fields.commit() {
            self.remaining_seconds = hms.total_seconds();
            log::debug!("Timer {} set to {}", self.id, hms);
        }
    }

    /// Start or stop a manual preview of the selected sound
    pub fn toggle_preview(&mut self) {
        if self.alert_playing {
            self.player.stop();
            self.alert_playing = false;
            log::debug!("Stopped sound on timer {}", self.id);
        } else {
            self.player.play_from_start(self.sound);
            self.alert_playing = true;
            log::debug!("Previewing '{}' on timer {}", self.sound.display_name, self.id);
        }
    }

    /// Change the alert sound. A preview already playing keeps going.
    pub fn select_sound(&mut self, id: &str) {
        self.sound = AlertSound::find_or_default(id);
        log::debug!("Timer {} alert sound: {}", self.id, self.sound.id);
    }

    /// Pick up playback that finished on its own
    pub fn sync_audio(&mut self) {
        self.alert_playing = self.player.is_playing();
    }

    pub fn is_label_editing(&self) -> bool {
        self.label_editing
    }

    pub fn begin_label_edit(&mut self) {
        self.label_editing = true;
    }

    pub fn label_mut(&mut self) -> &mut String {
        &mut self.label
    }

    pub fn finish_label_edit(&mut self) {
        self.label_editing = false;
    }
}

impl Drop for CountdownUnit {
    fn drop(&mut self) {
        if self.ticker.is_some() {
            log::debug!("Timer {} dropped while running", self.id);
        }
    }
}
