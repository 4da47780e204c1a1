use std::rc::Rc;
use std::time::{Duration, Instant};

use super::ticker::TickClock;
use super::unit::{CountdownUnit, TimerExpired};
use crate::models::timer::{TimerId, TimerIdGenerator};
use crate::services::audio::AudioBackend;

/// Ordered collection of countdown units, one per timer identity.
pub struct TimerBoard {
    units: Vec<CountdownUnit>,
    ids: TimerIdGenerator,
    clock: TickClock,
    audio: Rc<dyn AudioBackend>,
    default_label: String,
}

impl TimerBoard {
    /// Board holding a single idle timer
    pub fn new(
        clock: TickClock,
        audio: Rc<dyn AudioBackend>,
        default_label: impl Into<String>,
    ) -> Self {
        let mut board = Self {
            units: Vec::new(),
            ids: TimerIdGenerator::new(),
            clock,
            audio,
            default_label: default_label.into(),
        };
        board.add();
        board
    }

    pub fn units(&self) -> &[CountdownUnit] {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut [CountdownUnit] {
        &mut self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn ids(&self) -> Vec<TimerId> {
        self.units.iter().map(CountdownUnit::id).collect()
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn unit(&self, id: TimerId) -> Option<&CountdownUnit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub fn unit_mut(&mut self, id: TimerId) -> Option<&mut CountdownUnit> {
        self.units.iter_mut().find(|unit| unit.id() == id)
    }

    /// Append a new idle timer
    pub fn add(&mut self) -> TimerId {
        let id = self.ids.issue();
        let player = self.audio.create_player();
        self.units
            .push(CountdownUnit::new(id, self.default_label.clone(), player));
        log::info!("Added timer {} ({} total)", id, self.units.len());
        id
    }

    /// Remove a timer, cancelling its ticks and silencing its sound.
    /// Unknown ids are ignored.
    pub fn delete(&mut self, id: TimerId) -> bool {
        let Some(index) = self.units.iter().position(|unit| unit.id() == id) else {
            log::debug!("Delete requested for unknown timer {}", id);
            return false;
        };
        self.units.remove(index);
        log::info!("Deleted timer {} ({} left)", id, self.units.len());
        true
    }

    /// Start one timer against the board's clock
    pub fn start(&mut self, id: TimerId, now: Instant) -> bool {
        let Some(index) = self.units.iter().position(|unit| unit.id() == id) else {
            return false;
        };
        self.units[index].start(&self.clock, now)
    }

    /// Deliver due ticks to every running timer
    pub fn advance(&mut self, now: Instant) -> Vec<TimerExpired> {
        self.units
            .iter_mut()
            .filter_map(|unit| unit.advance(now))
            .collect()
    }

    /// Shortest wait until any running timer needs another tick
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        self.units
            .iter()
            .filter_map(|unit| unit.time_until_next_tick(now))
            .min()
    }

    pub fn sync_audio(&mut self) {
        for unit in &mut self.units {
            unit.sync_audio();
        }
    }

    pub fn any_alert_playing(&self) -> bool {
        self.units.iter().any(CountdownUnit::alert_playing)
    }

    /// Stop every playing alert or preview; returns how many were stopped
    pub fn silence_alerts(&mut self) -> usize {
        let mut silenced = 0;
        for unit in self.units.iter_mut().filter(|unit| unit.alert_playing()) {
            unit.toggle_preview();
            silenced += 1;
        }
        silenced
    }

    pub fn active_registrations(&self) -> usize {
        self.clock.active_registrations()
    }

    /// Drop every timer
    pub fn clear(&mut self) {
        let count = self.units.len();
        self.units.clear();
        log::info!("Released {} timer(s)", count);
    }
}
