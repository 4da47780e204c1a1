// Test fixtures - reusable setup for countdown tests
#![allow(dead_code)]

use online_timer::models::timer::{TimeField, TimerId};
use online_timer::services::audio::NullAudio;
use online_timer::services::countdown::{TickClock, TimerBoard};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Board with one timer and a silent audio backend that records playback
pub fn silent_board() -> (TimerBoard, NullAudio) {
    let audio = NullAudio::new();
    let board = TimerBoard::new(TickClock::default(), Rc::new(audio.clone()), "Timer 1");
    (board, audio)
}

/// Type into each field and commit it, the way the UI does on focus loss
pub fn set_time(board: &mut TimerBoard, id: TimerId, hours: &str, minutes: &str, seconds: &str) {
    let unit = board.unit_mut(id).expect("timer exists");
    for (field, text) in [
        (TimeField::Hours, hours),
        (TimeField::Minutes, minutes),
        (TimeField::Seconds, seconds),
    ] {
        assert!(unit.begin_edit(field), "{} should be editable", field.label());
        unit.update_edit(text);
        unit.commit_edit();
    }
}

/// `start` moved forward by whole seconds
pub fn after(start: Instant, seconds: u64) -> Instant {
    start + Duration::from_secs(seconds)
}
