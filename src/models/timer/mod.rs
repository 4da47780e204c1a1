// Timer model
// Pure value types shared by the countdown units and the UI.

use std::fmt;

/// Largest duration the three fields can express (99:59:59).
pub const MAX_TOTAL_SECONDS: u32 = 99 * 3600 + 59 * 60 + 59;

/// Opaque identity of a countdown unit.
///
/// The value is the creation timestamp in milliseconds, bumped when two
/// timers would otherwise share the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub i64);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing timer ids from wall-clock milliseconds.
#[derive(Debug, Default)]
pub struct TimerIdGenerator {
    last: Option<i64>,
}

impl TimerIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id based on the current time
    pub fn issue(&mut self) -> TimerId {
        self.issue_at(chrono::Utc::now().timestamp_millis())
    }

    /// Next id for the given timestamp; never repeats a previous id even if
    /// the clock stalls or goes backwards.
    pub fn issue_at(&mut self, timestamp_millis: i64) -> TimerId {
        let value = match self.last {
            Some(last) if timestamp_millis <= last => last + 1,
            _ => timestamp_millis,
        };
        self.last = Some(value);
        TimerId(value)
    }
}

/// Lifecycle state of a countdown unit, derived from its remaining time and
/// whether it holds a tick registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// 00:00:00 and not counting down
    Idle,
    /// Time set, not counting down
    Armed,
    /// Counting down once per second
    Running,
}

impl TimerState {
    pub fn from_parts(remaining_seconds: u32, running: bool) -> Self {
        match (remaining_seconds, running) {
            (0, _) => TimerState::Idle,
            (_, true) => TimerState::Running,
            (_, false) => TimerState::Armed,
        }
    }
}

/// One of the three editable duration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    /// Highest value the field accepts
    pub fn max_value(self) -> u32 {
        match self {
            TimeField::Hours => 99,
            TimeField::Minutes | TimeField::Seconds => 59,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        }
    }

    /// Filter applied on every keystroke: digits only, at most two of them,
    /// and an emptied field reads "0".
    pub fn sanitize_input(raw: &str) -> String {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(2).collect();
        if digits.is_empty() {
            "0".to_string()
        } else {
            digits
        }
    }

    /// Resolve committed text to a field value. Non-digits are ignored,
    /// empty text is 0 and anything above the field's range is clamped.
    pub fn normalize(self, raw: &str) -> u32 {
        let value = raw
            .chars()
            .filter_map(|c| c.to_digit(10))
            .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
        value.min(self.max_value())
    }
}

/// A duration split into the three displayed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn from_total_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn get(&self, field: TimeField) -> u32 {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }

    /// Copy with one field replaced
    pub fn with(mut self, field: TimeField, value: u32) -> Self {
        match field {
            TimeField::Hours => self.hours = value,
            TimeField::Minutes => self.minutes = value,
            TimeField::Seconds => self.seconds = value,
        }
        self
    }

    /// Zero-padded two digit text for one field
    pub fn padded(&self, field: TimeField) -> String {
        format!("{:02}", self.get(field))
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_uses_timestamp_when_clock_moves_forward() {
        let mut ids = TimerIdGenerator::new();
        assert_eq!(ids.issue_at(1_000), TimerId(1_000));
        assert_eq!(ids.issue_at(2_500), TimerId(2_500));
    }

    #[test]
    fn test_generator_bumps_on_same_millisecond() {
        let mut ids = TimerIdGenerator::new();
        let first = ids.issue_at(1_000);
        let second = ids.issue_at(1_000);
        let third = ids.issue_at(999);
        assert_eq!(first, TimerId(1_000));
        assert_eq!(second, TimerId(1_001));
        assert_eq!(third, TimerId(1_002));
    }

    #[test]
    fn test_state_from_parts() {
        assert_eq!(TimerState::from_parts(0, false), TimerState::Idle);
        assert_eq!(TimerState::from_parts(0, true), TimerState::Idle);
        assert_eq!(TimerState::from_parts(5, false), TimerState::Armed);
        assert_eq!(TimerState::from_parts(5, true), TimerState::Running);
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(TimeField::sanitize_input("abc5d"), "5");
        assert_eq!(TimeField::sanitize_input(""), "0");
        assert_eq!(TimeField::sanitize_input("150"), "15");
        assert_eq!(TimeField::sanitize_input("0 7"), "07");
    }

    #[test]
    fn test_normalize_clamps_per_field() {
        assert_eq!(TimeField::Minutes.normalize("150"), 59);
        assert_eq!(TimeField::Seconds.normalize("60"), 59);
        assert_eq!(TimeField::Hours.normalize("150"), 99);
        assert_eq!(TimeField::Hours.normalize("42"), 42);
        assert_eq!(TimeField::Hours.normalize("99999999999999999999"), 99);
    }

    #[test]
    fn test_hms_split_and_display() {
        let hms = Hms::from_total_seconds(3 * 3600 + 7 * 60 + 9);
        assert_eq!(hms, Hms::new(3, 7, 9));
        assert_eq!(hms.to_string(), "03:07:09");
        assert_eq!(hms.padded(TimeField::Minutes), "07");
        assert_eq!(Hms::from_total_seconds(MAX_TOTAL_SECONDS), Hms::new(99, 59, 59));
    }

    #[test]
    fn test_with_replaces_one_field() {
        let hms = Hms::new(1, 2, 3).with(TimeField::Minutes, 30);
        assert_eq!(hms, Hms::new(1, 30, 3));
        assert_eq!(hms.total_seconds(), 3600 + 30 * 60 + 3);
    }
}
