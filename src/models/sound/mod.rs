// Alert sound catalog
// Fixed list of bundled sounds a timer can play on expiry.

/// One selectable alert sound
#[derive(Debug, PartialEq, Eq)]
pub struct AlertSound {
    /// Stable identifier kept in memory for the selection
    pub id: &'static str,
    /// Name shown in the selector
    pub display_name: &'static str,
    /// File inside the sounds directory
    pub file_name: &'static str,
}

pub const ALERT_SOUNDS: [AlertSound; 10] = [
    AlertSound {
        id: "alarm_clock",
        display_name: "Alarm Clock",
        file_name: "alarm_clock.mp3",
    },
    AlertSound {
        id: "iphone_alarm",
        display_name: "iPhone Alarm",
        file_name: "iphone_alarm.mp3",
    },
    AlertSound {
        id: "morning_flower",
        display_name: "Morning Flower",
        file_name: "morning_flower.mp3",
    },
    AlertSound {
        id: "alarm",
        display_name: "Alarm",
        file_name: "alarm.mp3",
    },
    AlertSound {
        id: "clock_alarm_new_s4",
        display_name: "Clock Alarm S4",
        file_name: "clock_alarm_new_s4.mp3",
    },
    AlertSound {
        id: "good_morning",
        display_name: "Good Morning",
        file_name: "good_morning.mp3",
    },
    AlertSound {
        id: "morning_alarm",
        display_name: "Morning Alarm",
        file_name: "morning_alarm.mp3",
    },
    AlertSound {
        id: "raining_wake_up",
        display_name: "Raining Wake Up",
        file_name: "raining_wake_up.mp3",
    },
    AlertSound {
        id: "samsung_galaxy_s3",
        display_name: "Samsung Galaxy S3",
        file_name: "samsung_galaxy_s3.mp3",
    },
    AlertSound {
        id: "soft_morning_alarm",
        display_name: "Soft Morning Alarm",
        file_name: "soft_morning_alarm.mp3",
    },
];

impl AlertSound {
    pub fn all() -> &'static [AlertSound] {
        &ALERT_SOUNDS
    }

    /// The sound new timers start with
    pub fn default_sound() -> &'static AlertSound {
        &ALERT_SOUNDS[0]
    }

    pub fn find(id: &str) -> Option<&'static AlertSound> {
        ALERT_SOUNDS.iter().find(|sound| sound.id == id)
    }

    /// Look up by id, falling back to the first preset for unknown ids
    pub fn find_or_default(id: &str) -> &'static AlertSound {
        Self::find(id).unwrap_or_else(Self::default_sound)
    }
}
