use chrono::{Datelike, Local, Timelike, Weekday};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One wall-clock reading, reduced to what the display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    pub hours: u32,
    pub minutes: u32,
    pub weekday: Weekday,
}

/// Preformatted clock text, e.g. `09:05` / `Tue`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    pub time: String,
    pub day: &'static str,
}

impl ClockSample {
    pub fn from_datetime<T: Datelike + Timelike>(at: &T) -> Self {
        Self {
            hours: at.hour(),
            minutes: at.minute(),
            weekday: at.weekday(),
        }
    }

    /// Reads the local wall clock.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    pub fn day_label(&self) -> &'static str {
        DAY_LABELS[self.weekday.num_days_from_sunday() as usize]
    }

    pub fn display(&self) -> ClockDisplay {
        ClockDisplay {
            time: self.time_label(),
            day: self.day_label(),
        }
    }
}
