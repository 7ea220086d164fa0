// Appointment model
// A booked counselling session occupying 30-minute slots on a single day.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Fixed set of counselling session types offered by the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    Academic,
    Career,
    Personal,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [
        SessionType::Academic,
        SessionType::Career,
        SessionType::Personal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Academic => "Academic Counselling",
            Self::Career => "Career Guidance",
            Self::Personal => "Personal Development",
        }
    }
}

/// A confirmed appointment. The time interval is half-open `[start, end)`
/// with both endpoints aligned to 30-minute boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub title: String,
    pub day: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub counselor_id: i64,
    pub counselor_name: String,
    pub session_type: SessionType,
    pub notes: Option<String>,
}

impl Appointment {
    pub fn builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
    }

    /// Start of the interval in minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    /// Exclusive end of the interval in minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        self.end.hour() * 60 + self.end.minute()
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes() - self.start_minutes()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Appointment title cannot be empty".to_string());
        }
        if self.end <= self.start {
            return Err("Appointment end time must be after start time".to_string());
        }
        for (label, time) in [("start", self.start), ("end", self.end)] {
            if time.minute() % 30 != 0 || time.second() != 0 {
                return Err(format!(
                    "Appointment {} time must fall on a 30-minute boundary",
                    label
                ));
            }
        }
        Ok(())
    }
}

/// An unsaved appointment candidate produced by a drag gesture. Carries no id
/// and no resolved counsellor name; both are assigned on save.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub day: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub counselor_id: i64,
}

impl AppointmentDraft {
    pub fn into_appointment(
        self,
        id: i64,
        counselor_name: String,
        title: String,
        session_type: SessionType,
        notes: Option<String>,
    ) -> Result<Appointment, String> {
        let appointment = Appointment {
            id,
            title,
            day: self.day,
            start: self.start,
            end: self.end,
            counselor_id: self.counselor_id,
            counselor_name,
            session_type,
            notes,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}

/// Builder for constructing appointments with validation.
pub struct AppointmentBuilder {
    id: Option<i64>,
    title: Option<String>,
    day: Option<NaiveDate>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    counselor_id: Option<i64>,
    counselor_name: Option<String>,
    session_type: SessionType,
    notes: Option<String>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            day: None,
            start: None,
            end: None,
            counselor_id: None,
            counselor_name: None,
            session_type: SessionType::Academic,
            notes: None,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    pub fn start(mut self, start: NaiveTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn counselor(mut self, id: i64, name: impl Into<String>) -> Self {
        self.counselor_id = Some(id);
        self.counselor_name = Some(name.into());
        self
    }

    pub fn session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<Appointment, String> {
        let appointment = Appointment {
            id: self.id.ok_or("Appointment id is required")?,
            title: self.title.ok_or("Appointment title is required")?,
            day: self.day.ok_or("Appointment day is required")?,
            start: self.start.ok_or("Appointment start time is required")?,
            end: self.end.ok_or("Appointment end time is required")?,
            counselor_id: self.counselor_id.ok_or("Counsellor is required")?,
            counselor_name: self.counselor_name.ok_or("Counsellor is required")?,
            session_type: self.session_type,
            notes: self.notes,
        };
        appointment.validate()?;
        Ok(appointment)
    }
}

impl Default for AppointmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
