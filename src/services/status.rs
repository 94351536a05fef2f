use chrono::{DateTime, Utc};

use crate::models::Event;
use crate::services::dates::parse_api_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
    /// No flags and no usable date.
    Undated,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Past Event",
            EventStatus::Undated => "Event",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "badge badge-upcoming",
            EventStatus::Past => "badge badge-past",
            EventStatus::Undated => "badge",
        }
    }
}

/// Server flags win; otherwise the best available date is compared with `now`.
pub fn classify(event: &Event, now: DateTime<Utc>) -> EventStatus {
    if event.is_upcoming == Some(true) {
        return EventStatus::Upcoming;
    }
    if event.is_past == Some(true) {
        return EventStatus::Past;
    }

    match event.best_date().and_then(parse_api_date) {
        Some(date) if date > now => EventStatus::Upcoming,
        Some(_) => EventStatus::Past,
        None => EventStatus::Undated,
    }
}

/// Splits events into (upcoming, past) keeping fetch order. Undated events
/// are listed with the past ones.
pub fn partition_events(events: Vec<Event>, now: DateTime<Utc>) -> (Vec<Event>, Vec<Event>) {
    events
        .into_iter()
        .partition(|event| classify(event, now) == EventStatus::Upcoming)
}
