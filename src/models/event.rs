use serde::{Deserialize, Serialize};

pub const DEFAULT_EVENT_IMAGE: &str = "/images/events/event-1.png";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_category: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub image: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub is_past: Option<bool>,
    #[serde(default)]
    pub is_upcoming: Option<bool>,
}

impl Event {
    /// Best date to show and compare against: start time, then event date, then creation date.
    pub fn best_date(&self) -> Option<&str> {
        super::non_empty(&self.start_time)
            .or_else(|| super::non_empty(&self.event_date))
            .or_else(|| super::non_empty(&self.date_created))
    }

    pub fn image_url(&self) -> &str {
        match self.image.trim() {
            "" => DEFAULT_EVENT_IMAGE,
            image => image,
        }
    }

    pub fn category(&self) -> Option<&str> {
        super::non_empty(&self.event_category)
    }

    /// Year the event takes place, derived from [`Event::best_date`].
    pub fn year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.best_date()
            .and_then(crate::services::dates::parse_api_date)
            .map(|d| d.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_deserialize_to_defaults() {
        let event: Event = serde_json::from_str(
            r#"{"id":4,"title":"TEDxMaitama 2024","description":null,"location":null,
                "image":null,"start_time":null,"event_date":"2024-11-16","date_created":null}"#,
        )
        .unwrap();

        assert_eq!(event.id, 4);
        assert_eq!(event.description, "");
        assert_eq!(event.image_url(), DEFAULT_EVENT_IMAGE);
        assert_eq!(event.best_date(), Some("2024-11-16"));
        assert_eq!(event.year(), Some(2024));
        assert_eq!(event.is_upcoming, None);
    }

    #[test]
    fn best_date_prefers_start_time() {
        let event = Event {
            start_time: Some("2025-03-01T09:00:00Z".to_string()),
            event_date: Some("2025-02-01".to_string()),
            date_created: Some("2024-12-01".to_string()),
            ..Default::default()
        };
        assert_eq!(event.best_date(), Some("2025-03-01T09:00:00Z"));
    }

    #[test]
    fn blank_dates_are_skipped() {
        let event = Event {
            start_time: Some("  ".to_string()),
            date_created: Some("2024-12-01".to_string()),
            ..Default::default()
        };
        assert_eq!(event.best_date(), Some("2024-12-01"));
    }
}
