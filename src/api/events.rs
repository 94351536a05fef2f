use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::Event;

impl ApiClient {
    pub async fn get_all_events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_data("/public/events/get-all", "Failed to fetch events").await
    }

    pub async fn get_event_by_id(&self, id: i64) -> Result<Event, ApiError> {
        self.get_data(&format!("/public/events/get-one/{id}"), "Failed to fetch event")
            .await
    }
}
