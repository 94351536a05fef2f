use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::Speaker;

impl ApiClient {
    pub async fn get_all_speakers(&self) -> Result<Vec<Speaker>, ApiError> {
        self.get_data("/public/speakers/get-all", "Failed to fetch speakers").await
    }

    pub async fn get_speaker_by_id(&self, id: i64) -> Result<Speaker, ApiError> {
        self.get_data(&format!("/public/speakers/get-one/{id}"), "Failed to fetch speaker")
            .await
    }
}
