use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::TeamMember;

impl ApiClient {
    pub async fn get_all_team_members(&self) -> Result<Vec<TeamMember>, ApiError> {
        self.get_data("/public/team/get-all", "Failed to fetch team members").await
    }
}
