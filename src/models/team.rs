use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMember {
    pub team_id: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub member_type: String,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub photo: String,
    #[serde(default)]
    pub date_created: Option<String>,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn portfolio(&self) -> Option<&str> {
        super::non_empty(&self.portfolio)
    }

    pub fn is_convener(&self) -> bool {
        self.member_type == "Convener"
    }
}
