use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEAKER_IMAGE: &str = "/images/speakers/speaker-1.png";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Speaker {
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub portfolio: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub profile: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub photo: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub event_id: Option<i64>,
}

impl Speaker {
    pub fn image(&self) -> &str {
        match self.photo.trim() {
            "" => DEFAULT_SPEAKER_IMAGE,
            photo => photo,
        }
    }

    pub fn role(&self) -> &str {
        self.portfolio.trim()
    }

    pub fn biography(&self) -> &str {
        self.profile.trim()
    }
}
