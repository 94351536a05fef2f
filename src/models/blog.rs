use serde::{Deserialize, Serialize};

pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub photo: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub views: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub likes: u64,
    #[serde(default)]
    pub date_created: Option<String>,
}

impl BlogPost {
    /// Category used for filtering and related posts.
    pub fn category_label(&self) -> &str {
        super::non_empty(&self.category).unwrap_or(UNCATEGORIZED)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_counters_default_to_zero() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id":1,"title":"Hello","photo":"","content":"<p>x</p>","author":"Ada",
                "category":null,"tags":null,"views":null,"date_created":null}"#,
        )
        .unwrap();

        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert!(post.tags.is_empty());
        assert_eq!(post.category_label(), UNCATEGORIZED);
    }

    #[test]
    fn category_label_uses_server_category() {
        let post = BlogPost {
            category: Some("Innovation".to_string()),
            ..Default::default()
        };
        assert_eq!(post.category_label(), "Innovation");
    }
}
