use std::collections::HashMap;

use crate::models::TeamMember;

pub const DEFAULT_AVATAR: &str = "/images/default-avatar.png";
pub const EXECUTIVE_TEAM: &str = "Executive Team";
pub const CONVENER: &str = "Convener";

/// Buckets shown on the team page, in order.
pub const DISPLAY_ORDER: [&str; 3] = ["Advisory Board", "Patron", EXECUTIVE_TEAM];

#[derive(Debug, Clone)]
pub struct TeamGroup {
    pub title: &'static str,
    pub members: Vec<TeamMember>,
}

/// Groups members by type for display. Conveners join the Executive Team and
/// lead it; buckets outside [`DISPLAY_ORDER`] are dropped.
pub fn group_team(members: Vec<TeamMember>) -> Vec<TeamGroup> {
    let mut buckets: HashMap<String, Vec<TeamMember>> = HashMap::new();

    for member in members {
        let bucket = match member.member_type.trim() {
            "" => "Other",
            CONVENER => EXECUTIVE_TEAM,
            other => other,
        };
        buckets.entry(bucket.to_string()).or_default().push(member);
    }

    if let Some(executives) = buckets.get_mut(EXECUTIVE_TEAM) {
        // stable: conveners first, everyone else keeps fetch order
        executives.sort_by_key(|m| !m.is_convener());
    }

    DISPLAY_ORDER
        .iter()
        .filter_map(|title| {
            buckets
                .remove(*title)
                .filter(|members| !members.is_empty())
                .map(|members| TeamGroup { title, members })
        })
        .collect()
}

/// Resolves a team photo to a URL: absolute URLs pass through, bare file
/// names live under the API's upload directory.
pub fn team_photo_url(photo: &str, asset_origin: &str) -> String {
    let photo = photo.trim();
    if photo.is_empty() {
        DEFAULT_AVATAR.to_string()
    } else if photo.starts_with("http") {
        photo.to_string()
    } else {
        format!(
            "{}/static/uploads/team/{}",
            asset_origin.trim_end_matches('/'),
            photo.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: i64, member_type: &str) -> TeamMember {
        TeamMember {
            team_id: id,
            first_name: format!("First{id}"),
            last_name: "Last".to_string(),
            member_type: member_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_in_display_order_with_convener_first() {
        let members = vec![
            member(1, "Executive Team"),
            member(2, "Patron"),
            member(3, "Convener"),
            member(4, "Executive Team"),
            member(5, "Advisory Board"),
            member(6, "Volunteer"),
            member(7, ""),
        ];

        let groups = group_team(members);
        let titles: Vec<&str> = groups.iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Advisory Board", "Patron", "Executive Team"]);

        let executives: Vec<i64> = groups[2].members.iter().map(|m| m.team_id).collect();
        assert_eq!(executives, vec![3, 1, 4]);
    }

    #[test]
    fn missing_buckets_are_skipped() {
        let groups = group_team(vec![member(1, "Patron")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Patron");
        assert!(group_team(Vec::new()).is_empty());
    }

    #[test]
    fn photo_urls() {
        let origin = "http://localhost:5000";
        assert_eq!(team_photo_url("", origin), DEFAULT_AVATAR);
        assert_eq!(team_photo_url("https://cdn.x/a.jpg", origin), "https://cdn.x/a.jpg");
        assert_eq!(
            team_photo_url("ada.jpg", origin),
            "http://localhost:5000/static/uploads/team/ada.jpg"
        );
    }
}
