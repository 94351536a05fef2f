use std::collections::BTreeSet;
use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// Name of the session cookie holding liked post ids.
pub const LIKED_POSTS_COOKIE: &str = "liked_posts";

/// Posts the visitor liked during the current browser session.
///
/// Read from a session cookie (no `Max-Age`), so it is gone once the browser
/// session ends. Nothing is stored server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedPosts(BTreeSet<i64>);

impl LikedPosts {
    /// Parses a `Cookie` header value; unknown cookies and malformed ids are ignored.
    pub fn from_cookie_header(value: &str) -> Self {
        let ids = value
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .filter(|(name, _)| *name == LIKED_POSTS_COOKIE)
            .flat_map(|(_, ids)| ids.split('.'))
            .filter_map(|id| id.trim().parse::<i64>().ok())
            .collect();
        Self(ids)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.0.contains(&id)
    }

    /// `Set-Cookie` value recording `id` as liked alongside the existing ones.
    pub fn set_cookie_with(&self, id: i64) -> String {
        let mut ids = self.0.clone();
        ids.insert(id);
        let value = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        format!("{LIKED_POSTS_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
    }
}

impl<S> FromRequestParts<S> for LikedPosts
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Browsers may send several Cookie headers over HTTP/2
        let liked = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(LikedPosts::from_cookie_header)
            .fold(LikedPosts::default(), |mut acc, next| {
                acc.0.extend(next.0);
                acc
            });

        Ok(liked)
    }
}
