pub mod blog;
pub mod event;
pub mod partner;
pub mod speaker;
pub mod team;

pub use blog::{BlogCategory, BlogPost};
pub use event::Event;
pub use partner::Partner;
pub use speaker::Speaker;
pub use team::TeamMember;

use serde::{Deserialize, Deserializer};

/// The API sends `null` for text fields it has no value for; treat it as empty.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalises optional strings so that `""` and whitespace behave like `None`.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
