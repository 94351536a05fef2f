//! Filtering, sorting and "load more" pagination over already-fetched lists.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::{BlogPost, Event, Speaker};
use crate::services::dates::parse_api_date;

pub const BLOG_PAGE_SIZE: usize = 6;
pub const SPEAKER_PAGE_SIZE: usize = 8;
pub const EVENT_PAGE_SIZE: usize = 6;

pub const ALL: &str = "All";

/// A filter value where `All` bypasses filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: FromStr> Filter<T> {
    /// Missing, blank, `All` or unparsable input all mean no filtering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Filter::All,
            Some(value) if value.eq_ignore_ascii_case(ALL) => Filter::All,
            Some(value) => value.parse().map(Filter::Only).unwrap_or(Filter::All),
        }
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: Option<&T>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => value == Some(wanted),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeakerSort {
    #[default]
    Recent,
    Alphabetical,
    Year,
}

impl SpeakerSort {
    pub const ALL: [SpeakerSort; 3] = [SpeakerSort::Recent, SpeakerSort::Alphabetical, SpeakerSort::Year];

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("alpha") | Some("alphabetical") => SpeakerSort::Alphabetical,
            Some("year") => SpeakerSort::Year,
            _ => SpeakerSort::Recent,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SpeakerSort::Recent => "recent",
            SpeakerSort::Alphabetical => "alpha",
            SpeakerSort::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeakerSort::Recent => "Most Recent",
            SpeakerSort::Alphabetical => "A-Z",
            SpeakerSort::Year => "Year",
        }
    }
}

/// Event facts a speaker card needs: title and year.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    events: HashMap<i64, (String, Option<i32>)>,
}

impl EventIndex {
    pub fn new(events: &[Event]) -> Self {
        Self {
            events: events
                .iter()
                .map(|e| (e.id, (e.title.clone(), e.year())))
                .collect(),
        }
    }

    pub fn title(&self, event_id: Option<i64>) -> Option<&str> {
        event_id
            .and_then(|id| self.events.get(&id))
            .map(|(title, _)| title.as_str())
    }

    pub fn year(&self, event_id: Option<i64>) -> Option<i32> {
        event_id
            .and_then(|id| self.events.get(&id))
            .and_then(|(_, year)| *year)
    }

    /// Distinct event years, most recent first.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.events.values().filter_map(|(_, y)| *y).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeakerQuery {
    pub event: Filter<i64>,
    pub year: Filter<i32>,
    pub sort: SpeakerSort,
}

/// Applies the event and year filters, then the requested sort. Sorting is
/// stable so ties keep fetch order.
pub fn filter_speakers(speakers: Vec<Speaker>, query: &SpeakerQuery, index: &EventIndex) -> Vec<Speaker> {
    let mut speakers: Vec<Speaker> = speakers
        .into_iter()
        .filter(|s| query.event.matches(s.event_id.as_ref()))
        .filter(|s| query.year.matches(index.year(s.event_id).as_ref()))
        .collect();

    match query.sort {
        SpeakerSort::Recent => speakers.sort_by(|a, b| {
            descending_missing_last(
                a.date_created.as_deref().and_then(parse_api_date),
                b.date_created.as_deref().and_then(parse_api_date),
            )
        }),
        SpeakerSort::Alphabetical => speakers.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SpeakerSort::Year => speakers.sort_by(|a, b| {
            descending_missing_last(index.year(a.event_id), index.year(b.event_id))
        }),
    }

    speakers
}

pub fn filter_posts_by_category(posts: Vec<BlogPost>, category: &Filter<String>) -> Vec<BlogPost> {
    posts
        .into_iter()
        .filter(|p| match category {
            Filter::All => true,
            Filter::Only(name) => p.category_label() == name,
        })
        .collect()
}

/// Case-insensitive ordering, falling back to the raw strings so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn descending_missing_last<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// First `shown` items of a filtered list.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub shown: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// `shown` of `None` (or zero) means the first page.
    pub fn slice(mut items: Vec<T>, shown: Option<usize>, page_size: usize) -> Self {
        let total = items.len();
        let shown = shown.filter(|n| *n > 0).unwrap_or(page_size).min(total.max(page_size));
        items.truncate(shown);
        Self {
            items,
            total,
            shown,
            page_size,
        }
    }

    pub fn has_more(&self) -> bool {
        self.total > self.shown
    }

    pub fn next_shown(&self) -> usize {
        self.shown + self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
