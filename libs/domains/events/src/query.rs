//! Event Query Engine
//!
//! Pure transformations over an event snapshot: no persistence, no side
//! effects. Date buckets compare at calendar-date granularity against an
//! explicit `today`, so every function here is deterministic and directly
//! testable; callers pass `Local::now().date_naive()` for live views.

use chrono::{Days, Months, NaiveDate};
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::models::{Category, Event};

/// Named relative-time partition used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DateBucket {
    /// Event date >= today
    Upcoming,
    /// Event date < today
    Past,
    /// Within [today, tomorrow)
    Today,
    /// Within [today, today + 7 days)
    Week,
    /// Within [today, today + 1 calendar month)
    Month,
}

/// Sort order for event lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortKey {
    DateAsc,
    DateDesc,
    TitleAsc,
    TitleDesc,
    /// Descending attendee count
    Popularity,
}

/// Combined filter/sort request, applied in a fixed order by [`compose`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    pub category: Option<Category>,
    pub search_term: Option<String>,
    pub date_bucket: Option<DateBucket>,
    pub sort: Option<SortKey>,
}

/// Keep events of one category; `None` keeps everything
pub fn filter_by_category(events: &[Event], category: Option<Category>) -> Vec<Event> {
    match category {
        None => events.to_vec(),
        Some(category) => events
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect(),
    }
}

/// Case-insensitive substring search over title, description, and location.
/// A blank term keeps everything.
pub fn search_text(events: &[Event], term: &str) -> Vec<Event> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return events.to_vec();
    }

    events
        .iter()
        .filter(|e| {
            e.title.to_lowercase().contains(&term)
                || e.description.to_lowercase().contains(&term)
                || e.location.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Keep events whose date falls in `bucket`, relative to `today`
pub fn filter_by_date_bucket(events: &[Event], bucket: DateBucket, today: NaiveDate) -> Vec<Event> {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
    let next_week = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
    let next_month = today
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);

    let keep = |date: NaiveDate| match bucket {
        DateBucket::Upcoming => date >= today,
        DateBucket::Past => date < today,
        DateBucket::Today => date >= today && date < tomorrow,
        DateBucket::Week => date >= today && date < next_week,
        DateBucket::Month => date >= today && date < next_month,
    };

    events.iter().filter(|e| keep(e.date)).cloned().collect()
}

/// Sort a copy of `events` by `key`. Stable: events with equal keys keep
/// their relative order.
pub fn sort_events(events: &[Event], key: SortKey) -> Vec<Event> {
    let mut sorted = events.to_vec();

    match key {
        SortKey::DateAsc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::TitleAsc => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            sorted.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortKey::Popularity => sorted.sort_by(|a, b| b.attendees.len().cmp(&a.attendees.len())),
    }

    sorted
}

/// Apply a combined query: category, then text search, then date bucket,
/// then sort. The order is fixed; each stage feeds the next.
pub fn compose(events: &[Event], query: &EventQuery, today: NaiveDate) -> Vec<Event> {
    let mut result = filter_by_category(events, query.category);

    if let Some(ref term) = query.search_term {
        result = search_text(&result, term);
    }
    if let Some(bucket) = query.date_bucket {
        result = filter_by_date_bucket(&result, bucket, today);
    }
    if let Some(key) = query.sort {
        result = sort_events(&result, key);
    }

    result
}

/// Upcoming events, soonest first, optionally truncated to `limit`
pub fn upcoming(events: &[Event], today: NaiveDate, limit: Option<usize>) -> Vec<Event> {
    let filtered = filter_by_date_bucket(events, DateBucket::Upcoming, today);
    let mut sorted = sort_events(&filtered, SortKey::DateAsc);

    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

/// Past events, most recent first
pub fn past(events: &[Event], today: NaiveDate) -> Vec<Event> {
    let filtered = filter_by_date_bucket(events, DateBucket::Past, today);
    sort_events(&filtered, SortKey::DateDesc)
}

/// Events created by one user
pub fn created_by(events: &[Event], user_id: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.created_by == user_id)
        .cloned()
        .collect()
}

/// Events whose roster contains one user
pub fn attending(events: &[Event], user_id: &str) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.has_attendee(user_id))
        .cloned()
        .collect()
}

/// Long-form date for display, e.g. `September 12, 2026`.
/// One authoritative formatter for the presentation layer.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
