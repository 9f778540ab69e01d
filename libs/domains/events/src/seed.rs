//! Seed fixtures for the `events` collection
//!
//! Five demo events with dates relative to the day the store is first
//! initialized: none falls on that day itself, so a fresh store has no
//! "today" events and every seed event is upcoming.

use chrono::{Days, Local, NaiveDate, Utc};

use crate::models::{Category, Event};

/// Default events written when the collection is first initialized,
/// with dates relative to `today`
pub fn default_events(today: NaiveDate) -> Vec<Event> {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
    let next_week = today.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
    let next_month = today.checked_add_days(Days::new(30)).unwrap_or(NaiveDate::MAX);
    let now = Utc::now();

    let fixture = |id: &str,
                   title: &str,
                   description: &str,
                   date: NaiveDate,
                   time: &str,
                   location: &str,
                   category: Category,
                   max_attendees: u32,
                   created_by: &str,
                   attendees: &[&str]| Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date,
        time: time.to_string(),
        location: location.to_string(),
        category,
        max_attendees,
        created_by: created_by.to_string(),
        attendees: attendees.iter().map(|a| a.to_string()).collect(),
        created_at: now,
        updated_at: None,
    };

    vec![
        fixture(
            "1",
            "Community Cleanup Day",
            "Join your neighbors for a day of community service! We'll be cleaning up \
             the local park and surrounding areas. All cleaning supplies will be \
             provided. Please wear comfortable clothes and bring water.",
            tomorrow,
            "09:00",
            "Central Park",
            Category::Volunteer,
            30,
            "admin",
            &["admin", "user1"],
        ),
        fixture(
            "2",
            "Neighborhood Block Party",
            "It's time for our annual block party! Bring your family and favorite dish \
             to share. There will be games for the kids, music, and a chance to connect \
             with your neighbors.",
            next_week,
            "16:00",
            "Oak Street",
            Category::Social,
            100,
            "admin",
            &["admin", "user1", "user2"],
        ),
        fixture(
            "3",
            "Community Garden Workshop",
            "Learn how to grow your own vegetables and herbs! This workshop will cover \
             the basics of gardening, composting, and seasonal planting. Perfect for \
             beginners and experienced gardeners alike.",
            next_week,
            "10:00",
            "Community Garden",
            Category::Education,
            20,
            "user1",
            &["user1", "user2"],
        ),
        fixture(
            "4",
            "Neighborhood Watch Meeting",
            "Monthly neighborhood watch meeting to discuss safety concerns and \
             initiatives. All residents are welcome to attend and contribute to making \
             our community safer.",
            next_month,
            "19:00",
            "Community Center",
            Category::Education,
            50,
            "user2",
            &["user2", "admin"],
        ),
        fixture(
            "5",
            "Community Soccer Game",
            "Weekly pick-up soccer game for all ages and skill levels. Come get some \
             exercise and have fun with your neighbors! No experience necessary.",
            tomorrow,
            "17:00",
            "Neighborhood Field",
            Category::Sports,
            24,
            "user1",
            &["user1"],
        ),
    ]
}

/// Default events relative to the current local date
pub fn default_events_now() -> Vec<Event> {
    default_events(Local::now().date_naive())
}
