//! Event records and the shapes used to create and update them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{is_zero, Category, Price};

/// Date format for `Event::date` (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO 8601 calendar date, `None` when malformed
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// A schedulable event in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub category: Category,
    pub price: Price,
    #[serde(default)]
    pub image_url: String,
    /// Seat limit; 0 means unlimited or unknown
    #[serde(default, skip_serializing_if = "is_zero")]
    pub capacity: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tickets_sold: u32,
}

impl Event {
    /// Parsed `date`, `None` if the stored string is not a valid ISO date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Seats left, `None` when capacity is unlimited
    pub fn remaining_seats(&self) -> Option<u32> {
        if self.capacity == 0 {
            None
        } else {
            Some(self.capacity.saturating_sub(self.tickets_sold))
        }
    }

    /// Share of capacity sold, `None` when capacity is unlimited
    pub fn fill_ratio(&self) -> Option<f64> {
        if self.capacity == 0 {
            None
        } else {
            Some(f64::from(self.tickets_sold) / f64::from(self.capacity))
        }
    }
}

/// Event data without an id, as submitted by an organizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub venue: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub tickets_sold: u32,
}

impl NewEvent {
    /// Create event data with the required fields; the rest start empty
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        category: Category,
        price: Price,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date: date.into(),
            time: String::new(),
            location: location.into(),
            venue: None,
            category,
            price,
            image_url: String::new(),
            capacity: 0,
            tickets_sold: 0,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_attendance(mut self, capacity: u32, tickets_sold: u32) -> Self {
        self.capacity = capacity;
        self.tickets_sold = tickets_sold;
        self
    }

    /// Attach the store-assigned id
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            venue: self.venue,
            category: self.category,
            price: self.price,
            image_url: self.image_url,
            capacity: self.capacity,
            tickets_sold: self.tickets_sold,
        }
    }
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets_sold: Option<u32>,
}

impl EventUpdate {
    pub fn is_empty(&self) -> bool {
        *self == EventUpdate::default()
    }

    /// Merge the present fields into `event`
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(venue) = self.venue {
            event.venue = Some(venue);
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(price) = self.price {
            event.price = price;
        }
        if let Some(image_url) = self.image_url {
            event.image_url = image_url;
        }
        if let Some(capacity) = self.capacity {
            event.capacity = capacity;
        }
        if let Some(tickets_sold) = self.tickets_sold {
            event.tickets_sold = tickets_sold;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        NewEvent::new(
            "Tech Conference",
            "2025-06-15",
            "Kathmandu",
            Category::Technology,
            Price::Amount(2500.0),
        )
        .with_time("9:00 AM - 5:00 PM")
        .into_event("1".to_string())
    }

    #[test]
    fn test_update_preserves_absent_fields() {
        let mut event = sample();
        EventUpdate {
            title: Some("Tech Summit".to_string()),
            ..Default::default()
        }
        .apply_to(&mut event);

        assert_eq!(event.title, "Tech Summit");
        assert_eq!(event.location, "Kathmandu");
        assert_eq!(event.time, "9:00 AM - 5:00 PM");
        assert_eq!(event.price, Price::Amount(2500.0));
    }

    #[test]
    fn test_parsed_date() {
        let mut event = sample();
        assert_eq!(event.parsed_date(), NaiveDate::from_ymd_opt(2025, 6, 15));
        event.date = "15/06/2025".to_string();
        assert!(event.parsed_date().is_none());
    }

    #[test]
    fn test_seat_accounting() {
        let event = sample();
        assert_eq!(event.remaining_seats(), None);
        assert_eq!(event.fill_ratio(), None);

        let full = NewEvent::new("Gig", "2025-01-01", "Pokhara", Category::Music, Price::Free)
            .with_attendance(100, 120)
            .into_event("2".to_string());
        assert_eq!(full.remaining_seats(), Some(0));
        assert_eq!(full.fill_ratio(), Some(1.2));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["price"], "2500");
        assert_eq!(json["category"], "Technology");
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("ticketsSold").is_none());
    }
}
