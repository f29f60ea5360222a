//! Sample catalogue used to seed a fresh store

use crate::types::{Category, NewEvent, Price};

/// The demo catalogue, in insertion order
pub fn sample_events() -> Vec<NewEvent> {
    vec![
        NewEvent::new(
            "Tech Conference 2025",
            "2025-06-15",
            "Kathmandu Convention Center",
            Category::Technology,
            Price::Amount(2500.0),
        )
        .with_time("9:00 AM - 5:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1540575467063-178a50c2df87")
        .with_attendance(200, 125),
        NewEvent::new(
            "Music Festival Weekend",
            "2025-07-22",
            "Tundikhel Ground, Kathmandu",
            Category::Music,
            Price::Amount(1200.0),
        )
        .with_time("12:00 PM - 11:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3")
        .with_attendance(400, 350),
        NewEvent::new(
            "Startup Networking Mixer",
            "2025-06-05",
            "Downtown Innovation Hub",
            Category::Networking,
            Price::Free,
        )
        .with_time("6:30 PM - 9:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1556761175-5973dc0f32e7")
        .with_attendance(80, 75),
        NewEvent::new(
            "Charity Run for Education",
            "2025-08-10",
            "City Park",
            Category::Sports,
            Price::Amount(25.0),
        )
        .with_time("7:00 AM - 11:00 AM")
        .with_image_url("https://images.unsplash.com/photo-1547483238-2cbf881a559f")
        .with_attendance(500, 210),
        NewEvent::new(
            "Art Exhibition Opening",
            "2025-06-30",
            "Modern Art Gallery",
            Category::Art,
            Price::Amount(15.0),
        )
        .with_time("5:00 PM - 9:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1460661419201-fd4cecdf8a8b")
        .with_attendance(120, 40),
        NewEvent::new(
            "Food & Wine Festival",
            "2025-07-10",
            "Waterfront Plaza",
            Category::Food,
            Price::Amount(75.0),
        )
        .with_time("12:00 PM - 8:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1527269534026-c86f4009eace")
        .with_attendance(300, 290),
        NewEvent::new(
            "Digital Marketing Workshop",
            "2025-06-20",
            "Business Center Downtown",
            Category::Business,
            Price::Amount(199.0),
        )
        .with_time("10:00 AM - 4:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1552664730-d307ca884978")
        .with_attendance(50, 12),
        NewEvent::new(
            "Photography Masterclass",
            "2025-07-05",
            "Creative Studio",
            Category::Art,
            Price::Amount(89.0),
        )
        .with_time("2:00 PM - 6:00 PM")
        .with_image_url("https://images.unsplash.com/photo-1452721226168-f75c58b6b92b")
        .with_attendance(30, 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_new_event;

    #[test]
    fn test_sample_events_are_valid() {
        let events = sample_events();
        assert_eq!(events.len(), 8);
        for event in &events {
            assert!(validate_new_event(event).is_ok(), "{}", event.title);
        }
    }
}
