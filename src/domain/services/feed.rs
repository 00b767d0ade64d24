use icalendar::{Calendar, Component, Event as IcalEvent, EventLike};

use crate::domain::models::event::Event;

/// Renders events as an iCalendar feed. Events carry a calendar date plus a
/// free-form local time string, so they are emitted as all-day entries.
pub fn generate_feed(events: &[Event]) -> String {
    let mut calendar = Calendar::new();
    calendar.name("Sun & Flower Ibiza");

    for event in events {
        let mut ical_event = IcalEvent::new();
        ical_event
            .summary(&event.name)
            .all_day(event.date)
            .uid(&event.id);

        if let Some(description) = &event.description {
            ical_event.description(description);
        }

        calendar.push(ical_event.done());
    }

    calendar.to_string()
}
