use super::prelude::*;
use crate::calendar::MonthCursor;

/// Fetches the events that take place in the given month, by date.
pub fn load_calendar<G: Collection<Event>>(gw: &G, cursor: MonthCursor) -> Result<Vec<Event>> {
    let mut events: Vec<_> = gw
        .list()?
        .into_iter()
        .filter(|e| e.date.is_some_and(|d| MonthCursor::from_date(d) == cursor))
        .collect();
    events.sort_by_key(|e| e.date);
    log::debug!("{} events in {cursor}", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::calendar::CalendarMonth;
    use time::macros::date;

    #[test]
    fn events_of_the_month() {
        let gw = MockGateway::default();
        gw.events.borrow_mut().extend([
            Event::build()
                .id("e1")
                .title("Tree planting")
                .date(date!(2024 - 06 - 20))
                .finish(),
            Event::build()
                .id("e2")
                .title("Clean-up")
                .date(date!(2024 - 06 - 02))
                .finish(),
            Event::build()
                .id("e3")
                .title("Next month")
                .date(date!(2024 - 07 - 01))
                .finish(),
            Event::build().id("e4").title("Undated").finish(),
        ]);
        let cursor = MonthCursor::new(2024, 5).unwrap();
        let events = load_calendar(&gw, cursor).unwrap();
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1"]);
        let month = CalendarMonth::new(cursor, &events);
        assert_eq!(month.event_days(), vec![2, 20]);
    }
}
