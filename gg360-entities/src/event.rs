use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{
    id::Id,
    status::Status,
    time::{Date, Timestamp},
};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum EventStatus {
    #[strum(serialize = "upcoming")]
    Upcoming,
    #[strum(serialize = "ongoing")]
    Ongoing,
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "cancelled")]
    Cancelled,
}

impl Status for EventStatus {}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id       : Option<Id>,
    pub name          : Option<String>,
    pub email         : Option<String>,
    pub registered_at : Option<Timestamp>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id               : Id,
    pub title            : String,
    pub description      : Option<String>,
    /// Calendar date without time-of-day or offset
    pub date             : Option<Date>,
    /// Free-form time of day as entered by the organizer, e.g. `10:00 AM`
    pub time             : Option<String>,
    pub location         : Option<String>,
    pub max_participants : Option<u32>,
    pub status           : Option<EventStatus>,
    pub participants     : Vec<Participant>,
}

impl Event {
    pub fn is_on(&self, date: Date) -> bool {
        self.date == Some(date)
    }

    /// Remaining seats, if the event is limited.
    pub fn free_seats(&self) -> Option<u32> {
        let max = self.max_participants?;
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        Some(max.saturating_sub(taken))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;
    use time::Month;

    #[test]
    fn free_seats() {
        let mut e = Event::build().id("e1").finish();
        assert_eq!(e.free_seats(), None);
        e.max_participants = Some(2);
        assert_eq!(e.free_seats(), Some(2));
        e.participants = vec![
            Participant {
                user_id: Some("u1".into()),
                name: None,
                email: None,
                registered_at: None,
            };
            3
        ];
        assert_eq!(e.free_seats(), Some(0));
    }

    #[test]
    fn is_on_compares_dates_only() {
        let day = Date::from_calendar_date(2024, Month::March, 9).unwrap();
        let e = Event::build().date(day).finish();
        assert!(e.is_on(day));
        assert!(!e.is_on(day.next_day().unwrap()));
        assert!(!Event::build().finish().is_on(day));
    }
}
