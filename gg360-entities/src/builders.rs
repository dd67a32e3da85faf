pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{event_builder::*, recycle_builder::*, redeem_builder::*, report_builder::*};

pub mod report_builder {

    use super::*;
    use crate::{report::*, time::Date};

    #[derive(Debug)]
    pub struct WasteReportBuild {
        report: WasteReport,
    }

    impl WasteReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn waste_type(mut self, waste_type: &str) -> Self {
            self.report.waste_type = Some(waste_type.into());
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.report.location = Some(location.into());
            self
        }
        pub fn reporter_name(mut self, name: &str) -> Self {
            self.report.reporter_name = Some(name.into());
            self
        }
        pub fn report_date(mut self, date: Date) -> Self {
            self.report.report_date = Some(date);
            self
        }
        pub fn status(mut self, status: ReportStatus) -> Self {
            self.report.status = Some(status);
            self
        }
        pub fn finish(self) -> WasteReport {
            self.report
        }
    }

    impl Builder for WasteReport {
        type Build = WasteReportBuild;
        fn build() -> WasteReportBuild {
            WasteReportBuild {
                report: WasteReport {
                    id: "".into(),
                    waste_type: None,
                    location: None,
                    reporter_name: None,
                    report_date: None,
                    description: None,
                    status: None,
                },
            }
        }
    }
}

pub mod recycle_builder {

    use super::*;
    use crate::{recycle::*, time::Timestamp};

    #[derive(Debug)]
    pub struct RecycleEntryBuild {
        entry: RecycleEntry,
    }

    impl RecycleEntryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.entry.id = id.into();
            self
        }
        pub fn user_name(mut self, name: &str) -> Self {
            self.entry.user_name = Some(name.into());
            self
        }
        pub fn waste_type(mut self, waste_type: &str) -> Self {
            self.entry.waste_type = Some(waste_type.into());
            self
        }
        pub fn quantity(mut self, kg: f64) -> Self {
            self.entry.quantity = Some(kg);
            self
        }
        pub fn recycling_center(mut self, center: &str) -> Self {
            self.entry.recycling_center = Some(center.into());
            self
        }
        pub fn date_time(mut self, t: Timestamp) -> Self {
            self.entry.date_time = Some(t);
            self
        }
        pub fn status(mut self, status: RecycleStatus) -> Self {
            self.entry.status = Some(status);
            self
        }
        pub fn finish(self) -> RecycleEntry {
            self.entry
        }
    }

    impl Builder for RecycleEntry {
        type Build = RecycleEntryBuild;
        fn build() -> RecycleEntryBuild {
            RecycleEntryBuild {
                entry: RecycleEntry {
                    id: "".into(),
                    user_id: None,
                    user_name: None,
                    user_phone: None,
                    waste_type: None,
                    quantity: None,
                    recycling_center: None,
                    date_time: None,
                    status: None,
                },
            }
        }
    }
}

pub mod redeem_builder {

    use super::*;
    use crate::redeem::*;

    #[derive(Debug)]
    pub struct RedeemBuild {
        redeem: Redeem,
    }

    impl RedeemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.redeem.id = id.into();
            self
        }
        pub fn user_name(mut self, name: &str) -> Self {
            self.redeem.user_name = Some(name.into());
            self
        }
        pub fn reward(mut self, name: &str, points: u32) -> Self {
            self.redeem.reward_name = Some(name.into());
            self.redeem.reward_points = Some(points);
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.redeem.shipping_info.city = Some(city.into());
            self
        }
        pub fn status(mut self, status: RedeemStatus) -> Self {
            self.redeem.status = Some(status);
            self
        }
        pub fn finish(self) -> Redeem {
            self.redeem
        }
    }

    impl Builder for Redeem {
        type Build = RedeemBuild;
        fn build() -> RedeemBuild {
            RedeemBuild {
                redeem: Redeem {
                    id: "".into(),
                    user_id: None,
                    user_name: None,
                    reward_name: None,
                    reward_points: None,
                    shipping_info: ShippingInfo::default(),
                    status: None,
                    requested_at: None,
                },
            }
        }
    }
}

pub mod event_builder {

    use super::*;
    use crate::{event::*, time::Date};

    #[derive(Debug)]
    pub struct EventBuild {
        event: Event,
    }

    impl EventBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.event.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.event.title = title.into();
            self
        }
        pub fn date(mut self, date: Date) -> Self {
            self.event.date = Some(date);
            self
        }
        pub fn location(mut self, location: &str) -> Self {
            self.event.location = Some(location.into());
            self
        }
        pub fn status(mut self, status: EventStatus) -> Self {
            self.event.status = Some(status);
            self
        }
        pub fn finish(self) -> Event {
            self.event
        }
    }

    impl Builder for Event {
        type Build = EventBuild;
        fn build() -> EventBuild {
            EventBuild {
                event: Event {
                    id: "".into(),
                    title: "".into(),
                    description: None,
                    date: None,
                    time: None,
                    location: None,
                    max_participants: None,
                    status: None,
                    participants: vec![],
                },
            }
        }
    }
}
