use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum ArticleStatus {
    #[strum(serialize = "Draft")]
    Draft,
    #[strum(serialize = "Published")]
    Published,
    #[strum(serialize = "Archived")]
    Archived,
}

impl Status for ArticleStatus {}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id        : Id,
    pub title     : String,
    pub author    : Option<String>,
    pub category  : Option<String>,
    pub status    : Option<ArticleStatus>,
    pub published : Option<Date>,
    pub views     : Option<u32>,
}
