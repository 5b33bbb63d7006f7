use chrono::NaiveDate;

pub mod query;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreView {
    pub user_name: String,
    pub date: NaiveDate,
    pub won: bool,
    pub misses: u32,
}
