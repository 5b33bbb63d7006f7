pub mod list;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingView {
    pub user_name: String,
    pub percent_won: u32,
    pub played: u32,
}
