use std::cmp::Ordering;

use crate::domain::{RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: Option<String>,
    pub stats: UserStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserStats {
    pub wins: u32,
    pub played: u32,
    pub percent_won: u32,
}

impl UserStats {
    /// Counts one finished game and recomputes the win percentage.
    pub fn record_game(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.wins += 1;
        }
        self.percent_won = percent_won(self.wins, self.played);
    }
}

/// User names are stored and looked up without surrounding whitespace.
pub fn normalize_user_name(name: &str) -> &str {
    name.trim()
}

/// Nearest integer percentage, halves rounded up.
pub fn percent_won(wins: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    let wins = wins as u64;
    let played = played as u64;
    ((wins * 200 + played) / (played * 2)) as u32
}

/// Descending win percentage, then descending games played.
pub fn ranking_order(a: &User, b: &User) -> Ordering {
    b.stats
        .percent_won
        .cmp(&a.stats.percent_won)
        .then_with(|| b.stats.played.cmp(&a.stats.played))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

#[async_trait::async_trait]
pub trait UserRepository {
    async fn create_user(
        &self,
        name: String,
        email: Option<String>,
    ) -> Result<User, RepoCreateError>;
    async fn get_user(&self, user_id: UserId) -> Result<User, RepoRetrieveError>;
    async fn get_user_by_name(&self, name: &str) -> Result<User, RepoRetrieveError>;
    async fn update_user_stats(
        &self,
        user_id: UserId,
        stats: UserStats,
    ) -> Result<(), RepoUpdateError>;
    async fn get_rankings(&self) -> Result<Vec<User>, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, percent_won: u32, played: u32) -> User {
        User {
            user_id: UserId(id),
            name: format!("user{}", id),
            email: None,
            stats: UserStats {
                wins: 0,
                played,
                percent_won,
            },
        }
    }

    #[test]
    fn test_percent_won_rounding() {
        assert_eq!(percent_won(0, 0), 0);
        assert_eq!(percent_won(1, 1), 100);
        assert_eq!(percent_won(1, 2), 50);
        assert_eq!(percent_won(1, 3), 33);
        assert_eq!(percent_won(2, 3), 67);
        assert_eq!(percent_won(1, 8), 13);
        assert_eq!(percent_won(1, 40), 3);
        assert_eq!(percent_won(0, 5), 0);
    }

    #[test]
    fn test_record_game_keeps_percent_in_range() {
        let mut stats = UserStats::default();
        for i in 0..200u32 {
            let won = i % 3 == 0 || i % 7 == 0;
            stats.record_game(won);
            assert!(stats.percent_won <= 100);
            assert!(stats.wins <= stats.played);
            // percent - 0.5 <= wins / played * 100 < percent + 0.5
            let ratio_x2 = 200 * stats.wins as u64;
            let played = stats.played as u64;
            let percent = stats.percent_won as u64;
            assert!((2 * percent).saturating_sub(1) * played <= ratio_x2);
            assert!(ratio_x2 < (2 * percent + 1) * played);
        }
        assert_eq!(stats.played, 200);
    }

    #[test]
    fn test_record_game_counts() {
        let mut stats = UserStats::default();
        stats.record_game(true);
        stats.record_game(false);
        stats.record_game(false);
        assert_eq!(
            stats,
            UserStats {
                wins: 1,
                played: 3,
                percent_won: 33
            }
        );
    }

    #[test]
    fn test_ranking_order() {
        let mut users = vec![user(1, 50, 2), user(2, 100, 1), user(3, 50, 10), user(4, 0, 0)];
        users.sort_by(ranking_order);
        let ids: Vec<i32> = users.iter().map(|u| u.user_id.0).collect();
        assert_eq!(ids, vec![2, 3, 1, 4]);
    }
}
