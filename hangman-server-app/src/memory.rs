//! DashMap backed repositories used by tests and by servers started without a database.

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::{DashMap, mapref::entry::Entry};
use hangman_core::HangmanGame;

use crate::domain::{
    GameId, RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError, ScoreId, UserId,
    game::{GameRecord, GameRepository},
    score::{NewScore, Score, ScoreOrder, ScoreQuery, ScoreRepository},
    user::{User, UserRepository, UserStats, ranking_order},
};

pub struct InMemoryUserRepository {
    users: DashMap<UserId, User>,
    names: DashMap<String, UserId>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            names: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(
        &self,
        name: String,
        email: Option<String>,
    ) -> Result<User, RepoCreateError> {
        match self.names.entry(name.clone()) {
            Entry::Occupied(_) => Err(RepoCreateError::Conflict),
            Entry::Vacant(entry) => {
                let user_id = UserId(self.next_id.fetch_add(1, Ordering::SeqCst));
                let user = User {
                    user_id,
                    name,
                    email,
                    stats: UserStats::default(),
                };
                self.users.insert(user_id, user.clone());
                entry.insert(user_id);
                Ok(user)
            }
        }
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, RepoRetrieveError> {
        self.users
            .get(&user_id)
            .map(|user| user.clone())
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn get_user_by_name(&self, name: &str) -> Result<User, RepoRetrieveError> {
        let user_id = self
            .names
            .get(name)
            .map(|id| *id)
            .ok_or(RepoRetrieveError::NotFound)?;
        self.get_user(user_id).await
    }

    async fn update_user_stats(
        &self,
        user_id: UserId,
        stats: UserStats,
    ) -> Result<(), RepoUpdateError> {
        let mut user = self
            .users
            .get_mut(&user_id)
            .ok_or(RepoUpdateError::NotFound)?;
        user.stats = stats;
        Ok(())
    }

    async fn get_rankings(&self) -> Result<Vec<User>, RepoError> {
        let mut users: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        users.sort_by(ranking_order);
        Ok(users)
    }
}

pub struct InMemoryGameRepository {
    games: DashMap<GameId, GameRecord>,
    next_id: AtomicI32,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait::async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(
        &self,
        user_id: UserId,
        game: HangmanGame,
    ) -> Result<GameRecord, RepoError> {
        let game_id = GameId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let record = GameRecord {
            game_id,
            user_id,
            game,
        };
        self.games.insert(game_id, record.clone());
        Ok(record)
    }

    async fn get_game(&self, game_id: GameId) -> Result<GameRecord, RepoRetrieveError> {
        self.games
            .get(&game_id)
            .map(|record| record.clone())
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn save_game(&self, record: &GameRecord) -> Result<(), RepoUpdateError> {
        let mut stored = self
            .games
            .get_mut(&record.game_id)
            .ok_or(RepoUpdateError::NotFound)?;
        *stored = record.clone();
        Ok(())
    }

    async fn delete_game(&self, game_id: GameId) -> Result<(), RepoUpdateError> {
        self.games
            .remove(&game_id)
            .map(|_| ())
            .ok_or(RepoUpdateError::NotFound)
    }

    async fn count_games_for_user(&self, user_id: UserId) -> Result<u64, RepoError> {
        Ok(self
            .games
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .count() as u64)
    }

    async fn get_open_games_for_user(&self, user_id: UserId) -> Result<Vec<GameRecord>, RepoError> {
        let mut games: Vec<GameRecord> = self
            .games
            .iter()
            .filter(|e| e.value().user_id == user_id && !e.value().game.game_over)
            .map(|e| e.value().clone())
            .collect();
        games.sort_by_key(|record| record.game_id);
        Ok(games)
    }
}

pub struct InMemoryScoreRepository {
    scores: DashMap<ScoreId, Score>,
    next_id: AtomicI32,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            scores: DashMap::new(),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait::async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn create_score(&self, score: NewScore) -> Result<Score, RepoError> {
        let score_id = ScoreId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let score = Score {
            score_id,
            user_id: score.user_id,
            date: score.date,
            won: score.won,
            misses: score.misses,
        };
        self.scores.insert(score_id, score.clone());
        Ok(score)
    }

    async fn query_scores(&self, query: ScoreQuery) -> Result<Vec<Score>, RepoError> {
        let mut scores: Vec<Score> = self
            .scores
            .iter()
            .filter(|e| query.user_id.is_none_or(|user_id| e.value().user_id == user_id))
            .map(|e| e.value().clone())
            .collect();
        scores.sort_by_key(|score| score.score_id);

        if query.order == ScoreOrder::FewestMisses {
            scores.sort_by_key(|score| score.misses);
        }
        if let Some(limit) = query.limit {
            scores.truncate(limit);
        }
        Ok(scores)
    }
}
