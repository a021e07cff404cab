use crate::database::DbPool;
use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, Interrupted};
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use dto::club::{Club, NewClub};
use dto::club_category::ClubCategory;
use rocket::tokio::task::spawn_blocking;

type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Persistence gateway for clubs.
/// A missing club is never an error: it is reported as `None`, `false` or an empty list.
#[rocket::async_trait]
pub trait ClubRepository: Send + Sync {
    /// Store a new club and its address. Return whether the club has been saved.
    async fn add(&self, club: NewClub) -> Result<bool>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Club>>;
    /// `state_code` is matched exactly against the state of the clubs' address.
    async fn get_clubs_by_state(&self, state_code: &str) -> Result<Vec<Club>>;
    async fn get_slice(&self, offset: i64, limit: i64) -> Result<Vec<Club>>;
    async fn get_count(&self) -> Result<i64>;
    async fn get_clubs_by_category_and_slice(
        &self,
        category: ClubCategory,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Club>>;
    async fn get_count_by_category(&self, category: ClubCategory) -> Result<i64>;
    async fn get_all_states(&self) -> Result<Vec<String>>;
    /// Return false when there is no club to update.
    async fn update(&self, id: i32, club: NewClub) -> Result<bool>;
    /// Return false when there is no club to delete.
    async fn delete(&self, id: i32) -> Result<bool>;
}

/// Club repository backed by SQLite.
/// Each call borrows a connection from the pool and runs on a blocking thread.
pub struct SqliteClubRepository {
    pool: DbPool,
}

impl SqliteClubRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, query: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        spawn_blocking(move || {
            let mut connection = pool.get().map_err(log_error_and_return(ConnectionFailed))?;
            query(&mut *connection)
        })
        .await
        .map_err(log_error_and_return(Interrupted))?
    }
}

#[rocket::async_trait]
impl ClubRepository for SqliteClubRepository {
    async fn add(&self, club: NewClub) -> Result<bool> {
        let count = self
            .run(move |connection| dao::club::insert(connection, &club))
            .await?;

        Ok(count > 0)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Club>> {
        self.run(move |connection| dao::club::find_by_id(connection, id))
            .await
    }

    async fn get_clubs_by_state(&self, state_code: &str) -> Result<Vec<Club>> {
        let state_code = state_code.to_owned();
        self.run(move |connection| dao::club::find_by_state(connection, &state_code))
            .await
    }

    async fn get_slice(&self, offset: i64, limit: i64) -> Result<Vec<Club>> {
        self.run(move |connection| dao::club::find_slice(connection, offset, limit))
            .await
    }

    async fn get_count(&self) -> Result<i64> {
        self.run(dao::club::count).await
    }

    async fn get_clubs_by_category_and_slice(
        &self,
        category: ClubCategory,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Club>> {
        self.run(move |connection| {
            dao::club::find_slice_by_category(connection, category, offset, limit)
        })
        .await
    }

    async fn get_count_by_category(&self, category: ClubCategory) -> Result<i64> {
        self.run(move |connection| dao::club::count_by_category(connection, category))
            .await
    }

    async fn get_all_states(&self) -> Result<Vec<String>> {
        self.run(dao::club::find_all_states).await
    }

    async fn update(&self, id: i32, club: NewClub) -> Result<bool> {
        self.run(move |connection| dao::club::update(connection, id, &club))
            .await
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        self.run(move |connection| dao::club::delete(connection, id))
            .await
    }
}
