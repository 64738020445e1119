//! `SQLite` implementation of [`CityRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stays_app::ports::CityRepository;
use stays_domain::city::City;
use stays_domain::error::StaysError;
use stays_domain::id::{CityId, StateId};

use crate::error::StorageError;

struct Wrapper(City);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<City> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let state_id: String = row.try_get("state_id")?;
        let name: String = row.try_get("name")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let id = CityId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let state_id =
            StateId::from_str(&state_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(City {
            id,
            state_id,
            name,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO cities (id, state_id, name, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM cities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM cities";
const SELECT_BY_STATE: &str = "SELECT * FROM cities WHERE state_id = ?";

const UPDATE: &str = r"
    UPDATE cities
    SET name = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM cities";

/// `SQLite`-backed city repository.
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CityRepository for SqliteCityRepository {
    async fn create(&self, city: City) -> Result<City, StaysError> {
        sqlx::query(INSERT)
            .bind(city.id.to_string())
            .bind(city.state_id.to_string())
            .bind(&city.name)
            .bind(city.created_at.to_rfc3339())
            .bind(city.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn get_by_id(&self, id: CityId) -> Result<Option<City>, StaysError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<City>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_state(&self, state_id: StateId) -> Result<Vec<City>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
            .bind(state_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, city: City) -> Result<City, StaysError> {
        sqlx::query(UPDATE)
            .bind(&city.name)
            .bind(city.updated_at.to_rfc3339())
            .bind(city.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(city)
    }

    async fn delete(&self, id: CityId) -> Result<(), StaysError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, StaysError> {
        let count: i64 = sqlx::query_scalar(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::state_repo::SqliteStateRepository;
    use stays_app::ports::StateRepository as _;
    use stays_domain::state::State;

    async fn setup() -> (SqliteCityRepository, StateId) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();

        let state = State::new("California");
        let state_id = state.id;
        SqliteStateRepository::new(pool.clone())
            .create(state)
            .await
            .unwrap();

        (SqliteCityRepository::new(pool), state_id)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_city() {
        let (repo, state_id) = setup().await;
        let city = City::new("San Francisco", state_id);
        let id = city.id;

        repo.create(city).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "San Francisco");
        assert_eq!(fetched.state_id, state_id);
    }

    #[tokio::test]
    async fn should_return_none_when_city_not_found() {
        let (repo, _state_id) = setup().await;
        assert!(repo.get_by_id(CityId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_find_cities_by_state() {
        let (repo, state_id) = setup().await;
        repo.create(City::new("San Francisco", state_id))
            .await
            .unwrap();
        repo.create(City::new("Fresno", state_id)).await.unwrap();

        let found = repo.find_by_state(state_id).await.unwrap();
        assert_eq!(found.len(), 2);

        let none = repo.find_by_state(StateId::new()).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_update_city_when_exists() {
        let (repo, state_id) = setup().await;
        let mut city = City::new("San Fransisco", state_id);
        let id = city.id;
        repo.create(city.clone()).await.unwrap();

        city.name = "San Francisco".to_string();
        city.touch();
        repo.update(city).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "San Francisco");
    }

    #[tokio::test]
    async fn should_delete_city_when_exists() {
        let (repo, state_id) = setup().await;
        let city = City::new("San Francisco", state_id);
        let id = city.id;
        repo.create(city).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_count_cities() {
        let (repo, state_id) = setup().await;
        repo.create(City::new("San Francisco", state_id))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
