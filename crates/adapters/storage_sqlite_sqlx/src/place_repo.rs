//! `SQLite` implementation of [`PlaceRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stays_app::ports::PlaceRepository;
use stays_domain::error::StaysError;
use stays_domain::id::{CityId, PlaceId, UserId};
use stays_domain::place::Place;

use crate::error::StorageError;

struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let city_id: String = row.try_get("city_id")?;
        let user_id: String = row.try_get("user_id")?;
        let name: String = row.try_get("name")?;
        let description: String = row.try_get("description")?;
        let number_rooms: i64 = row.try_get("number_rooms")?;
        let number_bathrooms: i64 = row.try_get("number_bathrooms")?;
        let max_guest: i64 = row.try_get("max_guest")?;
        let price_by_night: i64 = row.try_get("price_by_night")?;
        let latitude: f64 = row.try_get("latitude")?;
        let longitude: f64 = row.try_get("longitude")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let id = PlaceId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let city_id =
            CityId::from_str(&city_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let user_id =
            UserId::from_str(&user_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Place {
            id,
            city_id,
            user_id,
            name,
            description,
            number_rooms,
            number_bathrooms,
            max_guest,
            price_by_night,
            latitude,
            longitude,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (id, city_id, user_id, name, description, number_rooms, number_bathrooms,
                        max_guest, price_by_night, latitude, longitude, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places";
const SELECT_BY_CITY: &str = "SELECT * FROM places WHERE city_id = ?";

const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?,
        max_guest = ?, price_by_night = ?, latitude = ?, longitude = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM places";

/// `SQLite`-backed place repository. The `city_id` and `user_id` columns
/// are written once at insertion and never touched by `UPDATE`.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn create(&self, place: Place) -> Result<Place, StaysError> {
        sqlx::query(INSERT)
            .bind(place.id.to_string())
            .bind(place.city_id.to_string())
            .bind(place.user_id.to_string())
            .bind(&place.name)
            .bind(&place.description)
            .bind(place.number_rooms)
            .bind(place.number_bathrooms)
            .bind(place.max_guest)
            .bind(place.price_by_night)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.created_at.to_rfc3339())
            .bind(place.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, StaysError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Place>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_city(&self, city_id: CityId) -> Result<Vec<Place>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CITY)
            .bind(city_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, place: Place) -> Result<Place, StaysError> {
        sqlx::query(UPDATE)
            .bind(&place.name)
            .bind(&place.description)
            .bind(place.number_rooms)
            .bind(place.number_bathrooms)
            .bind(place.max_guest)
            .bind(place.price_by_night)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(place.updated_at.to_rfc3339())
            .bind(place.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), StaysError> {
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
    use crate::city_repo::SqliteCityRepository;
    use crate::pool::Config;
    use crate::state_repo::SqliteStateRepository;
    use crate::user_repo::SqliteUserRepository;
    use stays_app::ports::{CityRepository as _, StateRepository as _, UserRepository as _};
    use stays_domain::city::City;
    use stays_domain::place::PlaceDraft;
    use stays_domain::state::State;
    use stays_domain::user::{User, UserDraft};

    async fn setup() -> (SqlitePlaceRepository, CityId, UserId) {
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

        let city = City::new("San Francisco", state_id);
        let city_id = city.id;
        SqliteCityRepository::new(pool.clone())
            .create(city)
            .await
            .unwrap();

        let user = User::from(UserDraft {
            email: "host@example.com".to_string(),
            password: "secret".to_string(),
            first_name: None,
            last_name: None,
        });
        let user_id = user.id;
        SqliteUserRepository::new(pool.clone())
            .create(user)
            .await
            .unwrap();

        (SqlitePlaceRepository::new(pool), city_id, user_id)
    }

    fn test_place(city_id: CityId, user_id: UserId) -> Place {
        Place::new(
            city_id,
            user_id,
            PlaceDraft {
                name: "Beach House".to_string(),
                description: "Ocean view".to_string(),
                number_rooms: 3,
                max_guest: 6,
                price_by_night: 120,
                latitude: 37.77,
                ..PlaceDraft::default()
            },
        )
    }

    #[tokio::test]
    async fn should_create_and_retrieve_place() {
        let (repo, city_id, user_id) = setup().await;
        let place = test_place(city_id, user_id);
        let id = place.id;

        repo.create(place).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Beach House");
        assert_eq!(fetched.city_id, city_id);
        assert_eq!(fetched.user_id, user_id);
        assert_eq!(fetched.number_rooms, 3);
        assert_eq!(fetched.price_by_night, 120);
        assert!((fetched.latitude - 37.77).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_return_none_when_place_not_found() {
        let (repo, _city_id, _user_id) = setup().await;
        assert!(repo.get_by_id(PlaceId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_find_places_by_city() {
        let (repo, city_id, user_id) = setup().await;
        repo.create(test_place(city_id, user_id)).await.unwrap();

        let found = repo.find_by_city(city_id).await.unwrap();
        assert_eq!(found.len(), 1);

        let none = repo.find_by_city(CityId::new()).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_update_place_when_exists() {
        let (repo, city_id, user_id) = setup().await;
        let mut place = test_place(city_id, user_id);
        let id = place.id;
        repo.create(place.clone()).await.unwrap();

        place.price_by_night = 150;
        place.description = "Renovated".to_string();
        place.touch();
        repo.update(place).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.price_by_night, 150);
        assert_eq!(fetched.description, "Renovated");
        assert_eq!(fetched.city_id, city_id);
    }

    #[tokio::test]
    async fn should_delete_place_when_exists() {
        let (repo, city_id, user_id) = setup().await;
        let place = test_place(city_id, user_id);
        let id = place.id;
        repo.create(place).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_count_places() {
        let (repo, city_id, user_id) = setup().await;
        repo.create(test_place(city_id, user_id)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
