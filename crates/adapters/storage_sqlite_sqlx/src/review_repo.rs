//! `SQLite` implementation of [`ReviewRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stays_app::ports::ReviewRepository;
use stays_domain::error::StaysError;
use stays_domain::id::{PlaceId, ReviewId, UserId};
use stays_domain::review::Review;

use crate::error::StorageError;

struct Wrapper(Review);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Review> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let place_id: String = row.try_get("place_id")?;
        let user_id: String = row.try_get("user_id")?;
        let text: String = row.try_get("text")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let id = ReviewId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let place_id =
            PlaceId::from_str(&place_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let user_id =
            UserId::from_str(&user_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Review {
            id,
            place_id,
            user_id,
            text,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO reviews (id, place_id, user_id, text, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM reviews WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM reviews";
const SELECT_BY_PLACE: &str = "SELECT * FROM reviews WHERE place_id = ?";

const UPDATE: &str = r"
    UPDATE reviews
    SET text = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM reviews WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM reviews";

/// `SQLite`-backed review repository.
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, StaysError> {
        sqlx::query(INSERT)
            .bind(review.id.to_string())
            .bind(review.place_id.to_string())
            .bind(review.user_id.to_string())
            .bind(&review.text)
            .bind(review.created_at.to_rfc3339())
            .bind(review.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn get_by_id(&self, id: ReviewId) -> Result<Option<Review>, StaysError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Review>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn find_by_place(&self, place_id: PlaceId) -> Result<Vec<Review>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_PLACE)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, review: Review) -> Result<Review, StaysError> {
        sqlx::query(UPDATE)
            .bind(&review.text)
            .bind(review.updated_at.to_rfc3339())
            .bind(review.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(review)
    }

    async fn delete(&self, id: ReviewId) -> Result<(), StaysError> {
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
    use crate::place_repo::SqlitePlaceRepository;
    use crate::pool::Config;
    use crate::state_repo::SqliteStateRepository;
    use crate::user_repo::SqliteUserRepository;
    use stays_app::ports::{
        CityRepository as _, PlaceRepository as _, StateRepository as _, UserRepository as _,
    };
    use stays_domain::city::City;
    use stays_domain::place::{Place, PlaceDraft};
    use stays_domain::state::State;
    use stays_domain::user::{User, UserDraft};

    async fn setup() -> (SqliteReviewRepository, PlaceId, UserId) {
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
            email: "guest@example.com".to_string(),
            password: "secret".to_string(),
            first_name: None,
            last_name: None,
        });
        let user_id = user.id;
        SqliteUserRepository::new(pool.clone())
            .create(user)
            .await
            .unwrap();

        let place = Place::new(
            city_id,
            user_id,
            PlaceDraft {
                name: "Beach House".to_string(),
                ..PlaceDraft::default()
            },
        );
        let place_id = place.id;
        SqlitePlaceRepository::new(pool.clone())
            .create(place)
            .await
            .unwrap();

        (SqliteReviewRepository::new(pool), place_id, user_id)
    }

    #[tokio::test]
    async fn should_create_and_retrieve_review() {
        let (repo, place_id, user_id) = setup().await;
        let review = Review::new(place_id, user_id, "Great stay");
        let id = review.id;

        repo.create(review).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.text, "Great stay");
        assert_eq!(fetched.place_id, place_id);
    }

    #[tokio::test]
    async fn should_return_none_when_review_not_found() {
        let (repo, _place_id, _user_id) = setup().await;
        assert!(repo.get_by_id(ReviewId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_find_reviews_by_place() {
        let (repo, place_id, user_id) = setup().await;
        repo.create(Review::new(place_id, user_id, "Great stay"))
            .await
            .unwrap();
        repo.create(Review::new(place_id, user_id, "Would book again"))
            .await
            .unwrap();

        let found = repo.find_by_place(place_id).await.unwrap();
        assert_eq!(found.len(), 2);

        let none = repo.find_by_place(PlaceId::new()).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn should_update_review_when_exists() {
        let (repo, place_id, user_id) = setup().await;
        let mut review = Review::new(place_id, user_id, "Great");
        let id = review.id;
        repo.create(review.clone()).await.unwrap();

        review.text = "Great stay".to_string();
        review.touch();
        repo.update(review).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.text, "Great stay");
    }

    #[tokio::test]
    async fn should_delete_review_when_exists() {
        let (repo, place_id, user_id) = setup().await;
        let review = Review::new(place_id, user_id, "Great stay");
        let id = review.id;
        repo.create(review).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_count_reviews() {
        let (repo, place_id, user_id) = setup().await;
        repo.create(Review::new(place_id, user_id, "Great stay"))
            .await
            .unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
