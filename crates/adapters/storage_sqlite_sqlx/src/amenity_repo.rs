//! `SQLite` implementation of [`AmenityRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stays_app::ports::AmenityRepository;
use stays_domain::amenity::Amenity;
use stays_domain::error::StaysError;
use stays_domain::id::AmenityId;

use crate::error::StorageError;

struct Wrapper(Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let created_at_str: String = row.try_get("created_at")?;
        let updated_at_str: String = row.try_get("updated_at")?;

        let id = AmenityId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = chrono::DateTime::parse_from_rfc3339(&created_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();
        let updated_at = chrono::DateTime::parse_from_rfc3339(&updated_at_str)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Amenity {
            id,
            name,
            created_at,
            updated_at,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO amenities (id, name, created_at, updated_at)
    VALUES (?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities";

const UPDATE: &str = r"
    UPDATE amenities
    SET name = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM amenities";

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    async fn create(&self, amenity: Amenity) -> Result<Amenity, StaysError> {
        sqlx::query(INSERT)
            .bind(amenity.id.to_string())
            .bind(&amenity.name)
            .bind(amenity.created_at.to_rfc3339())
            .bind(amenity.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn get_by_id(&self, id: AmenityId) -> Result<Option<Amenity>, StaysError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Amenity>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, amenity: Amenity) -> Result<Amenity, StaysError> {
        sqlx::query(UPDATE)
            .bind(&amenity.name)
            .bind(amenity.updated_at.to_rfc3339())
            .bind(amenity.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(amenity)
    }

    async fn delete(&self, id: AmenityId) -> Result<(), StaysError> {
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
