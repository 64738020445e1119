//! `SQLite` implementation of [`PlaceAmenityRepository`] over the
//! `place_amenities` join table.

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stays_app::ports::PlaceAmenityRepository;
use stays_domain::amenity::Amenity;
use stays_domain::error::StaysError;
use stays_domain::id::{AmenityId, PlaceId};

use crate::error::StorageError;

struct Wrapper(Amenity);

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

const CONTAINS: &str = r"
    SELECT COUNT(*) FROM place_amenities
    WHERE place_id = ? AND amenity_id = ?
";

const INSERT: &str = r"
    INSERT INTO place_amenities (place_id, amenity_id)
    VALUES (?, ?)
";

const DELETE: &str = r"
    DELETE FROM place_amenities
    WHERE place_id = ? AND amenity_id = ?
";

const SELECT_LINKED: &str = r"
    SELECT amenities.* FROM amenities
    JOIN place_amenities ON place_amenities.amenity_id = amenities.id
    WHERE place_amenities.place_id = ?
";

/// `SQLite`-backed place↔amenity membership over a join table.
pub struct SqlitePlaceAmenityRepository {
    pool: SqlitePool,
}

impl SqlitePlaceAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceAmenityRepository for SqlitePlaceAmenityRepository {
    async fn contains(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<bool, StaysError> {
        let count: i64 = sqlx::query_scalar(CONTAINS)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(count > 0)
    }

    async fn add(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), StaysError> {
        sqlx::query(INSERT)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn remove(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), StaysError> {
        sqlx::query(DELETE)
            .bind(place_id.to_string())
            .bind(amenity_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    async fn list(&self, place_id: PlaceId) -> Result<Vec<Amenity>, StaysError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_LINKED)
            .bind(place_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
