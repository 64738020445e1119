//! Place↔amenity membership — the only state machine in the catalog:
//! a (place, amenity) pair is either unlinked or linked.

use stays_domain::amenity::Amenity;
use stays_domain::error::{NotFoundError, StaysError};
use stays_domain::id::{AmenityId, PlaceId};

use crate::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};

/// Outcome of a link request. Linking an already-linked pair is a no-op
/// that degrades to a fetch, so the HTTP layer can answer 200 vs 201.
#[derive(Debug)]
pub enum Linked {
    /// The pair was not linked before this call.
    Created(Amenity),
    /// The pair was already linked; nothing changed.
    Existing(Amenity),
}

impl Linked {
    /// The amenity either way.
    #[must_use]
    pub fn amenity(&self) -> &Amenity {
        match self {
            Self::Created(amenity) | Self::Existing(amenity) => amenity,
        }
    }
}

/// Application service managing the place↔amenity relation.
pub struct PlaceAmenityService<L, P, A> {
    links: L,
    places: P,
    amenities: A,
}

impl<L, P, A> PlaceAmenityService<L, P, A>
where
    L: PlaceAmenityRepository,
    P: PlaceRepository,
    A: AmenityRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(links: L, places: P, amenities: A) -> Self {
        Self {
            links,
            places,
            amenities,
        }
    }

    async fn resolve_place(&self, place_id: PlaceId) -> Result<(), StaysError> {
        self.places
            .get_by_id(place_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Place",
                    id: place_id.to_string(),
                }
                .into()
            })
    }

    async fn resolve_amenity(&self, amenity_id: AmenityId) -> Result<Amenity, StaysError> {
        self.amenities
            .get_by_id(amenity_id)
            .await?
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Amenity",
                    id: amenity_id.to_string(),
                }
                .into()
            })
    }

    /// Amenities currently linked to an existing place.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when the place does not exist.
    pub async fn list_amenities_of_place(
        &self,
        place_id: PlaceId,
    ) -> Result<Vec<Amenity>, StaysError> {
        self.resolve_place(place_id).await?;
        self.links.list(place_id).await
    }

    /// Link an amenity to a place, idempotently.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when either side does not exist,
    /// or a storage error from the repository.
    pub async fn link(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<Linked, StaysError> {
        self.resolve_place(place_id).await?;
        let amenity = self.resolve_amenity(amenity_id).await?;

        if self.links.contains(place_id, amenity_id).await? {
            return Ok(Linked::Existing(amenity));
        }
        self.links.add(place_id, amenity_id).await?;
        tracing::debug!(place_id = %place_id, amenity_id = %amenity_id, "linked amenity");
        Ok(Linked::Created(amenity))
    }

    /// Remove an existing link.
    ///
    /// # Errors
    ///
    /// Returns [`StaysError::NotFound`] when either side does not exist
    /// or the pair was never linked.
    pub async fn unlink(&self, place_id: PlaceId, amenity_id: AmenityId) -> Result<(), StaysError> {
        self.resolve_place(place_id).await?;
        self.resolve_amenity(amenity_id).await?;

        if !self.links.contains(place_id, amenity_id).await? {
            return Err(NotFoundError {
                entity: "AmenityLink",
                id: format!("{place_id}/{amenity_id}"),
            }
            .into());
        }
        self.links.remove(place_id, amenity_id).await
    }
}
