use crate::server::model::catalog::CatalogKind;

/// The single catalog entry a favorite points at.
///
/// Favorites are only ever created from this type, which keeps exactly one of the three
/// target columns populated per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Person(i32),
    Starship(i32),
}

impl FavoriteTarget {
    /// Inverse of [`Self::columns`], `None` unless exactly one column is set
    pub fn from_columns(
        planet_id: Option<i32>,
        people_id: Option<i32>,
        starship_id: Option<i32>,
    ) -> Option<Self> {
        match (planet_id, people_id, starship_id) {
            (Some(id), None, None) => Some(Self::Planet(id)),
            (None, Some(id), None) => Some(Self::Person(id)),
            (None, None, Some(id)) => Some(Self::Starship(id)),
            _ => None,
        }
    }

    pub fn kind(&self) -> CatalogKind {
        match self {
            Self::Planet(_) => CatalogKind::Planet,
            Self::Person(_) => CatalogKind::Person,
            Self::Starship(_) => CatalogKind::Starship,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Planet(id) | Self::Person(id) | Self::Starship(id) => *id,
        }
    }

    /// Values for the `planet_id`, `people_id` & `starship_id` columns, in that order
    pub fn columns(&self) -> (Option<i32>, Option<i32>, Option<i32>) {
        match *self {
            Self::Planet(id) => (Some(id), None, None),
            Self::Person(id) => (None, Some(id), None),
            Self::Starship(id) => (None, None, Some(id)),
        }
    }
}
