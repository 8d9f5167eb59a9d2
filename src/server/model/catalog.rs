use std::fmt;

/// The kinds of catalog entry a user can favorite
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKind {
    Planet,
    Person,
    Starship,
}

impl CatalogKind {
    /// Capitalized name used in API messages, e.g. "Planet not found"
    pub fn label(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::Person => "Person",
            Self::Starship => "Starship",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
