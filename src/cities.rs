//! Static city registry used for autocomplete and submit validation

/// Upper bound on the autocomplete dropdown.
pub const MAX_SUGGESTIONS: usize = 8;

const BUILTIN_CITIES: &[&str] = &[
    "London",
    "Paris",
    "New York",
    "Tokyo",
    "Berlin",
    "Madrid",
    "Rome",
    "Amsterdam",
    "Vienna",
    "Prague",
    "Lisbon",
    "Dublin",
    "Oslo",
    "Stockholm",
    "Helsinki",
    "Copenhagen",
    "Warsaw",
    "Kyiv",
    "Istanbul",
    "Cairo",
    "Nairobi",
    "Cape Town",
    "Lagos",
    "Dubai",
    "Mumbai",
    "Delhi",
    "Bangkok",
    "Singapore",
    "Seoul",
    "Shanghai",
    "Sydney",
    "Melbourne",
    "Auckland",
    "Toronto",
    "Vancouver",
    "Los Angeles",
    "San Francisco",
    "Seattle",
    "Chicago",
    "Mexico City",
    "São Paulo",
    "Santiago",
    "Buenos Aires",
    "Sofia",
];

static BUILTIN: CityRegistry = CityRegistry::new(BUILTIN_CITIES);

/// Submit validation failure
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown city '{0}'. Pick one from the suggestions.")]
    UnknownCity(String),
}

/// Ordered list of known city names.
///
/// Matching is case-insensitive; results keep registry order and casing.
#[derive(Debug, Clone, Copy)]
pub struct CityRegistry {
    names: &'static [&'static str],
}

impl CityRegistry {
    pub const fn new(names: &'static [&'static str]) -> Self {
        Self { names }
    }

    /// The process-wide registry the app runs with
    pub fn builtin() -> &'static CityRegistry {
        &BUILTIN
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// First [`MAX_SUGGESTIONS`] names whose lowercase form starts with the
    /// lowercase query. An empty query yields nothing.
    pub fn suggest(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.names
            .iter()
            .filter(|name| name.to_lowercase().starts_with(&needle))
            .take(MAX_SUGGESTIONS)
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Resolve a submitted query to the registry spelling of the city.
    ///
    /// Only whole-name matches are accepted; surrounding whitespace is ignored.
    pub fn resolve(&self, query: &str) -> Result<&'static str, ValidationError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ValidationError::UnknownCity(String::new()));
        }
        self.names
            .iter()
            .copied()
            .find(|name| name.to_lowercase() == needle)
            .ok_or_else(|| ValidationError::UnknownCity(query.trim().to_string()))
    }
}
