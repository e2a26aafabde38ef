//! Field names of the venture-capital firm collection.
//!
//! Records are schema-less `bson::Document`s; only the fields below carry
//! meaning for the service. Everything else is passed through untouched.

/// Store-assigned `ObjectId`.
pub const ID_FIELD: &str = "_id";

/// Firm name, target of the `q` pattern search.
pub const NAME_FIELD: &str = "Name";

/// Firm country, target of the `country` exact-match filter.
pub const COUNTRY_FIELD: &str = "Country";
