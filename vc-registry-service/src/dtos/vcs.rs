use crate::models::ID_FIELD;
use mongodb::bson::{Bson, Document};
use serde::Serialize;

/// Raw `/api/vcs` query parameters.
///
/// Numbers are kept as strings so malformed input degrades to defaults in
/// [`crate::services::ListQuery`] instead of being rejected by the extractor.
#[derive(Debug, Default, Clone)]
pub struct VcListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub fields: Option<String>,
    pub q: Option<String>,
    pub country: Option<String>,
    pub sort: Option<String>,
}

impl VcListParams {
    /// Collect decoded query pairs. The first occurrence of a repeated key
    /// wins and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                "fields" => &mut params.fields,
                "q" => &mut params.q,
                "country" => &mut params.country,
                "sort" => &mut params.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct VcListResponse {
    pub meta: ListMeta,
    pub data: Vec<serde_json::Value>,
}

/// Replace an `ObjectId` identifier with its hex string. Other fields,
/// including an identifier that is already some other type, are untouched.
pub fn stringify_id(mut doc: Document) -> Document {
    let hex = match doc.get(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        _ => None,
    };
    if let Some(hex) = hex {
        doc.insert(ID_FIELD, Bson::String(hex));
    }
    doc
}

/// Render a stored record as JSON for the wire.
///
/// Values without a native JSON form (dates, nested object ids, binary) use
/// relaxed Extended JSON.
pub fn record_to_json(doc: Document) -> serde_json::Value {
    Bson::Document(stringify_id(doc)).into_relaxed_extjson()
}
