//! Translation of `/api/vcs` query parameters into a MongoDB query.

use crate::dtos::VcListParams;
use crate::models::{COUNTRY_FIELD, ID_FIELD, NAME_FIELD};
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 25;
pub const MAX_PER_PAGE: u64 = 500;

/// The store takes offsets as a signed 64-bit integer.
const MAX_SKIP: u64 = i64::MAX as u64;

/// A fully normalized list query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u64,
    pub per_page: u64,
    pub filter: Document,
    pub projection: Option<Document>,
    pub sort: Option<Document>,
}

impl ListQuery {
    pub fn from_params(params: &VcListParams) -> Self {
        Self {
            page: parse_page(params.page.as_deref()),
            per_page: parse_per_page(params.per_page.as_deref()),
            filter: build_filter(params.q.as_deref(), params.country.as_deref()),
            projection: build_projection(params.fields.as_deref()),
            sort: build_sort(params.sort.as_deref()),
        }
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page).min(MAX_SKIP)
    }

    pub fn find_options(&self) -> FindOptions {
        FindOptions::builder()
            .projection(self.projection.clone())
            .sort(self.sort.clone())
            .skip(self.skip())
            .limit(self.per_page as i64)
            .build()
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

fn parse_page(raw: Option<&str>) -> u64 {
    match parse_int(raw) {
        Some(page) if page >= 1 => page as u64,
        _ => DEFAULT_PAGE,
    }
}

fn parse_per_page(raw: Option<&str>) -> u64 {
    match parse_int(raw) {
        Some(n) => n.clamp(1, MAX_PER_PAGE as i64) as u64,
        None => DEFAULT_PER_PAGE,
    }
}

fn build_filter(q: Option<&str>, country: Option<&str>) -> Document {
    let mut filter = Document::new();

    // `q` is forwarded as a pattern; the store rejects invalid ones.
    if let Some(q) = q.filter(|q| !q.is_empty()) {
        filter.insert(NAME_FIELD, doc! { "$regex": q, "$options": "i" });
    }
    if let Some(country) = country.filter(|c| !c.is_empty()) {
        filter.insert(COUNTRY_FIELD, country);
    }

    filter
}

fn build_projection(fields: Option<&str>) -> Option<Document> {
    let fields = fields.filter(|f| !f.is_empty())?;

    let mut projection = Document::new();
    for field in fields.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        projection.insert(field, 1);
    }
    projection.insert(ID_FIELD, 1);

    Some(projection)
}

fn build_sort(sort: Option<&str>) -> Option<Document> {
    let sort = sort.filter(|s| !s.is_empty())?;

    let direction = if sort.starts_with('-') { -1 } else { 1 };
    let field = sort.trim_start_matches('-');
    if field.is_empty() {
        return None;
    }

    let mut spec = Document::new();
    spec.insert(field, direction);
    Some(spec)
}
