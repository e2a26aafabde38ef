use crate::dtos::{record_to_json, ListMeta, VcListParams, VcListResponse};
use crate::services::ListQuery;
use crate::startup::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub async fn list_vcs(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<VcListResponse>, AppError> {
    let params = VcListParams::from_pairs(pairs);
    let query = ListQuery::from_params(&params);

    tracing::debug!(
        page = query.page,
        per_page = query.per_page,
        filter = %query.filter,
        projection = ?query.projection,
        sort = ?query.sort,
        "Listing VC records"
    );

    let (total, docs) = state.store.list(&query).await?;

    Ok(Json(VcListResponse {
        meta: ListMeta {
            page: query.page,
            per_page: query.per_page,
            total,
        },
        data: docs.into_iter().map(record_to_json).collect(),
    }))
}

pub async fn get_vc(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let oid = parse_vc_id(path)?;

    let doc = state
        .store
        .find_by_id(oid)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Not found")))?;

    Ok(Json(record_to_json(doc)))
}

/// Any id that cannot become an `ObjectId`, including one axum could not
/// decode from the path, is a client error.
fn parse_vc_id(path: Result<Path<String>, PathRejection>) -> Result<ObjectId, AppError> {
    let invalid = || AppError::BadRequest(anyhow::anyhow!("Invalid id"));

    let Path(id) = path.map_err(|e| {
        tracing::debug!(error = %e, "Rejected undecodable VC id");
        invalid()
    })?;

    ObjectId::parse_str(&id).map_err(|e| {
        tracing::debug!(id = %id, error = %e, "Rejected malformed VC id");
        invalid()
    })
}
