use crate::services::metrics::record_db_operation;
use crate::services::query::ListQuery;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;
use std::time::Instant;

/// Handle to the VC collection.
///
/// Built once at startup and cloned into every request; the driver pools
/// connections internally and connects lazily on first use.
#[derive(Clone)]
pub struct VcStore {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl VcStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, collection = %collection, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self {
            client,
            db,
            collection: collection.to_string(),
        })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn vcs(&self) -> Collection<Document> {
        self.db.collection(&self.collection)
    }

    /// Count every record matching the filter, then fetch the requested page.
    pub async fn list(&self, query: &ListQuery) -> Result<(u64, Vec<Document>), AppError> {
        let collection = self.vcs();

        let start = Instant::now();
        let total = collection
            .count_documents(query.filter.clone(), None)
            .await
            .map_err(AppError::from)?;
        record_db_operation("count", &self.collection, start.elapsed());

        let start = Instant::now();
        let docs: Vec<Document> = collection
            .find(query.filter.clone(), query.find_options())
            .await
            .map_err(AppError::from)?
            .try_collect()
            .await
            .map_err(AppError::from)?;
        record_db_operation("find", &self.collection, start.elapsed());

        tracing::debug!(
            total = total,
            returned = docs.len(),
            page = query.page,
            per_page = query.per_page,
            "Listed VC records"
        );

        Ok((total, docs))
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Document>, AppError> {
        let start = Instant::now();
        let doc = self
            .vcs()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?;
        record_db_operation("find_one", &self.collection, start.elapsed());
        Ok(doc)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
