pub mod database;
pub mod metrics;
pub mod query;

pub use database::VcStore;
pub use self::metrics::{get_metrics, init_metrics};
pub use query::ListQuery;
