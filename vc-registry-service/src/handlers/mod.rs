pub mod health;
pub mod metrics;
pub mod vcs;

pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
pub use vcs::{get_vc, list_vcs};
