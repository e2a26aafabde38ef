pub mod vcs;

pub use vcs::{record_to_json, stringify_id, ListMeta, VcListParams, VcListResponse};
