pub mod vc;

pub use vc::{COUNTRY_FIELD, ID_FIELD, NAME_FIELD};
