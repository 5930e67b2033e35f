mod collection;
pub mod models;

pub use collection::CourtCollection;
pub use models::*;
