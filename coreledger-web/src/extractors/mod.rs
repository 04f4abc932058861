pub mod json;
pub mod path;
pub mod query;

pub use json::ValidatedJson;
pub use path::IdPath;
pub use query::ListQuery;
