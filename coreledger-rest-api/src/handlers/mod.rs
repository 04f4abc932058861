pub mod account_types;
pub mod accounts;
pub mod health;
pub mod todos;

// Re-export handler functions
pub use account_types::*;
pub use accounts::*;
pub use health::*;
pub use todos::*;
