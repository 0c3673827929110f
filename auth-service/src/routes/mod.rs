pub(crate) mod auth;
pub(crate) mod contents;
pub(crate) mod health;

// re-export items from sub-modules
pub use auth::*;
pub use contents::*;
pub use health::*;
