pub mod auth_request;
pub mod auth_response;
pub mod claim;
pub mod contents_response;
pub mod credentials;
pub mod data_stores;
pub mod password;
pub mod secret;
pub mod token;

pub use auth_request::*;
pub use auth_response::*;
pub use claim::*;
pub use contents_response::*;
pub use credentials::*;
pub use data_stores::*;
pub use password::*;
pub use secret::*;
pub use token::*;
