mod auth;
mod contents;
mod token;

pub use auth::*;
pub use contents::*;
pub use token::*;
