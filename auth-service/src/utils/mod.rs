pub mod bearer;
pub mod config;
pub mod consts;

pub use bearer::*;
pub use config::Config;
pub use consts::*;
