//! Database models, initialization and the result store

pub mod init;
pub mod models;
pub mod results;

pub use init::*;
pub use models::*;
pub use results::*;
