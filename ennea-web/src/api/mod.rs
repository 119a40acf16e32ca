//! HTTP API handlers for ennea-web

pub mod articles;
pub mod buildinfo;
pub mod error;
pub mod health;
pub mod quiz;
pub mod results;
pub mod types;

pub use articles::{get_article, list_articles};
pub use buildinfo::get_build_info;
pub use error::ApiError;
pub use health::health_routes;
pub use quiz::{list_questions, submit_test};
pub use results::get_result;
pub use types::{get_type, list_types};
