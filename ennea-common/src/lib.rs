//! # Ennea Common Library
//!
//! Shared code for the Enneagram quiz service including:
//! - Scoring engine (question table, categories, classification)
//! - Personality type catalog
//! - Article catalog
//! - Result store (in-memory and SQLite)
//! - Configuration loading
//! - Utility functions

pub mod articles;
pub mod config;
pub mod db;
pub mod error;
pub mod personality;
pub mod scoring;
pub mod time;
pub mod uuid_utils;

pub use error::{Error, Result};
pub use scoring::{classify, AnswerSet, Category, Classification, ScoreVector};
