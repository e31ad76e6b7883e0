//! Wardrobe catalog service with rule-based and scored outfit suggestions.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
