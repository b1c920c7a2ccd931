pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod provider;
pub mod scrapper;
pub mod searcher;
