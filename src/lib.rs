pub mod app;
pub mod config;
pub mod db;
pub mod handlers;
pub mod layers;
pub mod models;
pub mod repositories;
pub mod utils;
