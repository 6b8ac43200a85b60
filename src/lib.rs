pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod models;
pub mod server;
pub mod state;
pub mod store;
pub mod views;
