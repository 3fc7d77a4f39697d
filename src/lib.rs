pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
