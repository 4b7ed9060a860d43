pub mod acl;
pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod ingest;
pub mod models;
pub mod render;
pub mod repository;
pub mod seed;
pub mod utils;
pub mod views;
