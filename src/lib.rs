pub mod config;
pub mod models;
pub mod openapi;
pub mod record;
pub mod routes;
pub mod validation;
