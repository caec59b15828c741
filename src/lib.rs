pub mod app;
pub mod db;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod query;
pub mod routes;
