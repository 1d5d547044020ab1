pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod seed;
pub mod setup;
pub mod shutdown;
pub mod telemetry;
