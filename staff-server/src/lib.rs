//! staff-server: companies, departments and employees over HTTP/JSON
//!
//! Request flow: [`api`] handler → [`usecase`] → [`repository`] → [`db`].

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod middleware;
pub mod repository;
pub mod state;
pub mod usecase;

pub use config::Config;
pub use state::AppState;
