pub mod api_models;
pub mod db;
pub mod error;
pub mod handlers;
mod router;
pub mod service;

pub use router::router;
