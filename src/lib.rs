pub mod auth;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod mappers;
pub mod models;
pub mod uploads;

pub use db::create_pool;
