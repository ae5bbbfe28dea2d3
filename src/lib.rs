pub mod auth;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod files;
pub mod generator;
pub mod vault;
