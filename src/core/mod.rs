//! Core client engine module

pub mod batch;
pub mod client;
pub mod command;
pub mod config;
pub mod errors;
pub mod models;
pub mod response;
pub mod transport;
