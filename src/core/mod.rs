//! Configuration, rules and the data the relay passes around

pub mod config;
pub mod directory;
pub mod models;
pub mod rules;
