pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod health;
pub mod logging;
pub mod model;
pub mod nav;
pub mod output;
pub mod settings;

#[cfg(test)]
mod tests;
