//! Process wiring for the scraper binary.
mod app;
mod cli;
mod effects;
mod signals;
mod sink;

pub use app::run_app;
