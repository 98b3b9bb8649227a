pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod glossary;
pub mod model;
pub mod navigator;
pub mod notifications;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::HubApp;
pub use error::{HubError, Result};
