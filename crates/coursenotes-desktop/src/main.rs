//! Course Notes desktop application
//!
//! Renders the course notes page: semester tabs, the note upload form with
//! its image preview, and inline-editable note cards.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coursenotes=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Course Notes...");

    let config =
        Config::new().with_window(WindowBuilder::new().with_title("Course Notes").with_resizable(true));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
