mod api;
mod app;
mod contacts;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;
use tracing_subscriber::EnvFilter;

fn main() {
    // `log` records from the rest of the crate go through the tracing-log bridge.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = Application::builder()
        .application_id("com.example.Contacts")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run();
}
