#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod platform;
mod theme;

use tracing::Level;

fn main() {
    // launch() installs a default logger when none is set
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already initialized: {}", e);
    }

    tracing::info!("Starting portfolio");

    dioxus::launch(app::App);
}
