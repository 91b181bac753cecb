#[tokio::main]
async fn main() {
    if let Err(err) = app::run().await {
        eprintln!("server failed to start: {err}");
        std::process::exit(1);
    }
}

mod api;
mod app;
mod dto;
mod error;
mod models;
mod repositories;
mod telemetry;
mod usecases;
