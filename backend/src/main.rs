//! # StudyHub Backend Service
//!
//! Thin entry point that delegates to the server module for setup.

use studyhub_backend::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    start_server().await
}
