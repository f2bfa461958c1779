//! Salary report server.
//!
//! Loads one data snapshot at startup and serves salary reports over HTTP.
//!
//! Environment:
//! - `SALARY_DATA_DIR`: snapshot directory (default `./data/sample`)
//! - `SALARY_BIND_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use teaching_salary_engine::api::{AppState, create_router};
use teaching_salary_engine::store::{DataLoader, SectionReader};

const DEFAULT_DATA_DIR: &str = "./data/sample";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let data_dir = std::env::var("SALARY_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
    let bind_addr =
        std::env::var("SALARY_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());

    let loader = DataLoader::load(&data_dir)?;
    info!(
        data_dir = %data_dir,
        sections = loader.records().class_sections().len(),
        teachers = loader.records().teacher_count(),
        "Loaded data snapshot"
    );

    let router = create_router(AppState::new(loader));
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Salary report server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
