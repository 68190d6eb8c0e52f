// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use blog_core::config::AppConfig;
use blog_core::presentation::http::openapi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let output_path = openapi::snapshot_path();
    openapi::write_openapi_snapshot(config.app_name())?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
