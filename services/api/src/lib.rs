mod cli;
mod infra;
mod routes;
mod server;

use astromatch::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
