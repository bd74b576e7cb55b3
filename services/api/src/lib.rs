mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use capability_diagnostic::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
