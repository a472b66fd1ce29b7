mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use decision_notice::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
