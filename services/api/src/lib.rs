mod cli;
mod commands;
mod infra;
mod questionnaire;
mod routes;
mod server;

use risk_auditor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
