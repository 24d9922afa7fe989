use anyhow::Result;
use hr_assistant::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
