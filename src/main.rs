use clap::Parser;
use gridiron::cli::{self, output, Cli};
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::execute(cli).await {
        error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
