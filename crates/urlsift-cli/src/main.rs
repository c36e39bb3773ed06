mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI, init logging, and dispatch.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("urlsift error: {:#}", err);
        std::process::exit(1);
    }
}
