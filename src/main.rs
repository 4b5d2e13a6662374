use std::process::ExitCode;

use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout is reserved for the result line
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_| "balance_exporter=info".into())
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    ExitCode::from(balance_exporter::cli::run(&args).await)
}
