use clap::Parser;
use wikiquiz::{backend::BackendClient, names, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the quiz-generation backend.
    #[arg(long, env = "BACKEND_URL", default_value = names::DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,wikiquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState::new(BackendClient::new(args.backend_url));
    let routes = wikiquiz::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, routes).await?;

    Ok(())
}
