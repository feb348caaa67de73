use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// The main server entrypoint for the API.
#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	if dotenvy::dotenv().is_err() {
		// `.env` files missing is not necessarily an issue (e.g. in CI), but
		// we log it to stderr just in case.
		eprintln!("WARNING: no `.env` file found");
	}

	tracing_subscriber::fmt()
		.pretty()
		.with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
		.with_env_filter(EnvFilter::from_default_env())
		.init();

	let config = product_api::runtime::Config::new()?;
	let tcp_listener = TcpListener::bind(config.listen_addr()).await?;
	let server = product_api::server();

	tracing::info!("listening on {}", tcp_listener.local_addr()?);

	axum::serve(tcp_listener, server).await?;

	Ok(())
}
