use archive_search_gateway::autocomplete::handlers::handle_autocomplete;
use archive_search_gateway::schema::ArchiveSchema;
use archive_search_gateway::search::handlers::handle_search;
use archive_search_gateway::solr::executor::{HttpQueryExecutor, QueryExecutor};
use archive_search_gateway::tags::handlers::handle_get_tags;
use axum::{extract::Extension, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: {} --bind <addr:port> --engine <url>", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:8080 --engine http://localhost:8983/solr/archive",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut engine_url: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--engine" => {
                engine_url = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");
    let engine_url = engine_url.expect("--engine is required");

    tracing::info!("Translating queries for engine at {}", engine_url);

    let schema = Arc::new(ArchiveSchema::new());
    let executor: Arc<dyn QueryExecutor> = Arc::new(HttpQueryExecutor::new(&engine_url));

    let app = Router::new()
        .route("/tags", get(handle_get_tags))
        .route("/search", get(handle_search))
        .route("/autocomplete", get(handle_autocomplete))
        .layer(Extension(schema))
        .layer(Extension(executor));

    tracing::info!("Gateway listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
