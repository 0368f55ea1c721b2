use std::time::Duration;

use anyhow::Context;
use axum::{
    ServiceExt,
    body::Body,
    extract::Request,
    http::Response,
};
use time::UtcOffset;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{Span, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mongolog::{app::App, config::ServerConfig, db::connect, layers::log::LogRepoLayer, utils::get_request_id};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Use UTC timestamps
    let offset = UtcOffset::UTC;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .flatten_event(true)
                .with_timer(fmt::time::OffsetTime::new(
                    offset,
                    time::format_description::well_known::Rfc3339,
                ))
                .with_level(true)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    // Load configuration
    let settings = ServerConfig::load()?;
    info!(
        msg = "Loaded configuration",
        store_uri = %settings.store.uri,
        database = %settings.store.database,
        collection = %settings.store.collection
    );

    // Connect to MongoDB; unreachability at startup is fatal
    let client = connect(&settings.store.uri, settings.store.connect_timeout())
        .await
        .context("failed to connect to MongoDB")?;

    let app = App::new()
        .router()
        .layer(LogRepoLayer::mongo(
            &client,
            &settings.store.database,
            &settings.store.collection,
            settings.store.op_timeout(),
        ))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .on_request(|req: &Request<Body>, _span: &Span| {
                    info!(
                        msg = "Request initiated",
                        req_id = %get_request_id(req.extensions()),
                        method = %req.method(),
                        uri = %req.uri()
                    )
                })
                .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        msg = "Request processed",
                        req_id = %get_request_id(res.extensions()),
                        status = %res.status().as_u16(),
                        latency = ?latency
                    )
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid::default()));

    let addr = format!("{}:{}", settings.server.address, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(msg = "Starting server", addr = %addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .context("server terminated")?;

    Ok(())
}
