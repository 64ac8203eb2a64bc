use std::net::SocketAddr;
use book_registry::catalog::controller::router;
use book_registry::core::controller::AppState;
use book_registry::core::domain::Configuration;
use book_registry::utils::logging::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = AppState::new(Configuration::new("main"));
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = router(state);

    tracing::info!("Library Management System API running at http://localhost:{}", addr.port());
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
