use holonet::server::{config::Config, model::app::AppState, router, startup};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), holonet::server::error::Error> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState::new(db, config.favorites_user_id))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!(
        "Starting server on {} (favorites user {})",
        config.bind_address(),
        config.favorites_user_id
    );

    axum::serve(listener, app).await?;

    Ok(())
}
