#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use satchel::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::extract::DefaultBodyLimit;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, model::app::AppState, startup, storage::PhotoStorage,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let db = match startup::connect_to_database(&config).await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!("Failed to prepare database: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = startup::prepare_media_root(&config.media_root).await {
            tracing::error!(
                "Failed to prepare media root {}: {}",
                config.media_root.display(),
                e
            );
            std::process::exit(1);
        }

        tracing::info!(
            "Starting server, storing photos under {}",
            config.media_root.display()
        );

        let state = AppState {
            db,
            photos: PhotoStorage::new(config.media_root.clone()),
        };

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.max_upload_bytes));
        router = router.merge(server_routes);

        Ok(router)
    })
}
