mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use recircle_classify::GeminiClassifier;
use recircle_core::{FeedbackStore, ImageClassifier, ItemStore, NearbyFinder};
use recircle_flow::LifecycleService;
use recircle_geo::{FacilityResolver, OverpassClient};
use recircle_store::{MemoryFeedbackStore, MemoryItemStore};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = recircle_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, addr = %config.bind_addr, "starting recircle server");

    let classifier = GeminiClassifier::with_base_url(
        &config.classifier_api_key,
        &config.classifier_model,
        config.classifier_timeout_secs,
        &config.classifier_base_url,
    )?;
    let overpass = OverpassClient::with_base_url(
        config.geodata_timeout_secs,
        &config.overpass_base_url,
    )?;
    let resolver = FacilityResolver::new(overpass);

    let items = Arc::new(MemoryItemStore::new());
    let feedback = Arc::new(MemoryFeedbackStore::new());

    let flow = Arc::new(LifecycleService::new(
        Arc::new(classifier) as Arc<dyn ImageClassifier>,
        Arc::new(resolver) as Arc<dyn NearbyFinder>,
        items as Arc<dyn ItemStore>,
    ));

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let app = build_app(AppState {
        flow,
        feedback: feedback as Arc<dyn FeedbackStore>,
        upload_dir: config.upload_dir.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
