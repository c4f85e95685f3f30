use crime_predictor::{
    api::{build_router, AppState},
    config::Config,
    ml::{CrimePredictor, ProbabilityModel, SoftmaxClassifier},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crime_predictor=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        default_config()
    });

    tracing::info!("Starting crime-predictor v{}", env!("CARGO_PKG_VERSION"));

    // Load the model once; requests share a read-only reference for the
    // process lifetime
    let model: Option<Arc<dyn ProbabilityModel>> =
        match SoftmaxClassifier::load(&config.model.path) {
            Ok(model) => {
                tracing::info!(
                    "Model loaded from {} ({} classes, {} features)",
                    config.model.path.display(),
                    model.n_classes(),
                    model.n_features()
                );
                Some(Arc::new(model))
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load model from {}: {}",
                    config.model.path.display(),
                    e
                );
                tracing::warn!("Serving without a model; predict requests will be rejected");
                None
            }
        };

    // The static directory is served at /; create it if missing so startup
    // never fails on a fresh checkout
    if !config.server.static_dir.exists() {
        std::fs::create_dir_all(&config.server.static_dir)?;
        tracing::info!(
            "Created static directory {}",
            config.server.static_dir.display()
        );
    }

    let predictor = Arc::new(CrimePredictor::new(model));
    let app_state = AppState::new(predictor);
    let app = build_router(app_state, &config.server.static_dir);

    // Start HTTP server
    let http_addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    tracing::info!("HTTP API server listening on http://{}", http_addr);
    tracing::info!("   Health check: http://{}/api/health", http_addr);
    tracing::info!("   Prediction API: http://{}/api/predict", http_addr);

    let http_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = http_handle => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}

fn default_config() -> Config {
    use crime_predictor::config::*;

    Config {
        server: ServerConfig {
            host: "0.0.0.0".to_string(),
            http_port: 8000,
            static_dir: "./frontend".into(),
        },
        model: ModelConfig {
            path: "./data/models/crime_classifier.json".into(),
        },
        observability: ObservabilityConfig {
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "crime-predictor".to_string(),
        },
    }
}
