use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portfolio_site::{
    constants::START_TIME,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    views::templates,
    AppState,
};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = match AppConfig::new() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing(false);
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.is_production());
    tracing::info!("Loaded configuration: {:?}", config);
    for warning in config.warnings() {
        tracing::warn!("{}", warning);
    }

    once_cell::sync::Lazy::force(&START_TIME);
    templates::init()?;

    let app_state = web::Data::new(AppState::new(&config)?);
    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal() => {}
    }

    Ok(())
}
