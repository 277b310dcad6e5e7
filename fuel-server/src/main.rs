use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use fuel_server::cache::CachedRouteProvider;
use fuel_server::config::{RouteSource, ServerConfig};
use fuel_server::optimize::RouteOptimizer;
use fuel_server::planner::{PlannerConfig, RefuelPlanner};
use fuel_server::routing::{OrsClient, RouteProvider, StaticRouteProvider};
use fuel_server::stations::InMemoryStations;
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (stations, report) = InMemoryStations::from_csv(&config.stations_csv)
        .with_context(|| format!("loading stations from {}", config.stations_csv.display()))?;
    tracing::info!(
        loaded = stations.len().await,
        skipped = report.skipped,
        duplicates = report.duplicates,
        "loaded fuel stations"
    );
    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "some station rows were invalid");
    }

    spawn_station_reload(stations.clone(), config.station_reload_interval);

    match config.route_source.clone() {
        RouteSource::Fixture(path) => {
            let routes = StaticRouteProvider::from_geojson_file(&path)
                .with_context(|| format!("loading route fixture {}", path.display()))?;
            tracing::warn!(fixture = %path.display(), "serving a fixed route for every request");
            serve(&config, routes, stations).await
        }
        RouteSource::OpenRouteService(ors) => {
            let client = OrsClient::new(ors)?;
            let routes = CachedRouteProvider::new(client, &config.route_cache);
            serve(&config, routes, stations).await
        }
    }
}

async fn serve<R>(config: &ServerConfig, routes: R, stations: InMemoryStations) -> anyhow::Result<()>
where
    R: RouteProvider + 'static,
{
    let planner = RefuelPlanner::new(PlannerConfig::default().with_corridor_miles(config.corridor_miles));
    let state = AppState::new(RouteOptimizer::new(routes, stations, planner));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "fuel route planner listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Reload the station file on a fixed interval, keeping the old data on failure.
fn spawn_station_reload(stations: InMemoryStations, every: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match stations.reload().await {
                Ok(report) => tracing::info!(
                    loaded = report.stations.len(),
                    skipped = report.skipped,
                    "reloaded fuel stations"
                ),
                Err(e) => tracing::warn!(error = %e, "failed to reload fuel stations, keeping previous data"),
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
