use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use route_server::network::NetworkIndex;
use route_server::schedule::{
    StationDirectory, TrainDirectory, load_schedule, load_train_info,
};
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Reference data locations, overridable from the environment
    let schedule_path = PathBuf::from(
        std::env::var("SCHEDULE_CSV").unwrap_or_else(|_| "data/train_schedule.csv".to_string()),
    );
    let train_info_path = PathBuf::from(
        std::env::var("TRAIN_INFO_CSV").unwrap_or_else(|_| "data/train_info.csv".to_string()),
    );

    // Load reference data (fail fast if unavailable)
    let entries = load_schedule(&schedule_path).expect("Failed to load schedule CSV");
    let train_info = load_train_info(&train_info_path).expect("Failed to load train info CSV");

    let stations = StationDirectory::from_entries(&entries);
    let trains = TrainDirectory::from_entries(&train_info);
    let index = NetworkIndex::build(entries);

    info!(
        stations = index.station_count(),
        trains = index.train_count(),
        named_stations = stations.len(),
        named_trains = trains.len(),
        "network index built"
    );

    let state = AppState::new(index, stations, trains);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Railway Route Finder listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET /health        - Health check");
    println!("  GET /api/stations  - List known stations");
    println!("  GET /route         - Find a route (?from=CODE&to=CODE)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
