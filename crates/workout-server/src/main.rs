use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use workout_core::schedule;
use workout_server::settings::{LogFormat, Settings};
use workout_server::{AppState, router};
use workout_storage::backend::FileBackend;
use workout_storage::catalog;
use workout_storage::store::WorkoutStore;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(settings.log_format);

    let config = catalog::load_tracker_config(&settings.config_file).await?;

    let store = WorkoutStore::new(Arc::new(FileBackend::new(&settings.data_file)));
    store.initialize(schedule::today()).await?;

    let public_dir = settings.public_dir.as_deref().filter(|dir| dir.is_dir());
    if public_dir.is_none() {
        tracing::info!("no static client directory, serving API only");
    }

    let app = router(AppState::new(config, store), public_dir);

    let addr = settings.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(data_file = %settings.data_file.display(), "workout tracker listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
