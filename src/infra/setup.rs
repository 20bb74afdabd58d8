use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, db::run_migrations, postgres_persistence},
    use_cases::{
        analytics::{AnalyticsRepo, AnalyticsUseCases},
        waitlist::{WaitlistRepo, WaitlistUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let postgres_arc = Arc::new(postgres_persistence(&config).await?);

    if config.run_migrations {
        run_migrations(postgres_arc.pool()).await?;
    }

    let waitlist_repo_arc = postgres_arc.clone() as Arc<dyn WaitlistRepo>;
    let analytics_repo_arc = postgres_arc.clone() as Arc<dyn AnalyticsRepo>;

    let waitlist_use_cases = WaitlistUseCases::new(waitlist_repo_arc, analytics_repo_arc.clone());
    let analytics_use_cases = AnalyticsUseCases::new(analytics_repo_arc);

    Ok(AppState {
        config: Arc::new(config),
        waitlist_use_cases: Arc::new(waitlist_use_cases),
        analytics_use_cases: Arc::new(analytics_use_cases),
    })
}

pub fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "waitlist_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don't show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped when the file can't be opened
    let json_layer = File::create(log_file).ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
