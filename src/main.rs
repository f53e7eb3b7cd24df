use blog_core::application::{
    ports::{ClockPort, UrlGeneratorPort},
    queries::pages::ShowIndexQuery,
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::domain::entry::BlogEntryStore;
use blog_core::infrastructure::{
    database, repositories::SqliteBlogEntryStore, time::SystemClock, url::BaseUrlGenerator,
};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Load configuration, open the entry store, register every blog and write
/// each blog's index page data to stdout as JSON.
async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let store: Arc<dyn BlogEntryStore> = Arc::new(SqliteBlogEntryStore::new(Arc::clone(&pool)));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let urls: Arc<UrlGeneratorPort> = Arc::new(BaseUrlGenerator::new(config.app_url())?);

    let services = ApplicationServices::from_definitions(
        config.blog_definitions()?,
        store,
        clock,
        urls,
    )?;
    tracing::info!(blogs = services.registry.len(), "blogs configured");

    let mut stdout = std::io::stdout().lock();
    for blog in services.registry.all() {
        let page = services
            .pages
            .show_index(ShowIndexQuery {
                blog_id: blog.id().to_string(),
            })
            .await?;
        serde_json::to_writer_pretty(&mut stdout, &page)?;
        writeln!(stdout)?;
    }

    Ok(())
}

fn init_tracing(filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
