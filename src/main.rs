use finals_scrape::config::FinalsConfig;
use finals_scrape::core::finals::FinalsClient;
use finals_scrape::core::reconciler::DayTokenReconciler;
use finals_scrape::core::{report, roster};
use finals_scrape::error::finals::FinalsError;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("finals_scrape=info"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(FinalsConfig::default()).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

async fn run(config: FinalsConfig) -> Result<(), FinalsError> {
    let client = FinalsClient::new(&config.finals_url)?;
    let finals = client.get_finals().await?;

    let sessions = roster::read_sessions_from_path(&config.input_path)?;
    let classes = roster::group_by_class(sessions);

    let reconciler = DayTokenReconciler::new(config.day_priority.clone());
    let matched = report::match_classes(&finals, &classes, &reconciler);
    log::info!("{} classes matched, {} without a final", matched.rows.len(), matched.misses.len());

    report::write_rows_to_path(&config.output_path, &matched.rows)?;
    println!("Wrote {}", config.output_path.display());
    Ok(())
}
