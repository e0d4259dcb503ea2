use anyhow::Context;
use env_logger::Env;

use launch_dash::app;
use launch_dash::config::DashboardConfig;
use launch_dash::data::loader::load_file;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    let dataset = load_file(&config.dataset_path).with_context(|| {
        format!(
            "loading launch dataset from {}",
            config.dataset_path.display()
        )
    })?;
    log::info!(
        "Loaded {} launches from {} sites {:?}, booster categories {:?}",
        dataset.len(),
        dataset.sites().len(),
        dataset.sites(),
        dataset.booster_categories()
    );

    app::serve(config, dataset).await?;
    Ok(())
}
