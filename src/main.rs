use buyside::adapter::YahooQuoteClient;
use buyside::app::App;
use buyside::cli::{report, Cli};
use buyside::config::Config;
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Some(budget) = cli.budget else {
        report::no_budget();
        return;
    };

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }
    config.init_logging();

    info!(budget, window = cli.window, "buyside starting");

    let provider = YahooQuoteClient::from_config(&config.provider);
    if let Err(e) = App::run(&config, &provider, budget, cli.window).await {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }

    info!("buyside done");
}
