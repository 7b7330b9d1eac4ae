use goldminer::bot::{run_dispatcher, Config};

#[tokio::main]
pub async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting GoldMiner bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    let bot = teloxide::Bot::new(&config.token);

    log::info!(
        "GoldMiner bot started successfully! Ledger file: {}",
        config.ledger_file.display()
    );

    run_dispatcher(bot, config).await;
}
