use holocron::server::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing();

    tracing::info!("Starting server");

    let result = async {
        let db = startup::connect_to_database(&config).await?;
        startup::serve(&config, db).await
    }
    .await;

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
