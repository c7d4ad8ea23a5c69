use birdfarm_shop::models::config::ServerConfig;
use birdfarm_shop::run;
use config::Config;
use dotenvy::dotenv;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?
        .try_deserialize::<ServerConfig>()
        .map_err(|e| std::io::Error::other(format!("Invalid configuration: {e}")))?;

    run(server_config).await
}
