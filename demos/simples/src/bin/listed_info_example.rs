use jquants_client::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Loads .env, then JQUANTS_MAIL_ADDRESS / JQUANTS_PASSWORD / JQUANTS_BASE_URL
    let config = Config::new();
    if !config.credentials.is_complete() {
        error!("Set JQUANTS_MAIL_ADDRESS and JQUANTS_PASSWORD to run this example");
        return Ok(());
    }

    info!("Authenticating against {}", config.rest_api.base_url);
    let auth = Auth::from_config(&config)?;
    let tokens = auth.authenticate(&config.credentials).await?;
    info!("✓ Authenticated");

    let client = JQuantsClient::from_config(&tokens.id_token, &config)?;
    let page = client.get_listed_info(None).await?;
    info!("Received {} listed issues", page.info.len());

    for item in page.info.iter().take(10) {
        info!("{} {}", item.code, item.company_name);
    }
    if let Some(key) = &page.pagination_key {
        info!("pagination_key: {}", key);
    }

    Ok(())
}
