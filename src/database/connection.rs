use mongodb::{
    Client, Database,
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
};

use crate::{config::DatabaseConfig, error::Result};

pub async fn connect(config: &DatabaseConfig) -> Result<(Client, Database)> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some("shopery-server".to_string());

    if config.stable_api {
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    }

    let client = Client::with_options(options)?;
    let db = client.database(&config.name);

    check_health(&db).await?;

    tracing::info!("Connected to MongoDB database {}", config.name);

    Ok((client, db))
}

pub async fn check_health(db: &Database) -> Result<()> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
