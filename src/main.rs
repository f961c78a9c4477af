mod api;
mod api_models;
mod auth;
mod common;
mod environment;
mod error;

use api::CoffeeShopClient;
use common::ENVIRONMENT;
use error::CoffeeShopError;
use tracing::{error, info};

fn main() -> Result<(), CoffeeShopError> {
    tracing_subscriber::fmt().init();

    let environment = ENVIRONMENT.clone();
    info!(
        production = environment.production,
        api_server_url = %environment.api_server_url,
        "Loaded environment configuration"
    );

    let client = CoffeeShopClient::new(environment)?;
    info!("Login page: {}", auth::authorize_url(&client.environment.auth0)?);

    match client.get_drinks() {
        Ok(drinks) => {
            info!("Menu has {} drinks", drinks.len());
            for drink in drinks {
                info!("{} ({} recipe parts)", drink.title, drink.recipe.len());
            }
        }
        Err(err) => error!("Unexpected HTTP error while fetching drinks: {err}"),
    }

    Ok(())
}
