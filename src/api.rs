use reqwest::{blocking::Client, Url};

use crate::{
    api_models::{CreateDrinkResponse, DeleteDrinkResponse, Drink, DrinkBody, DrinksResponse},
    environment::Environment,
    error::CoffeeShopError,
};

/// The coffee-shop API client. Holds the validated environment and the
/// underlying HTTP client; `api_server_url` is the base of every request.
pub struct CoffeeShopClient {
    pub environment: Environment,
    pub client: Client,
    base_url: Url,
}

impl CoffeeShopClient {
    pub fn new(environment: Environment) -> Result<Self, CoffeeShopError> {
        environment.validate()?;

        let client = Client::builder().build()?;
        let base_url = Url::parse(&environment.api_server_url)?;

        Ok(Self {
            environment,
            client,
            base_url,
        })
    }

    /// Resolves a request path against the configured API server URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, CoffeeShopError> {
        Ok(self.base_url.join(path)?)
    }

    /// Fetches the public drinks listing (short recipe representation).
    pub fn get_drinks(&self) -> reqwest::Result<Vec<Drink>> {
        let res: DrinksResponse = self
            .client
            .get(format!("{}/drinks", self.environment.api_server_url))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(res.drinks)
    }

    /// Fetches the full drink details. Requires the `get:drinks-detail`
    /// permission on the access token.
    pub fn get_drinks_detail(&self, access_token: &str) -> reqwest::Result<Vec<Drink>> {
        let res: DrinksResponse = self
            .client
            .get(format!(
                "{}/drinks-detail",
                self.environment.api_server_url
            ))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(res.drinks)
    }

    pub fn create_drink(&self, access_token: &str, body: &DrinkBody) -> reqwest::Result<Drink> {
        let res: CreateDrinkResponse = self
            .client
            .post(format!("{}/drinks", self.environment.api_server_url))
            .header("Authorization", format!("Bearer {access_token}"))
            .json(body)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(res.drinks)
    }

    pub fn update_drink(
        &self,
        access_token: &str,
        drink_id: i64,
        body: &DrinkBody,
    ) -> reqwest::Result<Vec<Drink>> {
        let res: DrinksResponse = self
            .client
            .patch(format!(
                "{}/drinks/{drink_id}",
                self.environment.api_server_url
            ))
            .header("Authorization", format!("Bearer {access_token}"))
            .json(body)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(res.drinks)
    }

    /// Deletes a drink and returns the id the server reports back.
    pub fn delete_drink(&self, access_token: &str, drink_id: i64) -> reqwest::Result<i64> {
        let res: DeleteDrinkResponse = self
            .client
            .delete(format!(
                "{}/drinks/{drink_id}",
                self.environment.api_server_url
            ))
            .header("Authorization", format!("Bearer {access_token}"))
            .send()?
            .error_for_status()?
            .json()?;

        Ok(res.drinks)
    }
}
