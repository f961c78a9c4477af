use reqwest::Url;

use crate::{environment::Auth0Config, error::CoffeeShopError};

/// Full domain of the Auth0 tenant, e.g. `dev-r84ac23q.us.auth0.com`.
pub fn tenant_domain(auth0: &Auth0Config) -> String {
    format!("{}.auth0.com", auth0.url)
}

/// The hosted-login page for this app registration. The identity provider
/// redirects to `callback_url` once the flow completes.
pub fn authorize_url(auth0: &Auth0Config) -> Result<Url, CoffeeShopError> {
    let mut url = Url::parse(&format!("https://{}/authorize", tenant_domain(auth0)))?;
    url.query_pairs_mut()
        .append_pair("audience", &auth0.audience)
        .append_pair("response_type", "token")
        .append_pair("client_id", &auth0.client_id)
        .append_pair("redirect_uri", &auth0.callback_url);

    Ok(url)
}

/// The tenant's token endpoint.
pub fn token_url(auth0: &Auth0Config) -> Result<Url, CoffeeShopError> {
    let url = Url::parse(&format!("https://{}/oauth/token", tenant_domain(auth0)))?;

    Ok(url)
}
