use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::CoffeeShopError;

/// Settings for the Auth0 tenant this client authenticates against.
///
/// All four values must belong to the same provider-side app registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth0Config {
    /// The Auth0 domain prefix, e.g. `dev-r84ac23q.us`
    pub url: String,
    /// The audience set for the Auth0 app
    pub audience: String,
    /// The client id generated for the Auth0 app
    pub client_id: String,
    /// Where Auth0 redirects to after login completes
    pub callback_url: String,
}

/// The environment configuration consumed at startup by the HTTP client
/// and the authentication layer. Loaded once, immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: Auth0Config,
}

impl Environment {
    /// The development variant: local Flask API server and the dev tenant.
    pub fn development() -> Self {
        Self {
            production: false,
            api_server_url: "http://127.0.0.1:5000".into(),
            auth0: Auth0Config {
                url: "dev-r84ac23q.us".into(),
                audience: "udcoffeeshop".into(),
                client_id: "OjTedZii2WnuE9Rjn5Xzt6QTlR5MUn6s".into(),
                callback_url: "http://localhost:8100".into(),
            },
        }
    }

    /// The production variant. Deployment-specific origins are expected to
    /// be overridden through `Environment.toml` or `COFFEESHOP_*` variables.
    pub fn production() -> Self {
        Self {
            production: true,
            api_server_url: "https://api.udcoffeeshop.com".into(),
            auth0: Auth0Config {
                callback_url: "https://udcoffeeshop.com".into(),
                ..Self::development().auth0
            },
        }
    }

    /// Builds the environment by layering, in increasing precedence: the
    /// built-in variant selected by `COFFEESHOP_PRODUCTION`, an optional
    /// `Environment.toml` file, and `COFFEESHOP_`-prefixed variables
    /// (nested fields use a double underscore, e.g. `COFFEESHOP_AUTH0__URL`).
    pub fn build() -> Result<Self, CoffeeShopError> {
        let variant = if build_mode_is_production() {
            Self::production()
        } else {
            Self::development()
        };

        // COFFEESHOP_PRODUCTION only selects the variant; keep it out of
        // the field merge so forms like "1" don't hit bool deserialization.
        let environment: Self = Figment::from(Serialized::defaults(variant))
            .merge(Toml::file("Environment.toml"))
            .merge(
                Env::prefixed("COFFEESHOP_")
                    .ignore(&["production"])
                    .split("__"),
            )
            .extract()?;

        environment.validate()?;

        Ok(environment)
    }

    /// Shape checks on the loaded record. Values that are well-formed here
    /// can still fail downstream, e.g. an unreachable API server.
    pub fn validate(&self) -> Result<(), CoffeeShopError> {
        absolute_url("api_server_url", &self.api_server_url)?;
        absolute_url("auth0.callback_url", &self.auth0.callback_url)?;
        non_empty("auth0.url", &self.auth0.url)?;
        non_empty("auth0.audience", &self.auth0.audience)?;
        non_empty("auth0.client_id", &self.auth0.client_id)?;

        Ok(())
    }
}

fn build_mode_is_production() -> bool {
    std::env::var("COFFEESHOP_PRODUCTION")
        .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true"))
        .unwrap_or(false)
}

fn absolute_url(field: &'static str, value: &str) -> Result<(), CoffeeShopError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|err| CoffeeShopError::InvalidEnvironment {
            field,
            reason: err.to_string(),
        })
}

fn non_empty(field: &'static str, value: &str) -> Result<(), CoffeeShopError> {
    if value.is_empty() {
        Err(CoffeeShopError::InvalidEnvironment {
            field,
            reason: "must not be empty".into(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_is_the_default_variant() {
        figment::Jail::expect_with(|_| {
            let environment = Environment::build().unwrap();
            assert_eq!(environment, Environment::development());
            Ok(())
        });
    }

    #[test]
    fn production_flag_selects_production_variant() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("COFFEESHOP_PRODUCTION", "true");
            let environment = Environment::build().unwrap();

            assert!(environment.production);
            assert_eq!(environment, Environment::production());
            Ok(())
        });
    }

    #[test]
    fn production_flag_accepts_numeric_form() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("COFFEESHOP_PRODUCTION", "1");
            let environment = Environment::build().unwrap();

            assert!(environment.production);
            assert_eq!(environment, Environment::production());
            Ok(())
        });
    }

    #[test]
    fn file_overrides_variant_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "Environment.toml",
                r#"
                    api_server_url = "http://localhost:5001"

                    [auth0]
                    audience = "staging-coffeeshop"
                "#,
            )?;
            let environment = Environment::build().unwrap();

            assert_eq!(environment.api_server_url, "http://localhost:5001");
            assert_eq!(environment.auth0.audience, "staging-coffeeshop");
            // untouched fields keep the variant defaults
            assert_eq!(environment.auth0.url, "dev-r84ac23q.us");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file_and_variant() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("Environment.toml", r#"api_server_url = "http://localhost:5001""#)?;
            jail.set_env("COFFEESHOP_API_SERVER_URL", "http://localhost:5002");
            jail.set_env("COFFEESHOP_AUTH0__CLIENT_ID", "aaaabbbbccccdddd");
            let environment = Environment::build().unwrap();

            assert_eq!(environment.api_server_url, "http://localhost:5002");
            assert_eq!(environment.auth0.client_id, "aaaabbbbccccdddd");
            Ok(())
        });
    }

    #[test]
    fn record_has_exactly_the_expected_shape() {
        let json = serde_json::to_value(Environment::development()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["api_server_url", "auth0", "production"]);
        assert!(object["production"].is_boolean());

        let mut auth0_keys: Vec<&str> = object["auth0"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        auth0_keys.sort_unstable();
        assert_eq!(auth0_keys, ["audience", "callback_url", "client_id", "url"]);
    }

    #[test]
    fn both_variants_validate() {
        Environment::development().validate().unwrap();
        Environment::production().validate().unwrap();
    }

    #[test]
    fn validate_rejects_relative_api_server_url() {
        let mut environment = Environment::development();
        environment.api_server_url = "coffee".into();

        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            CoffeeShopError::InvalidEnvironment {
                field: "api_server_url",
                ..
            }
        ));
    }

    #[test]
    fn validate_rejects_empty_audience() {
        let mut environment = Environment::development();
        environment.auth0.audience = String::new();

        let err = environment.validate().unwrap_err();
        assert!(matches!(
            err,
            CoffeeShopError::InvalidEnvironment {
                field: "auth0.audience",
                ..
            }
        ));
    }
}
