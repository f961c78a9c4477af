use figment::Error as ConfigError;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum CoffeeShopError {
    #[error("Configuration Error: {source:#?}")]
    ConfigError {
        #[from]
        source: ConfigError,
    },

    #[error("HTTP Error: {source:#?}")]
    HTTPError {
        #[from]
        source: reqwest::Error,
    },

    #[error("URL Error: {source:#?}")]
    URLError {
        #[from]
        source: url::ParseError,
    },

    #[error("Invalid environment value for `{field}`: {reason}")]
    InvalidEnvironment {
        field: &'static str,
        reason: String,
    },
}
