use once_cell::sync::Lazy;

use crate::environment::Environment;

/// The global, immutable environment configuration.
pub static ENVIRONMENT: Lazy<Environment> = Lazy::new(|| Environment::build().unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_reads_observe_identical_values() {
        let first = ENVIRONMENT.clone();
        let second = ENVIRONMENT.clone();

        assert_eq!(first, second);
        assert_eq!(first.api_server_url, ENVIRONMENT.api_server_url);
    }
}
