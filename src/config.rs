use std::env;
use anyhow::{Context, Result};

/// Parameter queried when `PARAM_NAME` is not set
pub const DEFAULT_PARAM_NAME: &str = "/dynamic_string";

/// Set by the Lambda host for the runtime API endpoint
const LAMBDA_RUNTIME_API_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

/// Whether the process was started by the Lambda host
///
/// Readable before the rest of the configuration so logging can be set up first.
pub fn running_in_lambda() -> bool {
    env::var_os(LAMBDA_RUNTIME_API_VAR).is_some()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub param_name: String,
    pub ssm_endpoint_url: Option<String>,
    pub lambda_runtime_api: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let param_name = env::var("PARAM_NAME")
            .unwrap_or_else(|_| DEFAULT_PARAM_NAME.to_string());

        let ssm_endpoint_url = env::var("SSM_ENDPOINT_URL").ok();

        let lambda_runtime_api = env::var(LAMBDA_RUNTIME_API_VAR).ok();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            param_name,
            ssm_endpoint_url,
            lambda_runtime_api,
            service_port,
            service_host,
        })
    }

    /// True when the process was started by the Lambda host
    pub fn in_lambda(&self) -> bool {
        self.lambda_runtime_api.is_some()
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Parameter name: {}", self.param_name);
        tracing::info!("  SSM endpoint: {}",
            self.ssm_endpoint_url.as_deref().unwrap_or("default (AWS)"));
        if self.in_lambda() {
            tracing::info!("  Running inside the Lambda runtime");
        } else {
            tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("PARAM_NAME");
            env::remove_var("SSM_ENDPOINT_URL");
            env::remove_var("AWS_LAMBDA_RUNTIME_API");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("PARAM_NAME", "/site/banner");
            env::set_var("SSM_ENDPOINT_URL", "http://localhost:4566");
            env::set_var("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();
        let detected = running_in_lambda();
        clear_env_vars();

        assert!(detected);
        assert_eq!(config.param_name, "/site/banner");
        assert_eq!(config.ssm_endpoint_url, Some("http://localhost:4566".to_string()));
        assert!(config.in_lambda());
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.param_name, "/dynamic_string");
        assert_eq!(config.ssm_endpoint_url, None);
        assert!(!config.in_lambda());
        assert!(!running_in_lambda());
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }
}
