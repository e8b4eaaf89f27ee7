use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;
use tokio::sync::OnceCell;

use crate::config::Config;

/// Read access to a remote key-value parameter store
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the string value stored under `name`
    ///
    /// Every failure (unreachable store, missing key, denied access, missing
    /// value) is reported as a single opaque error.
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String>;
}

/// AWS Systems Manager Parameter Store backed implementation
///
/// The SDK client is built on the first lookup and then reused for the
/// lifetime of the process.
pub struct SsmParameterStore {
    endpoint_url: Option<String>,
    client: OnceCell<Client>,
}

impl SsmParameterStore {
    /// Create a store from configuration without touching the network
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoint_url: config.ssm_endpoint_url.clone(),
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(url) = &self.endpoint_url {
                    tracing::info!("Using SSM endpoint override: {}", url);
                    loader = loader.endpoint_url(url);
                }
                let sdk_config = loader.load().await;
                tracing::debug!("SSM client initialized");
                build_client(&sdk_config)
            })
            .await
    }
}

fn build_client(sdk_config: &SdkConfig) -> Client {
    // A failed lookup is final; the caller gets a 500 instead of a retried call
    let ssm_config = aws_sdk_ssm::config::Builder::from(sdk_config)
        .retry_config(RetryConfig::disabled())
        .build();
    Client::from_conf(ssm_config)
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        let output = self
            .client()
            .await
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))
            .with_context(|| format!("Failed to get parameter '{}'", name))?;

        let value = output
            .parameter()
            .and_then(|p| p.value())
            .map(|v| v.to_string())
            .ok_or_else(|| anyhow!("Parameter '{}' has no value", name))?;

        tracing::debug!("Read parameter: {}", name);
        Ok(value)
    }
}
