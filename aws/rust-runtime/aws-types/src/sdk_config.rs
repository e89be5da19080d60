/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Configuration shared by every service client.

use crate::os_shim_internal::Env;
use crate::region::{EnvironmentProvider, ProvideRegion, Region};
use aws_smithy_runtime::client::connector::{HttpConnector, SharedHttpConnector};

/// Configuration shared by service clients.
///
/// Service configs are created from an `SdkConfig` with `From<&SdkConfig>`.
#[derive(Debug, Clone, Default)]
pub struct SdkConfig {
    region: Option<Region>,
    endpoint_url: Option<String>,
    http_connector: Option<SharedHttpConnector>,
}

/// Builder for [`SdkConfig`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    http_connector: Option<SharedHttpConnector>,
}

impl Builder {
    /// Set the region for the builder
    ///
    /// # Examples
    /// ```rust
    /// use aws_types::SdkConfig;
    /// use aws_types::region::Region;
    /// let config = SdkConfig::builder().region(Region::new("us-east-1")).build();
    /// ```
    pub fn region(mut self, region: impl Into<Option<Region>>) -> Self {
        self.set_region(region);
        self
    }

    /// Set the region for the builder
    pub fn set_region(&mut self, region: impl Into<Option<Region>>) -> &mut Self {
        self.region = region.into();
        self
    }

    /// Set the endpoint URL to use when making requests.
    ///
    /// An endpoint URL overrides the endpoint derived from the region.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.set_endpoint_url(Some(endpoint_url.into()));
        self
    }

    /// Set the endpoint URL to use when making requests.
    pub fn set_endpoint_url(&mut self, endpoint_url: Option<String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Sets the HTTP connector that clients created from this config send requests through.
    pub fn http_connector(mut self, http_connector: impl HttpConnector + 'static) -> Self {
        self.set_http_connector(Some(SharedHttpConnector::new(http_connector)));
        self
    }

    /// Sets the HTTP connector that clients created from this config send requests through.
    pub fn set_http_connector(
        &mut self,
        http_connector: Option<SharedHttpConnector>,
    ) -> &mut Self {
        self.http_connector = http_connector;
        self
    }

    /// Build a [`SdkConfig`].
    pub fn build(self) -> SdkConfig {
        SdkConfig {
            region: self.region,
            endpoint_url: self.endpoint_url,
            http_connector: self.http_connector,
        }
    }
}

impl SdkConfig {
    /// Configured region
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Configured endpoint URL
    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Configured HTTP connector
    pub fn http_connector(&self) -> Option<&SharedHttpConnector> {
        self.http_connector.as_ref()
    }

    /// Config builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Convert this [`SdkConfig`] back into a builder to enable modification
    pub fn into_builder(self) -> Builder {
        Builder {
            region: self.region,
            endpoint_url: self.endpoint_url,
            http_connector: self.http_connector,
        }
    }

    /// Loads configuration from `env`.
    ///
    /// The region comes from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`. The endpoint
    /// URL comes from `AWS_ENDPOINT_URL`. Empty values are ignored. No HTTP connector is set.
    pub fn from_env(env: &Env) -> Self {
        let region = EnvironmentProvider::new(env.clone()).region();
        let endpoint_url = env
            .get("AWS_ENDPOINT_URL")
            .ok()
            .filter(|url| !url.is_empty());
        tracing::debug!(region = ?region, endpoint_url = ?endpoint_url, "loaded config from the environment");
        SdkConfig {
            region,
            endpoint_url,
            http_connector: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkConfig;
    use crate::os_shim_internal::Env;
    use crate::region::Region;
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_from_env() {
        let env = Env::from_slice(&[
            ("AWS_DEFAULT_REGION", "us-west-2"),
            ("AWS_ENDPOINT_URL", "http://localhost:4566"),
        ]);
        let config = SdkConfig::from_env(&env);
        assert_eq!(config.region(), Some(&Region::new("us-west-2")));
        assert_eq!(config.endpoint_url(), Some("http://localhost:4566"));
    }

    #[test]
    fn empty_environment() {
        let config = SdkConfig::from_env(&Env::from_slice(&[("AWS_ENDPOINT_URL", "")]));
        assert_eq!(config.region(), None);
        assert_eq!(config.endpoint_url(), None);
    }

    #[test]
    fn builder_round_trip() {
        let config = SdkConfig::builder()
            .region(Region::from_static("eu-central-1"))
            .endpoint_url("https://example.com")
            .build();
        let mut builder = config.into_builder();
        builder.set_endpoint_url(None);
        let config = builder.build();
        assert_eq!(config.region().map(|r| r.as_ref()), Some("eu-central-1"));
        assert_eq!(config.endpoint_url(), None);
    }
}
