/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Configuration for AWS S3 Control.

pub use ::aws_smithy_runtime::client::connector::{HttpConnector, SharedHttpConnector};
pub use ::aws_types::region::Region;

use ::aws_smithy_runtime::client::orchestrator::RuntimeConfig;
use ::aws_smithy_types::error::operation::BuildError;
use crate::idempotency_token::IdempotencyTokenProvider;

const SERVICE_NAME: &str = "s3control";

/// Configuration for a aws_sdk_s3control service client.
///
/// Service configuration allows for customization of endpoints, region, and the HTTP connector.
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct Config {
    region: ::std::option::Option<Region>,
    endpoint_url: ::std::option::Option<::std::string::String>,
    http_connector: ::std::option::Option<SharedHttpConnector>,
    idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    /// Constructs a config builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts this config back into a builder so that it can be tweaked.
    pub fn to_builder(&self) -> Builder {
        Builder {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
            http_connector: self.http_connector.clone(),
            idempotency_token_provider: ::std::option::Option::Some(self.idempotency_token_provider.clone()),
        }
    }

    /// Returns the AWS region, if it was provided.
    pub fn region(&self) -> ::std::option::Option<&Region> {
        self.region.as_ref()
    }

    /// Returns the endpoint URL override, if it was provided.
    pub fn endpoint_url(&self) -> ::std::option::Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Returns the HTTP connector, if it was provided.
    pub fn http_connector(&self) -> ::std::option::Option<&SharedHttpConnector> {
        self.http_connector.as_ref()
    }

    /// Returns a copy of the idempotency token provider.
    ///
    /// This provider is used to generate unique tokens for operations that need them.
    pub fn idempotency_token_provider(&self) -> IdempotencyTokenProvider {
        self.idempotency_token_provider.clone()
    }

    /// Resolves where and how requests are sent.
    ///
    /// An explicit endpoint URL wins over the regional endpoint `https://s3-control.{region}.amazonaws.com`.
    pub(crate) fn runtime_config(&self) -> ::std::result::Result<RuntimeConfig, BuildError> {
        let endpoint = match (&self.endpoint_url, &self.region) {
            (Some(url), _) => url.clone(),
            (None, Some(region)) => format!("https://s3-control.{}.amazonaws.com", region),
            (None, None) => {
                return Err(BuildError::missing_field(
                    "region",
                    "a region is required when no endpoint URL is configured",
                ))
            }
        };
        let connector = self.http_connector.clone().ok_or_else(|| {
            BuildError::missing_field("http_connector", "an HTTP connector is required to send requests")
        })?;
        ::tracing::trace!(endpoint = %endpoint, "resolved endpoint");
        Ok(RuntimeConfig::new(SERVICE_NAME, endpoint, connector))
    }
}

/// Builder for creating a `Config`.
#[derive(::std::clone::Clone, ::std::fmt::Debug, ::std::default::Default)]
pub struct Builder {
    region: ::std::option::Option<Region>,
    endpoint_url: ::std::option::Option<::std::string::String>,
    http_connector: ::std::option::Option<SharedHttpConnector>,
    idempotency_token_provider: ::std::option::Option<IdempotencyTokenProvider>,
}

impl Builder {
    /// Constructs a config builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AWS region to use when making requests.
    ///
    /// # Examples
    /// ```no_run
    /// use aws_types::region::Region;
    /// use aws_sdk_s3control::config::Config;
    ///
    /// let config = Config::builder()
    ///     .region(Region::new("us-east-1"))
    ///     .build();
    /// ```
    pub fn region(mut self, region: impl ::std::convert::Into<::std::option::Option<Region>>) -> Self {
        self.set_region(region.into());
        self
    }

    /// Sets the AWS region to use when making requests.
    pub fn set_region(&mut self, region: ::std::option::Option<Region>) -> &mut Self {
        self.region = region;
        self
    }

    /// Sets the endpoint URL used to communicate with this service.
    ///
    /// Note: this is used in combination with other endpoint rules, e.g. an API that applies a host-label prefix
    /// will be prefixed onto this URL. To fully override the endpoint resolver, set it explicitly.
    pub fn endpoint_url(mut self, endpoint_url: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.set_endpoint_url(::std::option::Option::Some(endpoint_url.into()));
        self
    }

    /// Sets the endpoint URL used to communicate with this service.
    pub fn set_endpoint_url(&mut self, endpoint_url: ::std::option::Option<::std::string::String>) -> &mut Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Sets the HTTP connector to use when making requests.
    pub fn http_connector(mut self, http_connector: impl HttpConnector + 'static) -> Self {
        self.set_http_connector(::std::option::Option::Some(SharedHttpConnector::new(http_connector)));
        self
    }

    /// Sets the HTTP connector to use when making requests.
    pub fn set_http_connector(&mut self, http_connector: ::std::option::Option<SharedHttpConnector>) -> &mut Self {
        self.http_connector = http_connector;
        self
    }

    /// Sets the idempotency token provider to use for service calls that require tokens.
    pub fn idempotency_token_provider(mut self, idempotency_token_provider: impl ::std::convert::Into<IdempotencyTokenProvider>) -> Self {
        self.set_idempotency_token_provider(::std::option::Option::Some(idempotency_token_provider.into()));
        self
    }

    /// Sets the idempotency token provider to use for service calls that require tokens.
    pub fn set_idempotency_token_provider(
        &mut self,
        idempotency_token_provider: ::std::option::Option<IdempotencyTokenProvider>,
    ) -> &mut Self {
        self.idempotency_token_provider = idempotency_token_provider;
        self
    }

    /// Builds a [`Config`].
    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            http_connector: self.http_connector,
            idempotency_token_provider: self
                .idempotency_token_provider
                .unwrap_or_else(crate::idempotency_token::default_provider),
        }
    }
}

impl From<&::aws_types::SdkConfig> for Builder {
    fn from(input: &::aws_types::SdkConfig) -> Self {
        let mut builder = Builder::default();
        builder.set_region(input.region().cloned());
        builder.set_endpoint_url(input.endpoint_url().map(|s| s.to_string()));
        builder.set_http_connector(input.http_connector().cloned());
        builder
    }
}

impl From<&::aws_types::SdkConfig> for Config {
    fn from(sdk_config: &::aws_types::SdkConfig) -> Self {
        Builder::from(sdk_config).build()
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use aws_smithy_runtime::test_util::replay::StaticReplayConnector;
    use aws_types::region::Region;
    use aws_types::SdkConfig;

    #[test]
    fn regional_endpoint() {
        let conf = Config::builder()
            .region(Region::new("us-west-2"))
            .http_connector(StaticReplayConnector::new(vec![]))
            .build();
        let runtime_config = conf.runtime_config().expect("region and connector are set");
        assert_eq!(runtime_config.endpoint(), "https://s3-control.us-west-2.amazonaws.com");
        assert_eq!(runtime_config.service_name(), "s3control");
    }

    #[test]
    fn endpoint_url_wins_over_region() {
        let conf = Config::builder()
            .region(Region::new("us-west-2"))
            .endpoint_url("http://localhost:4566")
            .http_connector(StaticReplayConnector::new(vec![]))
            .build();
        assert_eq!(
            conf.runtime_config().expect("valid config").endpoint(),
            "http://localhost:4566"
        );
    }

    #[test]
    fn connector_is_required() {
        let conf = Config::builder()
            .region(Region::new("us-west-2"))
            .build();
        let err = conf.runtime_config().expect_err("no connector");
        assert_eq!(err.field(), Some("http_connector"));
    }

    #[test]
    fn region_or_endpoint_is_required() {
        let err = Config::builder().build().runtime_config().expect_err("no region");
        assert_eq!(err.field(), Some("region"));
    }

    #[test]
    fn from_sdk_config() {
        let sdk_config = SdkConfig::builder()
            .region(Region::from_static("eu-west-1"))
            .endpoint_url("http://localhost:4566")
            .build();
        let conf = Config::from(&sdk_config);
        assert_eq!(conf.region(), Some(&Region::new("eu-west-1")));
        assert_eq!(conf.endpoint_url(), Some("http://localhost:4566"));
        assert!(conf.http_connector().is_none());
        let rebuilt = conf.to_builder().build();
        assert_eq!(rebuilt.endpoint_url(), conf.endpoint_url());
    }
}
