/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) conf: crate::Config,
}

impl Handle {
    /// Invokes `O` with the endpoint and connector this handle was configured with.
    pub(crate) fn invoke<O>(
        &self,
        input: &O::Input,
    ) -> ::std::result::Result<O::Output, ::aws_smithy_runtime::client::result::SdkError<crate::Error>>
    where
        O: ::aws_smithy_runtime::client::orchestrator::QueryOperation<Error = crate::Error>,
    {
        let runtime_config = self
            .conf
            .runtime_config()
            .map_err(::aws_smithy_runtime::client::result::SdkError::construction_failure)?;
        ::aws_smithy_runtime::client::orchestrator::invoke::<O>(&runtime_config, input)
    }
}

/// Client for AWS S3 Control
///
/// Client for invoking operations on AWS S3 Control. Each operation on AWS S3 Control is a method on this
/// struct. `.send()` MUST be invoked on the generated operations to dispatch the request to the service.
///
/// Clients are cheap to clone: every clone shares one [`Config`](crate::Config).
///
/// ## Constructing a `Client`
///
/// A [`Config`] is required to construct a client. A region (or an explicit endpoint URL) and an
/// [`HttpConnector`](::aws_smithy_runtime::client::connector::HttpConnector) are needed to send
/// requests; their absence is reported as a construction failure when an operation is sent.
///
/// ```rust,ignore
/// let sdk_config = ::aws_types::SdkConfig::from_env(&::aws_types::os_shim_internal::Env::real())
///     .into_builder()
///     .http_connector(my_connector)
///     .build();
/// let client = aws_sdk_s3control::Client::new(&sdk_config);
/// ```
#[derive(::std::clone::Clone, ::std::fmt::Debug)]
pub struct Client {
    handle: ::std::sync::Arc<Handle>,
}

impl Client {
    /// Creates a new client from the service [`Config`](crate::Config).
    pub fn from_conf(conf: crate::Config) -> Self {
        Self {
            handle: ::std::sync::Arc::new(Handle { conf }),
        }
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &crate::Config {
        &self.handle.conf
    }

    /// Creates a new client from an [SDK Config](::aws_types::SdkConfig).
    pub fn new(sdk_config: &::aws_types::SdkConfig) -> Self {
        Self::from_conf(sdk_config.into())
    }
}

mod create_access_point;

mod get_access_point;

mod delete_access_point;

mod list_access_points;

mod get_access_point_policy;

mod put_access_point_policy;

mod delete_access_point_policy;

mod get_public_access_block;

mod put_public_access_block;

mod delete_public_access_block;

mod create_job;

mod describe_job;

mod list_jobs;

mod update_job_priority;

mod update_job_status;

mod get_job_tagging;

mod put_job_tagging;

mod delete_job_tagging;
