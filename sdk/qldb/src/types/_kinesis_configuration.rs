/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The configuration settings of the Amazon Kinesis Data Streams destination for an Amazon QLDB journal stream.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct KinesisConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the Kinesis Data Streams resource.</p>
    pub stream_arn: ::std::option::Option<::std::string::String>,
    /// <p>Enables QLDB to publish multiple data records in a single Kinesis Data Streams record.</p>
    pub aggregation_enabled: ::std::option::Option<bool>,
}
impl KinesisConfiguration {
    /// <p>The Amazon Resource Name (ARN) of the Kinesis Data Streams resource.</p>
    pub fn stream_arn(&self) -> ::std::option::Option<&str> {
        self.stream_arn.as_deref()
    }
    /// <p>Enables QLDB to publish multiple data records in a single Kinesis Data Streams record.</p>
    pub fn aggregation_enabled(&self) -> ::std::option::Option<bool> {
        self.aggregation_enabled
    }
}
impl KinesisConfiguration {
    /// Creates a new builder-style object to manufacture [`KinesisConfiguration`](crate::types::KinesisConfiguration).
    pub fn builder() -> crate::types::builders::KinesisConfigurationBuilder {
        crate::types::builders::KinesisConfigurationBuilder::default()
    }
}

/// A builder for [`KinesisConfiguration`](crate::types::KinesisConfiguration).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct KinesisConfigurationBuilder {
    pub(crate) stream_arn: ::std::option::Option<::std::string::String>,
    pub(crate) aggregation_enabled: ::std::option::Option<bool>,
}
impl KinesisConfigurationBuilder {
    /// <p>The Amazon Resource Name (ARN) of the Kinesis Data Streams resource.</p>
    /// This field is required.
    pub fn stream_arn(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.stream_arn = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the Kinesis Data Streams resource.</p>
    pub fn set_stream_arn(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.stream_arn = input;
        self
    }
    /// <p>The Amazon Resource Name (ARN) of the Kinesis Data Streams resource.</p>
    pub fn get_stream_arn(&self) -> &::std::option::Option<::std::string::String> {
        &self.stream_arn
    }
    /// <p>Enables QLDB to publish multiple data records in a single Kinesis Data Streams record.</p>
    pub fn aggregation_enabled(mut self, input: bool) -> Self {
        self.aggregation_enabled = ::std::option::Option::Some(input);
        self
    }
    /// <p>Enables QLDB to publish multiple data records in a single Kinesis Data Streams record.</p>
    pub fn set_aggregation_enabled(mut self, input: ::std::option::Option<bool>) -> Self {
        self.aggregation_enabled = input;
        self
    }
    /// <p>Enables QLDB to publish multiple data records in a single Kinesis Data Streams record.</p>
    pub fn get_aggregation_enabled(&self) -> &::std::option::Option<bool> {
        &self.aggregation_enabled
    }
    /// Consumes the builder and constructs a [`KinesisConfiguration`](crate::types::KinesisConfiguration).
    pub fn build(self) -> crate::types::KinesisConfiguration {
        crate::types::KinesisConfiguration {
            stream_arn: self.stream_arn,
            aggregation_enabled: self.aggregation_enabled,
        }
    }
}
