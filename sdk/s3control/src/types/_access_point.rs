/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>An access point used to access a bucket.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct AccessPoint {
    /// <p>The name of this access point.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub network_origin: ::std::option::Option<crate::types::NetworkOrigin>,
    /// <p>The virtual private cloud (VPC) configuration for this access point, if one exists.</p>
    pub vpc_configuration: ::std::option::Option<crate::types::VpcConfiguration>,
    /// <p>The name of the bucket associated with this access point.</p>
    pub bucket: ::std::option::Option<::std::string::String>,
}
impl AccessPoint {
    /// <p>The name of this access point.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub fn network_origin(&self) -> ::std::option::Option<&crate::types::NetworkOrigin> {
        self.network_origin.as_ref()
    }
    /// <p>The virtual private cloud (VPC) configuration for this access point, if one exists.</p>
    pub fn vpc_configuration(&self) -> ::std::option::Option<&crate::types::VpcConfiguration> {
        self.vpc_configuration.as_ref()
    }
    /// <p>The name of the bucket associated with this access point.</p>
    pub fn bucket(&self) -> ::std::option::Option<&str> {
        self.bucket.as_deref()
    }
}
impl AccessPoint {
    /// Creates a new builder-style object to manufacture [`AccessPoint`](crate::types::AccessPoint).
    pub fn builder() -> crate::types::builders::AccessPointBuilder {
        crate::types::builders::AccessPointBuilder::default()
    }
}

/// A builder for [`AccessPoint`](crate::types::AccessPoint).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct AccessPointBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) network_origin: ::std::option::Option<crate::types::NetworkOrigin>,
    pub(crate) vpc_configuration: ::std::option::Option<crate::types::VpcConfiguration>,
    pub(crate) bucket: ::std::option::Option<::std::string::String>,
}
impl AccessPointBuilder {
    /// <p>The name of this access point.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of this access point.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of this access point.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    /// This field is required.
    pub fn network_origin(mut self, input: impl ::std::convert::Into<crate::types::NetworkOrigin>) -> Self {
        self.network_origin = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub fn set_network_origin(mut self, input: ::std::option::Option<crate::types::NetworkOrigin>) -> Self {
        self.network_origin = input;
        self
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub fn get_network_origin(&self) -> &::std::option::Option<crate::types::NetworkOrigin> {
        &self.network_origin
    }
    /// <p>The virtual private cloud (VPC) configuration for this access point, if one exists.</p>
    pub fn vpc_configuration(mut self, input: crate::types::VpcConfiguration) -> Self {
        self.vpc_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The virtual private cloud (VPC) configuration for this access point, if one exists.</p>
    pub fn set_vpc_configuration(mut self, input: ::std::option::Option<crate::types::VpcConfiguration>) -> Self {
        self.vpc_configuration = input;
        self
    }
    /// <p>The virtual private cloud (VPC) configuration for this access point, if one exists.</p>
    pub fn get_vpc_configuration(&self) -> &::std::option::Option<crate::types::VpcConfiguration> {
        &self.vpc_configuration
    }
    /// <p>The name of the bucket associated with this access point.</p>
    /// This field is required.
    pub fn bucket(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.bucket = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the bucket associated with this access point.</p>
    pub fn set_bucket(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.bucket = input;
        self
    }
    /// <p>The name of the bucket associated with this access point.</p>
    pub fn get_bucket(&self) -> &::std::option::Option<::std::string::String> {
        &self.bucket
    }
    /// Consumes the builder and constructs a [`AccessPoint`](crate::types::AccessPoint).
    pub fn build(self) -> crate::types::AccessPoint {
        crate::types::AccessPoint {
            name: self.name,
            network_origin: self.network_origin,
            vpc_configuration: self.vpc_configuration,
            bucket: self.bucket,
        }
    }
}
