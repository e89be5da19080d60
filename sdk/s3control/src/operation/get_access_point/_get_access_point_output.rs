/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetAccessPointOutput {
    /// <p>The name of the specified access point.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The name of the bucket associated with the specified access point.</p>
    pub bucket: ::std::option::Option<::std::string::String>,
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub network_origin: ::std::option::Option<crate::types::NetworkOrigin>,
    /// <p>Contains the virtual private cloud (VPC) configuration for the specified access point.</p>
    pub vpc_configuration: ::std::option::Option<crate::types::VpcConfiguration>,
    /// <p>The <code>PublicAccessBlock</code> configuration of the access point.</p>
    pub public_access_block_configuration: ::std::option::Option<crate::types::PublicAccessBlockConfiguration>,
    /// <p>The date and time when the specified access point was created.</p>
    pub creation_date: ::std::option::Option<::aws_smithy_types::DateTime>,
    _request_id: Option<String>,
}
impl GetAccessPointOutput {
    /// <p>The name of the specified access point.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The name of the bucket associated with the specified access point.</p>
    pub fn bucket(&self) -> ::std::option::Option<&str> {
        self.bucket.as_deref()
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
    pub fn network_origin(&self) -> ::std::option::Option<&crate::types::NetworkOrigin> {
        self.network_origin.as_ref()
    }
    /// <p>Contains the virtual private cloud (VPC) configuration for the specified access point.</p>
    pub fn vpc_configuration(&self) -> ::std::option::Option<&crate::types::VpcConfiguration> {
        self.vpc_configuration.as_ref()
    }
    /// <p>The <code>PublicAccessBlock</code> configuration of the access point.</p>
    pub fn public_access_block_configuration(&self) -> ::std::option::Option<&crate::types::PublicAccessBlockConfiguration> {
        self.public_access_block_configuration.as_ref()
    }
    /// <p>The date and time when the specified access point was created.</p>
    pub fn creation_date(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date.as_ref()
    }
}
impl ::aws_types::request_id::RequestId for GetAccessPointOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl GetAccessPointOutput {
    /// Creates a new builder-style object to manufacture [`GetAccessPointOutput`](crate::operation::get_access_point::GetAccessPointOutput).
    pub fn builder() -> crate::operation::get_access_point::builders::GetAccessPointOutputBuilder {
        crate::operation::get_access_point::builders::GetAccessPointOutputBuilder::default()
    }
}

/// A builder for [`GetAccessPointOutput`](crate::operation::get_access_point::GetAccessPointOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetAccessPointOutputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) bucket: ::std::option::Option<::std::string::String>,
    pub(crate) network_origin: ::std::option::Option<crate::types::NetworkOrigin>,
    pub(crate) vpc_configuration: ::std::option::Option<crate::types::VpcConfiguration>,
    pub(crate) public_access_block_configuration: ::std::option::Option<crate::types::PublicAccessBlockConfiguration>,
    pub(crate) creation_date: ::std::option::Option<::aws_smithy_types::DateTime>,
    _request_id: Option<String>,
}
impl GetAccessPointOutputBuilder {
    /// <p>The name of the specified access point.</p>
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the specified access point.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the specified access point.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The name of the bucket associated with the specified access point.</p>
    pub fn bucket(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.bucket = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the bucket associated with the specified access point.</p>
    pub fn set_bucket(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.bucket = input;
        self
    }
    /// <p>The name of the bucket associated with the specified access point.</p>
    pub fn get_bucket(&self) -> &::std::option::Option<::std::string::String> {
        &self.bucket
    }
    /// <p>Indicates whether this access point allows access from the public internet.</p>
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
    /// <p>Contains the virtual private cloud (VPC) configuration for the specified access point.</p>
    pub fn vpc_configuration(mut self, input: crate::types::VpcConfiguration) -> Self {
        self.vpc_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>Contains the virtual private cloud (VPC) configuration for the specified access point.</p>
    pub fn set_vpc_configuration(mut self, input: ::std::option::Option<crate::types::VpcConfiguration>) -> Self {
        self.vpc_configuration = input;
        self
    }
    /// <p>Contains the virtual private cloud (VPC) configuration for the specified access point.</p>
    pub fn get_vpc_configuration(&self) -> &::std::option::Option<crate::types::VpcConfiguration> {
        &self.vpc_configuration
    }
    /// <p>The <code>PublicAccessBlock</code> configuration of the access point.</p>
    pub fn public_access_block_configuration(mut self, input: crate::types::PublicAccessBlockConfiguration) -> Self {
        self.public_access_block_configuration = ::std::option::Option::Some(input);
        self
    }
    /// <p>The <code>PublicAccessBlock</code> configuration of the access point.</p>
    pub fn set_public_access_block_configuration(mut self, input: ::std::option::Option<crate::types::PublicAccessBlockConfiguration>) -> Self {
        self.public_access_block_configuration = input;
        self
    }
    /// <p>The <code>PublicAccessBlock</code> configuration of the access point.</p>
    pub fn get_public_access_block_configuration(&self) -> &::std::option::Option<crate::types::PublicAccessBlockConfiguration> {
        &self.public_access_block_configuration
    }
    /// <p>The date and time when the specified access point was created.</p>
    pub fn creation_date(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time when the specified access point was created.</p>
    pub fn set_creation_date(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date = input;
        self
    }
    /// <p>The date and time when the specified access point was created.</p>
    pub fn get_creation_date(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`GetAccessPointOutput`](crate::operation::get_access_point::GetAccessPointOutput).
    pub fn build(self) -> crate::operation::get_access_point::GetAccessPointOutput {
        crate::operation::get_access_point::GetAccessPointOutput {
            name: self.name,
            bucket: self.bucket,
            network_origin: self.network_origin,
            vpc_configuration: self.vpc_configuration,
            public_access_block_configuration: self.public_access_block_configuration,
            creation_date: self.creation_date,
            _request_id: self._request_id,
        }
    }
}
