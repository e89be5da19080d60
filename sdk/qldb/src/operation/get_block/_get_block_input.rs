/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct GetBlockInput {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The location of the block that you want to request.</p>
    pub block_address: ::std::option::Option<crate::types::ValueHolder>,
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub digest_tip_address: ::std::option::Option<crate::types::ValueHolder>,
}
impl GetBlockInput {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn block_address(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.block_address.as_ref()
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn digest_tip_address(&self) -> ::std::option::Option<&crate::types::ValueHolder> {
        self.digest_tip_address.as_ref()
    }
}
impl GetBlockInput {
    /// Creates a new builder-style object to manufacture [`GetBlockInput`](crate::operation::get_block::GetBlockInput).
    pub fn builder() -> crate::operation::get_block::builders::GetBlockInputBuilder {
        crate::operation::get_block::builders::GetBlockInputBuilder::default()
    }
}

/// A builder for [`GetBlockInput`](crate::operation::get_block::GetBlockInput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct GetBlockInputBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) block_address: ::std::option::Option<crate::types::ValueHolder>,
    pub(crate) digest_tip_address: ::std::option::Option<crate::types::ValueHolder>,
}
impl GetBlockInputBuilder {
    /// <p>The name of the ledger.</p>
    /// This field is required.
    pub fn name(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.name = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn set_name(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.name = input;
        self
    }
    /// <p>The name of the ledger.</p>
    pub fn get_name(&self) -> &::std::option::Option<::std::string::String> {
        &self.name
    }
    /// <p>The location of the block that you want to request.</p>
    /// This field is required.
    pub fn block_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.block_address = ::std::option::Option::Some(input);
        self
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn set_block_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.block_address = input;
        self
    }
    /// <p>The location of the block that you want to request.</p>
    pub fn get_block_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.block_address
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn digest_tip_address(mut self, input: crate::types::ValueHolder) -> Self {
        self.digest_tip_address = ::std::option::Option::Some(input);
        self
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn set_digest_tip_address(mut self, input: ::std::option::Option<crate::types::ValueHolder>) -> Self {
        self.digest_tip_address = input;
        self
    }
    /// <p>The latest block location covered by the digest for which to request a proof.</p>
    pub fn get_digest_tip_address(&self) -> &::std::option::Option<crate::types::ValueHolder> {
        &self.digest_tip_address
    }
    /// Consumes the builder and constructs a [`GetBlockInput`](crate::operation::get_block::GetBlockInput).
    ///
    /// Fails with a [`BuildError`](::aws_smithy_types::error::operation::BuildError) if a required member is unset.
    pub fn build(
        self,
    ) -> ::std::result::Result<crate::operation::get_block::GetBlockInput, ::aws_smithy_types::error::operation::BuildError> {
        if self.name.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "name",
                "name was not specified but it is required when building GetBlockInput",
            ));
        }
        if self.block_address.is_none() {
            return ::std::result::Result::Err(::aws_smithy_types::error::operation::BuildError::missing_field(
                "block_address",
                "block_address was not specified but it is required when building GetBlockInput",
            ));
        }
        ::std::result::Result::Ok(crate::operation::get_block::GetBlockInput {
            name: self.name,
            block_address: self.block_address,
            digest_tip_address: self.digest_tip_address,
        })
    }
}
