/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Amazon S3 throws this exception if you make a <code>GetPublicAccessBlock</code> request against an account that doesn't have a <code>PublicAccessBlockConfiguration</code> set.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct NoSuchPublicAccessBlockConfiguration {
    #[allow(missing_docs)] // documentation missing in model
    pub message: ::std::option::Option<::std::string::String>,
    pub(crate) meta: ::aws_smithy_types::error::ErrorMetadata,
}
impl NoSuchPublicAccessBlockConfiguration {
    /// Returns the error message.
    pub fn message(&self) -> ::std::option::Option<&str> {
        self.message.as_deref()
    }
}
impl ::std::fmt::Display for NoSuchPublicAccessBlockConfiguration {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::std::write!(f, "NoSuchPublicAccessBlockConfiguration")?;
        if let ::std::option::Option::Some(inner_1) = &self.message {
            {
                ::std::write!(f, ": {}", inner_1)?;
            }
        }
        Ok(())
    }
}
impl ::std::error::Error for NoSuchPublicAccessBlockConfiguration {}
impl ::aws_types::request_id::RequestId for crate::types::error::NoSuchPublicAccessBlockConfiguration {
    fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }
}
impl ::aws_smithy_types::error::metadata::ProvideErrorMetadata for NoSuchPublicAccessBlockConfiguration {
    fn meta(&self) -> &::aws_smithy_types::error::ErrorMetadata {
        &self.meta
    }
}
impl NoSuchPublicAccessBlockConfiguration {
    /// Creates a new builder-style object to manufacture [`NoSuchPublicAccessBlockConfiguration`](crate::types::error::NoSuchPublicAccessBlockConfiguration).
    pub fn builder() -> crate::types::error::builders::NoSuchPublicAccessBlockConfigurationBuilder {
        crate::types::error::builders::NoSuchPublicAccessBlockConfigurationBuilder::default()
    }
}

/// A builder for [`NoSuchPublicAccessBlockConfiguration`](crate::types::error::NoSuchPublicAccessBlockConfiguration).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct NoSuchPublicAccessBlockConfigurationBuilder {
    pub(crate) message: ::std::option::Option<::std::string::String>,
    meta: std::option::Option<::aws_smithy_types::error::ErrorMetadata>,
}
impl NoSuchPublicAccessBlockConfigurationBuilder {
    #[allow(missing_docs)] // documentation missing in model
    pub fn message(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.message = ::std::option::Option::Some(input.into());
        self
    }
    #[allow(missing_docs)] // documentation missing in model
    pub fn set_message(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.message = input;
        self
    }
    #[allow(missing_docs)] // documentation missing in model
    pub fn get_message(&self) -> &::std::option::Option<::std::string::String> {
        &self.message
    }
    /// Sets error metadata
    pub fn meta(mut self, meta: ::aws_smithy_types::error::ErrorMetadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Sets error metadata
    pub fn set_meta(&mut self, meta: std::option::Option<::aws_smithy_types::error::ErrorMetadata>) -> &mut Self {
        self.meta = meta;
        self
    }
    /// Consumes the builder and constructs a [`NoSuchPublicAccessBlockConfiguration`](crate::types::error::NoSuchPublicAccessBlockConfiguration).
    pub fn build(self) -> crate::types::error::NoSuchPublicAccessBlockConfiguration {
        crate::types::error::NoSuchPublicAccessBlockConfiguration {
            message: self.message,
            meta: self.meta.unwrap_or_default(),
        }
    }
}
