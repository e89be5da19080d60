/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>A structure that can contain a value in multiple encoding formats.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ValueHolder {
    /// <p>An Amazon Ion plaintext value contained in a <code>ValueHolder</code> structure.</p>
    pub ion_text: ::std::option::Option<::std::string::String>,
}
impl ValueHolder {
    /// <p>An Amazon Ion plaintext value contained in a <code>ValueHolder</code> structure.</p>
    pub fn ion_text(&self) -> ::std::option::Option<&str> {
        self.ion_text.as_deref()
    }
}
impl ValueHolder {
    /// Creates a new builder-style object to manufacture [`ValueHolder`](crate::types::ValueHolder).
    pub fn builder() -> crate::types::builders::ValueHolderBuilder {
        crate::types::builders::ValueHolderBuilder::default()
    }
}

/// A builder for [`ValueHolder`](crate::types::ValueHolder).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ValueHolderBuilder {
    pub(crate) ion_text: ::std::option::Option<::std::string::String>,
}
impl ValueHolderBuilder {
    /// <p>An Amazon Ion plaintext value contained in a <code>ValueHolder</code> structure.</p>
    pub fn ion_text(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.ion_text = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>An Amazon Ion plaintext value contained in a <code>ValueHolder</code> structure.</p>
    pub fn set_ion_text(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.ion_text = input;
        self
    }
    /// <p>An Amazon Ion plaintext value contained in a <code>ValueHolder</code> structure.</p>
    pub fn get_ion_text(&self) -> &::std::option::Option<::std::string::String> {
        &self.ion_text
    }
    /// Consumes the builder and constructs a [`ValueHolder`](crate::types::ValueHolder).
    pub fn build(self) -> crate::types::ValueHolder {
        crate::types::ValueHolder {
            ion_text: self.ion_text,
        }
    }
}
