/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Contains the configuration parameters for a Set Object Tagging operation.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct S3SetObjectTaggingOperation {
    /// <p>The tags to apply to each object.</p>
    pub tag_set: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>,
}
impl S3SetObjectTaggingOperation {
    /// <p>The tags to apply to each object.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn tag_set(&self) -> ::std::option::Option<&[crate::types::S3Tag]> {
        self.tag_set.as_deref()
    }
}
impl S3SetObjectTaggingOperation {
    /// Creates a new builder-style object to manufacture [`S3SetObjectTaggingOperation`](crate::types::S3SetObjectTaggingOperation).
    pub fn builder() -> crate::types::builders::S3SetObjectTaggingOperationBuilder {
        crate::types::builders::S3SetObjectTaggingOperationBuilder::default()
    }
}

/// A builder for [`S3SetObjectTaggingOperation`](crate::types::S3SetObjectTaggingOperation).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct S3SetObjectTaggingOperationBuilder {
    pub(crate) tag_set: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>,
}
impl S3SetObjectTaggingOperationBuilder {
    /// Appends an item to `tag_set`.
    ///
    /// To override the contents of this collection use [`set_tag_set`](Self::set_tag_set).
    ///
    /// <p>The tags to apply to each object.</p>
    pub fn tag_set(mut self, input: crate::types::S3Tag) -> Self {
        let mut v = self.tag_set.unwrap_or_default();
        v.push(input);
        self.tag_set = ::std::option::Option::Some(v);
        self
    }
    /// <p>The tags to apply to each object.</p>
    pub fn set_tag_set(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::S3Tag>>) -> Self {
        self.tag_set = input;
        self
    }
    /// <p>The tags to apply to each object.</p>
    pub fn get_tag_set(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::S3Tag>> {
        &self.tag_set
    }
    /// Consumes the builder and constructs a [`S3SetObjectTaggingOperation`](crate::types::S3SetObjectTaggingOperation).
    pub fn build(self) -> crate::types::S3SetObjectTaggingOperation {
        crate::types::S3SetObjectTaggingOperation {
            tag_set: self.tag_set,
        }
    }
}
