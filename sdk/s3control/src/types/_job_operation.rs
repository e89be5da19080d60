/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The operation that you want this job to perform on every object listed in the manifest.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct JobOperation {
    /// <p>Directs the specified job to invoke an Lambda function on every object in the manifest.</p>
    pub lambda_invoke: ::std::option::Option<crate::types::LambdaInvokeOperation>,
    /// <p>Directs the specified job to run a PUT Object tagging call on every object in the manifest.</p>
    pub s3_put_object_tagging: ::std::option::Option<crate::types::S3SetObjectTaggingOperation>,
    /// <p>Directs the specified job to initiate restore requests for every archived object in the manifest.</p>
    pub s3_initiate_restore_object: ::std::option::Option<crate::types::S3InitiateRestoreObjectOperation>,
}
impl JobOperation {
    /// <p>Directs the specified job to invoke an Lambda function on every object in the manifest.</p>
    pub fn lambda_invoke(&self) -> ::std::option::Option<&crate::types::LambdaInvokeOperation> {
        self.lambda_invoke.as_ref()
    }
    /// <p>Directs the specified job to run a PUT Object tagging call on every object in the manifest.</p>
    pub fn s3_put_object_tagging(&self) -> ::std::option::Option<&crate::types::S3SetObjectTaggingOperation> {
        self.s3_put_object_tagging.as_ref()
    }
    /// <p>Directs the specified job to initiate restore requests for every archived object in the manifest.</p>
    pub fn s3_initiate_restore_object(&self) -> ::std::option::Option<&crate::types::S3InitiateRestoreObjectOperation> {
        self.s3_initiate_restore_object.as_ref()
    }
}
impl JobOperation {
    /// Creates a new builder-style object to manufacture [`JobOperation`](crate::types::JobOperation).
    pub fn builder() -> crate::types::builders::JobOperationBuilder {
        crate::types::builders::JobOperationBuilder::default()
    }
}

/// A builder for [`JobOperation`](crate::types::JobOperation).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct JobOperationBuilder {
    pub(crate) lambda_invoke: ::std::option::Option<crate::types::LambdaInvokeOperation>,
    pub(crate) s3_put_object_tagging: ::std::option::Option<crate::types::S3SetObjectTaggingOperation>,
    pub(crate) s3_initiate_restore_object: ::std::option::Option<crate::types::S3InitiateRestoreObjectOperation>,
}
impl JobOperationBuilder {
    /// <p>Directs the specified job to invoke an Lambda function on every object in the manifest.</p>
    pub fn lambda_invoke(mut self, input: crate::types::LambdaInvokeOperation) -> Self {
        self.lambda_invoke = ::std::option::Option::Some(input);
        self
    }
    /// <p>Directs the specified job to invoke an Lambda function on every object in the manifest.</p>
    pub fn set_lambda_invoke(mut self, input: ::std::option::Option<crate::types::LambdaInvokeOperation>) -> Self {
        self.lambda_invoke = input;
        self
    }
    /// <p>Directs the specified job to invoke an Lambda function on every object in the manifest.</p>
    pub fn get_lambda_invoke(&self) -> &::std::option::Option<crate::types::LambdaInvokeOperation> {
        &self.lambda_invoke
    }
    /// <p>Directs the specified job to run a PUT Object tagging call on every object in the manifest.</p>
    pub fn s3_put_object_tagging(mut self, input: crate::types::S3SetObjectTaggingOperation) -> Self {
        self.s3_put_object_tagging = ::std::option::Option::Some(input);
        self
    }
    /// <p>Directs the specified job to run a PUT Object tagging call on every object in the manifest.</p>
    pub fn set_s3_put_object_tagging(mut self, input: ::std::option::Option<crate::types::S3SetObjectTaggingOperation>) -> Self {
        self.s3_put_object_tagging = input;
        self
    }
    /// <p>Directs the specified job to run a PUT Object tagging call on every object in the manifest.</p>
    pub fn get_s3_put_object_tagging(&self) -> &::std::option::Option<crate::types::S3SetObjectTaggingOperation> {
        &self.s3_put_object_tagging
    }
    /// <p>Directs the specified job to initiate restore requests for every archived object in the manifest.</p>
    pub fn s3_initiate_restore_object(mut self, input: crate::types::S3InitiateRestoreObjectOperation) -> Self {
        self.s3_initiate_restore_object = ::std::option::Option::Some(input);
        self
    }
    /// <p>Directs the specified job to initiate restore requests for every archived object in the manifest.</p>
    pub fn set_s3_initiate_restore_object(mut self, input: ::std::option::Option<crate::types::S3InitiateRestoreObjectOperation>) -> Self {
        self.s3_initiate_restore_object = input;
        self
    }
    /// <p>Directs the specified job to initiate restore requests for every archived object in the manifest.</p>
    pub fn get_s3_initiate_restore_object(&self) -> &::std::option::Option<crate::types::S3InitiateRestoreObjectOperation> {
        &self.s3_initiate_restore_object
    }
    /// Consumes the builder and constructs a [`JobOperation`](crate::types::JobOperation).
    pub fn build(self) -> crate::types::JobOperation {
        crate::types::JobOperation {
            lambda_invoke: self.lambda_invoke,
            s3_put_object_tagging: self.s3_put_object_tagging,
            s3_initiate_restore_object: self.s3_initiate_restore_object,
        }
    }
}
