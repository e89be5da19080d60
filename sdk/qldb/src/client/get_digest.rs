/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

impl super::Client {
    /// Constructs a fluent builder for the [`GetDigest`](crate::operation::get_digest::builders::GetDigestFluentBuilder) operation.
    ///
    /// - The fluent builder is configurable:
    ///   - [`name`](crate::operation::get_digest::builders::GetDigestFluentBuilder::name) / [`set_name`](crate::operation::get_digest::builders::GetDigestFluentBuilder::set_name): <br>**required: true**
    /// - On success, responds with [`GetDigestOutput`](crate::operation::get_digest::GetDigestOutput).
    /// - On failure, responds with [`SdkError<Error>`](crate::Error).
    pub fn get_digest(&self) -> crate::operation::get_digest::builders::GetDigestFluentBuilder {
        crate::operation::get_digest::builders::GetDigestFluentBuilder::new(self.handle.clone())
    }
}
