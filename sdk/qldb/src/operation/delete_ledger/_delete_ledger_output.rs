/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct DeleteLedgerOutput {
    _request_id: Option<String>,
}
impl ::aws_types::request_id::RequestId for DeleteLedgerOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl DeleteLedgerOutput {
    /// Creates a new builder-style object to manufacture [`DeleteLedgerOutput`](crate::operation::delete_ledger::DeleteLedgerOutput).
    pub fn builder() -> crate::operation::delete_ledger::builders::DeleteLedgerOutputBuilder {
        crate::operation::delete_ledger::builders::DeleteLedgerOutputBuilder::default()
    }
}

/// A builder for [`DeleteLedgerOutput`](crate::operation::delete_ledger::DeleteLedgerOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct DeleteLedgerOutputBuilder {
    _request_id: Option<String>,
}
impl DeleteLedgerOutputBuilder {
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`DeleteLedgerOutput`](crate::operation::delete_ledger::DeleteLedgerOutput).
    pub fn build(self) -> crate::operation::delete_ledger::DeleteLedgerOutput {
        crate::operation::delete_ledger::DeleteLedgerOutput {
            _request_id: self._request_id,
        }
    }
}
