/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct ListLedgersOutput {
    /// <p>The ledgers that are associated with the current Amazon Web Services account and Region.</p>
    pub ledgers: ::std::option::Option<::std::vec::Vec<crate::types::LedgerSummary>>,
    /// <p>A pagination token, indicating whether there are more results available.</p>
    pub next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListLedgersOutput {
    /// <p>The ledgers that are associated with the current Amazon Web Services account and Region.</p>
    ///
    /// An unset list is distinct from an empty one.
    pub fn ledgers(&self) -> ::std::option::Option<&[crate::types::LedgerSummary]> {
        self.ledgers.as_deref()
    }
    /// <p>A pagination token, indicating whether there are more results available.</p>
    pub fn next_token(&self) -> ::std::option::Option<&str> {
        self.next_token.as_deref()
    }
}
impl ::aws_types::request_id::RequestId for ListLedgersOutput {
    fn request_id(&self) -> Option<&str> {
        self._request_id.as_deref()
    }
}
impl ListLedgersOutput {
    /// Creates a new builder-style object to manufacture [`ListLedgersOutput`](crate::operation::list_ledgers::ListLedgersOutput).
    pub fn builder() -> crate::operation::list_ledgers::builders::ListLedgersOutputBuilder {
        crate::operation::list_ledgers::builders::ListLedgersOutputBuilder::default()
    }
}

/// A builder for [`ListLedgersOutput`](crate::operation::list_ledgers::ListLedgersOutput).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct ListLedgersOutputBuilder {
    pub(crate) ledgers: ::std::option::Option<::std::vec::Vec<crate::types::LedgerSummary>>,
    pub(crate) next_token: ::std::option::Option<::std::string::String>,
    _request_id: Option<String>,
}
impl ListLedgersOutputBuilder {
    /// Appends an item to `ledgers`.
    ///
    /// To override the contents of this collection use [`set_ledgers`](Self::set_ledgers).
    ///
    /// <p>The ledgers that are associated with the current Amazon Web Services account and Region.</p>
    pub fn ledgers(mut self, input: crate::types::LedgerSummary) -> Self {
        let mut v = self.ledgers.unwrap_or_default();
        v.push(input);
        self.ledgers = ::std::option::Option::Some(v);
        self
    }
    /// <p>The ledgers that are associated with the current Amazon Web Services account and Region.</p>
    pub fn set_ledgers(mut self, input: ::std::option::Option<::std::vec::Vec<crate::types::LedgerSummary>>) -> Self {
        self.ledgers = input;
        self
    }
    /// <p>The ledgers that are associated with the current Amazon Web Services account and Region.</p>
    pub fn get_ledgers(&self) -> &::std::option::Option<::std::vec::Vec<crate::types::LedgerSummary>> {
        &self.ledgers
    }
    /// <p>A pagination token, indicating whether there are more results available.</p>
    pub fn next_token(mut self, input: impl ::std::convert::Into<::std::string::String>) -> Self {
        self.next_token = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>A pagination token, indicating whether there are more results available.</p>
    pub fn set_next_token(mut self, input: ::std::option::Option<::std::string::String>) -> Self {
        self.next_token = input;
        self
    }
    /// <p>A pagination token, indicating whether there are more results available.</p>
    pub fn get_next_token(&self) -> &::std::option::Option<::std::string::String> {
        &self.next_token
    }
    pub(crate) fn _set_request_id(mut self, request_id: Option<String>) -> Self {
        self._request_id = request_id;
        self
    }
    /// Consumes the builder and constructs a [`ListLedgersOutput`](crate::operation::list_ledgers::ListLedgersOutput).
    pub fn build(self) -> crate::operation::list_ledgers::ListLedgersOutput {
        crate::operation::list_ledgers::ListLedgersOutput {
            ledgers: self.ledgers,
            next_token: self.next_token,
            _request_id: self._request_id,
        }
    }
}
