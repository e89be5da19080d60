/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>Information about a ledger, including its name, state, and when it was created.</p>
#[non_exhaustive]
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::fmt::Debug)]
pub struct LedgerSummary {
    /// <p>The name of the ledger.</p>
    pub name: ::std::option::Option<::std::string::String>,
    /// <p>The current status of the ledger.</p>
    pub state: ::std::option::Option<crate::types::LedgerState>,
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl LedgerSummary {
    /// <p>The name of the ledger.</p>
    pub fn name(&self) -> ::std::option::Option<&str> {
        self.name.as_deref()
    }
    /// <p>The current status of the ledger.</p>
    pub fn state(&self) -> ::std::option::Option<&crate::types::LedgerState> {
        self.state.as_ref()
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn creation_date_time(&self) -> ::std::option::Option<&::aws_smithy_types::DateTime> {
        self.creation_date_time.as_ref()
    }
}
impl LedgerSummary {
    /// Creates a new builder-style object to manufacture [`LedgerSummary`](crate::types::LedgerSummary).
    pub fn builder() -> crate::types::builders::LedgerSummaryBuilder {
        crate::types::builders::LedgerSummaryBuilder::default()
    }
}

/// A builder for [`LedgerSummary`](crate::types::LedgerSummary).
#[derive(::std::clone::Clone, ::std::cmp::PartialEq, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct LedgerSummaryBuilder {
    pub(crate) name: ::std::option::Option<::std::string::String>,
    pub(crate) state: ::std::option::Option<crate::types::LedgerState>,
    pub(crate) creation_date_time: ::std::option::Option<::aws_smithy_types::DateTime>,
}
impl LedgerSummaryBuilder {
    /// <p>The name of the ledger.</p>
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
    /// <p>The current status of the ledger.</p>
    pub fn state(mut self, input: impl ::std::convert::Into<crate::types::LedgerState>) -> Self {
        self.state = ::std::option::Option::Some(input.into());
        self
    }
    /// <p>The current status of the ledger.</p>
    pub fn set_state(mut self, input: ::std::option::Option<crate::types::LedgerState>) -> Self {
        self.state = input;
        self
    }
    /// <p>The current status of the ledger.</p>
    pub fn get_state(&self) -> &::std::option::Option<crate::types::LedgerState> {
        &self.state
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn creation_date_time(mut self, input: ::aws_smithy_types::DateTime) -> Self {
        self.creation_date_time = ::std::option::Option::Some(input);
        self
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn set_creation_date_time(mut self, input: ::std::option::Option<::aws_smithy_types::DateTime>) -> Self {
        self.creation_date_time = input;
        self
    }
    /// <p>The date and time, in epoch time format, when the ledger was created.</p>
    pub fn get_creation_date_time(&self) -> &::std::option::Option<::aws_smithy_types::DateTime> {
        &self.creation_date_time
    }
    /// Consumes the builder and constructs a [`LedgerSummary`](crate::types::LedgerSummary).
    pub fn build(self) -> crate::types::LedgerSummary {
        crate::types::LedgerSummary {
            name: self.name,
            state: self.state,
            creation_date_time: self.creation_date_time,
        }
    }
}
