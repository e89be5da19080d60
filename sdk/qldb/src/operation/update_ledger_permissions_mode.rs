/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Orchestration and serialization glue logic for `UpdateLedgerPermissionsMode`.
#[derive(::std::clone::Clone, ::std::default::Default, ::std::fmt::Debug)]
#[non_exhaustive]
pub struct UpdateLedgerPermissionsMode;
impl UpdateLedgerPermissionsMode {
    /// Creates a new `UpdateLedgerPermissionsMode`
    pub fn new() -> Self {
        Self
    }
}
impl ::aws_smithy_runtime::client::orchestrator::QueryOperation for UpdateLedgerPermissionsMode {
    const NAME: &'static str = "UpdateLedgerPermissionsMode";

    type Input = crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeInput;
    type Output = crate::operation::update_ledger_permissions_mode::UpdateLedgerPermissionsModeOutput;
    type Error = crate::Error;

    fn serialize_input(input: &Self::Input) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::BuildError> {
        ::std::result::Result::Ok(crate::protocol_serde::shape_update_ledger_permissions_mode_input::ser_update_ledger_permissions_mode_input_input(input)?)
    }

    fn deserialize_output(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Output, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::shape_update_ledger_permissions_mode::de_update_ledger_permissions_mode_http_response(response)
    }

    fn deserialize_error(
        response: &::aws_smithy_runtime::client::connector::HttpResponse,
    ) -> ::std::result::Result<Self::Error, ::aws_smithy_xml::decode::XmlDecodeError> {
        crate::protocol_serde::de_service_error(response.body())
    }
}

pub use crate::operation::update_ledger_permissions_mode::_update_ledger_permissions_mode_output::UpdateLedgerPermissionsModeOutput;

pub use crate::operation::update_ledger_permissions_mode::_update_ledger_permissions_mode_input::UpdateLedgerPermissionsModeInput;

mod _update_ledger_permissions_mode_input;

mod _update_ledger_permissions_mode_output;

/// Builders
pub mod builders;
