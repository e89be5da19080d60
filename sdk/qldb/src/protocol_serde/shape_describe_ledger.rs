/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_describe_ledger_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::describe_ledger::DescribeLedgerOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "DescribeLedger", de_describe_ledger)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_describe_ledger(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::describe_ledger::builders::DescribeLedgerOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::describe_ledger::builders::DescribeLedgerOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Name") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_name(var_1);
            }
            s if s.matches("Arn") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_arn(var_2);
            }
            s if s.matches("State") => {
                let var_3 = Some(crate::types::LedgerState::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_state(var_3);
            }
            s if s.matches("CreationDateTime") => {
                let var_4 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_creation_date_time(var_4);
            }
            s if s.matches("PermissionsMode") => {
                let var_5 = Some(crate::types::PermissionsMode::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_permissions_mode(var_5);
            }
            s if s.matches("DeletionProtection") => {
                let var_6 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_deletion_protection(var_6);
            }
            s if s.matches("EncryptionDescription") => {
                let var_7 = Some(crate::protocol_serde::shape_ledger_encryption_description::de_ledger_encryption_description(&mut tag)?);
                builder = builder.set_encryption_description(var_7);
            }
            _ => {}
        }
    }
    Ok(builder)
}
