/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::needless_question_mark)]

use crate::types::error::builders;
use aws_smithy_xml::decode::{try_data, ScopedDecoder, XmlDecodeError};
use std::collections::HashMap;

/// Decodes the `member` children of a list element.
pub(crate) fn de_list<T>(
    decoder: &mut ScopedDecoder<'_, '_>,
    mut de_member: impl FnMut(&mut ScopedDecoder<'_, '_>) -> Result<T, XmlDecodeError>,
) -> Result<Vec<T>, XmlDecodeError> {
    let mut out = Vec::new();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("member") {
            out.push(de_member(&mut tag)?);
        }
    }
    Ok(out)
}

/// Decodes the `entry` children of a string map element.
///
/// A key that appears in more than one entry fails the decode.
pub(crate) fn de_string_map(
    decoder: &mut ScopedDecoder<'_, '_>,
) -> Result<HashMap<String, String>, XmlDecodeError> {
    let mut out = None;
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("entry") {
            let (key, value) = de_string_map_entry(&mut tag)?;
            aws_smithy_types::map::insert_unique(&mut out, key, value)
                .map_err(XmlDecodeError::unhandled)?;
        }
    }
    Ok(out.unwrap_or_default())
}

fn de_string_map_entry(decoder: &mut ScopedDecoder<'_, '_>) -> Result<(String, String), XmlDecodeError> {
    let mut key = None;
    let mut value = None;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("key") => key = Some(try_data(&mut tag)?.into_owned()),
            s if s.matches("value") => value = Some(try_data(&mut tag)?.into_owned()),
            _ => {}
        }
    }
    let key = key.ok_or_else(|| XmlDecodeError::custom("map entry is missing its key"))?;
    let value = value.ok_or_else(|| XmlDecodeError::custom("map entry is missing its value"))?;
    Ok((key, value))
}

/// Maps an `<ErrorResponse>` body onto the service's error type.
///
/// Codes that are not modeled become [`Error::Unhandled`](crate::Error::Unhandled) with the parsed
/// metadata preserved. A modeled error without a message of its own takes the envelope's message.
pub(crate) fn de_service_error(body: &[u8]) -> Result<crate::Error, XmlDecodeError> {
    #[allow(unused_mut)]
    let mut generic_builder = aws_smithy_query::errors::parse_error_metadata(body)?;
    let generic = generic_builder.build();
    let error_code = match generic.code() {
        Some(code) => code.to_owned(),
        None => return Ok(crate::Error::unhandled(generic)),
    };
    let _error_message = generic.message().map(|msg| msg.to_owned());
    Ok(match error_code.as_str() {
        "InvalidParameterException" => crate::Error::InvalidParameterException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::InvalidParameterExceptionBuilder::default();
                output = crate::protocol_serde::shape_invalid_parameter_exception::de_invalid_parameter_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "LimitExceededException" => crate::Error::LimitExceededException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::LimitExceededExceptionBuilder::default();
                output = crate::protocol_serde::shape_limit_exceeded_exception::de_limit_exceeded_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "ResourceAlreadyExistsException" => crate::Error::ResourceAlreadyExistsException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::ResourceAlreadyExistsExceptionBuilder::default();
                output = crate::protocol_serde::shape_resource_already_exists_exception::de_resource_already_exists_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "ResourceInUseException" => crate::Error::ResourceInUseException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::ResourceInUseExceptionBuilder::default();
                output = crate::protocol_serde::shape_resource_in_use_exception::de_resource_in_use_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "ResourceNotFoundException" => crate::Error::ResourceNotFoundException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::ResourceNotFoundExceptionBuilder::default();
                output = crate::protocol_serde::shape_resource_not_found_exception::de_resource_not_found_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "ResourcePreconditionNotMetException" => crate::Error::ResourcePreconditionNotMetException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::ResourcePreconditionNotMetExceptionBuilder::default();
                output = crate::protocol_serde::shape_resource_precondition_not_met_exception::de_resource_precondition_not_met_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        _ => crate::Error::unhandled(generic),
    })
}

pub(crate) mod shape_cancel_journal_kinesis_stream;
pub(crate) mod shape_cancel_journal_kinesis_stream_input;
pub(crate) mod shape_create_ledger;
pub(crate) mod shape_create_ledger_input;
pub(crate) mod shape_delete_ledger;
pub(crate) mod shape_delete_ledger_input;
pub(crate) mod shape_describe_journal_kinesis_stream;
pub(crate) mod shape_describe_journal_kinesis_stream_input;
pub(crate) mod shape_describe_journal_s3_export;
pub(crate) mod shape_describe_journal_s3_export_input;
pub(crate) mod shape_describe_ledger;
pub(crate) mod shape_describe_ledger_input;
pub(crate) mod shape_export_journal_to_s3;
pub(crate) mod shape_export_journal_to_s3_input;
pub(crate) mod shape_get_block;
pub(crate) mod shape_get_block_input;
pub(crate) mod shape_get_digest;
pub(crate) mod shape_get_digest_input;
pub(crate) mod shape_get_revision;
pub(crate) mod shape_get_revision_input;
pub(crate) mod shape_invalid_parameter_exception;
pub(crate) mod shape_journal_kinesis_stream_description;
pub(crate) mod shape_journal_s3_export_description;
pub(crate) mod shape_kinesis_configuration;
pub(crate) mod shape_ledger_encryption_description;
pub(crate) mod shape_ledger_summary;
pub(crate) mod shape_limit_exceeded_exception;
pub(crate) mod shape_list_journal_kinesis_streams_for_ledger;
pub(crate) mod shape_list_journal_kinesis_streams_for_ledger_input;
pub(crate) mod shape_list_journal_s3_exports;
pub(crate) mod shape_list_journal_s3_exports_for_ledger;
pub(crate) mod shape_list_journal_s3_exports_for_ledger_input;
pub(crate) mod shape_list_journal_s3_exports_input;
pub(crate) mod shape_list_ledgers;
pub(crate) mod shape_list_ledgers_input;
pub(crate) mod shape_list_tags_for_resource;
pub(crate) mod shape_list_tags_for_resource_input;
pub(crate) mod shape_resource_already_exists_exception;
pub(crate) mod shape_resource_in_use_exception;
pub(crate) mod shape_resource_not_found_exception;
pub(crate) mod shape_resource_precondition_not_met_exception;
pub(crate) mod shape_s3_encryption_configuration;
pub(crate) mod shape_s3_export_configuration;
pub(crate) mod shape_stream_journal_to_kinesis;
pub(crate) mod shape_stream_journal_to_kinesis_input;
pub(crate) mod shape_tag_resource;
pub(crate) mod shape_tag_resource_input;
pub(crate) mod shape_untag_resource;
pub(crate) mod shape_untag_resource_input;
pub(crate) mod shape_update_ledger;
pub(crate) mod shape_update_ledger_input;
pub(crate) mod shape_update_ledger_permissions_mode;
pub(crate) mod shape_update_ledger_permissions_mode_input;
pub(crate) mod shape_value_holder;
