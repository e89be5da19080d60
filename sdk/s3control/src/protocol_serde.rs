/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![allow(clippy::needless_question_mark)]

use crate::types::error::builders;
use aws_smithy_xml::decode::{ScopedDecoder, XmlDecodeError};

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
        "BadRequestException" => crate::Error::BadRequestException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::BadRequestExceptionBuilder::default();
                output = crate::protocol_serde::shape_bad_request_exception::de_bad_request_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "InvalidRequestException" => crate::Error::InvalidRequestException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::InvalidRequestExceptionBuilder::default();
                output = crate::protocol_serde::shape_invalid_request_exception::de_invalid_request_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "InvalidNextTokenException" => crate::Error::InvalidNextTokenException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::InvalidNextTokenExceptionBuilder::default();
                output = crate::protocol_serde::shape_invalid_next_token_exception::de_invalid_next_token_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "NotFoundException" => crate::Error::NotFoundException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::NotFoundExceptionBuilder::default();
                output = crate::protocol_serde::shape_not_found_exception::de_not_found_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "NoSuchPublicAccessBlockConfiguration" => crate::Error::NoSuchPublicAccessBlockConfiguration({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::NoSuchPublicAccessBlockConfigurationBuilder::default();
                output = crate::protocol_serde::shape_no_such_public_access_block_configuration::de_no_such_public_access_block_configuration_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "TooManyRequestsException" => crate::Error::TooManyRequestsException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::TooManyRequestsExceptionBuilder::default();
                output = crate::protocol_serde::shape_too_many_requests_exception::de_too_many_requests_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "TooManyTagsException" => crate::Error::TooManyTagsException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::TooManyTagsExceptionBuilder::default();
                output = crate::protocol_serde::shape_too_many_tags_exception::de_too_many_tags_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "IdempotencyException" => crate::Error::IdempotencyException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::IdempotencyExceptionBuilder::default();
                output = crate::protocol_serde::shape_idempotency_exception::de_idempotency_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "InternalServiceException" => crate::Error::InternalServiceException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::InternalServiceExceptionBuilder::default();
                output = crate::protocol_serde::shape_internal_service_exception::de_internal_service_exception_xml_err(body, output)?;
                output.meta(generic).build()
            };
            if tmp.message.is_none() {
                tmp.message = _error_message;
            }
            tmp
        }),
        "JobStatusException" => crate::Error::JobStatusException({
            #[allow(unused_mut)]
            let mut tmp = {
                #[allow(unused_mut)]
                let mut output = builders::JobStatusExceptionBuilder::default();
                output = crate::protocol_serde::shape_job_status_exception::de_job_status_exception_xml_err(body, output)?;
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

pub(crate) mod shape_access_point;
pub(crate) mod shape_bad_request_exception;
pub(crate) mod shape_create_access_point;
pub(crate) mod shape_create_access_point_input;
pub(crate) mod shape_create_job;
pub(crate) mod shape_create_job_input;
pub(crate) mod shape_delete_access_point;
pub(crate) mod shape_delete_access_point_input;
pub(crate) mod shape_delete_access_point_policy;
pub(crate) mod shape_delete_access_point_policy_input;
pub(crate) mod shape_delete_job_tagging;
pub(crate) mod shape_delete_job_tagging_input;
pub(crate) mod shape_delete_public_access_block;
pub(crate) mod shape_delete_public_access_block_input;
pub(crate) mod shape_describe_job;
pub(crate) mod shape_describe_job_input;
pub(crate) mod shape_get_access_point;
pub(crate) mod shape_get_access_point_input;
pub(crate) mod shape_get_access_point_policy;
pub(crate) mod shape_get_access_point_policy_input;
pub(crate) mod shape_get_job_tagging;
pub(crate) mod shape_get_job_tagging_input;
pub(crate) mod shape_get_public_access_block;
pub(crate) mod shape_get_public_access_block_input;
pub(crate) mod shape_idempotency_exception;
pub(crate) mod shape_internal_service_exception;
pub(crate) mod shape_invalid_next_token_exception;
pub(crate) mod shape_invalid_request_exception;
pub(crate) mod shape_job_descriptor;
pub(crate) mod shape_job_failure;
pub(crate) mod shape_job_list_descriptor;
pub(crate) mod shape_job_manifest;
pub(crate) mod shape_job_manifest_location;
pub(crate) mod shape_job_manifest_spec;
pub(crate) mod shape_job_operation;
pub(crate) mod shape_job_progress_summary;
pub(crate) mod shape_job_report;
pub(crate) mod shape_job_status_exception;
pub(crate) mod shape_lambda_invoke_operation;
pub(crate) mod shape_list_access_points;
pub(crate) mod shape_list_access_points_input;
pub(crate) mod shape_list_jobs;
pub(crate) mod shape_list_jobs_input;
pub(crate) mod shape_no_such_public_access_block_configuration;
pub(crate) mod shape_not_found_exception;
pub(crate) mod shape_public_access_block_configuration;
pub(crate) mod shape_put_access_point_policy;
pub(crate) mod shape_put_access_point_policy_input;
pub(crate) mod shape_put_job_tagging;
pub(crate) mod shape_put_job_tagging_input;
pub(crate) mod shape_put_public_access_block;
pub(crate) mod shape_put_public_access_block_input;
pub(crate) mod shape_s3_initiate_restore_object_operation;
pub(crate) mod shape_s3_set_object_tagging_operation;
pub(crate) mod shape_s3_tag;
pub(crate) mod shape_too_many_requests_exception;
pub(crate) mod shape_too_many_tags_exception;
pub(crate) mod shape_update_job_priority;
pub(crate) mod shape_update_job_priority_input;
pub(crate) mod shape_update_job_status;
pub(crate) mod shape_update_job_status_input;
pub(crate) mod shape_vpc_configuration;
