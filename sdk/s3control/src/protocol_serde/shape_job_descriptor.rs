/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::needless_question_mark)]
pub fn de_job_descriptor(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobDescriptor, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobDescriptor::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("JobId") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_job_id(var_1);
            }
            s if s.matches("ConfirmationRequired") => {
                let var_2 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_confirmation_required(var_2);
            }
            s if s.matches("Description") => {
                let var_3 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_description(var_3);
            }
            s if s.matches("JobArn") => {
                let var_4 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_job_arn(var_4);
            }
            s if s.matches("Status") => {
                let var_5 = Some(crate::types::JobStatus::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_status(var_5);
            }
            s if s.matches("Manifest") => {
                let var_6 = Some(crate::protocol_serde::shape_job_manifest::de_job_manifest(&mut tag)?);
                builder = builder.set_manifest(var_6);
            }
            s if s.matches("Operation") => {
                let var_7 = Some(crate::protocol_serde::shape_job_operation::de_job_operation(&mut tag)?);
                builder = builder.set_operation(var_7);
            }
            s if s.matches("Priority") => {
                let var_8 = Some(
                    <i32 as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_priority(var_8);
            }
            s if s.matches("ProgressSummary") => {
                let var_9 = Some(crate::protocol_serde::shape_job_progress_summary::de_job_progress_summary(&mut tag)?);
                builder = builder.set_progress_summary(var_9);
            }
            s if s.matches("StatusUpdateReason") => {
                let var_10 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_status_update_reason(var_10);
            }
            s if s.matches("FailureReasons") => {
                let var_11 = Some(crate::protocol_serde::de_list(&mut tag, crate::protocol_serde::shape_job_failure::de_job_failure)?);
                builder = builder.set_failure_reasons(var_11);
            }
            s if s.matches("Report") => {
                let var_12 = Some(crate::protocol_serde::shape_job_report::de_job_report(&mut tag)?);
                builder = builder.set_report(var_12);
            }
            s if s.matches("CreationTime") => {
                let var_13 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_creation_time(var_13);
            }
            s if s.matches("TerminationDate") => {
                let var_14 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_termination_date(var_14);
            }
            s if s.matches("RoleArn") => {
                let var_15 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_role_arn(var_15);
            }
            s if s.matches("SuspendedDate") => {
                let var_16 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_suspended_date(var_16);
            }
            s if s.matches("SuspendedCause") => {
                let var_17 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_suspended_cause(var_17);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
