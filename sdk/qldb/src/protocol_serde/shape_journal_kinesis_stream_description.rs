/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::needless_question_mark)]
pub fn de_journal_kinesis_stream_description(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JournalKinesisStreamDescription, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JournalKinesisStreamDescription::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("LedgerName") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_ledger_name(var_1);
            }
            s if s.matches("CreationTime") => {
                let var_2 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_creation_time(var_2);
            }
            s if s.matches("InclusiveStartTime") => {
                let var_3 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_inclusive_start_time(var_3);
            }
            s if s.matches("ExclusiveEndTime") => {
                let var_4 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_exclusive_end_time(var_4);
            }
            s if s.matches("RoleArn") => {
                let var_5 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_role_arn(var_5);
            }
            s if s.matches("StreamId") => {
                let var_6 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_stream_id(var_6);
            }
            s if s.matches("Arn") => {
                let var_7 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_arn(var_7);
            }
            s if s.matches("Status") => {
                let var_8 = Some(crate::types::StreamStatus::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_status(var_8);
            }
            s if s.matches("KinesisConfiguration") => {
                let var_9 = Some(crate::protocol_serde::shape_kinesis_configuration::de_kinesis_configuration(&mut tag)?);
                builder = builder.set_kinesis_configuration(var_9);
            }
            s if s.matches("ErrorCause") => {
                let var_10 = Some(crate::types::ErrorCause::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_error_cause(var_10);
            }
            s if s.matches("StreamName") => {
                let var_11 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_stream_name(var_11);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
