/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::needless_question_mark)]
pub fn de_journal_s3_export_description(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JournalS3ExportDescription, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JournalS3ExportDescription::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("LedgerName") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_ledger_name(var_1);
            }
            s if s.matches("ExportId") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_export_id(var_2);
            }
            s if s.matches("ExportCreationTime") => {
                let var_3 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_export_creation_time(var_3);
            }
            s if s.matches("Status") => {
                let var_4 = Some(crate::types::ExportStatus::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_status(var_4);
            }
            s if s.matches("InclusiveStartTime") => {
                let var_5 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_inclusive_start_time(var_5);
            }
            s if s.matches("ExclusiveEndTime") => {
                let var_6 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_exclusive_end_time(var_6);
            }
            s if s.matches("S3ExportConfiguration") => {
                let var_7 = Some(crate::protocol_serde::shape_s3_export_configuration::de_s3_export_configuration(&mut tag)?);
                builder = builder.set_s3_export_configuration(var_7);
            }
            s if s.matches("RoleArn") => {
                let var_8 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_role_arn(var_8);
            }
            s if s.matches("OutputFormat") => {
                let var_9 = Some(crate::types::OutputFormat::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_output_format(var_9);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
