/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_job_report(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::JobReport,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.bucket {
        writer.prefix("Bucket").string(var_1);
    }
    if let Some(var_2) = &input.format {
        writer.prefix("Format").string(var_2.as_str());
    }
    if let Some(var_3) = &input.enabled {
        writer.prefix("Enabled").boolean(*var_3);
    }
    if let Some(var_4) = &input.prefix {
        writer.prefix("Prefix").string(var_4);
    }
    if let Some(var_5) = &input.report_scope {
        writer.prefix("ReportScope").string(var_5.as_str());
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_job_report(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobReport, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobReport::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Bucket") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_bucket(var_1);
            }
            s if s.matches("Format") => {
                let var_2 = Some(crate::types::JobReportFormat::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_format(var_2);
            }
            s if s.matches("Enabled") => {
                let var_3 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_enabled(var_3);
            }
            s if s.matches("Prefix") => {
                let var_4 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_prefix(var_4);
            }
            s if s.matches("ReportScope") => {
                let var_5 = Some(crate::types::JobReportScope::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_report_scope(var_5);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
