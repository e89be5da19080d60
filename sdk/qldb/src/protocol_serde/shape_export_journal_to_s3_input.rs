/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_export_journal_to_s3_input_input(
    input: &crate::operation::export_journal_to_s3::ExportJournalToS3Input,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "ExportJournalToS3", "2019-01-02");
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    if let Some(var_2) = &input.inclusive_start_time {
        writer.prefix("InclusiveStartTime").date_time(var_2, ::aws_smithy_types::date_time::Format::DateTime)?;
    }
    if let Some(var_3) = &input.exclusive_end_time {
        writer.prefix("ExclusiveEndTime").date_time(var_3, ::aws_smithy_types::date_time::Format::DateTime)?;
    }
    if let Some(var_4) = &input.s3_export_configuration {
        crate::protocol_serde::shape_s3_export_configuration::ser_s3_export_configuration(writer.prefix("S3ExportConfiguration"), var_4)?;
    }
    if let Some(var_5) = &input.role_arn {
        writer.prefix("RoleArn").string(var_5);
    }
    if let Some(var_6) = &input.output_format {
        writer.prefix("OutputFormat").string(var_6.as_str());
    }
    writer.finish();
    Ok(out)
}
