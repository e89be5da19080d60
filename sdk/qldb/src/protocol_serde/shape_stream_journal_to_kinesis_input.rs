/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_stream_journal_to_kinesis_input_input(
    input: &crate::operation::stream_journal_to_kinesis::StreamJournalToKinesisInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "StreamJournalToKinesis", "2019-01-02");
    if let Some(var_1) = &input.ledger_name {
        writer.prefix("LedgerName").string(var_1);
    }
    if let Some(var_2) = &input.role_arn {
        writer.prefix("RoleArn").string(var_2);
    }
    if let Some(var_3) = &input.tags {
        let mut map_4 = writer.prefix("Tags").start_map(false, "key", "value");
        let mut entries_5: ::std::vec::Vec<_> = var_3.iter().collect();
        entries_5.sort();
        for (key, value) in entries_5 {
            map_4.entry(key).string(value);
        }
        map_4.finish();
    }
    if let Some(var_6) = &input.inclusive_start_time {
        writer.prefix("InclusiveStartTime").date_time(var_6, ::aws_smithy_types::date_time::Format::DateTime)?;
    }
    if let Some(var_7) = &input.exclusive_end_time {
        writer.prefix("ExclusiveEndTime").date_time(var_7, ::aws_smithy_types::date_time::Format::DateTime)?;
    }
    if let Some(var_8) = &input.kinesis_configuration {
        crate::protocol_serde::shape_kinesis_configuration::ser_kinesis_configuration(writer.prefix("KinesisConfiguration"), var_8)?;
    }
    if let Some(var_9) = &input.stream_name {
        writer.prefix("StreamName").string(var_9);
    }
    writer.finish();
    Ok(out)
}
