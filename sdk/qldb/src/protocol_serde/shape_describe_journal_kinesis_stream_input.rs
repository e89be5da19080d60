/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_describe_journal_kinesis_stream_input_input(
    input: &crate::operation::describe_journal_kinesis_stream::DescribeJournalKinesisStreamInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "DescribeJournalKinesisStream", "2019-01-02");
    if let Some(var_1) = &input.ledger_name {
        writer.prefix("LedgerName").string(var_1);
    }
    if let Some(var_2) = &input.stream_id {
        writer.prefix("StreamId").string(var_2);
    }
    writer.finish();
    Ok(out)
}
