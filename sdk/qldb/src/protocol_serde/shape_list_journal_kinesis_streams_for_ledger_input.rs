/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_list_journal_kinesis_streams_for_ledger_input_input(
    input: &crate::operation::list_journal_kinesis_streams_for_ledger::ListJournalKinesisStreamsForLedgerInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "ListJournalKinesisStreamsForLedger", "2019-01-02");
    if let Some(var_1) = &input.ledger_name {
        writer.prefix("LedgerName").string(var_1);
    }
    if let Some(var_2) = &input.max_results {
        writer.prefix("MaxResults").number(::aws_smithy_types::Number::NegInt(i64::from(*var_2)));
    }
    if let Some(var_3) = &input.next_token {
        writer.prefix("NextToken").string(var_3);
    }
    writer.finish();
    Ok(out)
}
