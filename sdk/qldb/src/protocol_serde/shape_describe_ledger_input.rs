/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_describe_ledger_input_input(
    input: &crate::operation::describe_ledger::DescribeLedgerInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "DescribeLedger", "2019-01-02");
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    writer.finish();
    Ok(out)
}
