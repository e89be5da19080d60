/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_create_ledger_input_input(
    input: &crate::operation::create_ledger::CreateLedgerInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "CreateLedger", "2019-01-02");
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    if let Some(var_2) = &input.tags {
        let mut map_3 = writer.prefix("Tags").start_map(false, "key", "value");
        let mut entries_4: ::std::vec::Vec<_> = var_2.iter().collect();
        entries_4.sort();
        for (key, value) in entries_4 {
            map_3.entry(key).string(value);
        }
        map_3.finish();
    }
    if let Some(var_5) = &input.permissions_mode {
        writer.prefix("PermissionsMode").string(var_5.as_str());
    }
    if let Some(var_6) = &input.deletion_protection {
        writer.prefix("DeletionProtection").boolean(*var_6);
    }
    if let Some(var_7) = &input.kms_key {
        writer.prefix("KmsKey").string(var_7);
    }
    writer.finish();
    Ok(out)
}
