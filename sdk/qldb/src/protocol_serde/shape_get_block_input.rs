/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_get_block_input_input(
    input: &crate::operation::get_block::GetBlockInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "GetBlock", "2019-01-02");
    if let Some(var_1) = &input.name {
        writer.prefix("Name").string(var_1);
    }
    if let Some(var_2) = &input.block_address {
        crate::protocol_serde::shape_value_holder::ser_value_holder(writer.prefix("BlockAddress"), var_2)?;
    }
    if let Some(var_3) = &input.digest_tip_address {
        crate::protocol_serde::shape_value_holder::ser_value_holder(writer.prefix("DigestTipAddress"), var_3)?;
    }
    writer.finish();
    Ok(out)
}
