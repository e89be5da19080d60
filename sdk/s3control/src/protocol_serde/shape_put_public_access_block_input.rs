/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_put_public_access_block_input_input(
    input: &crate::operation::put_public_access_block::PutPublicAccessBlockInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "PutPublicAccessBlock", "2018-08-20");
    if let Some(var_1) = &input.public_access_block_configuration {
        crate::protocol_serde::shape_public_access_block_configuration::ser_public_access_block_configuration(writer.prefix("PublicAccessBlockConfiguration"), var_1)?;
    }
    if let Some(var_2) = &input.account_id {
        writer.prefix("AccountId").string(var_2);
    }
    writer.finish();
    Ok(out)
}
