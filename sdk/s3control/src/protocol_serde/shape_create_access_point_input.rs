/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_create_access_point_input_input(
    input: &crate::operation::create_access_point::CreateAccessPointInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "CreateAccessPoint", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.name {
        writer.prefix("Name").string(var_2);
    }
    if let Some(var_3) = &input.bucket {
        writer.prefix("Bucket").string(var_3);
    }
    if let Some(var_4) = &input.vpc_configuration {
        crate::protocol_serde::shape_vpc_configuration::ser_vpc_configuration(writer.prefix("VpcConfiguration"), var_4)?;
    }
    if let Some(var_5) = &input.public_access_block_configuration {
        crate::protocol_serde::shape_public_access_block_configuration::ser_public_access_block_configuration(writer.prefix("PublicAccessBlockConfiguration"), var_5)?;
    }
    writer.finish();
    Ok(out)
}
