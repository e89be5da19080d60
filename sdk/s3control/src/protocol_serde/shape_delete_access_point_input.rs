/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_delete_access_point_input_input(
    input: &crate::operation::delete_access_point::DeleteAccessPointInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "DeleteAccessPoint", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.name {
        writer.prefix("Name").string(var_2);
    }
    writer.finish();
    Ok(out)
}
