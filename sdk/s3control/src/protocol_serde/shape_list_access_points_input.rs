/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_list_access_points_input_input(
    input: &crate::operation::list_access_points::ListAccessPointsInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "ListAccessPoints", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.bucket {
        writer.prefix("Bucket").string(var_2);
    }
    if let Some(var_3) = &input.next_token {
        writer.prefix("NextToken").string(var_3);
    }
    if let Some(var_4) = &input.max_results {
        writer.prefix("MaxResults").number(::aws_smithy_types::Number::NegInt(i64::from(*var_4)));
    }
    writer.finish();
    Ok(out)
}
