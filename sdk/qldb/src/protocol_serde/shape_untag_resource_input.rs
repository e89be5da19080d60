/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_untag_resource_input_input(
    input: &crate::operation::untag_resource::UntagResourceInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "UntagResource", "2019-01-02");
    if let Some(var_1) = &input.resource_arn {
        writer.prefix("ResourceArn").string(var_1);
    }
    if let Some(var_2) = &input.tag_keys {
        let mut list_3 = writer.prefix("TagKeys").start_list(false, None);
        for item_4 in var_2 {
            list_3.entry().string(item_4);
        }
        list_3.finish();
    }
    writer.finish();
    Ok(out)
}
