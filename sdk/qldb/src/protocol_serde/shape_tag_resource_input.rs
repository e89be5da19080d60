/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_tag_resource_input_input(
    input: &crate::operation::tag_resource::TagResourceInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "TagResource", "2019-01-02");
    if let Some(var_1) = &input.resource_arn {
        writer.prefix("ResourceArn").string(var_1);
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
    writer.finish();
    Ok(out)
}
