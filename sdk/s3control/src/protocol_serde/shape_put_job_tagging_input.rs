/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_put_job_tagging_input_input(
    input: &crate::operation::put_job_tagging::PutJobTaggingInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "PutJobTagging", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.job_id {
        writer.prefix("JobId").string(var_2);
    }
    if let Some(var_3) = &input.tags {
        let mut list_4 = writer.prefix("Tags").start_list(false, None);
        for item_5 in var_3 {
            crate::protocol_serde::shape_s3_tag::ser_s3_tag(list_4.entry(), item_5)?;
        }
        list_4.finish();
    }
    writer.finish();
    Ok(out)
}
