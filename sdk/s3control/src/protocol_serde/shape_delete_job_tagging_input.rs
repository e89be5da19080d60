/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_delete_job_tagging_input_input(
    input: &crate::operation::delete_job_tagging::DeleteJobTaggingInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "DeleteJobTagging", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.job_id {
        writer.prefix("JobId").string(var_2);
    }
    writer.finish();
    Ok(out)
}
