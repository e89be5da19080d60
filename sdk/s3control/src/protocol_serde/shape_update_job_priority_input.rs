/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_update_job_priority_input_input(
    input: &crate::operation::update_job_priority::UpdateJobPriorityInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "UpdateJobPriority", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.job_id {
        writer.prefix("JobId").string(var_2);
    }
    if let Some(var_3) = &input.priority {
        writer.prefix("Priority").number(::aws_smithy_types::Number::NegInt(i64::from(*var_3)));
    }
    writer.finish();
    Ok(out)
}
