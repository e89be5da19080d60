/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_list_jobs_input_input(
    input: &crate::operation::list_jobs::ListJobsInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "ListJobs", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.job_statuses {
        let mut list_3 = writer.prefix("JobStatuses").start_list(false, None);
        for item_4 in var_2 {
            list_3.entry().string(item_4.as_str());
        }
        list_3.finish();
    }
    if let Some(var_5) = &input.next_token {
        writer.prefix("NextToken").string(var_5);
    }
    if let Some(var_6) = &input.max_results {
        writer.prefix("MaxResults").number(::aws_smithy_types::Number::NegInt(i64::from(*var_6)));
    }
    writer.finish();
    Ok(out)
}
