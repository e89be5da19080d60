/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_create_job_input_input(
    input: &crate::operation::create_job::CreateJobInput,
) -> ::std::result::Result<::std::string::String, ::aws_smithy_types::error::operation::SerializationError> {
    let mut out = String::new();
    #[allow(unused_mut)]
    let mut writer = ::aws_smithy_query::QueryWriter::new(&mut out, "CreateJob", "2018-08-20");
    if let Some(var_1) = &input.account_id {
        writer.prefix("AccountId").string(var_1);
    }
    if let Some(var_2) = &input.confirmation_required {
        writer.prefix("ConfirmationRequired").boolean(*var_2);
    }
    if let Some(var_3) = &input.operation {
        crate::protocol_serde::shape_job_operation::ser_job_operation(writer.prefix("Operation"), var_3)?;
    }
    if let Some(var_4) = &input.report {
        crate::protocol_serde::shape_job_report::ser_job_report(writer.prefix("Report"), var_4)?;
    }
    if let Some(var_5) = &input.client_request_token {
        writer.prefix("ClientRequestToken").string(var_5);
    }
    if let Some(var_6) = &input.manifest {
        crate::protocol_serde::shape_job_manifest::ser_job_manifest(writer.prefix("Manifest"), var_6)?;
    }
    if let Some(var_7) = &input.description {
        writer.prefix("Description").string(var_7);
    }
    if let Some(var_8) = &input.priority {
        writer.prefix("Priority").number(::aws_smithy_types::Number::NegInt(i64::from(*var_8)));
    }
    if let Some(var_9) = &input.role_arn {
        writer.prefix("RoleArn").string(var_9);
    }
    if let Some(var_10) = &input.tags {
        let mut list_11 = writer.prefix("Tags").start_list(false, None);
        for item_12 in var_10 {
            crate::protocol_serde::shape_s3_tag::ser_s3_tag(list_11.entry(), item_12)?;
        }
        list_11.finish();
    }
    writer.finish();
    Ok(out)
}
