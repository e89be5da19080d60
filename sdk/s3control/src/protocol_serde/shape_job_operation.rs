/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_job_operation(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::JobOperation,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.lambda_invoke {
        crate::protocol_serde::shape_lambda_invoke_operation::ser_lambda_invoke_operation(writer.prefix("LambdaInvoke"), var_1)?;
    }
    if let Some(var_2) = &input.s3_put_object_tagging {
        crate::protocol_serde::shape_s3_set_object_tagging_operation::ser_s3_set_object_tagging_operation(writer.prefix("S3PutObjectTagging"), var_2)?;
    }
    if let Some(var_3) = &input.s3_initiate_restore_object {
        crate::protocol_serde::shape_s3_initiate_restore_object_operation::ser_s3_initiate_restore_object_operation(writer.prefix("S3InitiateRestoreObject"), var_3)?;
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_job_operation(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobOperation, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobOperation::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("LambdaInvoke") => {
                let var_1 = Some(crate::protocol_serde::shape_lambda_invoke_operation::de_lambda_invoke_operation(&mut tag)?);
                builder = builder.set_lambda_invoke(var_1);
            }
            s if s.matches("S3PutObjectTagging") => {
                let var_2 = Some(crate::protocol_serde::shape_s3_set_object_tagging_operation::de_s3_set_object_tagging_operation(&mut tag)?);
                builder = builder.set_s3_put_object_tagging(var_2);
            }
            s if s.matches("S3InitiateRestoreObject") => {
                let var_3 = Some(crate::protocol_serde::shape_s3_initiate_restore_object_operation::de_s3_initiate_restore_object_operation(&mut tag)?);
                builder = builder.set_s3_initiate_restore_object(var_3);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
