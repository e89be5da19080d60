/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_s3_initiate_restore_object_operation(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::S3InitiateRestoreObjectOperation,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.expiration_in_days {
        writer.prefix("ExpirationInDays").number(::aws_smithy_types::Number::NegInt(i64::from(*var_1)));
    }
    if let Some(var_2) = &input.glacier_job_tier {
        writer.prefix("GlacierJobTier").string(var_2.as_str());
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_s3_initiate_restore_object_operation(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::S3InitiateRestoreObjectOperation, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::S3InitiateRestoreObjectOperation::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ExpirationInDays") => {
                let var_1 = Some(
                    <i32 as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_expiration_in_days(var_1);
            }
            s if s.matches("GlacierJobTier") => {
                let var_2 = Some(crate::types::S3GlacierJobTier::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_glacier_job_tier(var_2);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
