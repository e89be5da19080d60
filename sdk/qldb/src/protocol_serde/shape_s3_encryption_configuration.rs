/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_s3_encryption_configuration(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::S3EncryptionConfiguration,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.object_encryption_type {
        writer.prefix("ObjectEncryptionType").string(var_1.as_str());
    }
    if let Some(var_2) = &input.kms_key_arn {
        writer.prefix("KmsKeyArn").string(var_2);
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_s3_encryption_configuration(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::S3EncryptionConfiguration, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::S3EncryptionConfiguration::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ObjectEncryptionType") => {
                let var_1 = Some(crate::types::S3ObjectEncryptionType::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_object_encryption_type(var_1);
            }
            s if s.matches("KmsKeyArn") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_kms_key_arn(var_2);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
