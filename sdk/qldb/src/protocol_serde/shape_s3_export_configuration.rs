/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_s3_export_configuration(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::S3ExportConfiguration,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.bucket {
        writer.prefix("Bucket").string(var_1);
    }
    if let Some(var_2) = &input.prefix {
        writer.prefix("Prefix").string(var_2);
    }
    if let Some(var_3) = &input.encryption_configuration {
        crate::protocol_serde::shape_s3_encryption_configuration::ser_s3_encryption_configuration(writer.prefix("EncryptionConfiguration"), var_3)?;
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_s3_export_configuration(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::S3ExportConfiguration, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::S3ExportConfiguration::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Bucket") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_bucket(var_1);
            }
            s if s.matches("Prefix") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_prefix(var_2);
            }
            s if s.matches("EncryptionConfiguration") => {
                let var_3 = Some(crate::protocol_serde::shape_s3_encryption_configuration::de_s3_encryption_configuration(&mut tag)?);
                builder = builder.set_encryption_configuration(var_3);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
