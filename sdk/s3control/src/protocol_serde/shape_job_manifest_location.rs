/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_job_manifest_location(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::JobManifestLocation,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.object_arn {
        writer.prefix("ObjectArn").string(var_1);
    }
    if let Some(var_2) = &input.object_version_id {
        writer.prefix("ObjectVersionId").string(var_2);
    }
    if let Some(var_3) = &input.e_tag {
        writer.prefix("ETag").string(var_3);
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_job_manifest_location(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobManifestLocation, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobManifestLocation::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ObjectArn") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_object_arn(var_1);
            }
            s if s.matches("ObjectVersionId") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_object_version_id(var_2);
            }
            s if s.matches("ETag") => {
                let var_3 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_e_tag(var_3);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
