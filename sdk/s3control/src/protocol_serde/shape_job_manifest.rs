/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_job_manifest(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::JobManifest,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.spec {
        crate::protocol_serde::shape_job_manifest_spec::ser_job_manifest_spec(writer.prefix("Spec"), var_1)?;
    }
    if let Some(var_2) = &input.location {
        crate::protocol_serde::shape_job_manifest_location::ser_job_manifest_location(writer.prefix("Location"), var_2)?;
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_job_manifest(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobManifest, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobManifest::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Spec") => {
                let var_1 = Some(crate::protocol_serde::shape_job_manifest_spec::de_job_manifest_spec(&mut tag)?);
                builder = builder.set_spec(var_1);
            }
            s if s.matches("Location") => {
                let var_2 = Some(crate::protocol_serde::shape_job_manifest_location::de_job_manifest_location(&mut tag)?);
                builder = builder.set_location(var_2);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
