/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_job_manifest_spec(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::JobManifestSpec,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.format {
        writer.prefix("Format").string(var_1.as_str());
    }
    if let Some(var_2) = &input.fields {
        let mut list_3 = writer.prefix("Fields").start_list(false, None);
        for item_4 in var_2 {
            list_3.entry().string(item_4.as_str());
        }
        list_3.finish();
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_job_manifest_spec(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::JobManifestSpec, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::JobManifestSpec::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Format") => {
                let var_1 = Some(crate::types::JobManifestFormat::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_format(var_1);
            }
            s if s.matches("Fields") => {
                let var_2 = Some(
                    crate::protocol_serde::de_list(&mut tag, |member| {
                        Ok(crate::types::JobManifestFieldName::from(
                            ::aws_smithy_xml::decode::try_data(member)?.as_ref(),
                        ))
                    })?
                );
                builder = builder.set_fields(var_2);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
