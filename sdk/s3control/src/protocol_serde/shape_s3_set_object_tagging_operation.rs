/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_s3_set_object_tagging_operation(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::S3SetObjectTaggingOperation,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.tag_set {
        let mut list_2 = writer.prefix("TagSet").start_list(false, None);
        for item_3 in var_1 {
            crate::protocol_serde::shape_s3_tag::ser_s3_tag(list_2.entry(), item_3)?;
        }
        list_2.finish();
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_s3_set_object_tagging_operation(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::S3SetObjectTaggingOperation, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::S3SetObjectTaggingOperation::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("TagSet") => {
                let var_1 = Some(crate::protocol_serde::de_list(&mut tag, crate::protocol_serde::shape_s3_tag::de_s3_tag)?);
                builder = builder.set_tag_set(var_1);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
