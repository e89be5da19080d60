/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_value_holder(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::ValueHolder,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.ion_text {
        writer.prefix("IonText").string(var_1);
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_value_holder(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::ValueHolder, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::ValueHolder::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("IonText") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_ion_text(var_1);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
