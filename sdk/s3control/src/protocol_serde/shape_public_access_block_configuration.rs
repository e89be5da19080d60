/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_public_access_block_configuration(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::PublicAccessBlockConfiguration,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.block_public_acls {
        writer.prefix("BlockPublicAcls").boolean(*var_1);
    }
    if let Some(var_2) = &input.ignore_public_acls {
        writer.prefix("IgnorePublicAcls").boolean(*var_2);
    }
    if let Some(var_3) = &input.block_public_policy {
        writer.prefix("BlockPublicPolicy").boolean(*var_3);
    }
    if let Some(var_4) = &input.restrict_public_buckets {
        writer.prefix("RestrictPublicBuckets").boolean(*var_4);
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_public_access_block_configuration(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::PublicAccessBlockConfiguration, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::PublicAccessBlockConfiguration::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("BlockPublicAcls") => {
                let var_1 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_block_public_acls(var_1);
            }
            s if s.matches("IgnorePublicAcls") => {
                let var_2 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_ignore_public_acls(var_2);
            }
            s if s.matches("BlockPublicPolicy") => {
                let var_3 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_block_public_policy(var_3);
            }
            s if s.matches("RestrictPublicBuckets") => {
                let var_4 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_restrict_public_buckets(var_4);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
