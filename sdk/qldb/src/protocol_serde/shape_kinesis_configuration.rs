/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub fn ser_kinesis_configuration(
    #[allow(unused_mut)] mut writer: ::aws_smithy_query::QueryValueWriter<'_>,
    input: &crate::types::KinesisConfiguration,
) -> ::std::result::Result<(), ::aws_smithy_types::error::operation::SerializationError> {
    if let Some(var_1) = &input.stream_arn {
        writer.prefix("StreamArn").string(var_1);
    }
    if let Some(var_2) = &input.aggregation_enabled {
        writer.prefix("AggregationEnabled").boolean(*var_2);
    }
    Ok(())
}

#[allow(clippy::needless_question_mark)]
pub fn de_kinesis_configuration(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::KinesisConfiguration, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::KinesisConfiguration::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("StreamArn") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_stream_arn(var_1);
            }
            s if s.matches("AggregationEnabled") => {
                let var_2 = Some(
                    <bool as ::aws_smithy_types::primitive::Parse>::parse_smithy_primitive(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_aggregation_enabled(var_2);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
