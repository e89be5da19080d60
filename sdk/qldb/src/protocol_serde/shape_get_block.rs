/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_get_block_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::get_block::GetBlockOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "GetBlock", de_get_block)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_get_block(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::get_block::builders::GetBlockOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::get_block::builders::GetBlockOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Block") => {
                let var_1 = Some(crate::protocol_serde::shape_value_holder::de_value_holder(&mut tag)?);
                builder = builder.set_block(var_1);
            }
            s if s.matches("Proof") => {
                let var_2 = Some(crate::protocol_serde::shape_value_holder::de_value_holder(&mut tag)?);
                builder = builder.set_proof(var_2);
            }
            _ => {}
        }
    }
    Ok(builder)
}
