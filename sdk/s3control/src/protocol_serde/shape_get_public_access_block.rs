/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_get_public_access_block_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::get_public_access_block::GetPublicAccessBlockOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "GetPublicAccessBlock", de_get_public_access_block)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_get_public_access_block(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::get_public_access_block::builders::GetPublicAccessBlockOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::get_public_access_block::builders::GetPublicAccessBlockOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("PublicAccessBlockConfiguration") => {
                let var_1 = Some(crate::protocol_serde::shape_public_access_block_configuration::de_public_access_block_configuration(&mut tag)?);
                builder = builder.set_public_access_block_configuration(var_1);
            }
            _ => {}
        }
    }
    Ok(builder)
}
