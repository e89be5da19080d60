/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_get_digest_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::get_digest::GetDigestOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "GetDigest", de_get_digest)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_get_digest(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::get_digest::builders::GetDigestOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::get_digest::builders::GetDigestOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Digest") => {
                let var_1 = Some(
                    ::aws_smithy_types::base64::decode(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref())
                        .map(::aws_smithy_types::Blob::new)
                        .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_digest(var_1);
            }
            s if s.matches("DigestTipAddress") => {
                let var_2 = Some(crate::protocol_serde::shape_value_holder::de_value_holder(&mut tag)?);
                builder = builder.set_digest_tip_address(var_2);
            }
            _ => {}
        }
    }
    Ok(builder)
}
