/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_put_public_access_block_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::put_public_access_block::PutPublicAccessBlockOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (_, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "PutPublicAccessBlock", |_| Ok(()))?;
    Ok(crate::operation::put_public_access_block::PutPublicAccessBlockOutput::builder()
        ._set_request_id(metadata.request_id().map(str::to_owned))
        .build())
}
