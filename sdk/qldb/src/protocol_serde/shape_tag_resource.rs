/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_tag_resource_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::tag_resource::TagResourceOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (_, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "TagResource", |_| Ok(()))?;
    Ok(crate::operation::tag_resource::TagResourceOutput::builder()
        ._set_request_id(metadata.request_id().map(str::to_owned))
        .build())
}
