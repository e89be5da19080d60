/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_create_access_point_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::create_access_point::CreateAccessPointOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (_, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "CreateAccessPoint", |_| Ok(()))?;
    Ok(crate::operation::create_access_point::CreateAccessPointOutput::builder()
        ._set_request_id(metadata.request_id().map(str::to_owned))
        .build())
}
