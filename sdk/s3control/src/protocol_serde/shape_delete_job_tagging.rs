/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_delete_job_tagging_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::delete_job_tagging::DeleteJobTaggingOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (_, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "DeleteJobTagging", |_| Ok(()))?;
    Ok(crate::operation::delete_job_tagging::DeleteJobTaggingOutput::builder()
        ._set_request_id(metadata.request_id().map(str::to_owned))
        .build())
}
