/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_describe_journal_s3_export_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::describe_journal_s3_export::DescribeJournalS3ExportOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "DescribeJournalS3Export", de_describe_journal_s3_export)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_describe_journal_s3_export(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::describe_journal_s3_export::builders::DescribeJournalS3ExportOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ExportDescription") => {
                let var_1 = Some(crate::protocol_serde::shape_journal_s3_export_description::de_journal_s3_export_description(&mut tag)?);
                builder = builder.set_export_description(var_1);
            }
            _ => {}
        }
    }
    Ok(builder)
}
