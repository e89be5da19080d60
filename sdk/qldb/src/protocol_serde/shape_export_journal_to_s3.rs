/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_export_journal_to_s3_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::export_journal_to_s3::ExportJournalToS3Output, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "ExportJournalToS3", de_export_journal_to_s3)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_export_journal_to_s3(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::export_journal_to_s3::builders::ExportJournalToS3OutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::export_journal_to_s3::builders::ExportJournalToS3OutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("ExportId") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_export_id(var_1);
            }
            _ => {}
        }
    }
    Ok(builder)
}
