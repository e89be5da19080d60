/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_list_journal_s3_exports_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::list_journal_s3_exports::ListJournalS3ExportsOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "ListJournalS3Exports", de_list_journal_s3_exports)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_list_journal_s3_exports(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::list_journal_s3_exports::builders::ListJournalS3ExportsOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("JournalS3Exports") => {
                let var_1 = Some(crate::protocol_serde::de_list(&mut tag, crate::protocol_serde::shape_journal_s3_export_description::de_journal_s3_export_description)?);
                builder = builder.set_journal_s3_exports(var_1);
            }
            s if s.matches("NextToken") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_next_token(var_2);
            }
            _ => {}
        }
    }
    Ok(builder)
}
