/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_list_journal_s3_exports_for_ledger_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::list_journal_s3_exports_for_ledger::ListJournalS3ExportsForLedgerOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "ListJournalS3ExportsForLedger", de_list_journal_s3_exports_for_ledger)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_list_journal_s3_exports_for_ledger(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::list_journal_s3_exports_for_ledger::builders::ListJournalS3ExportsForLedgerOutputBuilder::default();
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
