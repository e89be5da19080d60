/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_cancel_journal_kinesis_stream_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::cancel_journal_kinesis_stream::CancelJournalKinesisStreamOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "CancelJournalKinesisStream", de_cancel_journal_kinesis_stream)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_cancel_journal_kinesis_stream(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::cancel_journal_kinesis_stream::builders::CancelJournalKinesisStreamOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("StreamId") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_stream_id(var_1);
            }
            _ => {}
        }
    }
    Ok(builder)
}
