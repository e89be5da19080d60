/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Decoding of the successful query response envelope:
//!
//! ```xml
//! <DescribeLedgerResponse>
//!     <DescribeLedgerResult>...</DescribeLedgerResult>
//!     <ResponseMetadata><RequestId>...</RequestId></ResponseMetadata>
//! </DescribeLedgerResponse>
//! ```

use aws_smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlDecodeError};

/// Metadata the service attaches to every successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResponseMetadata {
    request_id: Option<String>,
}

impl ResponseMetadata {
    /// The ID the service assigned to the request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// Decodes a response envelope for `operation`.
///
/// `parse_result` is called with a decoder scoped to the `<{operation}Result>` element. It is
/// not called when the element is absent, in which case `None` is returned. Elements other than
/// the result and `ResponseMetadata` are skipped.
///
/// The whole body is read. A malformed or truncated document is an error even when the fields
/// read before the damage decoded cleanly.
pub fn decode_response<T>(
    body: &[u8],
    operation: &str,
    parse_result: impl FnOnce(&mut ScopedDecoder<'_, '_>) -> Result<T, XmlDecodeError>,
) -> Result<(Option<T>, ResponseMetadata), XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    match (decode_envelope(&mut doc, operation, parse_result), doc.finish()) {
        (_, Err(err)) => Err(err),
        (decoded, Ok(())) => decoded,
    }
}

fn decode_envelope<T>(
    doc: &mut Document<'_>,
    operation: &str,
    parse_result: impl FnOnce(&mut ScopedDecoder<'_, '_>) -> Result<T, XmlDecodeError>,
) -> Result<(Option<T>, ResponseMetadata), XmlDecodeError> {
    let mut root = doc.root_element()?;
    let response_tag = format!("{}Response", operation);
    if !root.start_el().matches(&response_tag) {
        return Err(XmlDecodeError::custom(format!(
            "invalid root, expected {} found {}",
            response_tag,
            root.start_el().local()
        )));
    }
    let result_tag = format!("{}Result", operation);
    let mut parse_result = Some(parse_result);
    let mut result = None;
    let mut metadata = ResponseMetadata::default();
    while let Some(mut tag) = root.next_tag() {
        if tag.start_el().matches(&result_tag) {
            if let Some(parse) = parse_result.take() {
                result = Some(parse(&mut tag)?);
            }
        } else if tag.start_el().matches("ResponseMetadata") {
            metadata = decode_metadata(&mut tag)?;
        }
    }
    Ok((result, metadata))
}

fn decode_metadata(decoder: &mut ScopedDecoder<'_, '_>) -> Result<ResponseMetadata, XmlDecodeError> {
    let mut metadata = ResponseMetadata::default();
    while let Some(mut tag) = decoder.next_tag() {
        if tag.start_el().matches("RequestId") {
            metadata.request_id = Some(try_data(&mut tag)?.into_owned());
        }
    }
    Ok(metadata)
}

#[cfg(test)]
mod test {
    use super::decode_response;
    use aws_smithy_xml::decode::{try_data, ScopedDecoder, XmlDecodeError};

    fn name(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Option<String>, XmlDecodeError> {
        let mut name = None;
        while let Some(mut tag) = decoder.next_tag() {
            if tag.start_el().matches("Name") {
                name = Some(try_data(&mut tag)?.into_owned());
            }
        }
        Ok(name)
    }

    #[test]
    fn decodes_result_and_request_id() {
        let body = br#"<?xml version="1.0" encoding="UTF-8"?>
            <DescribeLedgerResponse xmlns="https://qldb.amazonaws.com/doc/2019-01-02/">
                <DescribeLedgerResult>
                    <Unknown><Name>ignored</Name></Unknown>
                    <Name>my-ledger</Name>
                </DescribeLedgerResult>
                <ResponseMetadata>
                    <RequestId>c6104cbe-af31-11e0-8154-cbc7ccf896c7</RequestId>
                </ResponseMetadata>
            </DescribeLedgerResponse>"#;
        let (result, metadata) = decode_response(body, "DescribeLedger", name).unwrap();
        assert_eq!(result, Some(Some("my-ledger".to_string())));
        assert_eq!(
            metadata.request_id(),
            Some("c6104cbe-af31-11e0-8154-cbc7ccf896c7")
        );
    }

    #[test]
    fn missing_result_is_none() {
        let body = b"<DeleteLedgerResponse><ResponseMetadata/></DeleteLedgerResponse>";
        let (result, metadata) = decode_response(body, "DeleteLedger", name).unwrap();
        assert_eq!(result, None);
        assert_eq!(metadata.request_id(), None);
    }

    #[test]
    fn rejects_damaged_documents() {
        let truncated = b"<DescribeLedgerResponse><DescribeLedgerResult><Name>my-ledger</Name>";
        let err = decode_response(truncated, "DescribeLedger", name).expect_err("truncated");
        assert!(matches!(err, XmlDecodeError::Custom(_)), "{:?}", err);

        let garbage = b"<DescribeLedgerResponse><DescribeLedgerResult><Name>my-ledger</Name><<<";
        let err = decode_response(garbage, "DescribeLedger", name).expect_err("bad markup");
        assert!(matches!(err, XmlDecodeError::InvalidXml(_)), "{:?}", err);

        let escape = br#"<DescribeLedgerResponse><DescribeLedgerResult><Arn x="&bogus;"/>
            <Name>my-ledger</Name></DescribeLedgerResult></DescribeLedgerResponse>"#;
        let err = decode_response(escape, "DescribeLedger", name).expect_err("bad escape");
        assert!(matches!(err, XmlDecodeError::InvalidEscape { .. }), "{:?}", err);
    }

    #[test]
    fn rejects_wrong_envelope() {
        let body = b"<CreateLedgerResponse/>";
        let err = decode_response(body, "DeleteLedger", name).expect_err("wrong root");
        assert!(err.to_string().contains("DeleteLedgerResponse"), "{}", err);
    }
}
