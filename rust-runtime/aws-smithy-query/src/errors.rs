/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Decoding of the query error envelope:
//!
//! ```xml
//! <ErrorResponse>
//!     <Error>
//!         <Type>Sender</Type>
//!         <Code>ResourceNotFoundException</Code>
//!         <Message>...</Message>
//!     </Error>
//!     <RequestId>...</RequestId>
//! </ErrorResponse>
//! ```

use aws_smithy_types::error::metadata::{Builder as ErrorMetadataBuilder, ErrorMetadata};
use aws_smithy_xml::decode::{try_data, Document, ScopedDecoder, XmlDecodeError};

/// Returns true if `body` looks like an `<ErrorResponse>` document.
pub fn body_is_error(body: &[u8]) -> Result<bool, XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    let scoped = doc.root_element()?;
    Ok(scoped.start_el().matches("ErrorResponse"))
}

/// Parses the code, message and request ID out of an error envelope.
///
/// Fails if the envelope is malformed anywhere in the body.
pub fn parse_error_metadata(body: &[u8]) -> Result<ErrorMetadataBuilder, XmlDecodeError> {
    let mut doc = Document::try_from(body)?;
    match (decode_error_envelope(&mut doc), doc.finish()) {
        (_, Err(err)) => Err(err),
        (decoded, Ok(())) => decoded,
    }
}

fn decode_error_envelope(doc: &mut Document<'_>) -> Result<ErrorMetadataBuilder, XmlDecodeError> {
    let mut root = doc.root_element()?;
    if !root.start_el().matches("ErrorResponse") {
        return Err(XmlDecodeError::custom("expected ErrorResponse as root"));
    }
    let mut builder = ErrorMetadata::builder();
    while let Some(mut tag) = root.next_tag() {
        if tag.start_el().matches("Error") {
            while let Some(mut error_field) = tag.next_tag() {
                match error_field.start_el().local() {
                    "Code" => builder = builder.code(try_data(&mut error_field)?),
                    "Message" => builder = builder.message(try_data(&mut error_field)?),
                    _ => {}
                }
            }
        } else if tag.start_el().matches("RequestId") {
            builder = builder.request_id(try_data(&mut tag)?);
        }
    }
    Ok(builder)
}

/// Returns a decoder scoped to the `<Error>` element of an error envelope.
///
/// Modeled error members are read from this scope.
pub fn error_scope<'a, 'b>(
    doc: &'a mut Document<'b>,
) -> Result<ScopedDecoder<'b, 'a>, XmlDecodeError> {
    let root = doc
        .next_start_element()?
        .ok_or_else(|| XmlDecodeError::custom("no root found searching for an Error"))?;
    if !root.matches("ErrorResponse") {
        return Err(XmlDecodeError::custom("expected ErrorResponse as root"));
    }

    while let Some(el) = doc.next_start_element()? {
        if el.matches("Error") && el.depth() == 1 {
            return Ok(doc.scoped_to(el));
        }
        // otherwise, ignore it
    }
    Err(XmlDecodeError::custom(
        "no Error found inside of ErrorResponse",
    ))
}

#[cfg(test)]
mod test {
    use super::{body_is_error, error_scope, parse_error_metadata};
    use aws_smithy_xml::decode::{try_data, Document};

    const ERROR: &[u8] = br#"<ErrorResponse>
        <Error>
            <Type>Sender</Type>
            <Code>ResourceNotFoundException</Code>
            <Message>Ledger 'nope' does not exist</Message>
            <ResourceType>LEDGER</ResourceType>
            <ResourceName>nope</ResourceName>
        </Error>
        <RequestId>foo-id</RequestId>
    </ErrorResponse>"#;

    #[test]
    fn parses_error_metadata() {
        assert!(body_is_error(ERROR).unwrap());
        let metadata = parse_error_metadata(ERROR).unwrap().build();
        assert_eq!(metadata.code(), Some("ResourceNotFoundException"));
        assert_eq!(metadata.message(), Some("Ledger 'nope' does not exist"));
        assert_eq!(metadata.request_id(), Some("foo-id"));
    }

    #[test]
    fn scopes_to_the_error_element() {
        let mut doc = Document::new(std::str::from_utf8(ERROR).unwrap());
        let mut error = error_scope(&mut doc).unwrap();
        let mut resource_name = None;
        while let Some(mut tag) = error.next_tag() {
            if tag.start_el().matches("ResourceName") {
                resource_name = Some(try_data(&mut tag).unwrap().into_owned());
            }
        }
        assert_eq!(resource_name.as_deref(), Some("nope"));
    }

    #[test]
    fn nested_error_tags_are_not_the_error_scope() {
        let body = "<ErrorResponse><Wrapper><Error/></Wrapper></ErrorResponse>";
        let mut doc = Document::new(body);
        assert!(error_scope(&mut doc).is_err());
    }

    #[test]
    fn damaged_envelopes_are_rejected() {
        let truncated = b"<ErrorResponse><Error><Code>ConflictException</Code></Error>";
        assert!(parse_error_metadata(truncated).is_err());
        let mut doc = Document::new("<ErrorResponse><Other/><<");
        assert!(error_scope(&mut doc).is_err());
    }

    #[test]
    fn other_documents_are_not_errors() {
        assert!(!body_is_error(b"<ListLedgersResponse/>").unwrap());
        assert!(parse_error_metadata(b"<ListLedgersResponse/>").is_err());
    }
}
