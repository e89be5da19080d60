/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Pull-based XML decoding that hands out decoders scoped to a single element.

use crate::unescape::unescape;
use std::borrow::Cow;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

/// Nesting level of an element. The root element has depth 0.
pub type Depth = usize;

// in general, these errors are just for reporting what happened, there isn't
// much value in lots of different match variants

/// Error type returned when decoding XML fails
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XmlDecodeError {
    /// The tokenizer rejected the input.
    #[error("XML Parse Error")]
    InvalidXml(#[from] xmlparser::Error),

    /// An entity or character reference could not be decoded.
    #[error("Invalid XML Escape: {esc}")]
    InvalidEscape {
        /// The offending escape sequence.
        esc: String,
    },

    /// The document was well formed but did not have the expected shape.
    #[error("Error parsing XML: {0}")]
    Custom(Cow<'static, str>),

    /// Another error occurred while decoding, such as a failed primitive parse.
    #[error("Encountered another error parsing XML: {0}")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl XmlDecodeError {
    /// Creates an error with a custom message.
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError::Custom(msg.into())
    }

    /// Wraps another error.
    pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
        XmlDecodeError::Unhandled(err.into())
    }
}

/// An XML name with its optional namespace prefix.
#[derive(PartialEq, Eq, Debug)]
pub struct Name<'a> {
    /// Namespace prefix, empty when absent.
    pub prefix: &'a str,
    /// Local part of the name.
    pub local: &'a str,
}

impl Name<'_> {
    /// Check if a given name matches a tag name composed of `prefix:local` or just `local`
    pub fn matches(&self, tag_name: &str) -> bool {
        match tag_name.split_once(':') {
            None => tag_name == self.local,
            Some((prefix, local)) => self.local == local && self.prefix == prefix,
        }
    }
}

/// An attribute of a start element.
#[derive(Debug, PartialEq)]
pub struct Attr<'a> {
    name: Name<'a>,
    // attribute values can be escaped (e.g. with double quotes, so we need a Cow)
    value: Cow<'a, str>,
}

/// An opening tag along with its attributes.
#[derive(Debug, PartialEq)]
pub struct StartEl<'a> {
    name: Name<'a>,
    attributes: Vec<Attr<'a>>,
    closed: bool,
    depth: Depth,
}

/// Xml Start Element
///
/// ```xml
///  <a:b   c="d">
///  ^^^   ^^^^^
///  name  attributes
/// ```
impl<'a> StartEl<'a> {
    /// Nesting level of this element.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    fn new(local: &'a str, prefix: &'a str, depth: Depth) -> Self {
        Self {
            name: Name { prefix, local },
            attributes: vec![],
            closed: false,
            depth,
        }
    }

    /// Retrieve an attribute with a given key
    ///
    /// key `prefix:local` combined as a str, joined by a `:`
    pub fn attr<'b>(&'b self, key: &'b str) -> Option<&'b str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.matches(key))
            .map(|attr| attr.value.as_ref())
    }

    /// Returns whether this `StartEl` matches a given name
    /// in `prefix:local` form.
    pub fn matches(&self, pat: &str) -> bool {
        self.name.matches(pat)
    }

    /// Local component of this element's name
    ///
    /// ```xml
    /// <foo:bar>
    ///      ^^^
    /// ```
    pub fn local(&self) -> &str {
        self.name.local
    }

    /// Prefix component of this elements name (or empty string)
    /// ```xml
    /// <foo:bar>
    ///  ^^^
    /// ```
    pub fn prefix(&self) -> &str {
        self.name.prefix
    }

    /// Returns true of `el` at `depth` is a match for this `start_el`
    fn end_el(&self, el: ElementEnd<'_>, depth: Depth) -> bool {
        if depth != self.depth {
            return false;
        }
        match el {
            ElementEnd::Close(prefix, local) => {
                prefix.as_str() == self.name.prefix && local.as_str() == self.name.local
            }
            ElementEnd::Open | ElementEnd::Empty => false,
        }
    }
}

/// Xml Document abstraction
///
/// This document wraps a lazy tokenizer with depth tracking.
/// Constructing a document is essentially free.
pub struct Document<'a> {
    tokenizer: Tokenizer<'a>,
    depth: Depth,
    // set once the input can no longer be read; every later read yields `None`
    fused: bool,
    error: Option<XmlDecodeError>,
}

impl std::fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("depth", &self.depth)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<'a> TryFrom<&'a [u8]> for Document<'a> {
    type Error = XmlDecodeError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        Ok(Document::new(
            std::str::from_utf8(value).map_err(XmlDecodeError::unhandled)?,
        ))
    }
}

impl<'inp> Document<'inp> {
    /// Creates a document over `doc`. Nothing is parsed until the document is read.
    pub fn new(doc: &'inp str) -> Self {
        Document {
            tokenizer: Tokenizer::from(doc),
            depth: 0,
            fused: false,
            error: None,
        }
    }

    /// Reads the rest of the document and returns the first error hit while reading it.
    ///
    /// [`ScopedDecoder::next_tag`] ends the current scope instead of failing when the input is
    /// malformed or truncated, so a decode is only complete once this returns `Ok`.
    pub fn finish(&mut self) -> Result<(), XmlDecodeError> {
        for _ in &mut *self {}
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, err: impl Fn() -> XmlDecodeError) -> XmlDecodeError {
        self.record(err());
        err()
    }

    fn record(&mut self, err: XmlDecodeError) {
        self.fused = true;
        self.error.get_or_insert(err);
    }

    /// "Depth first" iterator
    ///
    /// Unlike [`next_tag()`](ScopedDecoder::next_tag), this method returns the next
    /// start element regardless of depth. This is useful to give a pointer into the middle
    /// of a document to start reading.
    ///
    /// ```xml
    /// <Response> <-- first call returns this:
    ///    <A> <-- next call
    ///      <Nested /> <-- next call returns this
    ///      <MoreNested>hello</MoreNested> <-- then this:
    ///    </A>
    ///    <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    pub fn next_start_element<'a>(
        &'a mut self,
    ) -> Result<Option<StartEl<'inp>>, XmlDecodeError> {
        next_start_element(self).map_err(|err| {
            self.fused = true;
            err
        })
    }

    /// A scoped reader for the entire document
    pub fn root_element<'a>(&'a mut self) -> Result<ScopedDecoder<'inp, 'a>, XmlDecodeError> {
        let start_el = self
            .next_start_element()?
            .ok_or_else(|| XmlDecodeError::custom("no root element"))?;
        Ok(ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        })
    }

    /// A scoped reader for a specific tag
    ///
    /// This method is necessary for when you need to return a ScopedDecoder from a function
    /// since normally the stacked-ownership that `next_tag()` uses would prevent returning a
    /// reference to a field owned by the current function
    pub fn scoped_to<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        }
    }
}

/// A new-type wrapper around `Token` to prevent the wrapped third party type from showing up in
/// public API
#[derive(Debug)]
pub struct XmlToken<'inp>(Token<'inp>);

/// Depth tracking iterator
///
/// ```xml
/// <a> <- startel depth 0
///   <b> <- startel depth 1
///     <c> <- startel depth 2
///     </c> <- endel depth 2
///   </b> <- endel depth 1
/// </a> <- endel depth 0
/// ```
impl<'inp> Iterator for Document<'inp> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>;
    fn next<'a>(&'a mut self) -> Option<Result<(XmlToken<'inp>, Depth), XmlDecodeError>> {
        if self.fused {
            return None;
        }
        let tok = match self.tokenizer.next() {
            Some(Ok(tok)) => tok,
            Some(Err(err)) => return Some(Err(self.fail(|| XmlDecodeError::InvalidXml(err)))),
            None if self.depth > 0 => {
                return Some(Err(
                    self.fail(|| XmlDecodeError::custom("unexpected end of document"))
                ))
            }
            None => return None,
        };
        // depth bookkeeping
        match tok {
            Token::ElementEnd {
                end: ElementEnd::Close(_, _),
                ..
            }
            | Token::ElementEnd {
                end: ElementEnd::Empty,
                ..
            } => {
                self.depth = self.depth.saturating_sub(1);
            }
            t @ Token::ElementStart { .. } => {
                self.depth += 1;
                // We want the startel and endel to have the same depth, but after the opener,
                // the parser will be at depth 1. Return the previous depth:
                return Some(Ok((XmlToken(t), self.depth - 1)));
            }
            _ => {}
        }
        Some(Ok((XmlToken(tok), self.depth)))
    }
}

/// XmlTag Abstraction
///
/// ScopedDecoder represents a tag-scoped view into an XML document. Methods
/// on `ScopedDecoder` return `None` when the current tag has been exhausted.
#[derive(Debug)]
pub struct ScopedDecoder<'inp, 'a> {
    doc: &'a mut Document<'inp>,
    start_el: StartEl<'inp>,
    terminated: bool,
}

/// When a scoped decoder is dropped, its entire scope is consumed so that the
/// next read begins at the next tag at the same depth.
impl Drop for ScopedDecoder<'_, '_> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<'inp> ScopedDecoder<'inp, '_> {
    /// The start element for this scope
    pub fn start_el<'a>(&'a self) -> &'a StartEl<'inp> {
        &self.start_el
    }

    /// Returns the next top-level tag in this scope
    /// The returned reader will fully read the tag during its lifetime. If it is dropped without
    /// the data being read, the reader will read it to the end.
    ///
    /// ```xml
    /// <Response> <-- this is the current scope
    ///   <A> <-- first call to next_tag returns this
    ///     <Nested /> <-- to get inner data, call `next_tag` on the returned decoder for `A`
    ///     <MoreNested>hello</MoreNested>
    ///   </A>
    ///   <B/> <-- second call to next_tag returns this
    /// </Response>
    /// ```
    ///
    /// A malformed document also ends the scope. The error is kept by the [`Document`] and
    /// returned from [`Document::finish`].
    pub fn next_tag<'a>(&'a mut self) -> Option<ScopedDecoder<'inp, 'a>> {
        match next_start_element(self) {
            Ok(next_tag) => Some(self.nested_decoder(next_tag?)),
            Err(err) => {
                self.doc.record(err);
                None
            }
        }
    }

    fn nested_decoder<'a>(&'a mut self, start_el: StartEl<'inp>) -> ScopedDecoder<'inp, 'a> {
        ScopedDecoder {
            doc: self.doc,
            start_el,
            terminated: false,
        }
    }
}

impl<'inp, 'a> Iterator for ScopedDecoder<'inp, 'a> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_el.closed {
            self.terminated = true;
        }
        if self.terminated {
            return None;
        }
        let (tok, depth) = match self.doc.next() {
            Some(Ok((tok, depth))) => (tok, depth),
            other => return other,
        };

        match tok.0 {
            Token::ElementEnd { end, .. } if self.start_el.end_el(end, depth) => {
                self.terminated = true;
                return None;
            }
            _ => {}
        }
        Some(Ok((tok, depth)))
    }
}

/// Load the next start element out of a depth-tagged token iterator
///
/// Returns `Ok(None)` once the iterator is exhausted.
fn next_start_element<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>>,
) -> Result<Option<StartEl<'inp>>, XmlDecodeError> {
    let mut out = StartEl::new("", "", 0);
    loop {
        let token = match tokens.next() {
            Some(token) => token?,
            None => return Ok(None),
        };
        match token {
            (XmlToken(Token::ElementStart { local, prefix, .. }), depth) => {
                out.name.local = local.as_str();
                out.name.prefix = prefix.as_str();
                out.depth = depth;
            }
            (
                XmlToken(Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                }),
                _,
            ) => out.attributes.push(Attr {
                name: Name {
                    local: local.as_str(),
                    prefix: prefix.as_str(),
                },
                value: unescape(value.as_str())?,
            }),
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Open,
                    ..
                }),
                _,
            ) => break,
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Empty,
                    ..
                }),
                _,
            ) => {
                out.closed = true;
                break;
            }
            _ => {}
        }
    }
    Ok(Some(out))
}

/// Returns the data element at the current position
///
/// If the current position is not a data element (and is instead a `<start-element>`) an error
/// will be returned. An empty element yields an empty string.
pub fn try_data<'a, 'inp>(
    tokens: &'a mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>>,
) -> Result<Cow<'inp, str>, XmlDecodeError> {
    loop {
        match tokens.next().map(|opt| opt.map(|opt| opt.0)) {
            None => return Ok(Cow::Borrowed("")),
            Some(Ok(XmlToken(Token::Text { text }))) => return unescape(text.as_str()),
            Some(Ok(XmlToken(Token::Cdata { text, .. }))) => {
                return Ok(Cow::Borrowed(text.as_str()))
            }
            Some(Ok(e @ XmlToken(Token::ElementStart { .. }))) => {
                return Err(XmlDecodeError::custom(format!(
                    "looking for a data element, found: {:?}",
                    e
                )))
            }
            Some(Err(e)) => return Err(e),
            _ => {}
        }
    }
}

#[cfg(test)]
mod test {
    use crate::decode::{try_data, Attr, Depth, Document, Name, StartEl, XmlDecodeError};
    use pretty_assertions::assert_eq;

    // test helper to create a closed startel
    fn closed<'a>(local: &'a str, prefix: &'a str, depth: Depth) -> StartEl<'a> {
        let mut s = StartEl::new(local, prefix, depth);
        s.closed = true;
        s
    }

    #[test]
    fn scoped_tokens() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().expect("valid document");
        assert_eq!(root.start_el().local(), "Response");
        assert_eq!(root.next_tag().expect("tag exists").start_el().local(), "A");
        assert!(root.next_tag().is_none());
    }

    #[test]
    fn handle_depth_properly() {
        let xml = r#"<Response><Response></Response><A/></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid document");
        assert_eq!(
            scoped.next_tag().unwrap().start_el(),
            &StartEl::new("Response", "", 1)
        );
        let closed_a = closed("A", "", 1);
        assert_eq!(scoped.next_tag().unwrap().start_el(), &closed_a);
        assert!(scoped.next_tag().is_none())
    }

    #[test]
    fn self_closing() {
        let xml = r#"<Response/>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().expect("valid doc");
        assert!(scoped.start_el.closed);
        assert!(scoped.next_tag().is_none())
    }

    #[test]
    fn terminate_scope() {
        let xml = r#"<Response><Struct><A></A><Also/></Struct><More/></Response>"#;
        let mut doc = Document::new(xml);
        let mut response_iter = doc.root_element().expect("valid doc");
        let mut struct_iter = response_iter.next_tag().unwrap();
        assert_eq!(
            struct_iter.next_tag().as_ref().map(|t| t.start_el()),
            Some(&StartEl::new("A", "", 2))
        );
        // When the inner iter is dropped, it will read to the end of its scope
        // prevent accidental behavior where we didn't read a full node
        drop(struct_iter);
        assert_eq!(
            response_iter.next_tag().unwrap().start_el(),
            &closed("More", "", 1)
        );
    }

    #[test]
    fn read_data_invalid() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        try_data(&mut resp).expect_err("no data");
    }

    #[test]
    fn read_data() {
        let xml = r#"<Response>hello</Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped).unwrap(), "hello");
    }

    #[test]
    fn read_data_empty_and_escaped() {
        let xml = r#"<Response><Empty/><Escaped>a &amp; b</Escaped><Cdata><![CDATA[<raw>]]></Cdata></Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped.next_tag().unwrap()).unwrap(), "");
        assert_eq!(try_data(&mut scoped.next_tag().unwrap()).unwrap(), "a & b");
        assert_eq!(try_data(&mut scoped.next_tag().unwrap()).unwrap(), "<raw>");
    }

    /// Whitespace within an element is preserved
    #[test]
    fn read_data_whitespace() {
        let xml = r#"<Response> hello </Response>"#;
        let mut doc = Document::new(xml);
        let mut scoped = doc.root_element().unwrap();
        assert_eq!(try_data(&mut scoped).unwrap(), " hello ");
    }

    #[test]
    fn ignore_insignificant_whitespace() {
        let xml = r#"<Response>   <A>  </A>    </Response>"#;
        let mut doc = Document::new(xml);
        let mut resp = doc.root_element().unwrap();
        let mut a = resp.next_tag().expect("should be a");
        let data = try_data(&mut a).expect("valid");
        assert_eq!(data, "  ");
    }

    #[test]
    fn read_attributes() {
        let xml = r#"<Response xsi:type="CanonicalUser">hello</Response>"#;
        let mut tokenizer = Document::new(xml);
        let root = tokenizer.root_element().unwrap();

        assert_eq!(
            root.start_el().attributes,
            vec![Attr {
                name: Name {
                    prefix: "xsi",
                    local: "type"
                },
                value: "CanonicalUser".into()
            }]
        );
        assert_eq!(root.start_el().attr("xsi:type"), Some("CanonicalUser"));
        assert_eq!(root.start_el().attr("type"), Some("CanonicalUser"));
    }

    #[test]
    fn unescape_data() {
        let xml = r#"<Response key="&quot;hey&quot;>">&gt;</Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        assert_eq!(try_data(&mut root).unwrap(), ">");
        assert_eq!(root.start_el().attr("key"), Some("\"hey\">"));
    }

    #[test]
    fn nested_self_closer() {
        let xml = r#"<XmlListsInputOutput>
                <stringList/>
                <stringSet></stringSet>
        </XmlListsInputOutput>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut string_list = root.next_tag().unwrap();
        assert_eq!(string_list.start_el(), &closed("stringList", "", 1));
        assert!(string_list.next_tag().is_none());
        drop(string_list);
        assert_eq!(
            root.next_tag().unwrap().start_el(),
            &StartEl::new("stringSet", "", 1)
        );
    }

    #[test]
    fn skips_declaration() {
        let mut doc = Document::new(r#"<?xml version="1.0" encoding="UTF-8"?><Root/>"#);
        assert_eq!(doc.root_element().unwrap().start_el().local(), "Root");
    }

    #[test]
    fn reports_bad_documents() {
        assert!(Document::new("").root_element().is_err());

        let mut doc = Document::new("<Root>a &lt b</Root>");
        let mut root = doc.root_element().unwrap();
        assert!(try_data(&mut root).is_err());
    }

    #[test]
    fn truncated_document_fails_on_finish() {
        let mut doc = Document::new("<Root><A>1</A>");
        let mut root = doc.root_element().unwrap();
        let mut a = root.next_tag().unwrap();
        assert_eq!(try_data(&mut a).unwrap(), "1");
        drop(a);
        assert!(root.next_tag().is_none());
        drop(root);
        let err = doc.finish().expect_err("root is never closed");
        assert!(matches!(err, XmlDecodeError::Custom(_)), "{:?}", err);
    }

    #[test]
    fn tokenizer_errors_end_the_scope() {
        let mut doc = Document::new("<Root><A>1</A><<<not xml");
        let mut root = doc.root_element().unwrap();
        assert_eq!(root.next_tag().unwrap().start_el().local(), "A");
        assert!(root.next_tag().is_none());
        assert!(root.next_tag().is_none());
        drop(root);
        let err = doc.finish().expect_err("invalid markup");
        assert!(matches!(err, XmlDecodeError::InvalidXml(_)), "{:?}", err);
    }

    #[test]
    fn bad_attribute_escape_is_an_error() {
        let mut doc = Document::new(r#"<Root><A x="&bogus;">1</A><B>2</B></Root>"#);
        let mut root = doc.root_element().unwrap();
        assert!(root.next_tag().is_none());
        drop(root);
        let err = doc.finish().expect_err("bad escape");
        assert!(matches!(err, XmlDecodeError::InvalidEscape { .. }), "{:?}", err);

        let mut doc = Document::new(r#"<Root x="&bogus;"/>"#);
        assert!(doc.root_element().is_err());
    }

    #[test]
    fn finish_accepts_complete_documents() {
        let mut doc = Document::new("<Root><A>1</A><B/></Root>");
        let mut root = doc.root_element().unwrap();
        assert!(root.next_tag().is_some());
        drop(root);
        doc.finish().expect("well formed");
    }

    #[test]
    fn rejects_non_utf8_input() {
        assert!(Document::try_from(&b"<a>\xff</a>"[..]).is_err());
    }
}
