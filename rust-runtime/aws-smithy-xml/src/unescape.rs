/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::decode::XmlDecodeError;
use std::borrow::Cow;

/// Unescape XML encoded characters
///
/// This function will unescape the 5 builtin XML entities (`&lt;`, `&gt;`, `&amp;`, `&quot;`
/// and `&apos;`) as well as decimal and hexadecimal character references. Input without an
/// `&` is returned borrowed.
pub(crate) fn unescape(s: &str) -> Result<Cow<'_, str>, XmlDecodeError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut sections = s.split('&');
    if let Some(prefix) = sections.next() {
        res.push_str(prefix);
    }
    for section in sections {
        let end = section
            .find(';')
            .ok_or_else(|| invalid_escape("unterminated pattern"))?;
        match &section[..end] {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            reference => res.push(char_reference(reference)?),
        }
        res.push_str(&section[end + 1..]);
    }
    Ok(Cow::Owned(res))
}

/// Decodes `#10` or `#xA` style references.
fn char_reference(reference: &str) -> Result<char, XmlDecodeError> {
    let (digits, radix) = if let Some(hex) = reference.strip_prefix("#x") {
        (hex, 16)
    } else if let Some(dec) = reference.strip_prefix('#') {
        (dec, 10)
    } else {
        return Err(invalid_escape(reference));
    };
    // from_str_radix would accept a leading `+`
    if digits.is_empty() || digits.starts_with('+') {
        return Err(invalid_escape(reference));
    }
    let code = u32::from_str_radix(digits, radix).map_err(|_| invalid_escape(reference))?;
    std::char::from_u32(code).ok_or_else(|| invalid_escape(reference))
}

fn invalid_escape(esc: &str) -> XmlDecodeError {
    XmlDecodeError::InvalidEscape {
        esc: esc.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::unescape;
    use std::borrow::Cow;

    #[test]
    fn basic_unescape() {
        assert_eq!(
            unescape("&lt; &gt; &apos; &quot; &amp;").unwrap(),
            "< > ' \" &"
        );
        assert_eq!(
            unescape("Since a &gt; b, b is less than a").unwrap(),
            "Since a > b, b is less than a"
        );
    }

    #[test]
    fn no_need_to_escape() {
        assert!(matches!(unescape("hello 🍕!"), Ok(Cow::Borrowed("hello 🍕!"))));
    }

    #[test]
    fn complex_unescape() {
        assert_eq!(unescape("&#x44;&#x45;&#x46;").unwrap(), "DEF");
        assert_eq!(unescape("&lt;a&#65;b&gt;").unwrap(), "<aAb>");
        assert_eq!(unescape("line&#xA;break").unwrap(), "line\nbreak");
    }

    #[test]
    fn invalid_escapes() {
        assert!(unescape("&lte;").is_err());
        assert!(unescape("&lt").is_err());
        assert!(unescape("&#;").is_err());
        assert!(unescape("&#x+1;").is_err());
        assert!(unescape("&#xD800;").is_err());
        assert!(unescape("&#12345678;").is_err());
    }

    use proptest::prelude::*;
    proptest! {
        #[test]
        fn no_panics(s: String) {
            let unescaped = unescape(&s);
            if !s.contains('&') {
                prop_assert_eq!(unescaped.unwrap(), s.as_str());
            }
        }
    }
}
