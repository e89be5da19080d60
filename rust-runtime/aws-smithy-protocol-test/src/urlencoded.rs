/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{pretty_comparison, ProtocolTestFailure};

/// Splits a form body into `(name, value)` pairs in body order. Names and values stay encoded.
pub fn parse_form(body: &str) -> Vec<(&str, &str)> {
    body.split('&')
        .filter(|param| !param.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect()
}

/// Renders the parameters one per line, sorted, so that parameter order is not significant.
fn rewrite_url_encoded_body(input: &str) -> String {
    let mut params: Vec<String> = parse_form(input.trim())
        .into_iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    params.sort();
    params.join("\n&")
}

pub(crate) fn try_url_encoded_form_equivalent(
    actual: &str,
    expected: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual = rewrite_url_encoded_body(actual);
    let expected = rewrite_url_encoded_body(expected);
    if actual == expected {
        Ok(())
    } else {
        Err(ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(&actual, &expected),
            hint: "form parameters were sorted before comparison".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_form, try_url_encoded_form_equivalent};

    #[test]
    fn parses_params_in_order() {
        assert_eq!(
            parse_form("Action=A&Version=1&Empty=&Bare"),
            vec![("Action", "A"), ("Version", "1"), ("Empty", ""), ("Bare", "")]
        );
    }

    #[test]
    fn parameter_order_is_ignored() {
        assert!(try_url_encoded_form_equivalent(
            "Action=Something&Version=test&Foo=a",
            "Version=test&Action=Something&Foo=a",
        )
        .is_ok());
        assert!(try_url_encoded_form_equivalent(
            "Action=Something&Version=test&Foo=a",
            "Action=Something&Version=test&Foo=b",
        )
        .is_err());
        assert!(try_url_encoded_form_equivalent(
            "Action=Something&Version=test",
            "Action=Something&Version=test&Foo=a",
        )
        .is_err());
    }
}
