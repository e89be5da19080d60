/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// When writing a match expression against `OutputFormat`, it is important to ensure
/// your code is forward-compatible. That is, if a match arm handles a case for a
/// feature that is supported by the service but has not been represented as an enum
/// variant in a current version of SDK, your code should continue to work when you
/// upgrade SDK to a future version in which the enum does include a variant for that
/// feature.
///
/// Here is an example of how you can make a match expression forward-compatible:
///
/// ```text
/// # let output_format = unimplemented!();
/// match output_format {
///     OutputFormat::IonBinary => { /* ... */ },
///     OutputFormat::IonText => { /* ... */ },
///     OutputFormat::Json => { /* ... */ },
///     other @ _ if other.as_str() == "NewFeature" => { /* handles a case for `NewFeature` */ },
///     _ => { /* ... */ },
/// }
/// ```
///
/// A value received from the service that has no variant here is kept in `Unknown`, so
/// `as_str` always returns the literal that was on the wire.
#[allow(missing_docs)] // documentation missing in model
#[non_exhaustive]
#[derive(
    ::std::clone::Clone,
    ::std::cmp::Eq,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
    ::std::fmt::Debug,
    ::std::hash::Hash,
)]
pub enum OutputFormat {
    #[allow(missing_docs)] // documentation missing in model
    IonBinary,
    #[allow(missing_docs)] // documentation missing in model
    IonText,
    #[allow(missing_docs)] // documentation missing in model
    Json,
    /// `Unknown` contains new variants that have been added since this code was generated.
    #[deprecated(note = "Don't directly match on `Unknown`. See the docs on this enum for the correct way to handle unknown variants.")]
    Unknown(crate::primitives::sealed_enum_unknown::UnknownVariantValue),
}
impl ::std::convert::From<&str> for OutputFormat {
    #[allow(deprecated)]
    fn from(s: &str) -> Self {
        match s {
            "ION_BINARY" => OutputFormat::IonBinary,
            "ION_TEXT" => OutputFormat::IonText,
            "JSON" => OutputFormat::Json,
            other => OutputFormat::Unknown(crate::primitives::sealed_enum_unknown::UnknownVariantValue(other.to_owned())),
        }
    }
}
impl ::std::str::FromStr for OutputFormat {
    type Err = ::std::convert::Infallible;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        ::std::result::Result::Ok(OutputFormat::from(s))
    }
}
impl OutputFormat {
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::IonBinary => "ION_BINARY",
            OutputFormat::IonText => "ION_TEXT",
            OutputFormat::Json => "JSON",
            #[allow(deprecated)]
            OutputFormat::Unknown(value) => value.as_str(),
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["ION_BINARY", "ION_TEXT", "JSON"]
    }

    /// Parses the enum value while disallowing unknown variants.
    ///
    /// Unknown variants will result in an error.
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, ::aws_smithy_types::error::InvalidParameterValueError> {
        match Self::from(value) {
            #[allow(deprecated)]
            Self::Unknown(_) => ::std::result::Result::Err(::aws_smithy_types::error::InvalidParameterValueError::new("OutputFormat", value)),
            known => Ok(known),
        }
    }
}
impl ::std::convert::AsRef<str> for OutputFormat {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        match self {
            OutputFormat::IonBinary => write!(f, "ION_BINARY"),
            OutputFormat::IonText => write!(f, "ION_TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
            #[allow(deprecated)]
            OutputFormat::Unknown(value) => write!(f, "{}", value),
        }
    }
}
