/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

pub use ::aws_smithy_types::date_time::Format as DateTimeFormat;
pub use ::aws_smithy_types::Blob;
pub use ::aws_smithy_types::DateTime;

/// Opaque struct used as inner data for the `Unknown` variant defined in enums in
/// the crate.
///
/// This is not intended to be used directly.
pub mod sealed_enum_unknown {
    /// Opaque struct used as inner data for the `Unknown` variant defined in enums in
    /// the crate.
    ///
    /// While this is not intended to be used directly, it is marked as `pub` because it is
    /// part of the enums that are public interface.
    #[non_exhaustive]
    #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct UnknownVariantValue(pub(crate) ::std::string::String);
    impl UnknownVariantValue {
        pub(crate) fn as_str(&self) -> &str {
            &self.0
        }
    }
    impl ::std::fmt::Display for UnknownVariantValue {
        fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }
}
