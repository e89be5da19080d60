/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_runtime::client::result::SdkError;
use aws_smithy_types::error::metadata::{ErrorMetadata, ProvideErrorMetadata};

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl RequestId for ErrorMetadata {
    fn request_id(&self) -> Option<&str> {
        ErrorMetadata::request_id(self)
    }
}

impl<E, R> RequestId for SdkError<E, R>
where
    E: ProvideErrorMetadata,
{
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

impl<O, E> RequestId for Result<O, E>
where
    O: RequestId,
    E: RequestId,
{
    fn request_id(&self) -> Option<&str> {
        match self {
            Ok(ok) => ok.request_id(),
            Err(err) => err.request_id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RequestId;
    use aws_smithy_runtime::client::result::{SdkError, Unhandled};
    use aws_smithy_types::error::metadata::ErrorMetadata;

    struct Output(Option<String>);

    impl RequestId for Output {
        fn request_id(&self) -> Option<&str> {
            self.0.as_deref()
        }
    }

    #[test]
    fn request_id_from_error_metadata() {
        let meta = ErrorMetadata::builder().request_id("abc").build();
        assert_eq!(Some("abc"), RequestId::request_id(&meta));
        assert_eq!(None, RequestId::request_id(&ErrorMetadata::default()));
    }

    #[test]
    fn request_id_from_sdk_error() {
        let service_error: SdkError<Unhandled, ()> = SdkError::service_error(
            Unhandled::with_meta("boom", ErrorMetadata::builder().request_id("req-1").build()),
            (),
        );
        assert_eq!(Some("req-1"), service_error.request_id());

        let construction: SdkError<Unhandled, ()> = SdkError::construction_failure("bad input");
        assert_eq!(None, construction.request_id());
    }

    #[test]
    fn request_id_from_result() {
        let ok: Result<Output, ErrorMetadata> = Ok(Output(Some("from-output".into())));
        assert_eq!(Some("from-output"), ok.request_id());
        let err: Result<Output, ErrorMetadata> =
            Err(ErrorMetadata::builder().request_id("from-error").build());
        assert_eq!(Some("from-error"), err.request_id());
    }
}
