/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::needless_question_mark)]
pub fn de_ledger_encryption_description(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::LedgerEncryptionDescription, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::LedgerEncryptionDescription::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("KmsKeyArn") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_kms_key_arn(var_1);
            }
            s if s.matches("EncryptionStatus") => {
                let var_2 = Some(crate::types::EncryptionStatus::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_encryption_status(var_2);
            }
            s if s.matches("InaccessibleKmsKeyDateTime") => {
                let var_3 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_inaccessible_kms_key_date_time(var_3);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
