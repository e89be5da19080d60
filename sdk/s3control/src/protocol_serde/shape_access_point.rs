/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::needless_question_mark)]
pub fn de_access_point(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::types::AccessPoint, ::aws_smithy_xml::decode::XmlDecodeError> {
    #[allow(unused_mut)]
    let mut builder = crate::types::AccessPoint::builder();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Name") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_name(var_1);
            }
            s if s.matches("NetworkOrigin") => {
                let var_2 = Some(crate::types::NetworkOrigin::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_network_origin(var_2);
            }
            s if s.matches("VpcConfiguration") => {
                let var_3 = Some(crate::protocol_serde::shape_vpc_configuration::de_vpc_configuration(&mut tag)?);
                builder = builder.set_vpc_configuration(var_3);
            }
            s if s.matches("Bucket") => {
                let var_4 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_bucket(var_4);
            }
            _ => {}
        }
    }
    Ok(builder.build())
}
