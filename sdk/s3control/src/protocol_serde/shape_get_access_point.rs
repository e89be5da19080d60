/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(clippy::unnecessary_wraps)]
pub fn de_get_access_point_http_response(
    response: &::aws_smithy_runtime::client::connector::HttpResponse,
) -> ::std::result::Result<crate::operation::get_access_point::GetAccessPointOutput, ::aws_smithy_xml::decode::XmlDecodeError> {
    let (builder, metadata) = ::aws_smithy_query::response::decode_response(response.body(), "GetAccessPoint", de_get_access_point)?;
    let builder = builder
        .unwrap_or_default()
        ._set_request_id(metadata.request_id().map(str::to_owned));
    Ok(builder.build())
}

#[allow(unused_mut)]
pub fn de_get_access_point(
    decoder: &mut ::aws_smithy_xml::decode::ScopedDecoder<'_, '_>,
) -> ::std::result::Result<crate::operation::get_access_point::builders::GetAccessPointOutputBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    let mut builder = crate::operation::get_access_point::builders::GetAccessPointOutputBuilder::default();
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Name") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_name(var_1);
            }
            s if s.matches("Bucket") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_bucket(var_2);
            }
            s if s.matches("NetworkOrigin") => {
                let var_3 = Some(crate::types::NetworkOrigin::from(::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref()));
                builder = builder.set_network_origin(var_3);
            }
            s if s.matches("VpcConfiguration") => {
                let var_4 = Some(crate::protocol_serde::shape_vpc_configuration::de_vpc_configuration(&mut tag)?);
                builder = builder.set_vpc_configuration(var_4);
            }
            s if s.matches("PublicAccessBlockConfiguration") => {
                let var_5 = Some(crate::protocol_serde::shape_public_access_block_configuration::de_public_access_block_configuration(&mut tag)?);
                builder = builder.set_public_access_block_configuration(var_5);
            }
            s if s.matches("CreationDate") => {
                let var_6 = Some(
                    ::aws_smithy_types::DateTime::from_str(
                        ::aws_smithy_xml::decode::try_data(&mut tag)?.as_ref(),
                        ::aws_smithy_types::date_time::Format::DateTime,
                    )
                    .map_err(::aws_smithy_xml::decode::XmlDecodeError::unhandled)?
                );
                builder = builder.set_creation_date(var_6);
            }
            _ => {}
        }
    }
    Ok(builder)
}
