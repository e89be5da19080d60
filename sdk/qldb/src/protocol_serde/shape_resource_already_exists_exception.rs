/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(unused_mut)]
pub fn de_resource_already_exists_exception_xml_err(
    inp: &[u8],
    mut builder: crate::types::error::builders::ResourceAlreadyExistsExceptionBuilder,
) -> ::std::result::Result<crate::types::error::builders::ResourceAlreadyExistsExceptionBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
    if inp.is_empty() {
        return Ok(builder);
    }
    let mut document = ::aws_smithy_xml::decode::Document::try_from(inp)?;
    #[allow(unused_mut)]
    let mut decoder = ::aws_smithy_query::errors::error_scope(&mut document)?;
    while let Some(mut tag) = decoder.next_tag() {
        match tag.start_el() {
            s if s.matches("Message") => {
                let var_1 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_message(var_1);
            }
            s if s.matches("ResourceType") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_resource_type(var_2);
            }
            s if s.matches("ResourceName") => {
                let var_3 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_resource_name(var_3);
            }
            _ => {}
        }
    }
    drop(decoder);
    document.finish()?;
    Ok(builder)
}
