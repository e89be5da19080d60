/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#[allow(unused_mut)]
pub fn de_invalid_parameter_exception_xml_err(
    inp: &[u8],
    mut builder: crate::types::error::builders::InvalidParameterExceptionBuilder,
) -> ::std::result::Result<crate::types::error::builders::InvalidParameterExceptionBuilder, ::aws_smithy_xml::decode::XmlDecodeError> {
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
            s if s.matches("ParameterName") => {
                let var_2 = Some(::aws_smithy_xml::decode::try_data(&mut tag)?.into_owned());
                builder = builder.set_parameter_name(var_2);
            }
            _ => {}
        }
    }
    drop(decoder);
    document.finish()?;
    Ok(builder)
}
