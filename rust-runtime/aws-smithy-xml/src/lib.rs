/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Streaming XML decoding for Smithy
//! [XML Binding Traits](https://smithy.io/2.0/spec/protocol-traits.html#xml-bindings)

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod decode;
mod unescape;
