/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Abstractions for the AWS query protocol.
//!
//! Requests are written as `application/x-www-form-urlencoded` bodies with [`QueryWriter`].
//! Responses are XML documents wrapped in an `<OperationResponse>` envelope; see [`response`]
//! for successful responses and [`errors`] for the `<ErrorResponse>` envelope.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

use aws_smithy_types::date_time::{DateTimeFormatError, Format};
use aws_smithy_types::primitive::Encoder;
use aws_smithy_types::{DateTime, Number};
use std::borrow::Cow;
use urlencoding::encode;

pub mod errors;
pub mod response;

/// Content type of a query request body.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Writes the top-level parameters of a query request.
///
/// The `Action` and `Version` parameters are always written first.
#[derive(Debug)]
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Creates a new `QueryWriter` that writes `Action` and `Version` into `output`.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Starts a new parameter named `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    /// Finishes writing the request.
    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes the entries of a map parameter as `prefix.entry.N.key` / `prefix.entry.N.value`.
///
/// `N` starts at 1.
#[derive(Debug)]
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flatten: bool,
    key_name: &'static str,
    value_name: &'static str,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flatten: bool,
        key_name: &'static str,
        value_name: &'static str,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter {
            prefix,
            output,
            flatten,
            key_name,
            value_name,
            next_index: 1,
        }
    }

    /// Writes `key` and returns a writer for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        let entry = if self.flatten { "" } else { ".entry" };
        self.output.push('&');
        self.output.push_str(&format!(
            "{}{}.{}.{}",
            self.prefix, entry, self.next_index, self.key_name
        ));
        self.output.push('=');
        self.output.push_str(&encode(key));
        let value_name = format!(
            "{}{}.{}.{}",
            self.prefix, entry, self.next_index, self.value_name
        );

        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(value_name))
    }

    /// Finishes the map.
    pub fn finish(self) {
        // Calling this drops self
    }
}

/// Writes the members of a list parameter as `prefix.member.N`, with `N` starting at 1.
#[derive(Debug)]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
    flatten: bool,
    member_override: Option<&'a str>,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    fn new(
        output: &'a mut String,
        prefix: Cow<'a, str>,
        flatten: bool,
        member_override: Option<&'a str>,
    ) -> QueryListWriter<'a> {
        QueryListWriter {
            prefix,
            output,
            flatten,
            member_override,
            next_index: 1,
        }
    }

    /// Returns a writer for the next member of the list.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let value_name = if self.flatten {
            format!("{}.{}", self.prefix, self.next_index)
        } else if let Some(member_override) = self.member_override {
            format!("{}.{}.{}", self.prefix, member_override, self.next_index)
        } else {
            format!("{}.member.{}", self.prefix, self.next_index)
        };

        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(value_name))
    }

    /// Finishes the list. An empty list is written as the bare parameter name with no value.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.prefix).write_param_name();
        }
    }
}

/// Writes a single parameter value, or opens a nested structure, list or map under a prefix.
#[derive(Debug)]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    /// Creates a writer for the parameter named `prefix`.
    pub fn new(output: &'a mut String, prefix: Cow<'a, str>) -> QueryValueWriter<'a> {
        QueryValueWriter { output, prefix }
    }

    /// Starts a new prefix nested under this one, as `this.prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(
            self.output,
            Cow::Owned(format!("{}.{}", self.prefix, prefix)),
        )
    }

    /// Writes the query boolean `value`.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(match value {
            true => "true",
            _ => "false",
        });
    }

    /// Writes a query number `value`.
    pub fn number(self, value: Number) {
        self.string(Encoder::from(value).encode())
    }

    /// Writes a date-time `value` with the given `format`.
    pub fn date_time(
        self,
        date_time: &DateTime,
        format: Format,
    ) -> Result<(), DateTimeFormatError> {
        self.string(&date_time.fmt(format)?);
        Ok(())
    }

    /// Writes a string `value`, percent-encoding it.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Starts a map.
    pub fn start_map(
        self,
        flat: bool,
        key_name: &'static str,
        value_name: &'static str,
    ) -> QueryMapWriter<'a> {
        QueryMapWriter::new(self.output, self.prefix, flat, key_name, value_name)
    }

    /// Starts a list.
    pub fn start_list(self, flat: bool, member_override: Option<&'a str>) -> QueryListWriter<'a> {
        QueryListWriter::new(self.output, self.prefix, flat, member_override)
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

#[cfg(test)]
mod tests {
    use crate::QueryWriter;
    use aws_smithy_types::date_time::Format;
    use aws_smithy_types::{DateTime, Number};
    use pretty_assertions::assert_eq;

    #[test]
    fn no_params() {
        let mut out = String::new();
        let writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0", out);
    }

    #[test]
    fn query_list_writer_empty_list() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer.prefix("myList").start_list(false, None).finish();
        writer.finish();
        assert_eq!("Action=SomeAction&Version=1.0&myList=", out);
    }

    #[test]
    fn maps() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");

        let mut map = writer.prefix("Tags").start_map(false, "key", "value");
        map.entry("first").string("1");
        map.entry("second").string("two words");
        map.finish();

        let mut flat = writer.prefix("Flat").start_map(true, "k", "v");
        flat.entry("a").number(Number::NegInt(-3));
        flat.finish();
        writer.finish();

        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &Tags.entry.1.key=first&Tags.entry.1.value=1\
            &Tags.entry.2.key=second&Tags.entry.2.value=two%20words\
            &Flat.1.k=a&Flat.1.v=-3",
            out
        );
    }

    #[test]
    fn lists() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");

        let mut list = writer.prefix("Names").start_list(false, None);
        list.entry().string("a");
        list.entry().string("b");
        list.finish();

        let mut custom = writer.prefix("Custom").start_list(false, Some("item"));
        custom.entry().boolean(true);
        custom.finish();

        let mut flat = writer.prefix("Flat").start_list(true, None);
        flat.entry().number(Number::Float(1.5));
        flat.finish();
        writer.finish();

        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &Names.member.1=a&Names.member.2=b\
            &Custom.item.1=true\
            &Flat.1=1.5",
            out
        );
    }

    #[test]
    fn nested_structures() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        let mut config = writer.prefix("S3ExportConfiguration");
        config.prefix("Bucket").string("my-bucket");
        let mut encryption = config.prefix("EncryptionConfiguration");
        encryption.prefix("ObjectEncryptionType").string("SSE_S3");
        writer.finish();

        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &S3ExportConfiguration.Bucket=my-bucket\
            &S3ExportConfiguration.EncryptionConfiguration.ObjectEncryptionType=SSE_S3",
            out
        );
    }

    #[test]
    fn timestamps_and_escaping() {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, "SomeAction", "1.0");
        writer
            .prefix("Start")
            .date_time(&DateTime::from_secs(1576540098), Format::DateTime)
            .unwrap();
        writer
            .prefix("End")
            .date_time(&DateTime::from_secs(1576540098), Format::EpochSeconds)
            .unwrap();
        writer.prefix("Policy").string("{\"a\": \"b&c=d\"}");
        writer.finish();

        assert_eq!(
            "Action=SomeAction&Version=1.0\
            &Start=2019-12-16T23%3A48%3A18Z\
            &End=1576540098\
            &Policy=%7B%22a%22%3A%20%22b%26c%3Dd%22%7D",
            out
        );
    }
}
