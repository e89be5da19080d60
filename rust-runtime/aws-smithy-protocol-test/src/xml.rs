/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::urlencoded::parse_form;

#[derive(Debug, Default)]
struct Element {
    text: Option<String>,
    // (identity, tag name, element) in first-seen order
    children: Vec<(String, String, Element)>,
}

impl Element {
    fn child(&mut self, identity: String, name: &str) -> &mut Element {
        let index = match self.children.iter().position(|(id, _, _)| *id == identity) {
            Some(index) => index,
            None => {
                self.children
                    .push((identity, name.to_string(), Element::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].2
    }

    fn render(&self, name: &str, out: &mut String) {
        out.push('<');
        out.push_str(name);
        out.push('>');
        if let Some(text) = &self.text {
            escape_into(text, out);
        }
        for (_, child_name, child) in &self.children {
            child.render(child_name, out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

/// Renders a query request body as the XML a service would return for the same members.
///
/// `Action` and `Version` are dropped. Each dotted name segment becomes a nested element;
/// `member.N` segments become repeated `<member>` elements and `entry.N` segments become
/// repeated `<entry>` elements, in the order they first appear. Values are percent-decoded.
///
/// ```
/// use aws_smithy_protocol_test::query_to_xml;
///
/// let xml = query_to_xml("Action=Op&Version=1&Names.member.1=a&Names.member.2=b", "Root");
/// assert_eq!(xml, "<Root><Names><member>a</member><member>b</member></Names></Root>");
/// ```
pub fn query_to_xml(body: &str, root: &str) -> String {
    let mut tree = Element::default();
    for (name, value) in parse_form(body) {
        if name == "Action" || name == "Version" {
            continue;
        }
        let mut node = &mut tree;
        let mut segments = name.split('.').peekable();
        while let Some(segment) = segments.next() {
            let indexed = matches!(segment, "member" | "entry")
                && segments
                    .peek()
                    .map(|next| next.bytes().all(|b| b.is_ascii_digit()))
                    .unwrap_or(false);
            if indexed {
                let index = segments.next().unwrap_or_default();
                node = node.child(format!("{}.{}", segment, index), segment);
            } else {
                node = node.child(segment.to_string(), segment);
            }
        }
        let decoded = urlencoding::decode(value)
            .map(|decoded| decoded.to_string())
            .unwrap_or_else(|_| value.to_string());
        node.text = Some(decoded);
    }
    let mut out = String::new();
    tree.render(root, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::query_to_xml;

    #[test]
    fn renders_nested_structures_and_maps() {
        let body = "Action=Op&Version=1\
            &Config.Bucket=my%20bucket\
            &Config.Encryption.Type=SSE_S3\
            &Tags.entry.1.key=a&Tags.entry.1.value=1\
            &Tags.entry.2.key=b&Tags.entry.2.value=%3C2%3E";
        assert_eq!(
            query_to_xml(body, "Result"),
            "<Result>\
            <Config><Bucket>my bucket</Bucket><Encryption><Type>SSE_S3</Type></Encryption></Config>\
            <Tags><entry><key>a</key><value>1</value></entry><entry><key>b</key><value>&lt;2&gt;</value></entry></Tags>\
            </Result>"
        );
    }

    #[test]
    fn renders_empty_lists_as_empty_elements() {
        assert_eq!(
            query_to_xml("Action=Op&Version=1&Names=", "Result"),
            "<Result><Names></Names></Result>"
        );
    }

    #[test]
    fn list_members_with_structures() {
        let body = "Tags.member.1.Key=k1&Tags.member.1.Value=v1&Tags.member.2.Key=k2&Tags.member.2.Value=v2";
        assert_eq!(
            query_to_xml(body, "R"),
            "<R><Tags>\
            <member><Key>k1</Key><Value>v1</Value></member>\
            <member><Key>k2</Key><Value>v2</Value></member>\
            </Tags></R>"
        );
    }
}
