//! Parsed `memo_content.xml`.
//!
//! Expected shape (only the parts read here):
//!
//! ```xml
//! <memo>
//!   <header>
//!     <meta title="Groceries" />
//!     <meta createdTime="1642343811283" />
//!   </header>
//!   <contents>
//!     <content>&lt;p&gt;milk&lt;/p&gt;</content>
//!   </contents>
//! </memo>
//! ```

use roxmltree::{Document, Node, ParsingOptions};

const HEADER_TAG: &str = "header";
const META_TAG: &str = "meta";
const CONTENTS_TAG: &str = "contents";
const CONTENT_TAG: &str = "content";
const TITLE_ATTR: &str = "title";
const CREATED_TIME_ATTR: &str = "createdTime";

/// Fields of interest from one memo, detached from the XML tree.
///
/// `None` means the node or attribute is absent; a present but empty value
/// is kept as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoDocument {
    /// First `header/meta/@title`.
    pub title: Option<String>,
    /// First `header/meta/@createdTime`, raw epoch milliseconds.
    pub created_time: Option<String>,
    /// Text of `contents/content`, still HTML-like markup.
    pub content: Option<String>,
}

impl MemoDocument {
    /// Parses memo XML text.
    pub fn parse(xml: &str) -> Result<Self, roxmltree::Error> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        let root = doc.root_element();

        let content = child_elements(root, CONTENTS_TAG)
            .flat_map(|contents| child_elements(contents, CONTENT_TAG))
            .next()
            .map(|node| node.text().unwrap_or_default().to_string());

        Ok(Self {
            title: header_meta_attribute(root, TITLE_ATTR),
            created_time: header_meta_attribute(root, CREATED_TIME_ATTR),
            content,
        })
    }
}

fn child_elements<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    tag: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |node| node.is_element() && node.has_tag_name(tag))
}

fn header_meta_attribute(root: Node<'_, '_>, attribute: &str) -> Option<String> {
    child_elements(root, HEADER_TAG)
        .flat_map(|header| child_elements(header, META_TAG))
        .find_map(|meta| meta.attribute(attribute))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::MemoDocument;

    #[test]
    fn parse_reads_title_created_time_and_content() {
        let doc = MemoDocument::parse(
            r#"<memo><header><meta title="Groceries"/><meta createdTime="1642343811283"/></header><contents><content>&lt;p&gt;milk&lt;/p&gt;</content></contents></memo>"#,
        )
        .unwrap();
        assert_eq!(doc.title.as_deref(), Some("Groceries"));
        assert_eq!(doc.created_time.as_deref(), Some("1642343811283"));
        assert_eq!(doc.content.as_deref(), Some("<p>milk</p>"));
    }

    #[test]
    fn attributes_on_the_same_meta_are_both_found() {
        let doc = MemoDocument::parse(
            r#"<memo><header><meta title="A" createdTime="1000"/></header></memo>"#,
        )
        .unwrap();
        assert_eq!(doc.title.as_deref(), Some("A"));
        assert_eq!(doc.created_time.as_deref(), Some("1000"));
        assert_eq!(doc.content, None);
    }

    #[test]
    fn missing_nodes_are_none_and_empty_content_is_some() {
        let doc = MemoDocument::parse("<memo><contents><content/></contents></memo>").unwrap();
        assert_eq!(doc.title, None);
        assert_eq!(doc.created_time, None);
        assert_eq!(doc.content.as_deref(), Some(""));
    }

    #[test]
    fn meta_outside_header_is_ignored() {
        let doc = MemoDocument::parse(r#"<memo><meta title="stray"/></memo>"#).unwrap();
        assert_eq!(doc.title, None);
    }

    #[test]
    fn cdata_content_is_read_verbatim() {
        let doc = MemoDocument::parse(
            "<memo><contents><content><![CDATA[<div>Hi</div>]]></content></contents></memo>",
        )
        .unwrap();
        assert_eq!(doc.content.as_deref(), Some("<div>Hi</div>"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(MemoDocument::parse("<memo><header>").is_err());
    }
}
