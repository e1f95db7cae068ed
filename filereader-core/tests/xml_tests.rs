use filereader_core::{ErrorKind, Format, ReadError, XmlNode, parse_xml};
use pretty_assertions::assert_eq;

// ── Well-formed input ───────────────────────────────────────────

#[test]
fn parses_root_and_child_value() {
    let doc = parse_xml("<root><message>Hello</message></root>").unwrap();
    assert_eq!(doc.root().name(), "root");
    assert_eq!(doc.root().element("message").unwrap().value(), "Hello");
}

#[test]
fn parses_declaration_comments_and_attributes() {
    let doc = parse_xml(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!-- inventory -->
<items count="2">
  <item id="a" kind="tool">Hammer</item>
  <item id="b">Saw</item>
</items>
"#,
    )
    .unwrap();

    let root = doc.root();
    assert_eq!(root.attribute("count"), Some("2"));
    let ids: Vec<_> = root.elements().map(|e| e.attribute("id").unwrap()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(root.element("item").unwrap().attribute("kind"), Some("tool"));
    assert_eq!(root.element("item").unwrap().attribute("missing"), None);
}

#[test]
fn unescapes_entities_in_text_and_attributes() {
    let doc = parse_xml(r#"<r a="x &amp; y">1 &lt; 2 &#x41;</r>"#).unwrap();
    assert_eq!(doc.root().attribute("a"), Some("x & y"));
    assert_eq!(doc.root().value(), "1 < 2 A");
}

#[test]
fn cdata_becomes_text() {
    let doc = parse_xml("<r><![CDATA[<not a tag>]]></r>").unwrap();
    assert_eq!(doc.root().value(), "<not a tag>");
}

#[test]
fn value_concatenates_descendant_text() {
    let doc = parse_xml("<r>a<b>b<c>c</c></b>d</r>").unwrap();
    assert_eq!(doc.root().value(), "abcd");
}

#[test]
fn self_closing_root_has_no_children() {
    let doc = parse_xml("<root/>").unwrap();
    assert!(doc.root().children().is_empty());
    assert_eq!(doc.root().value(), "");
}

#[test]
fn element_matches_local_name() {
    let doc = parse_xml(r#"<ns:root xmlns:ns="urn:x"><ns:message>Hi</ns:message></ns:root>"#)
        .unwrap();
    assert_eq!(doc.root().local_name(), "root");
    assert_eq!(doc.root().name(), "ns:root");
    assert_eq!(doc.root().element("message").unwrap().value(), "Hi");
}

#[test]
fn mixed_content_keeps_document_order() {
    let doc = parse_xml("<r>x<e/>y</r>").unwrap();
    let kinds: Vec<_> = doc
        .root()
        .children()
        .iter()
        .map(|n| match n {
            XmlNode::Element(e) => format!("<{}>", e.name()),
            XmlNode::Text(t) => t.clone(),
        })
        .collect();
    assert_eq!(kinds, vec!["x", "<e>", "y"]);
}

// ── Malformed input ─────────────────────────────────────────────

fn assert_xml_parse_error(input: &str) {
    let err = parse_xml(input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ParseError, "input {input:?}: {err}");
    assert!(matches!(err, ReadError::Parse { format: Format::Xml, .. }));
}

#[test]
fn unclosed_tag_is_parse_error() {
    assert_xml_parse_error("<root><unclosed>");
}

#[test]
fn mismatched_end_tag_is_parse_error() {
    assert_xml_parse_error("<root><a></b></root>");
}

#[test]
fn stray_end_tag_is_parse_error() {
    assert_xml_parse_error("</root>");
}

#[test]
fn unknown_entity_is_parse_error() {
    assert_xml_parse_error("<root>&bogus;</root>");
}

#[test]
fn empty_input_is_parse_error() {
    assert_xml_parse_error("");
    assert_xml_parse_error("   \n");
}

#[test]
fn multiple_roots_is_parse_error() {
    assert_xml_parse_error("<a/><b/>");
    assert_xml_parse_error("<a></a><b></b>");
}

#[test]
fn text_outside_root_is_parse_error() {
    assert_xml_parse_error("hello <root/>");
    assert_xml_parse_error("<root/> trailing");
}

#[test]
fn duplicate_attribute_is_parse_error() {
    assert_xml_parse_error(r#"<root a="1" a="2"/>"#);
}

#[test]
fn invalid_element_name_is_parse_error() {
    assert_xml_parse_error("<root><1bad/></root>");
    assert_xml_parse_error("<-root></-root>");
    assert_xml_parse_error("<root><a.b c$d=\"1\"/></root>");
}

#[test]
fn invalid_attribute_name_is_parse_error() {
    assert_xml_parse_error(r#"<root 9a="1"/>"#);
    assert_xml_parse_error(r#"<root .a="1"></root>"#);
}

#[test]
fn valid_names_with_digits_dashes_dots_and_prefixes_parse() {
    let doc = parse_xml(r#"<_root x-1.y="v" xml:lang="en"><item-2.b/><é/></_root>"#).unwrap();
    assert_eq!(doc.root().attribute("x-1.y"), Some("v"));
    assert_eq!(doc.root().attribute("xml:lang"), Some("en"));
    assert!(doc.root().element("item-2.b").is_some());
    assert!(doc.root().element("é").is_some());
}

#[test]
fn double_dash_in_comment_is_parse_error() {
    assert_xml_parse_error("<root><!-- bad -- comment --></root>");
    assert_xml_parse_error("<root><!-- ends badly ---></root>");
    assert_xml_parse_error("<!-- a -- b --><root/>");
}

#[test]
fn well_formed_comment_is_skipped() {
    let doc = parse_xml("<root><!-- a - b -->text</root>").unwrap();
    assert_eq!(doc.root().value(), "text");
}

#[test]
fn cdata_close_in_text_is_parse_error() {
    assert_xml_parse_error("<root>]]></root>");
    assert_xml_parse_error("<root>a ]]> b</root>");
}

#[test]
fn escaped_cdata_close_in_text_parses() {
    let doc = parse_xml("<root>]]&gt;</root>").unwrap();
    assert_eq!(doc.root().value(), "]]>");
}

#[test]
fn into_root_hands_over_tree() {
    let root = parse_xml("<root><message>Hi</message></root>").unwrap().into_root();
    assert_eq!(root.name(), "root");
    assert_eq!(root.element("message").unwrap().value(), "Hi");
}

#[test]
fn parse_error_names_unclosed_element() {
    let err = parse_xml("<root><unclosed>").unwrap_err();
    assert!(format!("{err}").contains("unclosed"));
}

// ── Rendering ───────────────────────────────────────────────────

#[test]
fn display_indents_nested_elements() {
    let doc = parse_xml(r#"<root><message lang="en">Hello &amp; bye</message><empty/></root>"#)
        .unwrap();
    assert_eq!(
        doc.to_string(),
        "<root>\n  <message lang=\"en\">Hello &amp; bye</message>\n  <empty />\n</root>"
    );
}

#[test]
fn display_output_parses_back_to_same_values() {
    let doc = parse_xml("<a><b>1</b><c><d>2</d></c></a>").unwrap();
    let reparsed = parse_xml(&doc.to_string()).unwrap();
    let root = reparsed.root();
    assert_eq!(root.elements().count(), 2);
    assert_eq!(root.element("b").unwrap().value(), "1");
    assert_eq!(root.element("c").unwrap().element("d").unwrap().value(), "2");
}
