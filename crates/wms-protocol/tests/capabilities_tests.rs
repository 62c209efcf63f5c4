//! Layer discovery from GetCapabilities documents.

use test_utils::{capabilities, require_test_file};
use wms_protocol::{parse_capabilities, CapabilitiesParser, LayerScope, ParseError};

fn parse_names(xml: &str) -> Vec<String> {
    parse_capabilities(xml.as_bytes())
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect()
}

fn parse_names_nested(xml: &str) -> Vec<String> {
    CapabilitiesParser::with_scope(LayerScope::Nested)
        .parse(xml.as_bytes())
        .unwrap()
        .into_iter()
        .map(|l| l.name)
        .collect()
}

// ============================================================================
// Basic extraction
// ============================================================================

#[test]
fn test_single_layer() {
    assert_eq!(parse_names("<Layer><Name>X</Name></Layer>"), vec!["X"]);
}

#[test]
fn test_sibling_layers_in_document_order() {
    let names = parse_names(capabilities::WMS_111_SIBLINGS);
    assert_eq!(names, vec!["population", "elevation", "population"]);
}

#[test]
fn test_n_top_level_layers() {
    let xml: String = (0..25)
        .map(|i| format!("<Layer><Name>layer_{}</Name></Layer>", i))
        .collect::<Vec<_>>()
        .join("\n");
    let xml = format!("<Capability>{}</Capability>", xml);

    let names = parse_names(&xml);
    assert_eq!(names.len(), 25);
    for (i, name) in names.iter().enumerate() {
        assert_eq!(name, &format!("layer_{}", i));
    }
}

#[test]
fn test_name_outside_layer_is_ignored() {
    let xml = r#"<WMS_Capabilities>
  <Service><Name>WMS</Name></Service>
  <Capability><Layer><Name>roads</Name></Layer></Capability>
</WMS_Capabilities>"#;
    assert_eq!(parse_names(xml), vec!["roads"]);
}

#[test]
fn test_name_text_is_trimmed() {
    assert_eq!(
        parse_names("<Layer><Name>\n    spaced  \n</Name></Layer>"),
        vec!["spaced"]
    );
}

#[test]
fn test_blank_and_empty_names_are_dropped() {
    let xml = "<Capability><Layer><Name/></Layer><Layer><Name>   </Name></Layer></Capability>";
    assert!(parse_names(xml).is_empty());
}

#[test]
fn test_element_names_are_case_insensitive() {
    assert_eq!(parse_names("<LAYER><name>upper</name></LAYER>"), vec!["upper"]);
}

#[test]
fn test_namespace_prefix_is_ignored() {
    assert_eq!(parse_names(capabilities::NAMESPACED), vec!["ns_layer"]);
}

#[test]
fn test_split_text_is_concatenated() {
    assert_eq!(
        parse_names(capabilities::SPLIT_TEXT),
        vec!["hydrography", "land & sea"]
    );
}

#[test]
fn test_declared_latin1_encoding_is_honoured() {
    let layers = parse_capabilities(capabilities::LATIN1).unwrap();
    assert_eq!(layers.names(), vec!["Fjøell"]);
}

#[test]
fn test_document_without_layers() {
    let layers = parse_capabilities(capabilities::NO_LAYERS.as_bytes()).unwrap();
    assert!(layers.is_empty());
}

// ============================================================================
// Layer nesting
// ============================================================================

#[test]
fn test_flat_scope_captures_every_name_below_a_layer() {
    assert_eq!(
        parse_names(capabilities::WMS_130_NESTED),
        vec!["kartdata", "roads", "default", "water", "buildings"]
    );
}

#[test]
fn test_nested_scope_skips_style_names() {
    assert_eq!(
        parse_names_nested(capabilities::WMS_130_NESTED),
        vec!["kartdata", "roads", "water", "buildings"]
    );
}

#[test]
fn test_flat_scope_exits_parent_on_nested_close() {
    assert_eq!(
        parse_names(capabilities::NAME_AFTER_NESTED_LAYER),
        vec!["inner"]
    );
}

#[test]
fn test_nested_scope_keeps_parent_open() {
    assert_eq!(
        parse_names_nested(capabilities::NAME_AFTER_NESTED_LAYER),
        vec!["inner", "outer"]
    );
}

#[test]
fn test_default_scope_is_flat() {
    assert_eq!(CapabilitiesParser::new().scope(), LayerScope::Flat);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn test_mismatched_end_tag_fails() {
    let result = parse_capabilities(capabilities::MISMATCHED_END.as_bytes());
    assert!(matches!(result, Err(ParseError::Xml { .. })));
}

#[test]
fn test_truncated_document_fails() {
    let err = parse_capabilities(capabilities::TRUNCATED.as_bytes()).unwrap_err();
    match err {
        ParseError::UnclosedElement { name, position } => {
            assert_eq!(name, "Capability");
            assert!(position > 0);
        }
        other => panic!("expected UnclosedElement, got {:?}", other),
    }
}

#[test]
fn test_unknown_entity_fails() {
    let result = parse_capabilities(capabilities::UNKNOWN_ENTITY.as_bytes());
    assert!(matches!(result, Err(ParseError::Xml { .. })));
}

#[test]
fn test_plain_text_body_fails() {
    let result = parse_capabilities(capabilities::PLAIN_TEXT.as_bytes());
    assert!(matches!(result, Err(ParseError::TextOutsideRoot { .. })));
}

#[test]
fn test_document_without_root_element_fails() {
    let result = parse_capabilities(capabilities::NO_ROOT.as_bytes());
    assert!(matches!(result, Err(ParseError::NoRootElement { .. })));

    let result = parse_capabilities(b"   \n ");
    assert!(matches!(result, Err(ParseError::NoRootElement { .. })));
}

#[test]
fn test_second_root_element_fails() {
    let err = parse_capabilities(capabilities::MULTIPLE_ROOTS.as_bytes()).unwrap_err();
    match err {
        ParseError::MultipleRoots { name, position } => {
            assert_eq!(name, "WMS_Capabilities");
            assert!(position > 0);
        }
        other => panic!("expected MultipleRoots, got {:?}", other),
    }

    let result = parse_capabilities(b"<a><Layer><Name>x</Name></Layer></a><b/>");
    assert!(matches!(result, Err(ParseError::MultipleRoots { .. })));
}

#[test]
fn test_text_after_root_fails() {
    let result = parse_capabilities(capabilities::TRAILING_TEXT.as_bytes());
    assert!(matches!(result, Err(ParseError::TextOutsideRoot { .. })));
}

#[test]
fn test_undeclared_non_utf8_fails_to_decode() {
    let result = parse_capabilities(capabilities::UNDECLARED_LATIN1);
    assert!(matches!(result, Err(ParseError::Decode { .. })));
}

#[test]
fn test_error_reports_position() {
    let err = parse_capabilities(capabilities::MISMATCHED_END.as_bytes()).unwrap_err();
    assert!(err.position() > 0);
    assert!(err.to_string().contains("Malformed XML"));
}

// ============================================================================
// Captured documents
// ============================================================================

#[test]
fn test_captured_capabilities_document() {
    let path = require_test_file!("statkart_capabilities.xml");
    let xml = std::fs::read(path).unwrap();

    let flat = parse_capabilities(&xml).unwrap();
    let nested = CapabilitiesParser::with_scope(LayerScope::Nested)
        .parse(&xml)
        .unwrap();

    assert!(!flat.is_empty());
    assert!(!nested.is_empty());
    for layer in flat.iter().chain(nested.iter()) {
        assert!(!layer.name.trim().is_empty());
    }
}
