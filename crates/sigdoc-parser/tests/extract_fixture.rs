//! End-to-end extraction over a declaration file on disk.

use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use sigdoc_parser::{ExtractedMethod, ExtractionRequest, ParserError, extract, parse_name_list};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/player.d.ts")
}

fn names(methods: &[ExtractedMethod]) -> Vec<&str> {
    methods.iter().map(|m| m.method_name.as_str()).collect()
}

fn find<'a>(methods: &'a [ExtractedMethod], name: &str) -> &'a ExtractedMethod {
    methods
        .iter()
        .find(|m| m.method_name == name)
        .unwrap_or_else(|| panic!("should find method named '{name}'"))
}

#[test]
fn player_methods_in_source_order() {
    let methods = extract(&ExtractionRequest::new(fixture(), "Player")).expect("extract");
    assert_eq!(
        names(&methods),
        vec![
            "AddComboPoints",
            "AddItem",
            "AddLifetimeKills",
            "GetItemByEntry",
            "SendUnitSay",
            "OnLogin",
        ]
    );
    assert!(methods[..5].iter().all(|m| m.declaration_name == "Player"));
}

#[test]
fn comments_are_attached_verbatim() {
    let methods = extract(&ExtractionRequest::new(fixture(), "Player")).expect("extract");
    assert_eq!(
        find(&methods, "AddComboPoints").comment_text,
        "/**\n       * Adds combo points to the [Player]\n       */"
    );
    assert_eq!(find(&methods, "AddLifetimeKills").comment_text, "");
    assert_eq!(
        find(&methods, "GetItemByEntry").comment_text,
        "/* legacy */\n// kept for old scripts"
    );
    assert_eq!(
        find(&methods, "OnLogin").comment_text,
        "/** Namespaced player hook. */"
    );
}

#[test]
fn signatures_keep_optional_and_generic_syntax() {
    let methods = extract(&ExtractionRequest::new(fixture(), "Player")).expect("extract");
    assert_eq!(
        find(&methods, "AddItem").signature_text,
        "AddItem(entry: number, itemCount?: number): Item;"
    );
    assert_eq!(
        find(&methods, "GetItemByEntry").signature_text,
        "GetItemByEntry<T extends Item = Item>(entry: number): T | undefined;"
    );
}

#[test]
fn every_signature_is_found_in_file() {
    let content = std::fs::read_to_string(fixture()).expect("read fixture");
    for decl in ["WorldObject", "Unit", "Player", "Item"] {
        let methods = extract(&ExtractionRequest::new(fixture(), decl)).expect("extract");
        assert!(!methods.is_empty(), "{decl} should have methods");
        for method in methods {
            assert!(
                content.contains(&method.signature_text),
                "{} not found verbatim",
                method.qualified_name()
            );
        }
    }
}

#[test]
fn shared_method_name_stays_in_its_declaration() {
    let methods = extract(&ExtractionRequest::new(fixture(), "WorldObject")).expect("extract");
    let say = find(&methods, "SendUnitSay");
    assert_eq!(say.declaration_name, "WorldObject");
    assert_eq!(say.comment_text, "/**\n     * Sends a message to nearby players.\n     */");
    assert_eq!(names(&methods), vec!["GetName", "SendUnitSay"]);
}

#[test]
fn default_parameter_values_are_preserved() {
    let methods = extract(&ExtractionRequest::new(fixture(), "Unit")).expect("extract");
    assert_eq!(names(&methods), vec!["Kill", "GetHealth"]);
    assert_eq!(
        methods[0].signature_text,
        "Kill(target?: Unit, durabilityLoss: boolean = true): void;"
    );
    assert_eq!(methods[1].comment_text, "// Returns the current health.");
}

#[test]
fn cli_style_lists_filter_output() {
    let request = ExtractionRequest {
        include_names: Some(parse_name_list("AddItem,SendUnitSay,OnLogin")),
        exclude_names: Some(parse_name_list("OnLogin")),
        ..ExtractionRequest::new(fixture(), "Player")
    };
    let methods = extract(&request).expect("extract");
    assert_eq!(names(&methods), vec!["AddItem", "SendUnitSay"]);
}

#[test]
fn truncated_file_aborts_with_parse_error() {
    let mut file = tempfile::Builder::new()
        .suffix(".d.ts")
        .tempfile()
        .expect("tempfile");
    write!(file, "declare class Broken {{\n    Foo(): void;\n    Bar(").expect("write");

    let err = extract(&ExtractionRequest::new(file.path(), "Broken")).expect_err("should fail");
    assert!(
        matches!(err, ParserError::ParseFailed { ref language, .. } if language == "TypeScript")
    );
}

#[test]
fn repeated_extraction_is_identical() {
    let request = ExtractionRequest::new(fixture(), "Player").with_exclude(["AddItem"]);
    let first = serde_json::to_string(&extract(&request).expect("extract")).expect("json");
    let second = serde_json::to_string(&extract(&request).expect("extract")).expect("json");
    assert_eq!(first, second);
}
