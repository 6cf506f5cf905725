#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::fs;

use ctxml::test_utils::*;

#[test]
fn file_read_error() {
    // Attempt reading a non-existent file should produce an error.
    let non_existent = "nonexistent_file.xml";
    let result = parse_file(non_existent);
    assert!(
        result.is_err(),
        "Expected error when reading non-existent file"
    );

    let err = result.unwrap_err();
    match err.kind() {
        ParseErrorKind::IO(IOError::FileNotFound(path)) => assert_eq!(path, non_existent),
        other => panic!("Expected file not found error, got {:?}", other),
    }
    assert!(!err.is_malformed());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn read_file_appends_terminator() {
    let temp_path = tmp_file_path("read_test.xml");
    fs::write(&temp_path, "<a/>").expect("Failed to write file");

    let bytes = read_file(&temp_path).expect("Failed to read file");
    assert_eq!(bytes, b"<a/>\0\0");

    let _ = fs::remove_file(temp_path);
}

#[test]
fn parse_xml_file() {
    let temp_path = tmp_file_path("test.xml");
    let xml_content = r#"<?xml version="1.0"?>
<server>
    <listen port="8080" host="localhost"/>
    <name>example &amp; co</name>
</server>
"#;
    fs::write(&temp_path, xml_content).expect("Failed to write XML file");

    let doc = parse_file(&temp_path).expect("Failed to parse XML file");
    let server = doc.root().child("server").expect("server element");
    let listen = server.child("listen").expect("listen element");
    assert_eq!(listen.attribute("port"), Some("8080"));
    assert_eq!(listen.attribute("host"), Some("localhost"));
    assert_eq!(
        server.child("name").and_then(|n| n.body()),
        Some("example & co")
    );

    let _ = fs::remove_file(temp_path);
}

#[test]
fn parse_empty_file() {
    let temp_path = tmp_file_path("empty.xml");
    fs::write(&temp_path, "").expect("Failed to write file");

    let result = parse_file(&temp_path);
    let read = read_file(&temp_path);
    let _ = fs::remove_file(&temp_path);

    let err = result.expect_err("Empty file should not parse");
    match err.kind() {
        ParseErrorKind::IO(IOError::ReadError(_)) => (),
        other => panic!("Expected read error, got {:?}", other),
    }
    assert_eq!(err.context(), Some("file is empty"));
    assert!(!err.is_malformed());
    assert!(read.is_err());

    // Only files are rejected; an empty in-memory buffer is an empty document
    assert!(parse(b"").expect("Empty buffer should parse").is_empty());
}

#[test]
fn garbage_file_is_malformed() {
    let temp_path = tmp_file_path("garbage.xml");
    fs::write(&temp_path, "key = \"value\"\n").expect("Failed to write file");

    let result = parse_file(&temp_path);
    let _ = fs::remove_file(temp_path);

    match result {
        Err(err) => {
            assert!(err.is_malformed());
            assert!(matches!(
                err.kind(),
                ParseErrorKind::Syntax(SyntaxError::TrailingContent)
            ));
            assert_eq!(err.location().map(|loc| (loc.line, loc.column)), Some((1, 1)));
        }
        Ok(_) => panic!("Expected a syntax error"),
    }
}
