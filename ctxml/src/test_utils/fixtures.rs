pub const TEST_FILES: [&str; 3] = [
    "tests/input/small.xml",
    "tests/input/file.xml",
    "tests/input/large.xml",
];

pub const INVALID_XML_SAMPLES: [(&str, &str); 10] = [
    ("<a></b>", "Mismatched end tag"),
    ("<a/>garbage", "Trailing content"),
    ("<a>", "Unclosed element"),
    ("<a", "Unfinished start tag"),
    ("<a b></a>", "Attribute without value"),
    ("<a b='1'></a>", "Single-quoted attribute"),
    ("<a b=\"1></a>", "Unterminated attribute value"),
    ("<?xml version=\"1.0\"<a/>", "Unterminated declaration"),
    ("<a></a >", "Whitespace inside end tag"),
    ("</a>", "Stray end tag"),
];
