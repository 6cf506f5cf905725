#![no_main]
use libfuzzer_sys::fuzz_target;
use ctxml::XmlParser;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = XmlParser::new(data).parse() {
        for child in doc.root().children() {
            let _ = child.body();
            let _ = child.attributes().first().map(|a| child.attribute(a.name()));
        }
    }
});
