#![no_main]
use libfuzzer_sys::fuzz_target;
use ctxml::decode_utf16_bom;

fuzz_target!(|data: &[u8]| {
    if let Ok(Some(text)) = decode_utf16_bom(data) {
        let _ = ctxml::parse_str(&text);
    }
});
