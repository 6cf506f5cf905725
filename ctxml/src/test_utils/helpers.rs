use std::{env, fs, path::PathBuf};

use crate::transcode::Endian;

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("ctxml_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// Encode `text` as UTF-16 with a leading byte-order mark
pub fn encode_utf16(text: &str, endian: Endian) -> Vec<u8> {
    std::iter::once(0xFEFF)
        .chain(text.encode_utf16())
        .flat_map(|unit: u16| match endian {
            Endian::Little => unit.to_le_bytes(),
            Endian::Big => unit.to_be_bytes(),
        })
        .collect()
}
