#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod utf16_tests {
    use std::fs;

    use ctxml::test_utils::*;

    const SAMPLE: &str = "<?xml version=\"1.0\"?>\n<msg lang=\"el\">Γειά &amp; 😀</msg>";

    #[test]
    fn test_bom_input_matches_plain_input() -> Result<()> {
        let plain = parse_str(SAMPLE)?;
        for endian in [Endian::Little, Endian::Big] {
            let text = decode_utf16_bom(&encode_utf16(SAMPLE, endian))?.unwrap();
            assert_eq!(text, SAMPLE);
            let transcoded = parse_str(&text)?;
            assert_documents_equal(plain.root(), transcoded.root(), "utf-16 changed the tree");
        }
        Ok(())
    }

    #[test]
    fn test_no_bom_is_passed_through() -> Result<()> {
        assert_eq!(decode_utf16_bom(SAMPLE.as_bytes())?, None);
        assert_eq!(decode_utf16_bom(&[0xFF])?, None);
        assert_eq!(decode_utf16_bom(&[])?, None);
        Ok(())
    }

    #[test]
    fn test_unpaired_surrogate_is_malformed() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend_from_slice(&[b'<', 0, b'a', 0, b'>', 0]);
        bytes.extend_from_slice(&0xD83Du16.to_le_bytes());
        bytes.extend_from_slice(&u16::from(b'x').to_le_bytes());

        let err = decode_utf16_bom(&bytes).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(
            err.kind(),
            ParseErrorKind::Encoding(EncodingError::UnpairedSurrogate(0xD83D))
        ));
    }

    #[test]
    fn test_parse_file_utf16_le_and_be() -> Result<()> {
        let expected = parse_str(SAMPLE)?;
        for (endian, name) in [(Endian::Little, "utf16le.xml"), (Endian::Big, "utf16be.xml")] {
            let path = tmp_file_path(name);
            fs::write(&path, encode_utf16(SAMPLE, endian)).unwrap();

            let doc = parse_file(&path)?;
            assert_documents_equal(expected.root(), doc.root(), name);
            let msg = doc.root().child("msg").unwrap();
            assert_eq!(msg.body(), Some("Γειά & 😀"));
            assert_eq!(doc.root().attribute("version"), Some("1.0"));

            fs::remove_file(&path).unwrap();
        }
        Ok(())
    }

    #[test]
    fn test_parse_file_utf16_invalid_surrogate() {
        let path = tmp_file_path("utf16_bad.xml");
        let mut bytes = vec![0xFE, 0xFF];
        bytes.extend_from_slice(&[0, b'<', 0, b'a', 0, b'/', 0, b'>']);
        bytes.extend_from_slice(&0xDC00u16.to_be_bytes());
        fs::write(&path, &bytes).unwrap();

        let result = parse_file(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(err.kind(), ParseErrorKind::Encoding(_)));
    }
}
