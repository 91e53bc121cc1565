#[cfg(test)]
mod tests {
    use crate::fixture::Expected;
    use crate::snippets::int_decode::{TEXT, VALUE, decode_binary, decode_text, encode_binary};
    use anyhow::Result;

    #[test]
    fn test_text_and_binary_decode_to_same_value() -> Result<()> {
        assert_eq!(decode_text(TEXT)?, 12_345_678);
        assert_eq!(decode_binary(&[0x00, 0xBC, 0x61, 0x4E])?, 12_345_678);
        assert_eq!(decode_text(TEXT)?, decode_binary(&encode_binary(VALUE))?);
        Ok(())
    }

    #[test]
    fn test_encode_binary_is_big_endian() {
        assert_eq!(encode_binary(VALUE), [0x00, 0xBC, 0x61, 0x4E]);
        assert_eq!(encode_binary(-1), [0xFF; 4]);
    }

    #[test]
    fn test_decode_binary_negative() -> Result<()> {
        assert_eq!(decode_binary(&encode_binary(i32::MIN))?, i32::MIN);
        assert_eq!(decode_binary(&[0xFF, 0xFF, 0xFF, 0xFE])?, -2);
        Ok(())
    }

    #[test]
    fn test_decode_binary_rejects_wrong_width() {
        let err = decode_binary(&[0x00, 0xBC, 0x61]).unwrap_err();
        assert!(err.to_string().contains("got 3"));
        assert!(decode_binary(&[0; 8]).is_err());
    }

    #[test]
    fn test_decode_text_rejects_overflow_and_garbage() {
        assert!(decode_text("2147483648").is_err());
        let err = decode_text("12a45678").unwrap_err();
        assert!(format!("{err:#}").contains("\"12a45678\""));
    }

    #[test]
    fn test_mismatch_reports_observed_and_expected() {
        let expected = Expected::new(VALUE);
        let err = expected.verify(&12_345_679).unwrap_err();
        assert_eq!(err.to_string(), "decoded 12345679 instead of 12345678");
    }
}
