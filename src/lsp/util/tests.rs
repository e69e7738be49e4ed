use super::*;

// --- utf16_col_to_byte ---

#[test]
fn test_col_to_byte_ascii() {
    assert_eq!(utf16_col_to_byte("vec3 col", 0), 0);
    assert_eq!(utf16_col_to_byte("vec3 col", 5), 5);
    assert_eq!(utf16_col_to_byte("vec3 col", 8), 8);
}

#[test]
fn test_col_to_byte_clamps() {
    assert_eq!(utf16_col_to_byte("abc", 99), 3);
    assert_eq!(utf16_col_to_byte("", 4), 0);
}

#[test]
fn test_col_to_byte_multibyte() {
    // 'é' is 2 bytes in UTF-8 and 1 UTF-16 unit.
    let line = "// é sin(";
    assert_eq!(utf16_col_to_byte(line, 5), 6);
    // '😀' is 4 bytes and 2 UTF-16 units.
    let line = "😀x";
    assert_eq!(utf16_col_to_byte(line, 2), 4);
    assert_eq!(utf16_col_to_byte(line, 1), 0);
}

// --- byte_to_utf16_col ---

#[test]
fn test_byte_to_col() {
    assert_eq!(byte_to_utf16_col("abc", 2), 2);
    assert_eq!(byte_to_utf16_col("// é x", 6), 5);
    assert_eq!(byte_to_utf16_col("😀x", 4), 2);
    assert_eq!(byte_to_utf16_col("abc", 10), 3);
}

// --- ident boundaries ---

#[test]
fn test_ident_bounds() {
    let line = "  float d = length(p);";
    assert_eq!(ident_start(line, 7), 2);
    assert_eq!(ident_end(line, 2), 7);
    assert_eq!(ident_start(line, 12), 12);
    assert_eq!(ident_end(line, 10), 10);
}

#[test]
fn test_ident_chars() {
    assert!(is_ident_char(b'a'));
    assert!(is_ident_char(b'Z'));
    assert!(is_ident_char(b'_'));
    assert!(is_ident_char(b'9'));
    assert!(!is_ident_char(b'.'));
    assert!(!is_ident_char(b'('));
    assert!(!is_ident_char(b' '));
}

// --- trailing_identifier ---

#[test]
fn test_trailing_identifier() {
    assert_eq!(trailing_identifier("x = mix"), Some("mix"));
    assert_eq!(trailing_identifier("x = mix   "), Some("mix"));
    assert_eq!(trailing_identifier("vec2"), Some("vec2"));
    assert_eq!(trailing_identifier("2.0 * 1x"), Some("x"));
    assert_eq!(trailing_identifier("a + 42"), None);
    assert_eq!(trailing_identifier("if ("), None);
    assert_eq!(trailing_identifier(""), None);
}
