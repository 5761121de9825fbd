// Tokenizer tests.

use super::*;

#[test]
fn test_tokenize_combined_log_line() {
    let line = "203.0.113.9 - - [10/Oct/2024:13:55:36 +0000] \"GET /index.html HTTP/1.1\" 200 2326\n";
    let tokens: Vec<&str> = tokenize(line).collect();
    assert_eq!(tokens[0], "203.0.113.9");
    assert_eq!(tokens[1], "-");
    assert_eq!(tokens.last(), Some(&"2326"));
}

#[test]
fn test_tokenize_collapses_consecutive_spaces() {
    let tokens: Vec<&str> = tokenize("1.2.3.4    GET   /x").collect();
    assert_eq!(tokens, vec!["1.2.3.4", "GET", "/x"]);
}

#[test]
fn test_tokenize_leading_spaces() {
    // Leading spaces produce no empty token; the first real field is the IP
    let tokens: Vec<&str> = tokenize("   1.2.3.4 GET").collect();
    assert_eq!(tokens, vec!["1.2.3.4", "GET"]);
}

#[test]
fn test_tokenize_strips_line_terminators() {
    assert_eq!(
        tokenize("1.2.3.4 GET /y\n").collect::<Vec<_>>(),
        vec!["1.2.3.4", "GET", "/y"]
    );
    assert_eq!(
        tokenize("1.2.3.4 GET /y\r\n").collect::<Vec<_>>(),
        vec!["1.2.3.4", "GET", "/y"]
    );
}

#[test]
fn test_tokenize_blank_lines_yield_nothing() {
    for line in ["", "\n", "\r\n", "     \n", " \t \n"] {
        assert_eq!(
            tokenize(line).count(),
            0,
            "Blank line {:?} should have no tokens",
            line
        );
    }
}

#[test]
fn test_tokenize_tab_is_not_a_delimiter() {
    let tokens: Vec<&str> = tokenize("1.2.3.4\tGET /x").collect();
    assert_eq!(tokens, vec!["1.2.3.4\tGET", "/x"]);
}

#[test]
fn test_ip_token_first_field() {
    assert_eq!(ip_token("1.2.3.4 GET /x\n"), Some("1.2.3.4"));
    assert_eq!(
        ip_token("2001:db8::1 - - [x] \"GET / HTTP/2\" 200 0"),
        Some("2001:db8::1")
    );
}

#[test]
fn test_ip_token_single_field_line() {
    assert_eq!(ip_token("10.0.0.1\n"), Some("10.0.0.1"));
}

#[test]
fn test_ip_token_blank_line() {
    assert_eq!(ip_token("\n"), None);
    assert_eq!(ip_token("    "), None);
}

#[test]
fn test_ip_token_is_not_validated() {
    // Validation belongs to the GeoIP lookup; the tokenizer returns whatever is first
    assert_eq!(ip_token("not-an-ip GET /"), Some("not-an-ip"));
}
