use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Escape set for a single command token: everything outside
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded. Commas inside a
/// token are escaped, so they never collide with the commas joining tokens.
const COMMAND_TOKEN: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_token(token: &str) -> String {
    utf8_percent_encode(token, COMMAND_TOKEN).to_string()
}

pub(crate) fn encode_joined(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| encode_token(token))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unreserved_characters() {
        assert_eq!(encode_token("update"), "update");
        assert_eq!(encode_token("a-b_c.d!e~f*g(h)"), "a-b_c.d!e~f*g(h)");
        assert_eq!(encode_token("it's"), "it's");
    }

    #[test]
    fn escapes_spaces_commas_and_reserved_characters() {
        assert_eq!(encode_token("move 0.1 0.1"), "move%200.1%200.1");
        assert_eq!(encode_token("a,b"), "a%2Cb");
        assert_eq!(encode_token("x&y=z?"), "x%26y%3Dz%3F");
        assert_eq!(encode_token("50%"), "50%25");
    }

    #[test]
    fn escapes_non_ascii_as_utf8_bytes() {
        assert_eq!(encode_token("зелений"), "%D0%B7%D0%B5%D0%BB%D0%B5%D0%BD%D0%B8%D0%B9");
    }

    #[test]
    fn joins_encoded_tokens_with_raw_commas() {
        let tokens = vec!["green".to_string(), "figure 0.5 0.5".to_string()];
        assert_eq!(encode_joined(&tokens), "green,figure%200.5%200.5");
    }
}
