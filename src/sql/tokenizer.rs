/// Splits an SQL statement into word and punctuation tokens.
///
/// A token is either a maximal run of word characters (letters, digits,
/// underscore) or a single non-whitespace, non-word character. Whitespace
/// only separates tokens and is never emitted.
///
/// # Arguments
/// * `query` - The raw SQL string to split.
///
/// # Returns
/// The tokens in order of occurrence. Empty input yields an empty vector;
/// any string is lexically acceptable.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in query.chars() {
        if c.is_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_and_punctuation() {
        let tokens = tokenize("SELECT * FROM employees WHERE department = 'IT';");
        assert_eq!(
            tokens,
            vec![
                "SELECT",
                "*",
                "FROM",
                "employees",
                "WHERE",
                "department",
                "=",
                "'",
                "IT",
                "'",
                ";"
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n ").is_empty());
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        assert_eq!(tokenize("temp_logs"), vec!["temp_logs"]);
    }

    #[test]
    fn test_adjacent_punctuation_splits() {
        assert_eq!(tokenize("(a,b);"), vec!["(", "a", ",", "b", ")", ";"]);
    }

    #[test]
    fn test_newlines_separate_tokens() {
        assert_eq!(
            tokenize("SELECT id\nFROM users"),
            vec!["SELECT", "id", "FROM", "users"]
        );
    }
}
