//! Tokenizer for a single line of tasklist CSV output
//!
//! Fields are separated by commas and may be bare, single-quoted or
//! double-quoted. Inside quotes a backslash escapes the next character;
//! `\'` (or `\"`) is unescaped to the bare quote, any other escape pair is
//! kept verbatim. Whitespace around a field is dropped outside quotes.
//!
//! A line that does not fit that grammar yields a single empty field
//! instead of an error, so one bad line never aborts a whole listing.
use std::iter::Peekable;
use std::str::Chars;

/// Split one line into its fields.
pub fn tokenize(line: &str) -> Vec<String> {
    match scan(line) {
        Some(fields) => fields,
        None => {
            log::debug!("malformed csv line degraded to a single empty field: {:?}", line);
            vec![String::new()]
        }
    }
}

fn scan(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();
    let mut after_separator = false;

    loop {
        skip_whitespace(&mut chars);

        let field = match chars.peek() {
            None => {
                // "a,b," carries an explicit empty trailing field; "" carries none
                if after_separator {
                    fields.push(String::new());
                }
                return Some(fields);
            }
            Some(&quote @ ('\'' | '"')) => {
                chars.next();
                let field = quoted(&mut chars, quote)?;
                skip_whitespace(&mut chars);
                field
            }
            Some(_) => bare(&mut chars)?,
        };
        fields.push(field);

        match chars.next() {
            None => return Some(fields),
            Some(',') => after_separator = true,
            Some(_) => return None,
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

/// Body of a quoted field, positioned just after the opening quote.
fn quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut field = String::new();
    loop {
        match chars.next()? {
            '\\' => {
                let escaped = chars.next()?;
                if escaped != quote {
                    field.push('\\');
                }
                field.push(escaped);
            }
            c if c == quote => return Some(field),
            c => field.push(c),
        }
    }
}

/// An unquoted field, stopping before the next comma.
fn bare(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut field = String::new();
    while let Some(&c) = chars.peek() {
        match c {
            ',' => break,
            '\'' | '"' | '\\' => return None,
            _ => {
                field.push(c);
                chars.next();
            }
        }
    }
    field.truncate(field.trim_end().len());
    Some(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_quoting() {
        assert_eq!(tokenize(r#"a,"b, c",'d\'e'"#), ["a", "b, c", "d'e"]);
    }

    #[test]
    fn test_trailing_empty_field() {
        assert_eq!(tokenize("x,y,"), ["x", "y", ""]);
        assert_eq!(tokenize("x,y,  "), ["x", "y", ""]);
    }

    #[test]
    fn test_empty_fields_between_separators() {
        assert_eq!(tokenize("a,,b"), ["a", "", "b"]);
        assert_eq!(tokenize(","), ["", ""]);
    }

    #[test]
    fn test_blank_line_has_no_fields() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_tasklist_row_with_carriage_return() {
        let line = "\"System Idle Process\",\"0\",\"Services\",\"0\",\"8 K\"\r";
        assert_eq!(
            tokenize(line),
            ["System Idle Process", "0", "Services", "0", "8 K"]
        );
    }

    #[test]
    fn test_whitespace_around_fields_is_dropped() {
        assert_eq!(tokenize("  a b  ,  \"c\"  "), ["a b", "c"]);
    }

    #[test]
    fn test_double_quote_escape() {
        assert_eq!(tokenize(r#""say \"hi\"""#), [r#"say "hi""#]);
    }

    #[test]
    fn test_other_escapes_are_kept() {
        assert_eq!(tokenize(r#""C:\\Windows\n""#), [r#"C:\\Windows\n"#]);
        assert_eq!(tokenize(r#"'it\"s'"#), [r#"it\"s"#]);
    }

    #[test]
    fn test_malformed_lines_degrade() {
        for line in [
            r#""unterminated"#,
            r#""a"b"#,
            r#"a"b"#,
            r#"back\slash"#,
            r#"'a' 'b'"#,
        ] {
            assert_eq!(tokenize(line), [""], "line: {}", line);
        }
    }
}
