use super::value::{Object, Value};

/// A structural violation in a text-format document.
///
/// The offset counts code points from the start of the input, pointing at
/// (or just past) the character where the violation was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at {offset}")]
pub struct ParseError {
    pub message: &'static str,
    pub offset: usize,
}

/// Parse one complete value from `input`.
///
/// Strict: trailing content, trailing commas, unterminated containers, and
/// malformed escapes or numbers all fail. Empty or whitespace-only input
/// fails because the document must contain exactly one value.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
    };
    parser.skip_whitespace();
    let value = parser.read_value()?;
    parser.skip_whitespace();
    if parser.pos != parser.chars.len() {
        return Err(parser.err("Trailing content"));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn err(&self, message: &'static str) -> ParseError {
        ParseError {
            message,
            offset: self.pos,
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .chars
            .get(self.pos)
            .is_some_and(|c| c.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn matches_literal(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, c)| self.chars.get(self.pos + i) == Some(&c))
    }

    fn read_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        let c = self.peek().ok_or_else(|| self.err("Unexpected end"))?;
        match c {
            '"' => Ok(Value::Str(self.read_string()?)),
            '{' => self.read_object(),
            '[' => self.read_array(),
            _ => {
                if self.matches_literal("true") {
                    self.pos += 4;
                    Ok(Value::Bool(true))
                } else if self.matches_literal("false") {
                    self.pos += 5;
                    Ok(Value::Bool(false))
                } else if self.matches_literal("null") {
                    self.pos += 4;
                    Ok(Value::Null)
                } else {
                    self.read_number()
                }
            }
        }
    }

    fn read_string(&mut self) -> Result<String, ParseError> {
        if self.peek() != Some('"') {
            return Err(self.err("Expected string"));
        }
        self.pos += 1;
        let mut out = String::new();
        while let Some(c) = self.peek() {
            self.pos += 1;
            if c == '"' {
                return Ok(out);
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            let escape = self.peek().ok_or_else(|| self.err("Bad escape"))?;
            self.pos += 1;
            match escape {
                '"' => out.push('"'),
                '\\' => out.push('\\'),
                '/' => out.push('/'),
                'b' => out.push('\u{0008}'),
                'f' => out.push('\u{000c}'),
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                'u' => {
                    if self.pos + 4 > self.chars.len() {
                        return Err(self.err("Bad unicode"));
                    }
                    let hex: String = self.chars[self.pos..self.pos + 4].iter().collect();
                    let unit = u32::from_str_radix(&hex, 16)
                        .map_err(|_| self.err("Bad unicode"))?;
                    // One UTF-16 code unit per escape; a lone surrogate has
                    // no char representation, so it degrades to U+FFFD.
                    out.push(char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER));
                    self.pos += 4;
                }
                _ => return Err(self.err("Bad escape")),
            }
        }
        Err(self.err("Unterminated string"))
    }

    fn read_object(&mut self) -> Result<Value, ParseError> {
        if self.peek() != Some('{') {
            return Err(self.err("Expected {"));
        }
        self.pos += 1;
        let mut obj = Object::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.pos += 1;
            return Ok(Value::Object(obj));
        }
        loop {
            self.skip_whitespace();
            let key = self.read_string()?;
            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(self.err("Expected :"));
            }
            self.pos += 1;
            let value = self.read_value()?;
            obj.insert(key, value);
            self.skip_whitespace();
            let c = self.peek().ok_or_else(|| self.err("Unterminated object"))?;
            self.pos += 1;
            if c == '}' {
                break;
            }
            if c != ',' {
                return Err(self.err("Expected ,"));
            }
        }
        Ok(Value::Object(obj))
    }

    fn read_array(&mut self) -> Result<Value, ParseError> {
        if self.peek() != Some('[') {
            return Err(self.err("Expected ["));
        }
        self.pos += 1;
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.read_value()?);
            self.skip_whitespace();
            let c = self.peek().ok_or_else(|| self.err("Unterminated array"))?;
            self.pos += 1;
            if c == ']' {
                break;
            }
            if c != ',' {
                return Err(self.err("Expected ,"));
            }
        }
        Ok(Value::Array(items))
    }

    fn read_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.pos += 1;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.peek() == Some('.') {
            self.pos += 1;
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some('e') | Some('E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+') | Some('-')) {
                self.pos += 1;
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let token: String = self.chars[start..self.pos].iter().collect();
        if token.contains(['.', 'e', 'E']) {
            token
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| self.err("Bad number"))
        } else {
            token
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.err("Bad number"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_object() {
        let value = parse("{\"a\":1,\"b\":[true,false,null]}").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("a"), Some(&Value::Int(1)));
        assert_eq!(
            obj.get("b"),
            Some(&Value::Array(vec![
                Value::Bool(true),
                Value::Bool(false),
                Value::Null,
            ]))
        );
    }

    #[test]
    fn trailing_comma_fails() {
        let err = parse("{\"a\":1,}").unwrap_err();
        assert_eq!(err.message, "Expected string");
    }

    #[test]
    fn trailing_content_fails() {
        let err = parse("{} x").unwrap_err();
        assert_eq!(err.message, "Trailing content");
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(parse("").unwrap_err().message, "Unexpected end");
        assert_eq!(parse("   \n\t").unwrap_err().message, "Unexpected end");
    }

    #[test]
    fn unterminated_string_fails() {
        assert_eq!(parse("\"abc").unwrap_err().message, "Unterminated string");
    }

    #[test]
    fn unterminated_containers_fail() {
        assert_eq!(parse("[1,2").unwrap_err().message, "Unterminated array");
        assert_eq!(
            parse("{\"a\":1").unwrap_err().message,
            "Unterminated object"
        );
    }

    #[test]
    fn missing_colon_fails() {
        assert_eq!(parse("{\"a\" 1}").unwrap_err().message, "Expected :");
    }

    #[test]
    fn escapes_decode() {
        let value = parse(r#""a\"b\\c\/d\ne\tfA""#).unwrap();
        assert_eq!(value, Value::from("a\"b\\c/d\ne\tfA"));
    }

    #[test]
    fn unicode_escape_decodes_one_code_unit() {
        assert_eq!(parse(r#""\u0041\u00e9""#).unwrap(), Value::from("Aé"));
        // A lone surrogate half cannot live in a Rust string.
        assert_eq!(parse(r#""\ud800""#).unwrap(), Value::from("\u{fffd}"));
    }

    #[test]
    fn bad_escape_fails() {
        assert_eq!(parse(r#""\q""#).unwrap_err().message, "Bad escape");
        assert_eq!(parse(r#""\u00g0""#).unwrap_err().message, "Bad unicode");
        assert_eq!(parse(r#""\u00"#).unwrap_err().message, "Bad unicode");
    }

    #[test]
    fn numbers_disambiguate() {
        assert_eq!(parse("-42").unwrap(), Value::Int(-42));
        assert_eq!(parse("3.5").unwrap(), Value::Float(3.5));
        assert_eq!(parse("1e2").unwrap(), Value::Float(100.0));
        assert_eq!(parse("2E-1").unwrap(), Value::Float(0.2));
        assert_eq!(
            parse("9223372036854775807").unwrap(),
            Value::Int(i64::MAX)
        );
    }

    #[test]
    fn bad_number_fails() {
        assert_eq!(parse("-").unwrap_err().message, "Bad number");
        assert_eq!(parse("foo").unwrap_err().message, "Bad number");
    }

    #[test]
    fn whitespace_between_tokens_is_skipped() {
        let value = parse(" { \"a\" : [ 1 , 2 ] } ").unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(
            obj.get("a"),
            Some(&Value::Array(vec![Value::Int(1), Value::Int(2)]))
        );
    }
}
