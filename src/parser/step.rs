#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    String(String),
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Enum(String),
    Reference(u64),
    List(Vec<StepValue>),
    Null,
    Derived,
}

impl StepValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StepValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Strings of a list value, skipping anything else.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        match self {
            StepValue::List(list) => list
                .iter()
                .filter_map(StepValue::as_str)
                .map(str::to_string)
                .collect(),
            StepValue::String(s) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

/// A keyword record such as `FILE_SCHEMA(('IFC4'))`.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub keyword: String,
    pub values: Vec<StepValue>,
}

/// Splits STEP text into `;`-terminated statements.
///
/// Quoted strings and `/* */` comments are respected. A trailing statement
/// without its terminator is dropped, so truncated input is safe to feed.
pub fn split_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                in_string = !in_string;
                current.push(ch);
            }
            '/' if !in_string && chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            ';' if !in_string => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
            }
            '\r' | '\n' if !in_string => current.push(' '),
            _ => current.push(ch),
        }
    }

    statements
}

/// Parses `KEYWORD(arg, ...)`; bare keywords like `ENDSEC` get no values.
pub fn parse_record(statement: &str) -> Option<StepRecord> {
    let statement = statement.trim();
    let Some(paren_pos) = statement.find('(') else {
        if statement.is_empty() {
            return None;
        }
        return Some(StepRecord {
            keyword: statement.to_ascii_uppercase(),
            values: Vec::new(),
        });
    };

    if !statement.ends_with(')') {
        return None;
    }

    let keyword = statement[..paren_pos].trim().to_ascii_uppercase();
    let values = parse_values(&statement[paren_pos + 1..statement.len() - 1]);

    Some(StepRecord { keyword, values })
}

fn parse_values(s: &str) -> Vec<StepValue> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_string = false;
    let mut paren_depth = 0;

    for ch in s.chars() {
        match ch {
            '\'' => {
                in_string = !in_string;
                current.push(ch);
            }
            '(' if !in_string => {
                paren_depth += 1;
                current.push(ch);
            }
            ')' if !in_string => {
                paren_depth -= 1;
                current.push(ch);
            }
            ',' if !in_string && paren_depth == 0 => {
                values.push(parse_single_value(current.trim()));
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.trim().is_empty() {
        values.push(parse_single_value(current.trim()));
    }

    values
}

fn parse_single_value(s: &str) -> StepValue {
    let s = s.trim();

    if s == "$" {
        return StepValue::Null;
    }
    if s == "*" {
        return StepValue::Derived;
    }
    if let Some(stripped) = s.strip_prefix('#') {
        if let Ok(id) = stripped.parse::<u64>() {
            return StepValue::Reference(id);
        }
    }
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        return StepValue::String(decode_step_string(&s[1..s.len() - 1]));
    }
    if s.len() >= 2 && s.starts_with('.') && s.ends_with('.') {
        return match &s[1..s.len() - 1] {
            "T" => StepValue::Boolean(true),
            "F" => StepValue::Boolean(false),
            inner => StepValue::Enum(inner.to_string()),
        };
    }
    if s.starts_with('(') && s.ends_with(')') {
        return StepValue::List(parse_values(&s[1..s.len() - 1]));
    }
    if let Ok(i) = s.parse::<i64>() {
        return StepValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return StepValue::Real(f);
    }
    // Typed value like IFCLABEL('x')
    if let Some(paren_pos) = s.find('(') {
        if s.ends_with(')') {
            return parse_single_value(&s[paren_pos + 1..s.len() - 1]);
        }
    }

    StepValue::String(s.to_string())
}

/// Decode STEP/IFC encoded strings with Unicode escape sequences.
/// Supports:
/// - `\X2\XXXX\X0\` - 2-byte Unicode (BMP), can have multiple 4-char hex codes
/// - `\X\XX` - 1-byte ISO 8859-1
/// - `\S\c` - ISO 8859-1 high half
/// - `\\` - escaped backslash
/// - `''` - escaped apostrophe
pub fn decode_step_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('X') => {
                    chars.next();
                    match chars.peek() {
                        Some('2') => {
                            chars.next(); // '2'
                            chars.next(); // '\'

                            let mut hex = String::new();
                            while let Some(&c) = chars.peek() {
                                if c == '\\' {
                                    break;
                                }
                                hex.push(c);
                                chars.next();
                            }
                            // \X0\
                            for _ in 0..4 {
                                chars.next();
                            }
                            for chunk in hex.as_bytes().chunks(4) {
                                let code = std::str::from_utf8(chunk)
                                    .ok()
                                    .filter(|_| chunk.len() == 4)
                                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                                    .and_then(char::from_u32);
                                if let Some(c) = code {
                                    result.push(c);
                                }
                            }
                        }
                        Some('\\') => {
                            chars.next();
                            let hex: String = chars.by_ref().take(2).collect();
                            if let Ok(code) = u8::from_str_radix(&hex, 16) {
                                result.push(char::from(code));
                            }
                        }
                        _ => result.push_str("\\X"),
                    }
                }
                Some('\\') => {
                    chars.next();
                    result.push('\\');
                }
                Some('S') => {
                    chars.next(); // 'S'
                    chars.next(); // '\'
                    if let Some(c) = chars.next() {
                        if let Some(shifted) = u32::from(c)
                            .checked_add(128)
                            .filter(|_| c.is_ascii())
                            .and_then(char::from_u32)
                        {
                            result.push(shifted);
                        }
                    }
                }
                _ => result.push('\\'),
            }
        } else if ch == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
            }
            result.push('\'');
        } else {
            result.push(ch);
        }
    }

    result
}
