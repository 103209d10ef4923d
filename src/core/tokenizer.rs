//! Right-to-left scanning of field expressions.
//!
//! Positions are byte indices into the expression. `None` stands for "before
//! the first character", i.e. the scan ran off the start of the input.

/// Structural characters of a field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Step,
    Wildcard,
    Hyphen,
    Comma,
}

impl Delimiter {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'/' => Some(Delimiter::Step),
            b'*' => Some(Delimiter::Wildcard),
            b'-' => Some(Delimiter::Hyphen),
            b',' => Some(Delimiter::Comma),
            _ => None,
        }
    }

    /// Delimiter at `pos`, if any.
    pub fn at(expression: &str, pos: Option<usize>) -> Option<Self> {
        pos.and_then(|i| expression.as_bytes().get(i).copied())
            .and_then(Self::from_byte)
    }
}

/// Reads the token ending at `pos`, scanning leftwards until a delimiter or the
/// start of the input.
///
/// Returns the token in reading order (empty when `pos` already sits on a
/// delimiter) and the position of the delimiter that stopped the scan.
pub fn next_value(expression: &str, pos: Option<usize>) -> (&str, Option<usize>) {
    let end = match pos {
        Some(end) if end < expression.len() => end,
        _ => return ("", None),
    };

    let bytes = expression.as_bytes();
    let mut cursor = Some(end);
    while let Some(i) = cursor {
        if Delimiter::from_byte(bytes[i]).is_some() {
            break;
        }
        cursor = i.checked_sub(1);
    }

    // 分隔符都是 ASCII，起點一定落在字元邊界上；終點要補到字元結尾
    let start = cursor.map_or(0, |i| i + 1);
    let mut stop = end + 1;
    while !expression.is_char_boundary(stop) {
        stop += 1;
    }
    (&expression[start..stop], cursor)
}

/// Start of the character immediately left of `pos`.
pub fn step_left(expression: &str, pos: Option<usize>) -> Option<usize> {
    pos.and_then(|i| (0..i).rev().find(|&j| expression.is_char_boundary(j)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rightmost_token() {
        let expr = "1,2,22";
        assert_eq!(next_value(expr, Some(5)), ("22", Some(3)));
    }

    #[test]
    fn test_reaching_start_of_input() {
        assert_eq!(next_value("jan", Some(2)), ("jan", None));
        assert_eq!(next_value("", None), ("", None));
    }

    #[test]
    fn test_empty_token_on_delimiter() {
        // "*/15": 從 '*' 開始掃描時沒有字元可讀
        assert_eq!(next_value("*/15", Some(0)), ("", Some(0)));
        assert_eq!(next_value("4-9/2", Some(3)), ("", Some(3)));
    }

    #[test]
    fn test_token_in_the_middle() {
        let expr = "10-25/5";
        assert_eq!(next_value(expr, Some(4)), ("25", Some(2)));
        assert_eq!(next_value(expr, Some(1)), ("10", None));
    }

    #[test]
    fn test_non_ascii_token_is_kept_whole() {
        assert_eq!(next_value("1,mär", Some(5)), ("mär", Some(1)));
    }

    #[test]
    fn test_delimiter_lookup() {
        assert_eq!(Delimiter::at("4-9/2", Some(3)), Some(Delimiter::Step));
        assert_eq!(Delimiter::at("4-9/2", Some(1)), Some(Delimiter::Hyphen));
        assert_eq!(Delimiter::at("4-9/2", Some(0)), None);
        assert_eq!(Delimiter::at("4-9/2", None), None);
        assert_eq!(step_left("4-9/2", Some(0)), None);
        assert_eq!(step_left("4-9/2", Some(3)), Some(2));
        assert_eq!(step_left("é*/2", None), None);
    }

    #[test]
    fn test_step_left_skips_whole_characters() {
        // 'é' 佔兩個位元組 (0..2)
        assert_eq!(step_left("é*/2", Some(2)), Some(0));
        assert_eq!(step_left("aé*", Some(3)), Some(1));
    }

    #[test]
    fn test_token_ending_on_multibyte_character() {
        assert_eq!(next_value("1,é-5", Some(2)), ("é", Some(1)));
        assert_eq!(next_value("é", Some(0)), ("é", None));
    }
}
