// Mon Oct 19 2026 - Alex

pub struct StringUtils;

impl StringUtils {
    pub fn strip_hex_prefix(s: &str) -> &str {
        s.strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s)
    }

    pub fn is_hex_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parses one to eight hex digits, with or without a `0x` prefix.
    pub fn parse_hex_u32(s: &str) -> Option<u32> {
        let digits = Self::strip_hex_prefix(s.trim());
        if !Self::is_hex_digits(digits) || digits.len() > 8 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u32() {
        assert_eq!(StringUtils::parse_hex_u32("FF"), Some(0xFF));
        assert_eq!(StringUtils::parse_hex_u32("0xff"), Some(0xFF));
        assert_eq!(StringUtils::parse_hex_u32(" 80479d60 "), Some(0x8047_9D60));
        assert_eq!(StringUtils::parse_hex_u32("+1"), None);
        assert_eq!(StringUtils::parse_hex_u32("100000000"), None);
        assert_eq!(StringUtils::parse_hex_u32(""), None);
    }
}
