use serde::{Deserialize, Serialize};
use std::fmt;

/// Harmonized System classification code as supplied by the caller.
///
/// Only presence is enforced; the directory sources accept partial codes
/// ("09"), full headings ("0904") and anything longer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HsCode(String);

impl HsCode {
    pub fn new(code: impl Into<String>) -> Result<Self, HsCodeError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(HsCodeError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first two characters, or the whole code when it is shorter.
    pub fn chapter(&self) -> &str {
        chapter_of(&self.0)
    }

    pub fn category(&self) -> ProductCategory {
        ProductCategory::classify(&self.0)
    }
}

impl fmt::Display for HsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HsCode {
    type Error = HsCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HsCode::new(value)
    }
}

impl From<HsCode> for String {
    fn from(code: HsCode) -> Self {
        code.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HsCodeError {
    #[error("HS code cannot be empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Spices,
    Textiles,
    Electronics,
    Pharmaceuticals,
    Agriculture,
    General,
}

impl ProductCategory {
    /// Buckets a code by its two-character chapter prefix.
    ///
    /// Boundaries are compared as strings, not numbers, so a one-character
    /// code such as "6" lands inside "50"..="63".
    pub fn classify(code: &str) -> Self {
        let chapter = chapter_of(code);

        if chapter == "09" {
            ProductCategory::Spices
        } else if ("50"..="63").contains(&chapter) {
            ProductCategory::Textiles
        } else if ("84"..="85").contains(&chapter) {
            ProductCategory::Electronics
        } else if ("29"..="30").contains(&chapter) {
            ProductCategory::Pharmaceuticals
        } else if ("10"..="24").contains(&chapter) {
            ProductCategory::Agriculture
        } else {
            ProductCategory::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Spices => "spices",
            ProductCategory::Textiles => "textiles",
            ProductCategory::Electronics => "electronics",
            ProductCategory::Pharmaceuticals => "pharmaceuticals",
            ProductCategory::Agriculture => "agriculture",
            ProductCategory::General => "general",
        }
    }

    /// Stable two-digit number used when minting synthetic registration ids.
    pub fn code(&self) -> u8 {
        match self {
            ProductCategory::Spices => 1,
            ProductCategory::Textiles => 2,
            ProductCategory::Electronics => 3,
            ProductCategory::Pharmaceuticals => 4,
            ProductCategory::Agriculture => 5,
            ProductCategory::General => 6,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn chapter_of(code: &str) -> &str {
    match code.char_indices().nth(2) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(ProductCategory::classify("0904"), ProductCategory::Spices);
        assert_eq!(ProductCategory::classify("6109"), ProductCategory::Textiles);
        assert_eq!(ProductCategory::classify("8501"), ProductCategory::Electronics);
    }

    #[test]
    fn test_boundary_prefixes() {
        let cases = [
            ("08", ProductCategory::General),
            ("09", ProductCategory::Spices),
            ("10", ProductCategory::Agriculture),
            ("24", ProductCategory::Agriculture),
            ("25", ProductCategory::General),
            ("28", ProductCategory::General),
            ("29", ProductCategory::Pharmaceuticals),
            ("30", ProductCategory::Pharmaceuticals),
            ("31", ProductCategory::General),
            ("49", ProductCategory::General),
            ("50", ProductCategory::Textiles),
            ("63", ProductCategory::Textiles),
            ("64", ProductCategory::General),
            ("83", ProductCategory::General),
            ("84", ProductCategory::Electronics),
            ("85", ProductCategory::Electronics),
            ("86", ProductCategory::General),
        ];

        for (prefix, expected) in cases {
            assert_eq!(ProductCategory::classify(prefix), expected, "prefix {prefix}");
        }
    }

    #[test]
    fn test_only_prefix_matters() {
        for code in ["0901", "0904", "09", "0999999", "09AB"] {
            assert_eq!(ProductCategory::classify(code), ProductCategory::Spices);
        }
        for code in ["8471", "8517", "85", "8542310000"] {
            assert_eq!(ProductCategory::classify(code), ProductCategory::Electronics);
        }
    }

    #[test]
    fn test_short_codes_use_string_ordering() {
        assert_eq!(ProductCategory::classify("9"), ProductCategory::General);
        assert_eq!(ProductCategory::classify("6"), ProductCategory::Textiles);
        assert_eq!(ProductCategory::classify("2"), ProductCategory::Agriculture);
        assert_eq!(ProductCategory::classify("1"), ProductCategory::General);
        assert_eq!(ProductCategory::classify(""), ProductCategory::General);
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        assert_eq!(ProductCategory::classify("é9"), ProductCategory::General);
    }

    #[test]
    fn test_hs_code_rejects_blank() {
        assert_eq!(HsCode::new(""), Err(HsCodeError::Empty));
        assert_eq!(HsCode::new("   "), Err(HsCodeError::Empty));
    }

    #[test]
    fn test_hs_code_is_trimmed() {
        let code = HsCode::new(" 0904 ").unwrap();
        assert_eq!(code.as_str(), "0904");
        assert_eq!(code.chapter(), "09");
        assert_eq!(code.category(), ProductCategory::Spices);
    }

    #[test]
    fn test_hs_code_serde_validates() {
        let code: HsCode = serde_json::from_str("\"6109\"").unwrap();
        assert_eq!(code.as_str(), "6109");
        assert!(serde_json::from_str::<HsCode>("\"\"").is_err());
    }
}
