//! Book genres and their persisted ordinal codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Genre of a book.
///
/// Genres are persisted as integer ordinals. Codes outside the known range
/// decode to [`Genre::Unknown`], which keeps the raw code so it is written
/// back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Code 0.
    Fiction,
    /// Code 1.
    NonFiction,
    /// Code 2.
    Periodical,
    /// Code 3.
    Biography,
    /// Code 4.
    Children,
    /// Any other code.
    Unknown(i32),
}

impl Genre {
    /// All known genres in ordinal order.
    pub const KNOWN: [Genre; 5] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Periodical,
        Genre::Biography,
        Genre::Children,
    ];

    /// Decodes a persisted ordinal.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Genre::Fiction,
            1 => Genre::NonFiction,
            2 => Genre::Periodical,
            3 => Genre::Biography,
            4 => Genre::Children,
            other => Genre::Unknown(other),
        }
    }

    /// Returns the persisted ordinal.
    pub fn code(&self) -> i32 {
        match self {
            Genre::Fiction => 0,
            Genre::NonFiction => 1,
            Genre::Periodical => 2,
            Genre::Biography => 3,
            Genre::Children => 4,
            Genre::Unknown(code) => *code,
        }
    }

    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::Periodical => "Periodical",
            Genre::Biography => "Biography",
            Genre::Children => "Children",
            Genre::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i32> for Genre {
    fn from(code: i32) -> Self {
        Genre::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_match_ordinals() {
        for (index, genre) in Genre::KNOWN.iter().enumerate() {
            assert_eq!(genre.code(), index as i32);
            assert_eq!(Genre::from_code(index as i32), *genre);
        }
    }

    #[test]
    fn test_out_of_range_code_is_unknown() {
        assert_eq!(Genre::from_code(7), Genre::Unknown(7));
        assert_eq!(Genre::from_code(-1), Genre::Unknown(-1));
        assert_eq!(Genre::Unknown(7).code(), 7);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Genre::NonFiction.to_string(), "Non-Fiction");
        assert_eq!(Genre::Children.to_string(), "Children");
        assert_eq!(Genre::Unknown(12).to_string(), "Unknown");
    }
}
