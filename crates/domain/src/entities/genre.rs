//! Genre tags a movie can carry.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DomainError;

/// Fixed genre vocabulary.
///
/// Request bodies must spell tags exactly as listed; listing filters compare
/// case-insensitively (see [`Genre::matches_tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Self::Action,
        Self::Adventure,
        Self::Comedy,
        Self::Crime,
        Self::Drama,
        Self::Fantasy,
        Self::Horror,
        Self::Thriller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Comedy => "Comedy",
            Self::Crime => "Crime",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Thriller => "Thriller",
        }
    }

    /// Case-insensitive whole-tag comparison used by the listing filter.
    pub fn matches_tag(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }

    /// `'Action' | 'Adventure' | ...`, as shown in enum validation messages.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|genre| format!("'{}'", genre.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown genre: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_is_exact() {
        assert_eq!("Drama".parse::<Genre>().unwrap(), Genre::Drama);
        assert!("drama".parse::<Genre>().is_err());
        assert!("Romance".parse::<Genre>().is_err());
    }

    #[test]
    fn matches_tag_ignores_case_but_not_substrings() {
        assert!(Genre::Action.matches_tag("action"));
        assert!(Genre::Action.matches_tag("ACTION"));
        assert!(!Genre::Action.matches_tag("act"));
    }

    #[test]
    fn expected_list_names_every_genre() {
        let list = Genre::expected_list();
        assert!(list.starts_with("'Action' | 'Adventure'"));
        assert!(list.ends_with("'Thriller'"));
    }
}
