//! Media kind enum.

use super::ParseError;

/// What the input most likely names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// An episode of a series
    Episode,
    /// A movie
    Movie,
    /// Not enough evidence either way
    #[default]
    Unknown,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Episode => write!(f, "episode"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "episode" | "tv" | "series" => Ok(MediaKind::Episode),
            "movie" | "film" => Ok(MediaKind::Movie),
            "unknown" => Ok(MediaKind::Unknown),
            _ => Err(ParseError(format!("invalid media kind: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_display_fromstr_roundtrip() {
        for variant in [MediaKind::Episode, MediaKind::Movie, MediaKind::Unknown] {
            let s = variant.to_string();
            let parsed: MediaKind = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
        assert!("cartoon".parse::<MediaKind>().is_err());
    }

    #[test]
    fn media_kind_default() {
        assert_eq!(MediaKind::default(), MediaKind::Unknown);
    }
}
