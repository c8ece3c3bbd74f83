use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Normalized identity of the organization that published an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceSlug {
    Teatro,
    Gretua,
    AveiroOn,
    Avenida,
    Vic,
    Test,
    Default,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown source slug: {0}")]
pub struct UnknownSlug(pub String);

/// Name fragments checked in order; the first hit wins.
const SOURCE_FRAGMENTS: [(&str, SourceSlug); 7] = [
    ("teatro", SourceSlug::Teatro),
    ("gretua", SourceSlug::Gretua),
    ("aveiroon", SourceSlug::AveiroOn),
    ("aveiro on", SourceSlug::AveiroOn),
    ("avenida", SourceSlug::Avenida),
    ("vic", SourceSlug::Vic),
    ("test", SourceSlug::Test),
];

/// Maps a free-text source name to its slug. Total over every input.
pub fn normalize_source(source: &str) -> SourceSlug {
    let lowered = source.to_lowercase();
    SOURCE_FRAGMENTS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map(|(_, slug)| *slug)
        .unwrap_or(SourceSlug::Default)
}

impl SourceSlug {
    pub const ALL: [SourceSlug; 7] = [
        SourceSlug::Teatro,
        SourceSlug::Gretua,
        SourceSlug::AveiroOn,
        SourceSlug::Avenida,
        SourceSlug::Vic,
        SourceSlug::Test,
        SourceSlug::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceSlug::Teatro => "teatro",
            SourceSlug::Gretua => "gretua",
            SourceSlug::AveiroOn => "aveiroon",
            SourceSlug::Avenida => "avenida",
            SourceSlug::Vic => "vic",
            SourceSlug::Test => "test",
            SourceSlug::Default => "default",
        }
    }

    pub fn hex_color(&self) -> &'static str {
        match self {
            SourceSlug::Teatro => "#e74c3c",
            SourceSlug::Gretua => "#3498db",
            SourceSlug::AveiroOn => "#16a085",
            SourceSlug::Avenida => "#f39c12",
            SourceSlug::Vic => "#9b59b6",
            SourceSlug::Test => "#27ae60",
            SourceSlug::Default => "#95a5a6",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.hex_color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for SourceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceSlug {
    type Err = UnknownSlug;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SourceSlug::ALL
            .into_iter()
            .find(|slug| slug.as_str() == wanted)
            .ok_or_else(|| UnknownSlug(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn teatro_aveirense_maps_to_teatro() {
        assert_eq!(normalize_source("Teatro Aveirense"), SourceSlug::Teatro);
    }

    #[test]
    fn empty_source_maps_to_default() {
        assert_eq!(normalize_source(""), SourceSlug::Default);
    }

    #[test]
    fn known_organizations_map_to_their_slug() {
        assert_eq!(normalize_source("GrETUA"), SourceSlug::Gretua);
        assert_eq!(normalize_source("AveiroOn"), SourceSlug::AveiroOn);
        assert_eq!(normalize_source("Aveiro On Agenda"), SourceSlug::AveiroOn);
        assert_eq!(normalize_source("Avenida Café"), SourceSlug::Avenida);
        assert_eq!(normalize_source("VIC Aveiro"), SourceSlug::Vic);
        assert_eq!(normalize_source("Test Source"), SourceSlug::Test);
    }

    #[test]
    fn unknown_organization_maps_to_default() {
        assert_eq!(normalize_source("Casa da Música"), SourceSlug::Default);
    }

    #[test]
    fn earlier_fragment_wins_when_several_match() {
        assert_eq!(normalize_source("Teatro no GrETUA"), SourceSlug::Teatro);
    }

    #[test]
    fn slug_parses_back_from_its_name() {
        for slug in SourceSlug::ALL {
            assert_eq!(slug.as_str().parse::<SourceSlug>(), Ok(slug));
        }
        assert_eq!("TEATRO".parse::<SourceSlug>(), Ok(SourceSlug::Teatro));
        assert!("cinema".parse::<SourceSlug>().is_err());
    }

    #[test]
    fn hex_color_converts_to_rgb() {
        assert_eq!(SourceSlug::Teatro.rgb(), (0xe7, 0x4c, 0x3c));
        assert_eq!(SourceSlug::Default.rgb(), (0x95, 0xa5, 0xa6));
    }

    proptest! {
        #[test]
        fn normalization_ignores_case(source in "[a-zA-Z0-9 çãõáéíóúÇÃÕÁÉÍÓÚ-]{0,40}") {
            prop_assert_eq!(
                normalize_source(&source.to_uppercase()),
                normalize_source(&source.to_lowercase())
            );
        }

        #[test]
        fn normalization_always_yields_a_known_slug(source in any::<String>()) {
            prop_assert!(SourceSlug::ALL.contains(&normalize_source(&source)));
        }
    }
}
