use std::fmt;

use serde::{Deserialize, Serialize};

/// Main-sequence spectral class of a host star
///
/// Only the seven Harvard classes are modelled. Anything else resolves to
/// [`SpectralClass::G`], the solar class.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    #[default]
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes, hottest first
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Parse a spectral class from its first letter, case-insensitively
    ///
    /// Returns `None` for an empty string or an unrecognised letter.
    ///
    /// # Examples
    /// ```
    /// use physics::SpectralClass;
    ///
    /// assert_eq!(SpectralClass::parse("k2V"), Some(SpectralClass::K));
    /// assert_eq!(SpectralClass::parse("white dwarf"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        let first = label.trim().chars().next()?.to_ascii_uppercase();
        match first {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            _ => None,
        }
    }

    /// Resolve a spectral class label, falling back to G when unrecognised
    pub fn resolve(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            log::warn!("Unrecognised spectral class {label:?}, treating as G");
            Self::default()
        })
    }

    /// Ordinal feature code: O = 7 down to M = 1
    pub fn code(&self) -> u8 {
        match self {
            Self::O => 7,
            Self::B => 6,
            Self::A => 5,
            Self::F => 4,
            Self::G => 3,
            Self::K => 2,
            Self::M => 1,
        }
    }

    /// Inverse of [`SpectralClass::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.code() == code)
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}
