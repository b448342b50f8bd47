use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// All the bases, in the order they are processed by the matcher.
    pub const ALL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    pub fn to_byte(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }
}

impl TryFrom<u8> for Base {
    type Error = InvalidBase;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            b'A' => Self::A,
            b'C' => Self::C,
            b'G' => Self::G,
            b'T' => Self::T,
            _ => return Err(InvalidBase(value)),
        })
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.to_byte().into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid base {:?}", char::from(*.0))]
pub struct InvalidBase(pub u8);

/// Parses a string of bases, returning the index of the first invalid byte on failure.
pub fn parse_bases(s: &str) -> Result<Vec<Base>, (usize, InvalidBase)> {
    s.bytes()
        .enumerate()
        .map(|(index, byte)| Base::try_from(byte).map_err(|err| (index, err)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_conversion() {
        for base in Base::ALL {
            assert_eq!(Base::try_from(base.to_byte()), Ok(base));
        }
        assert_eq!(Base::try_from(b'N'), Err(InvalidBase(b'N')));
        assert_eq!(Base::try_from(b'a'), Err(InvalidBase(b'a')));
        assert_eq!(InvalidBase(b'N').to_string(), "invalid base 'N'");
    }

    #[test]
    fn display() {
        let s: String = Base::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(s, "ACGT");
    }

    #[test]
    fn parse_reports_first_invalid_index() {
        assert_eq!(
            parse_bases("GATTACA").unwrap(),
            [Base::G, Base::A, Base::T, Base::T, Base::A, Base::C, Base::A]
        );
        assert_eq!(parse_bases("ACXGZ"), Err((2, InvalidBase(b'X'))));
        assert!(parse_bases("").unwrap().is_empty());
    }
}
