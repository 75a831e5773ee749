//! Node symbols: the closed set of characters a WaveDrom wave string is made of.
//!
//! Example wave: "p.....", "01.zx=", "4...z.3"
//!
//! Every time step of a signal is exactly one of these characters. Data symbols
//! (`=` and `2`..`9`) pick a fill color and consume one entry of the `data` array
//! when appended with a label.

use crate::Result;
use crate::diagnostics;

use anyhow::bail;
use std::fmt;

/// Fill color of a data-carrying step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataColor {
    Default,
    White,
    Yellow,
    Red,
    Blue,
    Cyan,
    Green,
    Purple,
    Gray,
}

impl DataColor {
    pub const ALL: [DataColor; 9] = [
        DataColor::Default,
        DataColor::White,
        DataColor::Yellow,
        DataColor::Red,
        DataColor::Blue,
        DataColor::Cyan,
        DataColor::Green,
        DataColor::Purple,
        DataColor::Gray,
    ];

    pub fn as_char(self) -> char {
        match self {
            DataColor::Default => '=',
            DataColor::White => '2',
            DataColor::Yellow => '3',
            DataColor::Red => '4',
            DataColor::Blue => '5',
            DataColor::Cyan => '6',
            DataColor::Green => '7',
            DataColor::Purple => '8',
            DataColor::Gray => '9',
        }
    }
}

impl TryFrom<char> for DataColor {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self> {
        match DataColor::ALL.into_iter().find(|d| d.as_char() == c) {
            Some(d) => Ok(d),
            None => bail!(
                "{}",
                diagnostics::error_message(format!("not a data symbol: {:?}", c))
            ),
        }
    }
}

impl fmt::Display for DataColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One time step of a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Low,
    High,
    HighZ,
    Unknown,
    /// Pull up.
    Rising,
    /// Pull down.
    Falling,
    /// Hold the previous value for one more step.
    Continue,
    PosClock,
    PosClockArrow,
    NegClock,
    NegClockArrow,
    HighEdge,
    HighEdgeArrow,
    LowEdge,
    LowEdgeArrow,
    Spacer,
    Data(DataColor),
}

impl Symbol {
    /// Every non-data symbol. Data symbols are covered by `DataColor::ALL`.
    pub const LEVELS: [Symbol; 16] = [
        Symbol::Low,
        Symbol::High,
        Symbol::HighZ,
        Symbol::Unknown,
        Symbol::Rising,
        Symbol::Falling,
        Symbol::Continue,
        Symbol::PosClock,
        Symbol::PosClockArrow,
        Symbol::NegClock,
        Symbol::NegClockArrow,
        Symbol::HighEdge,
        Symbol::HighEdgeArrow,
        Symbol::LowEdge,
        Symbol::LowEdgeArrow,
        Symbol::Spacer,
    ];

    pub fn as_char(self) -> char {
        match self {
            Symbol::Low => '0',
            Symbol::High => '1',
            Symbol::HighZ => 'z',
            Symbol::Unknown => 'x',
            Symbol::Rising => 'u',
            Symbol::Falling => 'd',
            Symbol::Continue => '.',
            Symbol::PosClock => 'p',
            Symbol::PosClockArrow => 'P',
            Symbol::NegClock => 'n',
            Symbol::NegClockArrow => 'N',
            Symbol::HighEdge => 'h',
            Symbol::HighEdgeArrow => 'H',
            Symbol::LowEdge => 'l',
            Symbol::LowEdgeArrow => 'L',
            Symbol::Spacer => '|',
            Symbol::Data(color) => color.as_char(),
        }
    }

    pub fn is_data(self) -> bool {
        matches!(self, Symbol::Data(_))
    }
}

impl From<DataColor> for Symbol {
    fn from(color: DataColor) -> Self {
        Symbol::Data(color)
    }
}

impl TryFrom<char> for Symbol {
    type Error = anyhow::Error;

    fn try_from(c: char) -> Result<Self> {
        if let Some(s) = Symbol::LEVELS.into_iter().find(|s| s.as_char() == c) {
            return Ok(s);
        }
        match DataColor::try_from(c) {
            Ok(color) => Ok(Symbol::Data(color)),
            Err(_) => bail!(
                "{}",
                diagnostics::error_message(format!("not a wave symbol: {:?}", c))
            ),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_symbol_char_converts_back() {
        let all = Symbol::LEVELS
            .into_iter()
            .chain(DataColor::ALL.into_iter().map(Symbol::Data));
        for s in all {
            assert_eq!(Symbol::try_from(s.as_char()).unwrap(), s);
        }
    }

    #[test]
    fn symbol_chars_are_distinct() {
        let mut chars: Vec<char> = Symbol::LEVELS.iter().map(|s| s.as_char()).collect();
        chars.extend(DataColor::ALL.iter().map(|d| d.as_char()));
        let total = chars.len();
        chars.sort();
        chars.dedup();
        assert_eq!(chars.len(), total);
    }

    #[test]
    fn data_codes_match_wavedrom_colors() {
        assert_eq!(DataColor::Red.as_char(), '4');
        assert_eq!(DataColor::Yellow.as_char(), '3');
        assert_eq!(Symbol::Data(DataColor::White).to_string(), "2");
        assert!(Symbol::from(DataColor::Default).is_data());
        assert!(!Symbol::Continue.is_data());
    }

    #[test]
    fn rejects_characters_outside_the_enumeration() {
        for c in ['a', ' ', '{', 'X', 'é', '/'] {
            let err = Symbol::try_from(c).unwrap_err();
            assert!(err.to_string().contains("not a wave symbol"), "{}", err);
        }
        assert!(DataColor::try_from('1').is_err());
        assert!(DataColor::try_from('x').is_err());
    }
}
