use crate::constants::MAX_EXPANSION_PASSES;
use log::{trace, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static NOBLE_GAS_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]").expect("noble gas reference pattern is valid"));

static SUBSHELL_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)([spdf])([0-9]+)$").expect("subshell term pattern is valid")
});

/// Symbols that may appear in bracketed shorthand, lightest first.
pub const NOBLE_GASES: [&str; 6] = ["He", "Ne", "Ar", "Kr", "Xe", "Rn"];

/// Full configuration of a noble-gas core, or `None` for any other symbol.
pub fn noble_gas_core(symbol: &str) -> Option<&'static str> {
    match symbol {
        "He" => Some("1s2"),
        "Ne" => Some("1s2 2s2 2p6"),
        "Ar" => Some("1s2 2s2 2p6 3s2 3p6"),
        "Kr" => Some("1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6"),
        "Xe" => Some("1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 5s2 5p6"),
        "Rn" => Some("1s2 2s2 2p6 3s2 3p6 3d10 4s2 4p6 4d10 5s2 5p6 4f14 5d10 6s2 6p6"),
        _ => None,
    }
}

/// Orbital shape of a subshell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubshellType {
    S,
    P,
    D,
    F,
}

impl SubshellType {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            's' => Some(Self::S),
            'p' => Some(Self::P),
            'd' => Some(Self::D),
            'f' => Some(Self::F),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
        }
    }

    /// Azimuthal quantum number l.
    pub fn azimuthal(self) -> u8 {
        match self {
            Self::S => 0,
            Self::P => 1,
            Self::D => 2,
            Self::F => 3,
        }
    }

    /// Number of visual rings reserved for the subshell (2l + 1).
    pub fn ring_slots(self) -> usize {
        usize::from(self.azimuthal()) * 2 + 1
    }
}

impl fmt::Display for SubshellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One explicit term of an electron configuration, e.g. `3d10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubshellToken {
    pub principal_shell: u8,
    pub subshell: SubshellType,
    pub electron_count: u32,
}

impl SubshellToken {
    pub const fn new(principal_shell: u8, subshell: SubshellType, electron_count: u32) -> Self {
        Self {
            principal_shell,
            subshell,
            electron_count,
        }
    }
}

impl fmt::Display for SubshellToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.principal_shell, self.subshell, self.electron_count
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSubshellError {
    term: String,
}

impl fmt::Display for ParseSubshellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a subshell term", self.term)
    }
}

impl std::error::Error for ParseSubshellError {}

impl FromStr for SubshellToken {
    type Err = ParseSubshellError;

    fn from_str(term: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSubshellError {
            term: term.to_owned(),
        };

        let caps = SUBSHELL_TERM.captures(term).ok_or_else(invalid)?;
        // Shell 0 does not exist. Shells and counts that do not fit in a u8 are
        // rejected too, which keeps ring sizes bounded.
        let principal_shell = caps[1]
            .parse::<u8>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(invalid)?;
        let subshell = caps[2]
            .chars()
            .next()
            .and_then(SubshellType::from_letter)
            .ok_or_else(invalid)?;
        let electron_count = caps[3].parse::<u8>().map_err(|_| invalid())?;

        Ok(Self::new(principal_shell, subshell, u32::from(electron_count)))
    }
}

/// Replaces bracketed noble-gas references with their full configurations.
///
/// Unknown symbols expand to nothing. Substitution repeats until no `[`
/// remains or [`MAX_EXPANSION_PASSES`] passes have run; whatever is left
/// afterwards is returned as-is.
pub fn expand_notation(raw: &str) -> String {
    let mut current = raw.to_owned();
    let mut passes = 0usize;

    while current.contains('[') && passes < MAX_EXPANSION_PASSES {
        current = NOBLE_GAS_REFERENCE
            .replace_all(&current, |caps: &Captures| {
                noble_gas_core(&caps[1]).unwrap_or("")
            })
            .into_owned();
        passes += 1;
    }

    if current.contains('[') {
        warn!(
            "configuration {:?} still has bracket text after {} passes",
            raw, passes
        );
    }

    current
}

/// Expands `raw` into explicit subshell tokens in the order they are written.
///
/// Never fails: terms that are not of the form `<shell><s|p|d|f><count>`
/// are skipped.
pub fn expand(raw: &str) -> Vec<SubshellToken> {
    expand_notation(raw)
        .split_whitespace()
        .filter_map(|term| match term.parse::<SubshellToken>() {
            Ok(token) => Some(token),
            Err(err) => {
                trace!("skipping {}", err);
                None
            }
        })
        .collect()
}

/// Total electrons over `tokens`, saturating at `u32::MAX`.
pub fn electron_total(tokens: &[SubshellToken]) -> u32 {
    tokens
        .iter()
        .fold(0u32, |total, token| total.saturating_add(token.electron_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubshellType::{D, F, P, S};

    #[test]
    fn explicit_configuration_keeps_order() {
        assert_eq!(
            expand("1s2 2s2 2p6"),
            vec![
                SubshellToken::new(1, S, 2),
                SubshellToken::new(2, S, 2),
                SubshellToken::new(2, P, 6),
            ]
        );
    }

    #[test]
    fn every_noble_gas_reference_matches_its_core() {
        for symbol in NOBLE_GASES {
            let core = noble_gas_core(symbol).unwrap();
            assert_eq!(expand(&format!("[{symbol}]")), expand(core), "{symbol}");
        }
    }

    #[test]
    fn shorthand_expands_before_tail() {
        assert_eq!(expand("[Ne] 3s2 3p6"), expand("1s2 2s2 2p6 3s2 3p6"));
    }

    #[test]
    fn empty_and_garbage_inputs_yield_nothing() {
        assert!(expand("").is_empty());
        assert!(expand("   ").is_empty());
        assert!(expand("garbage 1x9").is_empty());
    }

    #[test]
    fn unknown_reference_expands_to_nothing() {
        assert_eq!(expand("[Og] 7s2"), vec![SubshellToken::new(7, S, 2)]);
        assert_eq!(expand_notation("[Zz]"), "");
    }

    #[test]
    fn unterminated_bracket_degrades_to_partial_result() {
        assert_eq!(expand("[Ar 4s1"), vec![SubshellToken::new(4, S, 1)]);
    }

    #[test]
    fn nested_brackets_consume_up_to_first_close() {
        let nested = format!("{}Ne{} 3s1", "[".repeat(3), "]".repeat(3));
        assert_eq!(expand_notation(&nested), "]] 3s1");
        assert_eq!(expand(&nested), vec![SubshellToken::new(3, S, 1)]);
    }

    #[test]
    fn annotations_are_skipped() {
        let tokens = expand("[Xe] 4f14 5d10 6s1 (predicted) 6p");
        assert_eq!(tokens.last(), Some(&SubshellToken::new(6, S, 1)));
        assert_eq!(electron_total(&tokens), 79);
        assert!(tokens.contains(&SubshellToken::new(4, F, 14)));
        assert!(tokens.contains(&SubshellToken::new(5, D, 10)));
    }

    #[test]
    fn out_of_range_terms_are_rejected() {
        assert!("0s2".parse::<SubshellToken>().is_err());
        assert!("300s2".parse::<SubshellToken>().is_err());
        assert!("1S2".parse::<SubshellToken>().is_err());
        assert!("1s".parse::<SubshellToken>().is_err());
        assert!("1s300".parse::<SubshellToken>().is_err());
        assert_eq!("1s255".parse::<SubshellToken>(), Ok(SubshellToken::new(1, S, 255)));
        assert_eq!("12f0".parse::<SubshellToken>(), Ok(SubshellToken::new(12, F, 0)));
    }

    #[test]
    fn oversized_counts_are_dropped_not_summed() {
        assert_eq!(expand("1s4294967295 2s1"), vec![SubshellToken::new(2, S, 1)]);
        assert!(expand("1s300").is_empty());
    }

    #[test]
    fn electron_total_saturates() {
        let tokens = [
            SubshellToken::new(1, S, u32::MAX),
            SubshellToken::new(2, S, 1),
        ];
        assert_eq!(electron_total(&tokens), u32::MAX);
    }

    #[test]
    fn token_display_is_notation() {
        let token = SubshellToken::new(3, D, 10);
        assert_eq!(token.to_string(), "3d10");
        assert_eq!(token.to_string().parse::<SubshellToken>(), Ok(token));
    }

    #[test]
    fn ring_slots_follow_azimuthal_number() {
        let slots: Vec<usize> = [S, P, D, F].iter().map(|t| t.ring_slots()).collect();
        assert_eq!(slots, vec![1, 3, 5, 7]);
    }
}
