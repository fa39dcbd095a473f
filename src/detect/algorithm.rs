//! Algorithm selection

use crate::error::{Result, TortoiseError};
use crate::sequence::Capability;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The interchangeable cycle detectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Tortoise and hare over two cursors; O(1) space, needs a replayable source
    Floyd,
    /// Single cursor with an anchor and a doubling lookahead window; O(1) space
    Teleporting,
    /// Visited set; O(distinct states) space, simplest for small finite spaces
    SetBased,
}

impl Algorithm {
    /// Every algorithm, in a stable order
    pub const ALL: [Algorithm; 3] = [Algorithm::Floyd, Algorithm::Teleporting, Algorithm::SetBased];

    /// Capability the source must declare for this algorithm
    pub fn requires(self) -> Capability {
        match self {
            Algorithm::Floyd => Capability::Replayable,
            Algorithm::Teleporting | Algorithm::SetBased => Capability::SinglePass,
        }
    }

    /// Fail with `UnsupportedCapability` unless `offered` is enough for this
    /// algorithm
    pub fn check(self, offered: Capability) -> Result<()> {
        if offered.satisfies(self.requires()) {
            Ok(())
        } else {
            Err(TortoiseError::UnsupportedCapability {
                algorithm: self.to_string(),
                capability: self.requires().to_string(),
            })
        }
    }

    /// Advisory default: the visited set when the state space is known and
    /// no larger than `small_limit`, otherwise the teleporting tortoise
    pub fn recommended(state_space: Option<usize>, small_limit: usize) -> Algorithm {
        match state_space {
            Some(size) if size <= small_limit => Algorithm::SetBased,
            _ => Algorithm::Teleporting,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Floyd => write!(f, "floyd"),
            Algorithm::Teleporting => write!(f, "teleporting"),
            Algorithm::SetBased => write!(f, "set-based"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = TortoiseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "floyd" | "tortoise-hare" => Ok(Algorithm::Floyd),
            "teleporting" | "brent" => Ok(Algorithm::Teleporting),
            "set-based" | "set" | "visited" => Ok(Algorithm::SetBased),
            other => Err(TortoiseError::UnknownAlgorithm(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements() {
        assert_eq!(Algorithm::Floyd.requires(), Capability::Replayable);
        assert_eq!(Algorithm::Teleporting.requires(), Capability::SinglePass);
        assert_eq!(Algorithm::SetBased.requires(), Capability::SinglePass);
    }

    #[test]
    fn test_check_rejects_single_pass_for_floyd() {
        let err = Algorithm::Floyd.check(Capability::SinglePass).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported capability: floyd requires a replayable sequence"
        );
        assert!(Algorithm::Floyd.check(Capability::Replayable).is_ok());
    }

    #[test]
    fn test_single_pass_algorithms_accept_anything() {
        for algorithm in [Algorithm::Teleporting, Algorithm::SetBased] {
            assert!(algorithm.check(Capability::SinglePass).is_ok());
            assert!(algorithm.check(Capability::Replayable).is_ok());
        }
    }

    #[test]
    fn test_recommended() {
        assert_eq!(Algorithm::recommended(Some(16), 4096), Algorithm::SetBased);
        assert_eq!(Algorithm::recommended(Some(4096), 4096), Algorithm::SetBased);
        assert_eq!(Algorithm::recommended(Some(4097), 4096), Algorithm::Teleporting);
        assert_eq!(Algorithm::recommended(None, 4096), Algorithm::Teleporting);
    }

    #[test]
    fn test_display_and_parse() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!("Brent".parse::<Algorithm>().unwrap(), Algorithm::Teleporting);
        assert_eq!(" set ".parse::<Algorithm>().unwrap(), Algorithm::SetBased);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hare".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, TortoiseError::UnknownAlgorithm(name) if name == "hare"));
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&Algorithm::SetBased).unwrap();
        assert_eq!(yaml.trim(), "set-based");
        let parsed: Algorithm = serde_yaml::from_str("teleporting").unwrap();
        assert_eq!(parsed, Algorithm::Teleporting);
    }
}
