use std::env::{self, VarError};

use anyhow::{Context, Result, anyhow};

pub const SEED_ENV: &str = "TENZIES_SEED";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible dice. Entropy is used when unset.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        match env::var(SEED_ENV) {
            Ok(raw) => Self::from_seed(Some(&raw)),
            Err(VarError::NotPresent) => Self::from_seed(None),
            Err(err) => Err(anyhow!("`{SEED_ENV}` is not valid unicode: {err}")),
        }
    }

    fn from_seed(raw: Option<&str>) -> Result<Self> {
        let seed = match raw.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .with_context(|| format!("`{SEED_ENV}` must be an unsigned integer, got `{raw}`"))?,
            ),
        };
        Ok(Self { seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_seed_means_entropy() {
        assert_eq!(GameConfig::from_seed(None).unwrap(), GameConfig::default());
        assert_eq!(GameConfig::from_seed(Some("  ")).unwrap().seed, None);
    }

    #[test]
    fn parses_numeric_seed() {
        assert_eq!(GameConfig::from_seed(Some(" 42\n")).unwrap().seed, Some(42));
    }

    #[test]
    fn rejects_garbage_seed() {
        let err = GameConfig::from_seed(Some("dice")).unwrap_err();
        assert!(err.to_string().contains(SEED_ENV));
    }
}
