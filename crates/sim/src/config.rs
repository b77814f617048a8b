//! Simulation configuration structures and loaders.
use std::env;

use behavior_tree::{Completion, Status};
use strum::{Display, EnumString};

/// Status polarity of the base check.
///
/// The base check historically reports `Success` while Sisyphus is still
/// walking down and `Running` once he has settled, which is the reverse of
/// the other nodes. Both readings are kept selectable.
///
/// Under [`Legacy`](Self::Legacy) the cycle ends right after the first step
/// down, so a held scene freezes with Sisyphus partway down the slope and the
/// resting clamp is never reached. [`Conventional`](Self::Conventional)
/// walks him all the way back to the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BasePolarity {
    /// Descending reports `Success`, settled reports `Running`.
    #[default]
    Legacy,
    /// Descending reports `Running`, settled reports `Success`.
    Conventional,
}

impl BasePolarity {
    /// Status reported on a tick that still moved Sisyphus down.
    pub const fn descending(self) -> Status {
        match self {
            Self::Legacy => Status::Success,
            Self::Conventional => Status::Running,
        }
    }

    /// Status reported once Sisyphus is back at the base.
    pub const fn settled(self) -> Status {
        match self {
            Self::Legacy => Status::Running,
            Self::Conventional => Status::Success,
        }
    }
}

/// Configuration of the simulated scene and its behavior tree.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub width: f64,
    pub height: f64,
    pub base_polarity: BasePolarity,
    pub completion: Completion,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SISYPHUS_WIDTH` - Scene width in pixels (default: 1200)
    /// - `SISYPHUS_HEIGHT` - Scene height in pixels (default: 800)
    /// - `SISYPHUS_BASE_POLARITY` - `legacy` or `conventional` (default: legacy)
    /// - `SISYPHUS_RESTART` - Restart the cycle once it completes (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<f64>("SISYPHUS_WIDTH") {
            config.width = width.max(1.0);
        }
        if let Some(height) = read_env::<f64>("SISYPHUS_HEIGHT") {
            config.height = height.max(1.0);
        }

        if let Some(polarity) = read_env::<BasePolarity>("SISYPHUS_BASE_POLARITY") {
            config.base_polarity = polarity;
        }

        if let Some(restart) = read_env::<bool>("SISYPHUS_RESTART") {
            config.completion = if restart {
                Completion::Restart
            } else {
                Completion::Hold
            };
        }

        config
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            base_polarity: BasePolarity::default(),
            completion: Completion::Hold,
        }
    }
}

/// Reads and parses an environment variable, treating malformed values as unset.
pub fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::LAYOUT_MAX_HEIGHT;

    #[test]
    fn polarity_parses_case_insensitively() {
        assert_eq!(
            "Conventional".parse::<BasePolarity>().ok(),
            Some(BasePolarity::Conventional)
        );
        assert_eq!("legacy".parse::<BasePolarity>().ok(), Some(BasePolarity::Legacy));
        assert!("sideways".parse::<BasePolarity>().is_err());
        assert_eq!(BasePolarity::Conventional.to_string(), "conventional");
    }

    #[test]
    fn missing_env_reads_as_unset() {
        assert_eq!(read_env::<u32>("SISYPHUS_NOT_A_REAL_SETTING"), None);
        assert_eq!(SimConfig::default().height, LAYOUT_MAX_HEIGHT);
    }

    #[test]
    fn polarities_mirror_each_other() {
        let legacy = BasePolarity::Legacy;
        let conventional = BasePolarity::Conventional;
        assert_eq!(legacy.descending(), conventional.settled());
        assert_eq!(legacy.settled(), conventional.descending());
    }
}
