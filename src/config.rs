use serde::{Deserialize, Serialize};

use crate::formula::Formula;
use crate::unit::Unit;

/// Calculator settings as they appear in a host's configuration file,
/// e.g. `{"formula": "haversine", "unit": "mi"}`. Missing fields take the
/// calculator defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    pub formula: Formula,
    pub unit: Unit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() -> anyhow::Result<()> {
        let config: DistanceConfig = serde_json::from_str("{}")?;
        assert_eq!(config, DistanceConfig::default());
        assert_eq!(config.formula, Formula::Vincenty);
        assert_eq!(config.unit, Unit::Kilometres);
        Ok(())
    }

    #[test]
    fn reads_names() -> anyhow::Result<()> {
        let config: DistanceConfig =
            serde_json::from_str(r#"{"formula": "haversine", "unit": "mi"}"#)?;
        assert_eq!(config.formula, Formula::Haversine);
        assert_eq!(config.unit, Unit::Miles);

        let config: DistanceConfig = serde_json::from_str(r#"{"unit": "ft"}"#)?;
        assert_eq!(config.formula, Formula::Vincenty);
        assert_eq!(config.unit, Unit::Feet);
        Ok(())
    }

    #[test]
    fn writes_names() -> anyhow::Result<()> {
        let config = DistanceConfig {
            formula: Formula::Haversine,
            unit: Unit::Centimetres,
        };
        assert_eq!(
            serde_json::to_string(&config)?,
            r#"{"formula":"haversine","unit":"cm"}"#
        );
        Ok(())
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = serde_json::from_str::<DistanceConfig>(r#"{"unit": "furlong"}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("You have tried to set an invalid distance unit: \"furlong\""));
    }
}
