use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ScoringError;

/// Age brackets used on the official scorecard.
///
/// The current charts are the same for every bracket; the selector is
/// accepted so that bracket-specific charts can be introduced without
/// changing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum AgeGroup {
    #[serde(rename = "17-21")]
    From17To21,
    #[serde(rename = "22-26")]
    From22To26,
    #[serde(rename = "27-31")]
    From27To31,
    #[serde(rename = "32-36")]
    From32To36,
    #[serde(rename = "37-41")]
    From37To41,
    #[serde(rename = "42-46")]
    From42To46,
    #[serde(rename = "47-51")]
    From47To51,
    #[serde(rename = "52-56")]
    From52To56,
    #[serde(rename = "57-61")]
    From57To61,
    #[serde(rename = "62+")]
    Over62,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::From17To21 => "17-21",
            Self::From22To26 => "22-26",
            Self::From27To31 => "27-31",
            Self::From32To36 => "32-36",
            Self::From37To41 => "37-41",
            Self::From42To46 => "42-46",
            Self::From47To51 => "47-51",
            Self::From52To56 => "52-56",
            Self::From57To61 => "57-61",
            Self::Over62 => "62+",
        }
    }

    pub fn all() -> &'static [AgeGroup] {
        &[
            Self::From17To21,
            Self::From22To26,
            Self::From27To31,
            Self::From32To36,
            Self::From37To41,
            Self::From42To46,
            Self::From47To51,
            Self::From52To56,
            Self::From57To61,
            Self::Over62,
        ]
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|group| group.as_str() == trimmed)
            .ok_or_else(|| ScoringError::InvalidDemographic {
                field: "age group",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(ScoringError::InvalidDemographic {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses optional age group and gender selectors. Blank counts as unset.
pub fn parse_demographics(
    age_group: Option<&str>,
    gender: Option<&str>,
) -> Result<(Option<AgeGroup>, Option<Gender>), ScoringError> {
    let age_group = age_group
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<AgeGroup>)
        .transpose()?;
    let gender = gender
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<Gender>)
        .transpose()?;

    Ok((age_group, gender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_parsing() {
        assert_eq!("17-21".parse::<AgeGroup>().unwrap(), AgeGroup::From17To21);
        assert_eq!(" 62+ ".parse::<AgeGroup>().unwrap(), AgeGroup::Over62);
        assert!("16-20".parse::<AgeGroup>().is_err());
        assert!("".parse::<AgeGroup>().is_err());
    }

    #[test]
    fn test_parse_demographics_treats_blank_as_unset() {
        assert_eq!(parse_demographics(None, None).unwrap(), (None, None));
        assert_eq!(parse_demographics(Some(""), Some("  ")).unwrap(), (None, None));
        assert_eq!(
            parse_demographics(Some("62+"), Some("f")).unwrap(),
            (Some(AgeGroup::Over62), Some(Gender::Female))
        );
        assert!(matches!(
            parse_demographics(Some("16-20"), None),
            Err(ScoringError::InvalidDemographic { field: "age group", .. })
        ));
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("F".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);

        let err = "x".parse::<Gender>().unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidDemographic {
                field: "gender",
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_age_group_serde_uses_labels() {
        let json = serde_json::to_string(&AgeGroup::Over62).unwrap();
        assert_eq!(json, "\"62+\"");
        let parsed: AgeGroup = serde_json::from_str("\"27-31\"").unwrap();
        assert_eq!(parsed, AgeGroup::From27To31);
    }
}
