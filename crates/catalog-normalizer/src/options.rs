use std::{fmt, str::FromStr};

use catalog_lib::{
    error::{Error, Result},
    models::Input,
};
use serde::{Deserialize, Serialize};

use crate::title::TitlePattern;

/// Host prefixed to root-relative cover paths
pub const DEFAULT_THUMBNAIL_HOST: &str = "mangapark.net";

pub const SHORTEN_TITLE_PREF: &str = "Shorten title";
pub const COVER_MODE_PREF: &str = "Chapter page as cover";
pub const TITLE_PATTERN_PREF: &str = "Custom title pattern";

/// Which chapter page replaces the cover of mature titles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverMode {
    #[default]
    Off,
    First,
    Latest,
}

impl CoverMode {
    pub const ALL: [CoverMode; 3] = [CoverMode::Off, CoverMode::First, CoverMode::Latest];

    pub fn as_str(&self) -> &'static str {
        match self {
            CoverMode::Off => "off",
            CoverMode::First => "first",
            CoverMode::Latest => "latest",
        }
    }
}

impl fmt::Display for CoverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CoverMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| Error::InvalidPreference {
                name: COVER_MODE_PREF.to_string(),
                reason: format!("unknown cover mode `{s}`, expected off, first or latest"),
            })
    }
}

/// Per call configuration of the entry normalizer
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    pub shorten_title: bool,
    pub cover_mode: CoverMode,
    pub custom_title_pattern: TitlePattern,
    pub thumbnail_host: String,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            shorten_title: false,
            cover_mode: CoverMode::Off,
            custom_title_pattern: TitlePattern::default(),
            thumbnail_host: DEFAULT_THUMBNAIL_HOST.to_string(),
        }
    }
}

impl NormalizeOptions {
    /// Options as source preferences, reflecting current values
    pub fn preferences(&self) -> Vec<Input> {
        let cover_mode = CoverMode::ALL
            .iter()
            .position(|mode| *mode == self.cover_mode)
            .unwrap_or_default();

        vec![
            Input::Checkbox {
                name: SHORTEN_TITLE_PREF.to_string(),
                state: Some(self.shorten_title),
            },
            Input::Select {
                name: COVER_MODE_PREF.to_string(),
                values: CoverMode::ALL.iter().map(|mode| mode.to_string()).collect(),
                state: Some(cover_mode as i64),
            },
            Input::Text {
                name: TITLE_PATTERN_PREF.to_string(),
                state: Some(self.custom_title_pattern.as_str().to_string()),
            },
        ]
    }

    /// Read options back from source preferences. Preferences without a state
    /// keep their default, unknown preferences are ignored.
    pub fn from_preferences(preferences: &[Input]) -> Result<Self> {
        let mut options = Self::default();

        for input in preferences {
            match input {
                Input::Checkbox { name, state } if name == SHORTEN_TITLE_PREF => {
                    options.shorten_title = state.unwrap_or_default();
                }
                Input::Select {
                    name,
                    values,
                    state: Some(index),
                } if name == COVER_MODE_PREF => {
                    let value = usize::try_from(*index)
                        .ok()
                        .and_then(|index| values.get(index))
                        .ok_or_else(|| Error::InvalidPreference {
                            name: name.clone(),
                            reason: format!("selection {index} out of range"),
                        })?;
                    options.cover_mode = value.parse()?;
                }
                Input::Text { name, state } if name == TITLE_PATTERN_PREF => {
                    options.custom_title_pattern =
                        TitlePattern::new(state.as_deref().unwrap_or_default())?;
                }
                _ => {
                    debug!("ignoring preference {}", input.name());
                }
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cover_mode_from_str() {
        assert_eq!("off".parse::<CoverMode>(), Ok(CoverMode::Off));
        assert_eq!("first".parse::<CoverMode>(), Ok(CoverMode::First));
        assert_eq!("latest".parse::<CoverMode>(), Ok(CoverMode::Latest));
        assert!(matches!(
            "newest".parse::<CoverMode>(),
            Err(Error::InvalidPreference { .. })
        ));
    }

    #[test]
    fn test_default_options() {
        let options = NormalizeOptions::default();

        assert!(!options.shorten_title);
        assert_eq!(options.cover_mode, CoverMode::Off);
        assert!(options.custom_title_pattern.is_empty());
        assert_eq!(options.thumbnail_host, DEFAULT_THUMBNAIL_HOST);
    }

    #[test]
    fn test_preferences_round_trip() {
        let options = NormalizeOptions {
            shorten_title: true,
            cover_mode: CoverMode::Latest,
            custom_title_pattern: TitlePattern::new(r"\s*Raw$").unwrap(),
            ..Default::default()
        };

        let back = NormalizeOptions::from_preferences(&options.preferences()).unwrap();

        assert!(back.shorten_title);
        assert_eq!(back.cover_mode, CoverMode::Latest);
        assert_eq!(back.custom_title_pattern.as_str(), r"\s*Raw$");
    }

    #[test]
    fn test_preferences_without_state_keep_default() {
        let preferences = vec![
            Input::Checkbox {
                name: SHORTEN_TITLE_PREF.to_string(),
                state: None,
            },
            Input::Select {
                name: COVER_MODE_PREF.to_string(),
                values: vec!["off".to_string()],
                state: None,
            },
            Input::Text {
                name: "Language".to_string(),
                state: Some("en".to_string()),
            },
        ];

        let options = NormalizeOptions::from_preferences(&preferences).unwrap();

        assert!(!options.shorten_title);
        assert_eq!(options.cover_mode, CoverMode::Off);
    }

    #[test]
    fn test_preferences_invalid_values() {
        let out_of_range = vec![Input::Select {
            name: COVER_MODE_PREF.to_string(),
            values: vec!["off".to_string()],
            state: Some(3),
        }];
        assert!(matches!(
            NormalizeOptions::from_preferences(&out_of_range),
            Err(Error::InvalidPreference { .. })
        ));

        let bad_pattern = vec![Input::Text {
            name: TITLE_PATTERN_PREF.to_string(),
            state: Some("[".to_string()),
        }];
        assert!(matches!(
            NormalizeOptions::from_preferences(&bad_pattern),
            Err(Error::InvalidPattern(_))
        ));
    }
}
