use chrono::{Month, Weekday};
use num_traits::FromPrimitive;
use serde::Deserialize;
use std::convert::TryFrom;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, ErrorKind, Result};
use crate::grid::{leading_offset_of, MarkedDays, MonthLayout, TodayMarker};
use crate::page::{default_highlights, Footer, Hero, Highlight};

const CONFIG_PATH_ENV_VAR: &str = "MONTHPAGE_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("monthpage").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".monthpage.toml"));
    }

    locations
}

pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::load(path);
    }

    for location in find_configfile_locations() {
        if location.is_file() {
            return Config::load(&location);
        }
        log::debug!("No config found at {}", location.display());
    }

    log::info!("No config file found, using built-in page");
    Ok(Config::default())
}

/// The month sheet as configured. `leading_offset` is the Monday-first
/// column of day 1 and has to match `number`/`year`; it is not derived.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct MonthSpec {
    pub number: i64,
    pub year: i32,
    pub days: i64,
    pub leading_offset: i64,
    pub today: i64,
    pub marked: Vec<i64>,
}

impl Default for MonthSpec {
    fn default() -> Self {
        MonthSpec {
            number: 2,
            year: 2026,
            days: 28,
            // 2026-02-01 is a Sunday
            leading_offset: leading_offset_of(Weekday::Sun).into(),
            today: 12,
            marked: vec![14],
        }
    }
}

impl MonthSpec {
    pub fn month(&self) -> Result<Month> {
        Month::from_i64(self.number).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidMonth,
                &format!("month number {} out of range 1..=12", self.number),
            )
        })
    }

    pub fn layout(&self) -> Result<MonthLayout> {
        let out_of_range = |what: &str, value: i64| {
            Error::new(
                ErrorKind::InvalidLayout,
                &format!("{} {} out of range", what, value),
            )
        };

        let days = u8::try_from(self.days).map_err(|_| out_of_range("days in month", self.days))?;
        let offset = u8::try_from(self.leading_offset)
            .map_err(|_| out_of_range("leading offset", self.leading_offset))?;

        MonthLayout::new(days, offset)
    }

    pub fn today(&self) -> TodayMarker {
        TodayMarker::new(self.today)
    }

    /// Marked days; numbers that can never be a day are dropped.
    pub fn marked(&self) -> MarkedDays {
        self.marked
            .iter()
            .filter_map(|&day| u8::try_from(day).ok())
            .collect()
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Theme {
    pub today_char: Option<char>,
    pub marked_char: Option<char>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_char: Some('*'),
            marked_char: Some('\u{2665}'),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub month: MonthSpec,
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub footer: Footer,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            month: MonthSpec::default(),
            hero: Hero::default(),
            highlights: default_highlights(),
            footer: Footer::default(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_msg(&format!("could not read {}", path.display()))
        })?;
        content.parse()
    }

    /// Validated layout of the configured month.
    pub fn layout(&self) -> Result<MonthLayout> {
        self.month.layout()
    }

    fn validate(self) -> Result<Self> {
        self.month.month()?;
        self.month.layout()?;
        Ok(self)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layout().unwrap(), MonthLayout::new(28, 6).unwrap());
    }

    #[test]
    fn partial_month_section_keeps_other_defaults() {
        let config: Config = r#"
            [month]
            today = 20
            marked = [14, 14, 28]

            [theme]
            today_char = ">"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.month.today(), TodayMarker::new(20));
        assert_eq!(config.month.marked().len(), 2);
        assert_eq!(config.month.days, 28);
        assert_eq!(config.theme.today_char, Some('>'));
        assert_eq!(config.theme.marked_char, Some('\u{2665}'));
        assert_eq!(config.hero, Hero::default());
    }

    #[test]
    fn highlights_replace_defaults() {
        let config: Config = r#"
            [[highlights]]
            label = "Ides"
            description = "Beware"
            icon = "dagger"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.highlights.len(), 1);
        assert_eq!(config.highlights[0].icon.as_str(), "dagger");
    }

    #[test]
    fn invalid_layout_fails_at_load_time() {
        let err = "[month]\nleading_offset = 7\n".parse::<Config>().unwrap_err();
        assert!(err.is_invalid_layout());

        let err = "[month]\ndays = 0\n".parse::<Config>().unwrap_err();
        assert!(err.is_invalid_layout());
    }

    #[test]
    fn out_of_range_today_is_accepted() {
        let config: Config = "[month]\ntoday = 31\n".parse().unwrap();
        assert_eq!(config.month.today().day_num(), 31);
    }

    #[test]
    fn today_and_marked_outside_day_range_are_accepted() {
        let config: Config = "[month]\ntoday = -1\nmarked = [400, 14, -2]\n".parse().unwrap();

        assert_eq!(config.month.today(), TodayMarker::new(-1));
        assert_eq!(config.month.marked().iter().collect::<Vec<_>>(), vec![14]);

        let config: Config = "[month]\ntoday = 300\n".parse().unwrap();
        assert_eq!(config.month.today().day_num(), 300);
    }

    #[test]
    fn negative_or_huge_layout_values_are_invalid_layouts() {
        let err = "[month]\ndays = -3\n".parse::<Config>().unwrap_err();
        assert!(err.is_invalid_layout());

        let err = "[month]\nleading_offset = 300\n".parse::<Config>().unwrap_err();
        assert!(err.is_invalid_layout());

        let err = "[month]\nleading_offset = -1\n".parse::<Config>().unwrap_err();
        assert!(err.is_invalid_layout());
    }

    #[test]
    fn invalid_month_number() {
        let err = "[month]\nnumber = 13\n".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidMonth));

        let err = "[month]\nnumber = -2\n".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidMonth));
    }

    #[test]
    fn unknown_keys_and_empty_icons_are_rejected() {
        let err = "[month]\nweekday = 3\n".parse::<Config>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));

        let err = "[[highlights]]\nlabel = \"x\"\ndescription = \"y\"\nicon = \"\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigParse));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_suitable_config(Some(Path::new("/nonexistent/monthpage.toml"))).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::IOError(_)));
    }
}
