use chrono::Month;
use derive_more::Display;
use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::convert::TryFrom;
use std::str::FromStr;

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::grid::{Cells, GridCell, MarkedDays, MonthLayout, TodayMarker};

/// Opaque reference to a display capability (an icon, an animation
/// primitive). Only renderers give it meaning.
#[derive(Clone, Debug, Display, DeserializeFromStr, PartialEq, Eq, Hash)]
pub struct IconKey(String);

impl IconKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for IconKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        if key.is_empty() {
            return Err(Error::new(ErrorKind::InvalidIcon, "icon key must not be empty"));
        }
        Ok(IconKey(key.to_owned()))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub label: String,
    pub description: String,
    pub icon: IconKey,
}

impl Highlight {
    pub fn new(label: &str, description: &str, icon: &str) -> Result<Self> {
        Ok(Highlight {
            label: label.to_owned(),
            description: description.to_owned(),
            icon: icon.parse()?,
        })
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Hero {
    pub kicker: String,
    pub title_accent: String,
    pub title: String,
    pub tagline: String,
    pub image: String,
    pub image_alt: String,
}

impl Default for Hero {
    fn default() -> Self {
        Hero {
            kicker: "Welcome to".to_owned(),
            title_accent: "Feb".to_owned(),
            title: " '26".to_owned(),
            tagline: "The shortest month, the warmest hearts. \
                      A quiet pause between winter and spring."
                .to_owned(),
            image: "assets/hero-feb.jpg".to_owned(),
            image_alt: "Misty February landscape".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Footer {
    pub text: String,
}

impl Default for Footer {
    fn default() -> Self {
        Footer {
            text: "Made with \u{2665} in February 2026".to_owned(),
        }
    }
}

pub fn default_highlights() -> Vec<Highlight> {
    [
        (
            "Winter Vibes",
            "Embrace the quiet beauty of February's frost",
            "snowflake",
        ),
        ("Valentine's Day", "Love is in the air on the 14th", "heart"),
        (
            "Longer Days",
            "Light slowly returns as spring approaches",
            "sun",
        ),
        (
            "28 Days",
            "Short, sweet, and full of possibility",
            "calendar-days",
        ),
    ]
    .iter()
    .map(|(label, description, icon)| Highlight {
        label: (*label).to_owned(),
        description: (*description).to_owned(),
        icon: IconKey((*icon).to_owned()),
    })
    .collect()
}

/// English ordinal of a day number, e.g. `1st`, `12th`, `22nd`.
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Everything a renderer needs for one page, resolved from configuration.
#[derive(Clone, Debug)]
pub struct Page {
    pub month: Month,
    pub year: i32,
    pub hero: Hero,
    pub layout: MonthLayout,
    pub today: TodayMarker,
    pub marked: MarkedDays,
    pub highlights: Vec<Highlight>,
    pub footer: Footer,
}

impl Page {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Page {
            month: config.month.month()?,
            year: config.month.year,
            hero: config.hero.clone(),
            layout: config.month.layout()?,
            today: config.month.today(),
            marked: config.month.marked(),
            highlights: config.highlights.clone(),
            footer: config.footer.clone(),
        })
    }

    pub fn with_today(mut self, today: TodayMarker) -> Self {
        self.today = today;
        self
    }

    pub fn heading(&self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }

    /// `Today is the 12th`, or nothing when today lies outside the month.
    pub fn subtitle(&self) -> Option<String> {
        u8::try_from(self.today.day_num())
            .ok()
            .filter(|&today| self.layout.contains(today))
            .map(|today| format!("Today is the {}", ordinal(today)))
    }

    pub fn cells(&self) -> Cells<'_> {
        self.layout.cells(self.today, &self.marked)
    }

    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        self.layout.weeks(self.today, &self.marked)
    }
}
