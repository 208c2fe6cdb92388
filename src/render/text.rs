use itertools::Itertools;
use std::fmt::{Display, Write};

use super::icons;
use crate::config::Theme;
use crate::error::{Error, ErrorKind, Result};
use crate::grid::{weekday_labels, DayCell, GridCell};
use crate::page::Page;

const CELL_WIDTH: usize = 4;

struct TextCell<'a> {
    cell: GridCell,
    theme: &'a Theme,
}

impl Display for TextCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let day: &DayCell = match &self.cell {
            GridCell::Day(day) => day,
            GridCell::Placeholder => return write!(f, "{:width$}", "", width = CELL_WIDTH),
        };

        let arg_today = if day.shows_today() {
            self.theme.today_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_marked = if day.shows_marked() {
            self.theme.marked_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_marked, day.day_num())
    }
}

pub fn render(page: &Page, theme: &Theme) -> Result<String> {
    let mut out = String::new();
    write_page(&mut out, page, theme)
        .map_err(|_| Error::new(ErrorKind::Template, "could not format text page"))?;
    Ok(out)
}

fn write_page(out: &mut String, page: &Page, theme: &Theme) -> std::fmt::Result {
    let hero = &page.hero;
    writeln!(out, "{}", hero.kicker)?;
    writeln!(out, "{}{}", hero.title_accent, hero.title)?;
    writeln!(out, "{}", hero.tagline)?;
    writeln!(out)?;

    writeln!(out, "{}", page.heading())?;
    if let Some(subtitle) = page.subtitle() {
        writeln!(out, "{}", subtitle)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        weekday_labels()
            .map(|label| format!("{:>width$}", label, width = CELL_WIDTH))
            .join("")
    )?;

    for week in page.weeks() {
        let mut line = String::new();
        for cell in week {
            write!(&mut line, "{}", TextCell { cell, theme })?;
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(out)?;

    for highlight in &page.highlights {
        writeln!(
            out,
            "{} {}: {}",
            icons::glyph(&highlight.icon),
            highlight.label,
            highlight.description
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", page.footer.text)
}
