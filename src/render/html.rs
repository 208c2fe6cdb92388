use once_cell::sync::OnceCell;
use serde::Serialize;
use tera::{Context, Tera};

use super::icons;
use super::reveal::Reveal;
use crate::config::Theme;
use crate::error::Result;
use crate::grid::{weekday_labels, GridCell};
use crate::page::Page;

const TEMPLATE_NAME: &str = "page.html";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ heading }}</title>
</head>
<body>
<section class="hero">
  <img class="hero__image" src="{{ hero.image }}" alt="{{ hero.image_alt }}">
  <p class="hero__kicker" data-reveal-delay="{{ hero.kicker_reveal.delay }}ms" data-reveal-duration="{{ hero.kicker_reveal.duration }}ms">{{ hero.kicker }}</p>
  <h1 class="hero__title" data-reveal-delay="{{ hero.title_reveal.delay }}ms" data-reveal-duration="{{ hero.title_reveal.duration }}ms"><span class="hero__accent">{{ hero.title_accent }}</span><span>{{ hero.title }}</span></h1>
  <p class="hero__tagline" data-reveal-delay="{{ hero.tagline_reveal.delay }}ms" data-reveal-duration="{{ hero.tagline_reveal.duration }}ms">{{ hero.tagline }}</p>
  <div class="hero__scroll-hint" data-reveal-delay="{{ hero.scroll_reveal.delay }}ms" data-reveal-duration="{{ hero.scroll_reveal.duration }}ms"></div>
</section>
<section class="calendar" data-reveal-delay="{{ calendar_reveal.delay }}ms" data-reveal-duration="{{ calendar_reveal.duration }}ms">
  <h2>{{ heading }}</h2>
{%- if subtitle %}
  <p class="calendar__today">{{ subtitle }}</p>
{%- endif %}
  <div class="calendar__grid">
{%- for label in weekdays %}
    <div class="weekday">{{ label }}</div>
{%- endfor %}
{%- for cell in cells %}
{%- if cell.day %}
    <div class="{{ cell.classes }}" data-reveal-delay="{{ cell.reveal.delay }}ms" data-reveal-duration="{{ cell.reveal.duration }}ms">
{%- if cell.mark %}<span class="day__mark">{{ cell.mark }}</span>{% endif -%}
{{ cell.day }}</div>
{%- else %}
    <div class="{{ cell.classes }}"></div>
{%- endif %}
{%- endfor %}
  </div>
</section>
<section class="highlights">
{%- for item in highlights %}
  <article class="highlight" data-icon="{{ item.icon }}" data-reveal-delay="{{ item.reveal.delay }}ms" data-reveal-duration="{{ item.reveal.duration }}ms">
    <span class="highlight__icon">{{ item.glyph }}</span>
    <h3>{{ item.label }}</h3>
    <p>{{ item.description }}</p>
  </article>
{%- endfor %}
</section>
<footer>
  <p>{{ footer }}</p>
</footer>
</body>
</html>
"#;

static TEMPLATES: OnceCell<Tera> = OnceCell::new();

fn templates() -> Result<&'static Tera> {
    let tera = TEMPLATES.get_or_try_init(|| -> Result<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(tera)
    })?;
    Ok(tera)
}

#[derive(Serialize)]
struct RevealView {
    delay: u64,
    duration: u64,
}

impl From<Reveal> for RevealView {
    fn from(reveal: Reveal) -> Self {
        RevealView {
            delay: reveal.delay_ms(),
            duration: reveal.duration_ms(),
        }
    }
}

#[derive(Serialize)]
struct HeroView<'a> {
    kicker: &'a str,
    title_accent: &'a str,
    title: &'a str,
    tagline: &'a str,
    image: &'a str,
    image_alt: &'a str,
    kicker_reveal: RevealView,
    title_reveal: RevealView,
    tagline_reveal: RevealView,
    scroll_reveal: RevealView,
}

#[derive(Serialize)]
struct CellView {
    day: Option<u8>,
    classes: String,
    mark: Option<char>,
    reveal: Option<RevealView>,
}

impl CellView {
    fn new(cell: &GridCell, theme: &Theme) -> Self {
        let day = match cell {
            GridCell::Day(day) => day,
            GridCell::Placeholder => {
                return CellView {
                    day: None,
                    classes: "day day--empty".to_owned(),
                    mark: None,
                    reveal: None,
                }
            }
        };

        // Past and marked may both apply, the stylesheet composes them.
        let mut classes = vec!["day"];
        if day.shows_today() {
            classes.push("day--today");
        }
        if day.shows_past() {
            classes.push("day--past");
        }
        if day.shows_upcoming() {
            classes.push("day--upcoming");
        }
        if day.shows_marked() {
            classes.push("day--marked");
        }

        CellView {
            day: Some(day.day_num()),
            classes: classes.join(" "),
            mark: if day.shows_marked() {
                theme.marked_char
            } else {
                None
            },
            reveal: Some(Reveal::day(day.day_num()).into()),
        }
    }
}

#[derive(Serialize)]
struct HighlightView<'a> {
    label: &'a str,
    description: &'a str,
    icon: &'a str,
    glyph: &'static str,
    reveal: RevealView,
}

#[derive(Serialize)]
struct PageView<'a> {
    heading: String,
    subtitle: Option<String>,
    hero: HeroView<'a>,
    calendar_reveal: RevealView,
    weekdays: Vec<&'static str>,
    cells: Vec<CellView>,
    highlights: Vec<HighlightView<'a>>,
    footer: &'a str,
}

impl<'a> PageView<'a> {
    fn new(page: &'a Page, theme: &Theme) -> Self {
        let hero = &page.hero;

        PageView {
            heading: page.heading(),
            subtitle: page.subtitle(),
            hero: HeroView {
                kicker: &hero.kicker,
                title_accent: &hero.title_accent,
                title: &hero.title,
                tagline: &hero.tagline,
                image: &hero.image,
                image_alt: &hero.image_alt,
                kicker_reveal: Reveal::HERO_KICKER.into(),
                title_reveal: Reveal::HERO_TITLE.into(),
                tagline_reveal: Reveal::HERO_TAGLINE.into(),
                scroll_reveal: Reveal::SCROLL_HINT.into(),
            },
            calendar_reveal: Reveal::CALENDAR.into(),
            weekdays: weekday_labels().collect(),
            cells: page
                .cells()
                .map(|cell| CellView::new(&cell, theme))
                .collect(),
            highlights: page
                .highlights
                .iter()
                .enumerate()
                .map(|(i, item)| HighlightView {
                    label: &item.label,
                    description: &item.description,
                    icon: item.icon.as_str(),
                    glyph: icons::glyph(&item.icon),
                    reveal: Reveal::highlight(i).into(),
                })
                .collect(),
            footer: &page.footer.text,
        }
    }
}

pub fn render(page: &Page, theme: &Theme) -> Result<String> {
    let context = Context::from_serialize(PageView::new(page, theme))?;
    let html = templates()?.render(TEMPLATE_NAME, &context)?;
    Ok(html)
}
