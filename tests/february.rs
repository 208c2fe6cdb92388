use monthpage::config::Config;
use monthpage::grid::{DayCell, GridCell, MarkedDays, MonthLayout, TodayMarker};
use monthpage::page::Page;
use monthpage::render::{self, Format};

#[test]
fn february_2026_grid() {
    let layout = MonthLayout::new(28, 6).unwrap();
    let marked = vec![14u8].into_iter().collect::<MarkedDays>();
    let cells = layout.cells(TodayMarker::new(12), &marked).collect::<Vec<_>>();

    assert_eq!(cells.len(), 34);
    assert_eq!(cells.iter().take_while(|c| c.is_placeholder()).count(), 6);

    let days = cells.iter().filter_map(GridCell::day).collect::<Vec<&DayCell>>();
    assert_eq!(days.len(), 28);

    let flags = |n: u8| {
        let c = days[n as usize - 1];
        (c.is_today(), c.is_marked(), c.is_past())
    };
    assert_eq!(flags(12), (true, false, false));
    assert_eq!(flags(14), (false, true, false));
    assert_eq!(flags(20), (false, false, false));
    assert_eq!(flags(5), (false, false, true));
}

#[test]
fn invalid_layout() {
    assert!(MonthLayout::new(0, 3).unwrap_err().is_invalid_layout());
    assert!(MonthLayout::new(28, 7).unwrap_err().is_invalid_layout());
}

#[test]
fn configured_page_renders_in_both_formats() {
    let config: Config = r#"
        [month]
        number = 3
        year = 2026
        days = 31
        leading_offset = 6
        today = 1
        marked = [17]

        [footer]
        text = "See you in spring"
    "#
    .parse()
    .unwrap();

    let page = Page::from_config(&config).unwrap();
    assert_eq!(page.heading(), "March 2026");
    assert_eq!(page.subtitle().as_deref(), Some("Today is the 1st"));

    let text = render::render(&page, &config.theme, Format::Text).unwrap();
    assert!(text.contains(&format!("{:>28}", "*  1")));
    assert!(text.contains(" \u{2665}17"));
    assert!(text.trim_end().ends_with("See you in spring"));

    let html = render::render(&page, &config.theme, Format::Html).unwrap();
    assert!(html.contains("<h2>March 2026</h2>"));
    assert_eq!(html.matches("day--past").count(), 0);
    assert_eq!(html.matches("day--upcoming").count(), 30);
}
