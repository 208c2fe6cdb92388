use derive_more::Constructor;
use std::time::Duration;

/// Entrance animation timing of one page element. Only carried to the
/// output, the display layer runs the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Constructor)]
pub struct Reveal {
    pub delay: Duration,
    pub duration: Duration,
}

impl Reveal {
    const DAY_STAGGER_MS: u64 = 20;
    const DAY_DURATION_MS: u64 = 300;
    const HIGHLIGHT_STAGGER_MS: u64 = 100;
    const HIGHLIGHT_DURATION_MS: u64 = 500;

    pub const HERO_KICKER: Reveal = Reveal::from_millis(0, 600);
    pub const HERO_TITLE: Reveal = Reveal::from_millis(200, 800);
    pub const HERO_TAGLINE: Reveal = Reveal::from_millis(500, 800);
    pub const SCROLL_HINT: Reveal = Reveal::from_millis(1000, 1000);
    pub const CALENDAR: Reveal = Reveal::from_millis(0, 700);

    const fn from_millis(delay: u64, duration: u64) -> Self {
        Reveal {
            delay: Duration::from_millis(delay),
            duration: Duration::from_millis(duration),
        }
    }

    /// Day cells fade in one after another, ordered by day number.
    pub fn day(day_num: u8) -> Self {
        Self::from_millis(
            day_num as u64 * Self::DAY_STAGGER_MS,
            Self::DAY_DURATION_MS,
        )
    }

    pub fn highlight(index: usize) -> Self {
        Self::from_millis(
            index as u64 * Self::HIGHLIGHT_STAGGER_MS,
            Self::HIGHLIGHT_DURATION_MS,
        )
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay.as_millis() as u64
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration.as_millis() as u64
    }
}
