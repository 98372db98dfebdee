use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
}

impl FontSize {
    pub const STEPS: [FontSize; 4] = [
        FontSize::Large,
        FontSize::XLarge,
        FontSize::XxLarge,
        FontSize::XxxLarge,
    ];

    fn index(self) -> usize { self as usize }

    pub fn larger(self) -> Self { Self::STEPS[(self.index() + 1).min(Self::STEPS.len() - 1)] }

    pub fn smaller(self) -> Self { Self::STEPS[self.index().saturating_sub(1)] }
}

impl Default for FontSize {
    fn default() -> Self { FontSize::XLarge }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    Scroll,
    Book,
    /// Book pagination drawn as an olai (palm-leaf) manuscript.
    PalmLeaf,
}

impl ViewMode {
    pub fn is_paginated(self) -> bool { !matches!(self, ViewMode::Scroll) }
}

impl Default for ViewMode {
    fn default() -> Self { ViewMode::Scroll }
}

/// Display preferences; navigation never resets these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPrefs {
    pub font_size: FontSize,
    pub view_mode: ViewMode,
    pub sound_enabled: bool,
}

impl Default for ReadingPrefs {
    fn default() -> Self {
        Self {
            font_size: FontSize::default(),
            view_mode: ViewMode::default(),
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Turned(usize),
    Stayed(usize),
    /// Moved past the last verse; the chapter is done.
    Finished,
}

/// Page cursor over one chapter's verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookPager {
    page: usize,
    total: usize,
}

impl BookPager {
    pub fn new(total: usize) -> Self { Self { page: 0, total } }

    pub fn page(&self) -> usize { self.page }

    pub fn total(&self) -> usize { self.total }

    pub fn is_last(&self) -> bool { self.page + 1 >= self.total }

    pub fn next(&mut self) -> PageTurn {
        if self.is_last() {
            return PageTurn::Finished;
        }

        self.page += 1;
        PageTurn::Turned(self.page)
    }

    pub fn previous(&mut self) -> PageTurn {
        match self.page {
            0 => PageTurn::Stayed(0),
            _ => {
                self.page -= 1;
                PageTurn::Turned(self.page)
            },
        }
    }

    pub fn jump(&mut self, page: usize) -> usize {
        self.page = page.min(self.total.saturating_sub(1));
        self.page
    }
}
