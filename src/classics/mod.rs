//! Reader state over one classical work: which work, section and chapter are
//! open, plus display preferences and the book-mode page cursor.

use core::fmt;

use smallvec::SmallVec;

use crate::entities::{ClassicalChapter, ClassicalSection, ClassicalVerse, ClassicalWork};
use crate::i18n::{t, Label, Language};

pub mod reader;

pub use reader::{BookPager, FontSize, PageTurn, ReadingPrefs, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Library,
    WorkRoot,
    SectionList,
    ChapterList,
    VerseReading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    UnknownWork(String),
    NotAvailable { stage: Stage, action: &'static str },
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::UnknownWork(id) => write!(f, "cannot find work: {}", id),
            NavError::NotAvailable { stage, action } =>
                write!(f, "`{}` is not available at {:?}", action, stage),
            NavError::OutOfRange { index, len } =>
                write!(f, "index out of range ({} !< {})", index, len),
        }
    }
}

impl ::std::error::Error for NavError {}

type NavResult<T> = ::std::result::Result<T, NavError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrumbTarget {
    Home,
    WorkRoot,
    Sections,
    Chapters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: Option<CrumbTarget>,
    pub active: bool,
}

impl Crumb {
    fn link(label: impl Into<String>, target: CrumbTarget, active: bool) -> Self {
        Self {
            label: label.into(),
            target: Some(target),
            active,
        }
    }

    fn text(label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            target: None,
            active,
        }
    }
}

pub type Breadcrumbs = SmallVec<[Crumb; 6]>;

#[derive(Debug, Clone)]
pub struct Navigator {
    works: Vec<ClassicalWork>,
    work: Option<usize>,
    section: Option<usize>,
    chapter: Option<usize>,
    stage: Stage,
    pager: BookPager,
    pub prefs: ReadingPrefs,
}

impl Navigator {
    pub fn new(works: Vec<ClassicalWork>) -> Self {
        Self {
            works,
            work: None,
            section: None,
            chapter: None,
            stage: Stage::Library,
            pager: BookPager::default(),
            prefs: ReadingPrefs::default(),
        }
    }

    /// Swaps the library, keeping the reading preferences.
    pub fn with_prefs_of(works: Vec<ClassicalWork>, other: &Navigator) -> Self {
        Self {
            prefs: other.prefs,
            ..Self::new(works)
        }
    }

    pub fn works(&self) -> &[ClassicalWork] { &self.works }

    pub fn stage(&self) -> Stage { self.stage }

    pub fn work(&self) -> Option<&ClassicalWork> { self.work.map(|i| &self.works[i]) }

    pub fn section(&self) -> Option<&ClassicalSection> {
        let work = self.work()?;
        self.section.map(|i| &work.sections()[i])
    }

    /// Chapters on offer: the chosen section's, or a flat work's own.
    pub fn chapters(&self) -> &[ClassicalChapter] {
        match (self.work(), self.section()) {
            (Some(_), Some(s)) => &s.chapters,
            (Some(w), None) => w.flat_chapters(),
            (None, _) => &[],
        }
    }

    pub fn chapter(&self) -> Option<&ClassicalChapter> { self.chapter.map(|i| &self.chapters()[i]) }

    pub fn page(&self) -> usize { self.pager.page() }

    /// Verse under the book-mode cursor.
    pub fn current_verse(&self) -> Option<&ClassicalVerse> {
        self.chapter()?.verses.get(self.pager.page())
    }

    fn expect_stage(&self, expected: Stage, action: &'static str) -> NavResult<()> {
        match self.stage == expected {
            true => Ok(()),
            false => Err(NavError::NotAvailable {
                stage: self.stage,
                action,
            }),
        }
    }

    /// Page turning exists only in the book-like view modes.
    fn expect_pages(&self, action: &'static str) -> NavResult<()> {
        self.expect_stage(Stage::VerseReading, action)?;

        match self.prefs.view_mode.is_paginated() {
            true => Ok(()),
            false => Err(NavError::NotAvailable {
                stage: self.stage,
                action,
            }),
        }
    }

    fn expect_work(&self, action: &'static str) -> NavResult<&ClassicalWork> {
        self.work().ok_or(NavError::NotAvailable {
            stage: self.stage,
            action,
        })
    }

    pub fn select_work(&mut self, id: &str) -> NavResult<()> {
        self.section = None;
        self.chapter = None;
        self.pager = BookPager::default();

        match self.works.iter().position(|w| w.id == id) {
            Some(i) => {
                self.work = Some(i);
                self.stage = Stage::WorkRoot;
                Ok(())
            },
            None => {
                self.work = None;
                self.stage = Stage::Library;
                Err(NavError::UnknownWork(id.to_string()))
            },
        }
    }

    pub fn close(&mut self) {
        self.work = None;
        self.section = None;
        self.chapter = None;
        self.stage = Stage::Library;
    }

    pub fn start(&mut self) -> NavResult<Stage> {
        self.expect_stage(Stage::WorkRoot, "start")?;

        self.stage = match self.expect_work("start")?.has_sections() {
            true => Stage::SectionList,
            false => Stage::ChapterList,
        };

        Ok(self.stage)
    }

    pub fn select_section(&mut self, index: usize) -> NavResult<()> {
        self.expect_stage(Stage::SectionList, "select_section")?;

        let len = self.expect_work("select_section")?.sections().len();
        if index >= len {
            return Err(NavError::OutOfRange { index, len });
        }

        self.section = Some(index);
        self.chapter = None;
        self.stage = Stage::ChapterList;
        Ok(())
    }

    pub fn select_chapter(&mut self, index: usize) -> NavResult<()> {
        self.expect_stage(Stage::ChapterList, "select_chapter")?;

        let len = self.chapters().len();
        if index >= len {
            return Err(NavError::OutOfRange { index, len });
        }

        self.chapter = Some(index);
        self.pager = BookPager::new(self.chapters()[index].verses.len());
        self.stage = Stage::VerseReading;
        Ok(())
    }

    /// Leaves the chapter and goes back to its chapter list.
    pub fn finish(&mut self) -> NavResult<()> {
        self.expect_stage(Stage::VerseReading, "finish")?;

        self.chapter = None;
        self.pager = BookPager::default();
        self.stage = Stage::ChapterList;
        Ok(())
    }

    pub fn next_page(&mut self) -> NavResult<PageTurn> {
        self.expect_pages("next_page")?;

        let turn = self.pager.next();
        if turn == PageTurn::Finished {
            self.finish()?;
        }

        Ok(turn)
    }

    pub fn previous_page(&mut self) -> NavResult<PageTurn> {
        self.expect_pages("previous_page")?;

        Ok(self.pager.previous())
    }

    pub fn jump_to_page(&mut self, page: usize) -> NavResult<usize> {
        self.expect_pages("jump_to_page")?;

        Ok(self.pager.jump(page))
    }

    pub fn back_to_root(&mut self) -> NavResult<()> {
        self.expect_work("back_to_root")?;

        self.section = None;
        self.chapter = None;
        self.stage = Stage::WorkRoot;
        Ok(())
    }

    pub fn back_to_sections(&mut self) -> NavResult<()> {
        if !self.expect_work("back_to_sections")?.has_sections() {
            return Err(NavError::NotAvailable {
                stage: self.stage,
                action: "back_to_sections",
            });
        }

        self.section = None;
        self.chapter = None;
        self.stage = Stage::SectionList;
        Ok(())
    }

    pub fn back_to_chapters(&mut self) -> NavResult<()> {
        let work = self.expect_work("back_to_chapters")?;
        if work.has_sections() && self.section.is_none() {
            return Err(NavError::NotAvailable {
                stage: self.stage,
                action: "back_to_chapters",
            });
        }

        self.chapter = None;
        self.stage = Stage::ChapterList;
        Ok(())
    }

    pub fn follow(&mut self, target: CrumbTarget) -> NavResult<()> {
        match target {
            CrumbTarget::Home => {
                self.close();
                Ok(())
            },
            CrumbTarget::WorkRoot => self.back_to_root(),
            CrumbTarget::Sections => self.back_to_sections(),
            CrumbTarget::Chapters => self.back_to_chapters(),
        }
    }

    pub fn breadcrumbs(&self, lang: Language) -> Breadcrumbs {
        let mut items = Breadcrumbs::new();

        items.push(Crumb::link(t(Label::Home, lang), CrumbTarget::Home, false));
        items.push(Crumb::text(t(Label::Classics, lang), self.stage == Stage::Library));

        let work = match self.work() {
            Some(w) => w,
            None => return items,
        };

        items.push(Crumb::link(
            work.title.as_str(),
            CrumbTarget::WorkRoot,
            self.stage == Stage::WorkRoot,
        ));

        if self.stage == Stage::WorkRoot {
            return items;
        }

        if work.has_sections() {
            items.push(Crumb::link(
                t(Label::Sections, lang),
                CrumbTarget::Sections,
                self.stage == Stage::SectionList,
            ));
            if let Some(s) = self.section() {
                items.push(Crumb::link(
                    s.title.as_str(),
                    CrumbTarget::Chapters,
                    self.stage == Stage::ChapterList,
                ));
            }
        } else {
            items.push(Crumb::link(
                t(Label::Chapters, lang),
                CrumbTarget::Chapters,
                self.stage == Stage::ChapterList,
            ));
        }

        if let (Stage::VerseReading, Some(c)) = (self.stage, self.chapter()) {
            items.push(Crumb::text(c.chapter.as_str(), true));
        }

        items
    }
}
