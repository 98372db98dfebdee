//! Client-side application state: session, preferences, current page and the
//! loaded collections, mutated only through `&mut self`.

use alloc::sync::Arc;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::adapters::{post_source, ClientConfig, MockApi, PostSource};
use crate::classics::Navigator;
use crate::entities::{Category, Competition, Post, PostId, User, UserId};
use crate::filters::{self, PostFilter, SubFilter};
use crate::i18n::{t, Label, Language};
use crate::karka::KarkaView;
use crate::seed::{authors, STORE};

pub mod submission;

pub use submission::{ComposeForm, SubmitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::Light }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub current_user: Option<User>,
    pub login_prompt: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Post(PostId),
    Editor,
    Classics(Option<String>),
    Category(Category),
    Potikal,
    Karka,
    Author(UserId),
}

impl Default for Page {
    fn default() -> Self { Page::Home }
}

/// Transient notice shown once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    SubmitFailed,
}

impl Flash {
    pub fn message(self, lang: Language) -> &'static str {
        match self {
            Flash::SubmitFailed => t(Label::SubmitFailed, lang),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostLookup<'a> {
    Found(&'a Post),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorProfile {
    pub user: User,
    pub post_count: usize,
}

pub struct App {
    source: Arc<dyn PostSource + Sync + Send>,
    mock: Arc<MockApi>,

    pub session: Session,
    pub prefs: Preferences,
    page: Page,
    search_query: String,
    sub_filter: Option<&'static SubFilter>,
    loading: bool,

    posts: Vec<Post>,
    competitions: Vec<Competition>,
    liked: HashSet<PostId>,

    pub compose: ComposeForm,
    flash: Option<Flash>,
    pub navigator: Navigator,
    pub karka: KarkaView,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        let mock = Arc::new(MockApi::new(config.mock_latency));
        let source = post_source(config, mock.clone());

        tracing::debug!(use_real_db = config.use_real_db, "app constructed");

        Self::with_sources(source, mock)
    }

    pub fn with_sources(source: Arc<dyn PostSource + Sync + Send>, mock: Arc<MockApi>) -> Self {
        Self {
            source,
            mock,
            session: Session::default(),
            prefs: Preferences::default(),
            page: Page::default(),
            search_query: String::new(),
            sub_filter: None,
            loading: true,
            posts: vec![],
            competitions: vec![],
            liked: HashSet::new(),
            compose: ComposeForm::default(),
            flash: None,
            navigator: Navigator::new(vec![]),
            karka: KarkaView::default(),
        }
    }

    pub fn page(&self) -> &Page { &self.page }

    pub fn posts(&self) -> &[Post] { &self.posts }

    pub fn competitions(&self) -> &[Competition] { &self.competitions }

    pub fn is_loading(&self) -> bool { self.loading }

    pub fn search_query(&self) -> &str { &self.search_query }

    pub fn flash(&self) -> Option<Flash> { self.flash }

    /// Hands the pending notice to the view, which shows it once.
    pub fn take_flash(&mut self) -> Option<Flash> { self.flash.take() }

    /// Fetches everything at once; empty remote posts fall back to the mock.
    pub async fn load(&mut self) {
        self.loading = true;

        let (posts, works, competitions) = tokio::join!(
            self.source.list_posts(),
            self.mock.classical_works(),
            self.mock.competitions(),
        );

        self.posts = match posts.is_empty() {
            true => {
                tracing::info!("no posts from source, using bundled posts");
                self.mock.list_posts().await
            },
            false => posts,
        };
        self.navigator = Navigator::with_prefs_of(works, &self.navigator);
        self.competitions = competitions;

        self.loading = false;
    }

    pub fn login(&mut self) {
        self.session.current_user = Some(authors::reader());
        self.session.login_prompt = false;
    }

    pub fn logout(&mut self) { self.session.current_user = None; }

    pub fn toggle_language(&mut self) { self.prefs.language = self.prefs.language.toggled(); }

    pub fn toggle_theme(&mut self) { self.prefs.theme = self.prefs.theme.toggled(); }

    pub fn search(&mut self, query: impl Into<String>) { self.search_query = query.into(); }

    /// Theme keywords for the category page; ignored if it belongs elsewhere.
    pub fn set_sub_filter(&mut self, id: Option<&str>) {
        self.sub_filter = match (&self.page, id) {
            (Page::Category(c), Some(id)) => filters::find_sub_filter(*c, id),
            _ => None,
        };
    }

    pub fn navigate(&mut self, page: Page) {
        if let Page::Classics(work) = &page {
            match work {
                Some(id) => {
                    if let Err(e) = self.navigator.select_work(id) {
                        tracing::warn!(%e, "classics navigation");
                    }
                },
                None => self.navigator.close(),
            }
        }

        if page == Page::Karka {
            self.karka.close();
        }

        self.page = page;
        self.search_query.clear();
        self.sub_filter = None;
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        let filter = PostFilter::search(self.search_query.as_str());

        let filter = match self.page {
            Page::Home => filter,
            Page::Category(c) => filter.category(Some(c)).theme(self.sub_filter),
            Page::Author(id) => filter.author(Some(id)),
            _ => return vec![],
        };

        filter.apply(&self.posts)
    }

    pub fn current_post(&self) -> PostLookup<'_> {
        let id = match self.page {
            Page::Post(id) => id,
            _ => return PostLookup::NotFound,
        };

        match self.posts.iter().find(|p| p.id == id) {
            Some(p) => PostLookup::Found(p),
            None => PostLookup::NotFound,
        }
    }

    pub fn related_posts(&self, n: usize) -> Vec<&Post> {
        match self.current_post() {
            PostLookup::Found(p) => filters::related(&self.posts, p, n),
            PostLookup::NotFound => vec![],
        }
    }

    /// Known authors without loaded posts still get a profile.
    pub fn author_profile(&self, id: UserId) -> Option<AuthorProfile> {
        let mut written = self.posts.iter().filter(|p| p.author.id == id);

        match written.next() {
            Some(first) => Some(AuthorProfile {
                user: first.author.clone(),
                post_count: 1 + written.count(),
            }),
            None => STORE.authors.iter().find(|u| u.id == id).map(|u| AuthorProfile {
                user: u.clone(),
                post_count: 0,
            }),
        }
    }

    pub fn open_competitions(&self) -> Vec<&Competition> {
        self.competitions.iter().filter(|c| c.accepts_entries()).collect()
    }

    /// Heading for the current page in the chosen language.
    pub fn page_title(&self) -> String {
        let lang = self.prefs.language;

        match &self.page {
            Page::Home => t(Label::Home, lang).to_string(),
            Page::Editor => t(Label::Write, lang).to_string(),
            Page::Classics(_) => match self.navigator.work() {
                Some(w) => w.title.clone(),
                None => t(Label::Classics, lang).to_string(),
            },
            Page::Category(c) => c.name(lang).to_string(),
            Page::Potikal => t(Label::Competitions, lang).to_string(),
            Page::Karka => t(Label::LearnTamil, lang).to_string(),
            Page::Post(_) => match self.current_post() {
                PostLookup::Found(p) => p.title.clone(),
                PostLookup::NotFound => t(Label::PostNotFound, lang).to_string(),
            },
            Page::Author(id) => match self.author_profile(*id) {
                Some(profile) => profile.user.name,
                None => t(Label::Creations, lang).to_string(),
            },
        }
    }

    pub fn is_liked(&self, id: PostId) -> bool { self.liked.contains(&id) }

    /// Flips the like locally and mirrors it to the source.
    /// Returns the updated count, or `None` for an unknown post.
    pub async fn toggle_like(&mut self, id: PostId) -> Option<u32> {
        let now_liked = !self.liked.contains(&id);
        let post = self.posts.iter_mut().find(|p| p.id == id)?;

        let likes = match now_liked {
            true => {
                post.likes = post.likes.saturating_add(1);
                self.liked.insert(id);
                post.likes
            },
            false => {
                post.likes = post.likes.saturating_sub(1);
                self.liked.remove(&id);
                post.likes
            },
        };

        let recorded = match now_liked {
            true => self.source.like_post(id).await,
            false => self.source.unlike_post(id).await,
        };
        if !recorded {
            tracing::warn!(id, now_liked, "like not recorded by source");
        }

        Some(likes)
    }
}
