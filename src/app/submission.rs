use super::{App, Flash, Page};
use crate::entities::{Category, NewPost, PostId};
use crate::utils::is_blank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeForm {
    pub title: String,
    pub content: String,
    pub category: Category,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: Category::Kavithai,
        }
    }
}

impl ComposeForm {
    pub fn is_complete(&self) -> bool { !is_blank(&self.title) && !is_blank(&self.content) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Title or content blank; nothing happened.
    Ignored,
    LoginRequired,
    Published(PostId),
    Failed,
}

impl App {
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.compose.is_complete() {
            return SubmitOutcome::Ignored;
        }

        let author = match &self.session.current_user {
            Some(u) => u.clone(),
            None => {
                self.session.login_prompt = true;
                return SubmitOutcome::LoginRequired;
            },
        };

        let new_post = NewPost {
            title: self.compose.title.clone(),
            content: self.compose.content.clone(),
            category: self.compose.category,
            author,
        };

        match self.source.create_post(new_post).await {
            Some(post) => {
                let id = post.id;
                self.posts.insert(0, post);
                self.compose = ComposeForm::default();
                self.flash = None;
                self.navigate(Page::Home);

                tracing::info!(id, "post submitted");
                SubmitOutcome::Published(id)
            },
            None => {
                self.flash = Some(Flash::SubmitFailed);
                SubmitOutcome::Failed
            },
        }
    }
}
