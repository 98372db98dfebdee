//! Static demo content, assembled once on first access.

use crate::entities::{ClassicalWork, Competition, Post, User};

pub mod authors;
mod classics;
mod competitions;
mod posts;

#[derive(Debug)]
pub struct ContentStore {
    /// Newest first (id descending).
    pub posts: Vec<Post>,
    pub classics: Vec<ClassicalWork>,
    pub competitions: Vec<Competition>,
    pub authors: Vec<User>,
}

impl ContentStore {
    fn assemble() -> Self {
        let mut posts: Vec<Post> = [
            posts::kavithai(),
            posts::stories(),
            posts::quotes(),
            posts::katturai(),
            posts::ponmozhigal(),
            posts::motivation(),
            posts::history(),
            posts::pazhamozhigal(),
        ]
        .into_iter()
        .flatten()
        .collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));

        tracing::debug!(posts = posts.len(), "content store assembled");

        Self {
            posts,
            classics: vec![
                classics::thirukkural(),
                classics::aathichoodi(),
                classics::kondrai_vendhan(),
            ],
            competitions: competitions::all(),
            authors: authors::all(),
        }
    }

    pub fn classic(&self, id: &str) -> Option<&ClassicalWork> { self.classics.iter().find(|w| w.id == id) }
}

::lazy_static::lazy_static! {
    pub static ref STORE: ContentStore = ContentStore::assemble();
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::entities::Category;

    #[test]
    fn posts_are_sorted_newest_first() {
        assert!(STORE.posts.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn post_ids_are_unique() {
        let ids: HashSet<_> = STORE.posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), STORE.posts.len());
    }

    #[test]
    fn every_category_has_seed_posts() {
        for c in Category::ALL {
            assert!(STORE.posts.iter().any(|p| p.category == c), "{} missing", c);
        }
    }

    #[test]
    fn classics_cover_both_shapes() {
        assert!(STORE.classic("thirukkural").unwrap().has_sections());
        assert!(!STORE.classic("aathichoodi").unwrap().has_sections());
        assert!(STORE.classic("missing").is_none());
    }
}
