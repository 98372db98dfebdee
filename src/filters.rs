//! Narrowing a post collection by text, category, author and theme keywords.
//!
//! Every active predicate must hold; the input order is kept.

use regex::{Regex, RegexBuilder};

use crate::entities::{Category, Post, UserId};

/// A keyword list attached to one category, e.g. poems about nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubFilter {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub label_en: &'static str,
    pub keywords: &'static [&'static str],
}

pub const SUB_FILTERS: &[SubFilter] = &[
    SubFilter {
        id: "love",
        category: Category::Kavithai,
        label: "காதல்",
        label_en: "Love",
        keywords: &["காதல்", "அன்பு", "நேசம்", "love"],
    },
    SubFilter {
        id: "nature",
        category: Category::Kavithai,
        label: "இயற்கை",
        label_en: "Nature",
        keywords: &["இயற்கை", "மழை", "நிலா", "கடல்", "மலர்", "வானம்", "nature"],
    },
    SubFilter {
        id: "nation",
        category: Category::Kavithai,
        label: "தேசம்",
        label_en: "Nation",
        keywords: &["தேசம்", "நாடு", "சுதந்திர", "விடுதலை", "பாரத"],
    },
    SubFilter {
        id: "mother",
        category: Category::Kavithai,
        label: "அம்மா",
        label_en: "Mother",
        keywords: &["அம்மா", "தாய்", "அன்னை", "mother"],
    },
    SubFilter {
        id: "friendship",
        category: Category::Kavithai,
        label: "நட்பு",
        label_en: "Friendship",
        keywords: &["நட்பு", "நண்ப", "தோழ", "friend"],
    },
    SubFilter {
        id: "life",
        category: Category::Kavithai,
        label: "வாழ்க்கை",
        label_en: "Life",
        keywords: &["வாழ்க்கை", "வாழ்வு", "life"],
    },
    SubFilter {
        id: "education",
        category: Category::Ponmozhi,
        label: "கல்வி",
        label_en: "Education",
        keywords: &["கல்வி", "கற்", "அறிவு"],
    },
    SubFilter {
        id: "courage",
        category: Category::Ookkam,
        label: "துணிவு",
        label_en: "Courage",
        keywords: &["துணிவு", "தோல்வி", "முயற்சி", "முயல"],
    },
];

pub fn sub_filters_for(category: Category) -> impl Iterator<Item = &'static SubFilter> {
    SUB_FILTERS.iter().filter(move |f| f.category == category)
}

pub fn find_sub_filter(category: Category, id: &str) -> Option<&'static SubFilter> {
    sub_filters_for(category).find(|f| f.id == id)
}

/// Literal, case-insensitive substring matcher. An empty needle matches all.
#[derive(Debug, Clone)]
pub struct TextMatcher(Option<Regex>);

impl TextMatcher {
    pub fn new(needle: &str) -> Self {
        if needle.is_empty() {
            return Self(None);
        }

        // escaped input always compiles
        let re = RegexBuilder::new(&regex::escape(needle))
            .case_insensitive(true)
            .build()
            .ok();

        Self(re)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match &self.0 {
            Some(r) => r.is_match(haystack),
            None => true,
        }
    }

    pub fn matches_post(&self, post: &Post) -> bool { self.is_match(&post.title) || self.is_match(&post.content) }
}

#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub search_query: String,
    pub category: Option<Category>,
    pub author_id: Option<UserId>,
    pub sub_filter: Option<&'static SubFilter>,
}

impl PostFilter {
    pub fn search(q: impl Into<String>) -> Self {
        Self {
            search_query: q.into(),
            ..Self::default()
        }
    }

    pub fn category(mut self, c: Option<Category>) -> Self {
        self.category = c;
        self
    }

    pub fn author(mut self, id: Option<UserId>) -> Self {
        self.author_id = id;
        self
    }

    pub fn theme(mut self, f: Option<&'static SubFilter>) -> Self {
        self.sub_filter = f;
        self
    }

    pub fn apply<'p>(&self, posts: &'p [Post]) -> Vec<&'p Post> {
        let text = TextMatcher::new(&self.search_query);
        let keywords = self.sub_filter.map(|f| {
            f.keywords
                .iter()
                .map(|k| TextMatcher::new(k))
                .collect::<Vec<_>>()
        });

        posts
            .iter()
            .filter(|p| text.matches_post(p))
            .filter(|p| self.category.map(|c| p.category == c).unwrap_or(true))
            .filter(|p| self.author_id.map(|id| p.author.id == id).unwrap_or(true))
            .filter(|p| {
                keywords
                    .as_ref()
                    .map(|ks| ks.iter().any(|k| k.matches_post(p)))
                    .unwrap_or(true)
            })
            .collect()
    }
}

/// Other posts in the same category, in collection order.
pub fn related<'p>(posts: &'p [Post], post: &Post, n: usize) -> Vec<&'p Post> {
    posts
        .iter()
        .filter(|p| p.category == post.category && p.id != post.id)
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::STORE;

    fn ids(v: &[&Post]) -> Vec<i64> { v.iter().map(|p| p.id).collect() }

    #[test]
    fn empty_query_is_identity() {
        let all = PostFilter::default().apply(&STORE.posts);
        assert_eq!(ids(&all), STORE.posts.iter().map(|p| p.id).collect::<Vec<_>>());
    }

    #[test]
    fn query_matches_title_or_content_only() {
        let q = "கல்வி";
        let found = PostFilter::search(q).apply(&STORE.posts);

        assert!(!found.is_empty());
        for p in &found {
            assert!(p.title.contains(q) || p.content.contains(q));
        }

        let expected = STORE
            .posts
            .iter()
            .filter(|p| p.title.contains(q) || p.content.contains(q))
            .count();
        assert_eq!(found.len(), expected);
    }

    #[test]
    fn query_ignores_case() {
        let upper = PostFilter::search("FAIL").apply(&STORE.posts);
        let lower = PostFilter::search("fail").apply(&STORE.posts);

        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(upper.len(), 1);
    }

    #[test]
    fn query_is_literal() {
        assert!(PostFilter::search(".*").apply(&STORE.posts).is_empty());
    }

    #[test]
    fn category_filter_matches_manual_count() {
        for c in Category::ALL {
            let found = PostFilter::default().category(Some(c)).apply(&STORE.posts);
            let manual = STORE.posts.iter().filter(|p| p.category == c).count();

            assert_eq!(found.len(), manual);
            assert!(found.iter().all(|p| p.category == c));
        }
    }

    #[test]
    fn predicates_combine_and_keep_order() {
        let kalam = crate::seed::authors::kalam().id;
        let found = PostFilter::default()
            .author(Some(kalam))
            .category(Some(Category::Merkol))
            .apply(&STORE.posts);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "கனவு காணுங்கள்");

        let all_kalam = PostFilter::default().author(Some(kalam)).apply(&STORE.posts);
        assert!(all_kalam.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn theme_matches_any_keyword() {
        let mother = find_sub_filter(Category::Kavithai, "mother");
        let found = PostFilter::default()
            .category(Some(Category::Kavithai))
            .theme(mother)
            .apply(&STORE.posts);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "அம்மாவின் கைகள்");

        let nature = find_sub_filter(Category::Kavithai, "nature");
        let found = PostFilter::default()
            .category(Some(Category::Kavithai))
            .theme(nature)
            .apply(&STORE.posts);
        assert!(found.iter().any(|p| p.title == "நிலாவின் கடிதம்"));
    }

    #[test]
    fn related_excludes_self() {
        let post = &STORE.posts[0];
        let rel = related(&STORE.posts, post, 3);

        assert!(rel.len() <= 3);
        assert!(rel.iter().all(|p| p.id != post.id && p.category == post.category));
    }
}
