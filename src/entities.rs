use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub type PostId = i64;
pub type UserId = i64;
pub type CommentId = i64;
pub type Date = DateTime<Utc>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user: User,
    pub text: String,
    pub created_at: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: Category,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub created_at: Date,
}

impl Post {
    const SNIPPET_CHARS: usize = 160;

    /// First 160 characters of the content, with an ellipsis when cut.
    pub fn snippet(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(Self::SNIPPET_CHARS).collect();

        match chars.next() {
            Some(_) => format!("{}...", head),
            None => head,
        }
    }
}

/// Payload accepted when creating a post; everything else is server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub author: User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "கவிதை")]
    Kavithai,
    #[serde(rename = "கட்டுரை")]
    Katturai,
    #[serde(rename = "மேற்கோள்")]
    Merkol,
    #[serde(rename = "கதை")]
    Kathai,
    #[serde(rename = "பொன்மொழி")]
    Ponmozhi,
    #[serde(rename = "ஊக்கம்")]
    Ookkam,
    #[serde(rename = "வரலாறு")]
    Varalaru,
    #[serde(rename = "பழமொழி")]
    Pazhamozhi,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Kavithai,
        Category::Katturai,
        Category::Merkol,
        Category::Kathai,
        Category::Ponmozhi,
        Category::Ookkam,
        Category::Varalaru,
        Category::Pazhamozhi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Kavithai => "கவிதை",
            Category::Katturai => "கட்டுரை",
            Category::Merkol => "மேற்கோள்",
            Category::Kathai => "கதை",
            Category::Ponmozhi => "பொன்மொழி",
            Category::Ookkam => "ஊக்கம்",
            Category::Varalaru => "வரலாறு",
            Category::Pazhamozhi => "பழமொழி",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Category::Kavithai => "Poem",
            Category::Katturai => "Article",
            Category::Merkol => "Quote",
            Category::Kathai => "Story",
            Category::Ponmozhi => "Golden Saying",
            Category::Ookkam => "Motivation",
            Category::Varalaru => "History",
            Category::Pazhamozhi => "Proverb",
        }
    }

    pub fn name(self, lang: Language) -> &'static str {
        match lang {
            Language::Ta => self.label(),
            Language::En => self.english(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.label()) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl ::std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalVerse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalChapter {
    pub chapter: String,
    pub verses: Vec<ClassicalVerse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub chapters: Vec<ClassicalChapter>,
}

/// Flat works list chapters directly; sectioned works group them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkBody {
    #[serde(rename = "content")]
    Flat(Vec<ClassicalChapter>),
    #[serde(rename = "sections")]
    Sectioned(Vec<ClassicalSection>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalWork {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(flatten)]
    pub body: WorkBody,
}

impl ClassicalWork {
    pub fn has_sections(&self) -> bool {
        matches!(&self.body, WorkBody::Sectioned(s) if !s.is_empty())
    }

    pub fn sections(&self) -> &[ClassicalSection] {
        match &self.body {
            WorkBody::Sectioned(s) => s,
            WorkBody::Flat(_) => &[],
        }
    }

    /// Chapters of a flat work. Sectioned works expose chapters per section.
    pub fn flat_chapters(&self) -> &[ClassicalChapter] {
        match &self.body {
            WorkBody::Flat(c) => c,
            WorkBody::Sectioned(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Active,
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub deadline: chrono::NaiveDate,
    pub status: CompetitionStatus,
    pub prize: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Competition {
    pub fn accepts_entries(&self) -> bool { self.status == CompetitionStatus::Active }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn reader() -> User {
        User {
            id: 1,
            name: "வாசகர்".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn category_labels_parse_back() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
        }

        assert!("poem".parse::<Category>().is_err());
    }

    #[test]
    fn category_names_follow_language() {
        assert_eq!(Category::Varalaru.name(Language::Ta), "வரலாறு");
        assert_eq!(Category::Varalaru.name(Language::En), "History");
    }

    #[test]
    fn only_active_competitions_accept_entries() {
        let mut c = Competition {
            id: 1,
            title: "போட்டி".to_string(),
            description: String::new(),
            deadline: chrono::NaiveDate::from_ymd_opt(2024, 12, 11).unwrap(),
            status: CompetitionStatus::Active,
            prize: String::new(),
            image_url: None,
        };
        assert!(c.accepts_entries());

        c.status = CompetitionStatus::Upcoming;
        assert!(!c.accepts_entries());
        c.status = CompetitionStatus::Completed;
        assert!(!c.accepts_entries());
    }

    #[test]
    fn post_serializes_camel_case_with_tamil_category() {
        let post = Post {
            id: 7,
            title: "T".to_string(),
            content: "C".to_string(),
            author: reader(),
            category: Category::Kavithai,
            likes: 0,
            comments: vec![],
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["category"], "கவிதை");
        assert!(json.get("createdAt").is_some());
        assert!(json["author"].get("avatarUrl").is_none());

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }

    #[test]
    fn work_body_uses_content_or_sections_key() {
        let flat = ClassicalWork {
            id: "aathichoodi".to_string(),
            title: "ஆத்திசூடி".to_string(),
            author: "ஔவையார்".to_string(),
            description: String::new(),
            body: WorkBody::Flat(vec![]),
        };

        let json = serde_json::to_value(&flat).unwrap();
        assert!(json.get("content").is_some());
        assert!(json.get("sections").is_none());

        let sectioned: ClassicalWork = serde_json::from_str(
            r#"{"id":"k","title":"t","author":"a","description":"d",
                "sections":[{"id":"aram","title":"அறத்துப்பால்","chapters":[]}]}"#,
        )
        .unwrap();
        assert!(sectioned.has_sections());
        assert!(sectioned.flat_chapters().is_empty());
    }

    #[test]
    fn snippet_cuts_long_content() {
        let mut post = Post {
            id: 1,
            title: String::new(),
            content: "அ".repeat(200),
            author: reader(),
            category: Category::Kathai,
            likes: 0,
            comments: vec![],
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        };

        assert!(post.snippet().ends_with("..."));
        assert_eq!(post.snippet().chars().count(), 163);

        post.content = "short".to_string();
        assert_eq!(post.snippet(), "short");
    }
}
