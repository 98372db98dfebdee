use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ta,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Ta => Language::En,
            Language::En => Language::Ta,
        }
    }
}

impl Default for Language {
    fn default() -> Self { Language::Ta }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Home,
    Classics,
    Sections,
    Chapters,
    Creations,
    Write,
    Competitions,
    LearnTamil,
    SearchResults,
    NoPostsFound,
    NoSearchResults,
    PostNotFound,
    SubmitFailed,
    Active,
    Upcoming,
    Completed,
}

pub fn t(label: Label, lang: Language) -> &'static str {
    use Label::*;
    use Language::*;

    match (label, lang) {
        (Home, Ta) => "முகப்பு",
        (Home, En) => "Home",
        (Classics, Ta) => "இலக்கியங்கள்",
        (Classics, En) => "Classics",
        (Sections, Ta) => "பகுப்புகள்",
        (Sections, En) => "Sections",
        (Chapters, Ta) => "அதிகாரங்கள்",
        (Chapters, En) => "Chapters",
        (Creations, Ta) => "படைப்புகள்",
        (Creations, En) => "Creations",
        (Write, Ta) => "எழுது",
        (Write, En) => "Write",
        (Competitions, Ta) => "போட்டிகள்",
        (Competitions, En) => "Competitions",
        (LearnTamil, Ta) => "தமிழ் கற்க",
        (LearnTamil, En) => "Learn Tamil",
        (SearchResults, Ta) => "தேடல் முடிவுகள்",
        (SearchResults, En) => "Search results",
        (NoPostsFound, Ta) => "படைப்புகள் எதுவும் இல்லை",
        (NoPostsFound, En) => "No posts found",
        (NoSearchResults, Ta) => "தேடலுக்கு முடிவுகள் இல்லை",
        (NoSearchResults, En) => "No results for your search",
        (PostNotFound, Ta) => "படைப்பு கிடைக்கவில்லை",
        (PostNotFound, En) => "Post not found",
        (SubmitFailed, Ta) => "தவறு ஏற்பட்டது.",
        (SubmitFailed, En) => "Something went wrong.",
        (Active, Ta) => "நடைபெறுகிறது",
        (Active, En) => "Active",
        (Upcoming, Ta) => "விரைவில்",
        (Upcoming, En) => "Upcoming",
        (Completed, Ta) => "நிறைவடைந்தது",
        (Completed, En) => "Completed",
    }
}
