//! Static Tamil-learning reference tables, browsed one topic at a time.

use core::str::FromStr;

use serde::Serialize;

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub tamil: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
}

const fn e(tamil: &'static str, transliteration: &'static str, meaning: &'static str) -> Entry {
    Entry {
        tamil,
        transliteration,
        meaning,
    }
}

const VOWELS: &[Entry] = &[
    e("அ", "a", "அம்மா (Mother)"),
    e("ஆ", "aa", "ஆடு (Goat)"),
    e("இ", "i", "இலை (Leaf)"),
    e("ஈ", "ee", "ஈ (Fly)"),
    e("உ", "u", "உரல் (Mortar)"),
    e("ஊ", "uu", "ஊசி (Needle)"),
    e("எ", "e", "எலி (Rat)"),
    e("ஏ", "ae", "ஏணி (Ladder)"),
    e("ஐ", "ai", "ஐவர் (Five people)"),
    e("ஒ", "o", "ஒட்டகம் (Camel)"),
    e("ஓ", "oa", "ஓடம் (Boat)"),
    e("ஔ", "au", "ஔவை (Poet)"),
];

const AAYUTHAM: &[Entry] = &[e("ஃ", "akh", "எஃகு (Steel)")];

const CONSONANTS: &[Entry] = &[
    e("க்", "ik", "சக்கரம் (Wheel)"),
    e("ங்", "ing", "சங்கு (Conch)"),
    e("ச்", "ich", "பச்சை (Green)"),
    e("ஞ்", "inj", "இஞ்சி (Ginger)"),
    e("ட்", "it", "பட்டம் (Kite)"),
    e("ண்", "in", "கண் (Eye)"),
    e("த்", "ith", "வாத்து (Duck)"),
    e("ந்", "inth", "பந்து (Ball)"),
    e("ப்", "ip", "கப்பல் (Ship)"),
    e("ம்", "im", "மரம் (Tree)"),
    e("ய்", "iy", "நாய் (Dog)"),
    e("ர்", "ir", "தேர் (Chariot)"),
    e("ல்", "il", "பல் (Tooth)"),
    e("வ்", "iv", "செவ்வந்தி (Flower)"),
    e("ழ்", "izh", "யாழ் (Harp)"),
    e("ள்", "il", "வாள் (Sword)"),
    e("ற்", "itr", "புற்று (Anthill)"),
    e("ன்", "in", "மான் (Deer)"),
];

const UYIRMEI: &[Entry] = &[
    e("க", "ka", "க் + அ"),
    e("கா", "kaa", "க் + ஆ"),
    e("கி", "ki", "க் + இ"),
    e("கீ", "kee", "க் + ஈ"),
    e("கு", "ku", "க் + உ"),
    e("கூ", "koo", "க் + ஊ"),
    e("கெ", "ke", "க் + எ"),
    e("கே", "kae", "க் + ஏ"),
    e("கை", "kai", "க் + ஐ"),
    e("கொ", "ko", "க் + ஒ"),
    e("கோ", "koa", "க் + ஓ"),
    e("கௌ", "kau", "க் + ஔ"),
];

const GRAMMAR: &[Entry] = &[
    e("எழுத்து", "Ezhuthu", "Phonology: letters, their formation and pronunciation"),
    e("சொல்", "Sol", "Morphology: words, their classes and formation"),
    e("பொருள்", "Porul", "Semantics: the subject matter of poetry"),
    e("யாப்பு", "Yaappu", "Prosody: rules of versification"),
    e("அணி", "Ani", "Rhetoric: figures of speech"),
];

const NUMBERS: &[Entry] = &[
    e("ஒன்று ௧", "Ondru", "1"),
    e("இரண்டு ௨", "Irandu", "2"),
    e("மூன்று ௩", "Moondru", "3"),
    e("நான்கு ௪", "Naangu", "4"),
    e("ஐந்து ௫", "Aindhu", "5"),
    e("ஆறு ௬", "Aaru", "6"),
    e("ஏழு ௭", "Yezhu", "7"),
    e("எட்டு ௮", "Ettu", "8"),
    e("ஒன்பது ௯", "Onbathu", "9"),
    e("பத்து ௰", "Pathu", "10"),
];

const DAYS: &[Entry] = &[
    e("ஞாயிறு", "Gnayiru", "Sunday"),
    e("திங்கள்", "Thingal", "Monday"),
    e("செவ்வாய்", "Sevvai", "Tuesday"),
    e("புதன்", "Budhan", "Wednesday"),
    e("வியாழன்", "Viyazhan", "Thursday"),
    e("வெள்ளி", "Velli", "Friday"),
    e("சனி", "Sani", "Saturday"),
];

const MONTHS: &[Entry] = &[
    e("சித்திரை", "Chithirai", "Mid Apr - Mid May"),
    e("வைகாசி", "Vaikasi", "Mid May - Mid Jun"),
    e("ஆனி", "Aani", "Mid Jun - Mid Jul"),
    e("ஆடி", "Aadi", "Mid Jul - Mid Aug"),
    e("ஆவணி", "Aavani", "Mid Aug - Mid Sep"),
    e("புரட்டாசி", "Purattasi", "Mid Sep - Mid Oct"),
    e("ஐப்பசி", "Aippasi", "Mid Oct - Mid Nov"),
    e("கார்த்திகை", "Karthigai", "Mid Nov - Mid Dec"),
    e("மார்கழி", "Margazhi", "Mid Dec - Mid Jan"),
    e("தை", "Thai", "Mid Jan - Mid Feb"),
    e("மாசி", "Maasi", "Mid Feb - Mid Mar"),
    e("பங்குனி", "Panguni", "Mid Mar - Mid Apr"),
];

const SEASONS: &[Entry] = &[
    e("இளவேனில்", "Ilavenil", "Spring (சித்திரை - வைகாசி)"),
    e("முதுவேனில்", "Muthuvenil", "Summer (ஆனி - ஆடி)"),
    e("கார்", "Kaar", "Monsoon (ஆவணி - புரட்டாசி)"),
    e("குளிர்", "Kulir", "Winter (ஐப்பசி - கார்த்திகை)"),
    e("முன்பனி", "Munpani", "Early dew (மார்கழி - தை)"),
    e("பின்பனி", "Pinpani", "Late dew (மாசி - பங்குனி)"),
];

const DIRECTIONS: &[Entry] = &[
    e("கிழக்கு", "Kizhakku", "East"),
    e("மேற்கு", "Merku", "West"),
    e("வடக்கு", "Vadakku", "North"),
    e("தெற்கு", "Therku", "South"),
];

const TASTES: &[Entry] = &[
    e("இனிப்பு", "Inippu", "Sweet"),
    e("புளிப்பு", "Pulippu", "Sour"),
    e("கசப்பு", "Kasappu", "Bitter"),
    e("உவர்ப்பு", "Uvarppu", "Salty"),
    e("காரப்பு", "Kaarappu", "Spicy"),
    e("துவர்ப்பு", "Thuvarppu", "Astringent"),
];

const RELATIONS: &[Entry] = &[
    e("அம்மா", "Amma", "Mother"),
    e("அப்பா", "Appa", "Father"),
    e("அண்ணன்", "Annan", "Elder brother"),
    e("தம்பி", "Thambi", "Younger brother"),
    e("அக்கா", "Akka", "Elder sister"),
    e("தங்கை", "Thangai", "Younger sister"),
    e("தாத்தா", "Thaatha", "Grandfather"),
    e("பாட்டி", "Paatti", "Grandmother"),
    e("மாமா", "Maama", "Uncle (maternal)"),
    e("அத்தை", "Athai", "Aunt (paternal)"),
];

const COLORS: &[Entry] = &[
    e("சிவப்பு", "Sivappu", "Red"),
    e("பச்சை", "Pachai", "Green"),
    e("நீலம்", "Neelam", "Blue"),
    e("மஞ்சள்", "Manjal", "Yellow"),
    e("வெள்ளை", "Vellai", "White"),
    e("கருப்பு", "Karuppu", "Black"),
    e("ஊதா", "Oodha", "Purple"),
    e("செம்மஞ்சள்", "Semmanjal", "Orange"),
];

const ANIMALS: &[Entry] = &[
    e("சிங்கம்", "Singam", "Lion"),
    e("புலி", "Puli", "Tiger"),
    e("யானை", "Yaanai", "Elephant"),
    e("பசு", "Pasu", "Cow"),
    e("குரங்கு", "Kurangu", "Monkey"),
    e("மான்", "Maan", "Deer"),
    e("நாய்", "Naai", "Dog"),
    e("பூனை", "Poonai", "Cat"),
];

const BIRDS: &[Entry] = &[
    e("மயில்", "Mayil", "Peacock"),
    e("கிளி", "Kili", "Parrot"),
    e("காகம்", "Kaagam", "Crow"),
    e("குயில்", "Kuyil", "Cuckoo"),
    e("கழுகு", "Kazhugu", "Eagle"),
    e("புறா", "Puraa", "Pigeon"),
    e("வாத்து", "Vaaththu", "Duck"),
    e("கோழி", "Kozhi", "Hen"),
];

const BODY_PARTS: &[Entry] = &[
    e("தலை", "Thalai", "Head"),
    e("கண்", "Kan", "Eye"),
    e("காது", "Kaadhu", "Ear"),
    e("மூக்கு", "Mookku", "Nose"),
    e("வாய்", "Vaai", "Mouth"),
    e("கை", "Kai", "Hand"),
    e("கால்", "Kaal", "Leg"),
    e("பல்", "Pal", "Tooth"),
];

const VEGETABLES: &[Entry] = &[
    e("கத்திரிக்காய்", "Kathirikkai", "Brinjal"),
    e("வெண்டைக்காய்", "Vendaikkai", "Okra"),
    e("தக்காளி", "Thakkali", "Tomato"),
    e("உருளைக்கிழங்கு", "Urulaikizhangu", "Potato"),
    e("வெங்காயம்", "Vengayam", "Onion"),
    e("முருங்கைக்காய்", "Murungakkai", "Drumstick"),
    e("பூசணிக்காய்", "Poosanikkai", "Pumpkin"),
    e("கேரட்", "Carrot", "Carrot"),
];

const FRUITS: &[Entry] = &[
    e("மாம்பழம்", "Maambazham", "Mango"),
    e("பலாப்பழம்", "Palaapazham", "Jackfruit"),
    e("வாழைப்பழம்", "Vaazhaipazham", "Banana"),
    e("எலுமிச்சை", "Elumichai", "Lemon"),
    e("திராட்சை", "Thiratchai", "Grapes"),
    e("கொய்யா", "Koiya", "Guava"),
    e("மாதுளை", "Maadhulai", "Pomegranate"),
    e("தர்பூசணி", "Dharboosani", "Watermelon"),
];

const FLOWERS: &[Entry] = &[
    e("தாமரை", "Thamarai", "Lotus"),
    e("மல்லிகை", "Malligai", "Jasmine"),
    e("ரோஜா", "Roja", "Rose"),
    e("செம்பருத்தி", "Sembaruthi", "Hibiscus"),
    e("சூரியகாந்தி", "Sooryakanthi", "Sunflower"),
    e("சாமந்தி", "Saamanthi", "Marigold"),
    e("அல்லி", "Alli", "Lily"),
    e("கனகாம்பரம்", "Kanakambaram", "Firecracker flower"),
];

const ACTIONS: &[Entry] = &[
    e("நட", "Nada", "Walk"),
    e("ஓடு", "Odu", "Run"),
    e("சாப்பிடு", "Saappidu", "Eat"),
    e("குடி", "Kudi", "Drink"),
    e("தூங்கு", "Thoongu", "Sleep"),
    e("படி", "Padi", "Read"),
    e("எழுது", "Ezhuthu", "Write"),
    e("விளையாடு", "Vilaiyaadu", "Play"),
];

const PHRASES: &[Entry] = &[
    e("வணக்கம்", "Vanakkam", "Hello / Greetings"),
    e("நன்றி", "Nandri", "Thank you"),
    e("காலை வணக்கம்", "Kaalai vanakkam", "Good morning"),
    e("எப்படி இருக்கிறீர்கள்?", "Eppadi irukkireergal?", "How are you?"),
    e("நான் நலம்", "Naan nalam", "I am fine"),
    e("ஆம்", "Aam", "Yes"),
    e("இல்லை", "Illai", "No"),
    e("மன்னிக்கவும்", "Mannikkavum", "Sorry / Excuse me"),
    e("எனக்குத் தெரியாது", "Enakku theriyadhu", "I do not know"),
    e("உதவி செய்யுங்கள்", "Udhavi seiyungal", "Please help"),
];

macro_rules! topics {
    ($($variant:ident => ($id:literal, $ta:literal, $en:literal, $table:ident)),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Topic {
            $($variant,)*
        }

        impl Topic {
            pub const ALL: &'static [Topic] = &[$(Topic::$variant,)*];

            pub fn id(self) -> &'static str {
                match self {
                    $(Topic::$variant => $id,)*
                }
            }

            pub fn title(self, lang: Language) -> &'static str {
                match (self, lang) {
                    $(
                        (Topic::$variant, Language::Ta) => $ta,
                        (Topic::$variant, Language::En) => $en,
                    )*
                }
            }

            pub fn entries(self) -> &'static [Entry] {
                match self {
                    $(Topic::$variant => $table,)*
                }
            }
        }
    };
}

topics! {
    Vowels => ("vowels", "உயிர் எழுத்துகள்", "Vowels", VOWELS),
    Aayutham => ("aayutham", "ஆய்த எழுத்து", "Aayutham", AAYUTHAM),
    Consonants => ("consonants", "மெய் எழுத்துகள்", "Consonants", CONSONANTS),
    Uyirmei => ("uyirmei", "உயிர்மெய் எழுத்துகள்", "Compound letters", UYIRMEI),
    Grammar => ("ilakkanam", "இலக்கணம்", "Grammar", GRAMMAR),
    Numbers => ("numbers", "எண்கள்", "Numbers", NUMBERS),
    Days => ("days", "கிழமைகள்", "Days", DAYS),
    Months => ("months", "தமிழ் மாதங்கள்", "Months", MONTHS),
    Seasons => ("seasons", "பருவங்கள்", "Seasons", SEASONS),
    Directions => ("directions", "திசைகள்", "Directions", DIRECTIONS),
    Tastes => ("tastes", "அறுசுவை", "Tastes", TASTES),
    Relations => ("relations", "உறவுமுறைகள்", "Relations", RELATIONS),
    Colors => ("colors", "வண்ணங்கள்", "Colors", COLORS),
    Animals => ("animals", "விலங்குகள்", "Animals", ANIMALS),
    Birds => ("birds", "பறவைகள்", "Birds", BIRDS),
    BodyParts => ("bodyParts", "உடல் உறுப்புகள்", "Body parts", BODY_PARTS),
    Vegetables => ("vegetables", "காய்கறிகள்", "Vegetables", VEGETABLES),
    Fruits => ("fruits", "பழங்கள்", "Fruits", FRUITS),
    Flowers => ("flowers", "மலர்கள்", "Flowers", FLOWERS),
    Actions => ("actions", "செயல்கள்", "Actions", ACTIONS),
    Phrases => ("phrases", "பொதுவான சொற்றொடர்கள்", "Common phrases", PHRASES),
}

impl FromStr for Topic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL.iter().copied().find(|t| t.id() == s).ok_or(())
    }
}

pub const PAGE_SIZE: usize = 8;

/// One page of a table. `pages` is at least 1, even for an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paged<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub pages: usize,
}

/// A `size` of 0 counts as 1.
pub fn page_count(len: usize, size: usize) -> usize {
    let size = size.max(1);
    ((len + size - 1) / size).max(1)
}

/// Slices out `page`, clamped to the last page. A `size` of 0 counts as 1.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> Paged<'_, T> {
    let size = size.max(1);
    let pages = page_count(items.len(), size);
    let page = page.min(pages - 1);
    let start = (page * size).min(items.len());
    let end = (start + size).min(items.len());

    Paged {
        items: &items[start..end],
        page,
        pages,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KarkaView {
    Dashboard,
    Topic { topic: Topic, page: usize },
}

impl Default for KarkaView {
    fn default() -> Self { KarkaView::Dashboard }
}

impl KarkaView {
    pub fn open(&mut self, topic: Topic) { *self = KarkaView::Topic { topic, page: 0 }; }

    pub fn close(&mut self) { *self = KarkaView::Dashboard; }

    pub fn topic(&self) -> Option<Topic> {
        match self {
            KarkaView::Topic { topic, .. } => Some(*topic),
            KarkaView::Dashboard => None,
        }
    }

    /// Moves to `page`, clamped; no-op on the dashboard.
    pub fn goto(&mut self, target: usize) {
        if let KarkaView::Topic { topic, page } = self {
            *page = target.min(page_count(topic.entries().len(), PAGE_SIZE) - 1);
        }
    }

    pub fn next_page(&mut self) {
        if let KarkaView::Topic { page, .. } = *self {
            self.goto(page + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if let KarkaView::Topic { page, .. } = *self {
            self.goto(page.saturating_sub(1));
        }
    }

    pub fn current(&self) -> Option<Paged<'static, Entry>> {
        match *self {
            KarkaView::Topic { topic, page } => Some(paginate(topic.entries(), page, PAGE_SIZE)),
            KarkaView::Dashboard => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_entries_and_distinct_id() {
        let mut ids: Vec<_> = Topic::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), Topic::ALL.len());
        assert!(Topic::ALL.iter().all(|t| !t.entries().is_empty()));
        assert_eq!(Topic::Vowels.entries().len(), 12);
        assert_eq!(Topic::Consonants.entries().len(), 18);
        assert_eq!("bodyParts".parse::<Topic>(), Ok(Topic::BodyParts));
    }

    #[test]
    fn paginate_clamps_and_counts() {
        let items: Vec<u32> = (0..18).collect();

        let p = paginate(&items, 0, 8);
        assert_eq!((p.items.len(), p.pages), (8, 3));

        let p = paginate(&items, 9, 8);
        assert_eq!(p.page, 2);
        assert_eq!(p.items, &[16, 17]);

        let empty: [u32; 0] = [];
        let p = paginate(&empty, 3, 8);
        assert_eq!((p.page, p.pages, p.items.len()), (0, 1, 0));
    }

    #[test]
    fn zero_page_size_acts_as_one() {
        let items = [1, 2, 3];

        assert_eq!(page_count(3, 0), 3);
        assert_eq!(page_count(0, 0), 1);

        let p = paginate(&items, 1, 0);
        assert_eq!((p.page, p.pages, p.items), (1, 3, &[2][..]));
        assert_eq!(paginate(&[0u8; 0], 0, 0).items.len(), 0);
    }

    #[test]
    fn view_opens_at_first_page_and_closes_to_dashboard() {
        let mut v = KarkaView::default();
        v.next_page();
        assert_eq!(v, KarkaView::Dashboard);

        v.open(Topic::Consonants);
        v.next_page();
        v.next_page();
        v.next_page();
        assert_eq!(v.current().unwrap().page, 2);
        assert_eq!(v.current().unwrap().items.len(), 2);

        v.open(Topic::Days);
        assert_eq!(v.current().unwrap().page, 0);
        v.previous_page();
        assert_eq!(v.current().unwrap().page, 0);

        v.close();
        assert!(v.current().is_none());
        assert!(v.topic().is_none());
    }
}
