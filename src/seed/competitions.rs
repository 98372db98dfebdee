use chrono::NaiveDate;

use crate::entities::{Competition, CompetitionStatus};

fn deadline(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default() }

pub fn all() -> Vec<Competition> {
    vec![
        Competition {
            id: 1,
            title: "பாரதியார் கவிதைப் போட்டி 2024".to_string(),
            description: "தேசிய கவிஞர் பாரதியாரின் பிறந்தநாளை முன்னிட்டு நடத்தப்படும் மாபெரும் கவிதைப் போட்டி. \"பெண் விடுதலை\" என்ற தலைப்பில் உங்கள் கவிதைகளை அனுப்புங்கள்.".to_string(),
            deadline: deadline(2024, 12, 11),
            status: CompetitionStatus::Active,
            prize: "₹10,000 + சான்றிதழ்".to_string(),
            image_url: Some("https://picsum.photos/seed/bharathi-comp/600/400".to_string()),
        },
        Competition {
            id: 2,
            title: "சிறுகதைப் போட்டி: கிராமத்து மண்".to_string(),
            description: "கிராமத்து வாழ்வியலை பிரதிபலிக்கும் சிறந்த சிறுகதைகளுக்கான போட்டி. உங்கள் கதைகள் 1500 வார்த்தைகளுக்கு மிகாமல் இருக்க வேண்டும்.".to_string(),
            deadline: deadline(2024, 11, 30),
            status: CompetitionStatus::Active,
            prize: "₹5,000 + புத்தகங்கள்".to_string(),
            image_url: Some("https://picsum.photos/seed/village-story/600/400".to_string()),
        },
        Competition {
            id: 3,
            title: "சங்க இலக்கிய வினாடி வினா".to_string(),
            description: "சங்க இலக்கியங்கள் குறித்த உங்கள் அறிவை சோதிக்க ஒரு அரிய வாய்ப்பு. இணைய வழியில் நடைபெறும் இந்த வினாடி வினாவில் பங்கேற்று பரிசுகளை வெல்லுங்கள்.".to_string(),
            deadline: deadline(2024, 10, 15),
            status: CompetitionStatus::Completed,
            prize: "தங்க நாணயம்".to_string(),
            image_url: Some("https://picsum.photos/seed/quiz-tamil/600/400".to_string()),
        },
    ]
}
