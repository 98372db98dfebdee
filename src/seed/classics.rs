use crate::entities::{ClassicalChapter, ClassicalSection, ClassicalVerse, ClassicalWork, WorkBody};

fn verse(text: &str, explanation: &str) -> ClassicalVerse {
    ClassicalVerse {
        text: text.to_string(),
        explanation: match explanation {
            "" => None,
            e => Some(e.to_string()),
        },
    }
}

fn chapter(title: &str, verses: Vec<ClassicalVerse>) -> ClassicalChapter {
    ClassicalChapter {
        chapter: title.to_string(),
        verses,
    }
}

pub fn thirukkural() -> ClassicalWork {
    let aram = ClassicalSection {
        id: "aram".to_string(),
        title: "அறத்துப்பால்".to_string(),
        description: Some("வாழ்வின் நெறிகளை உரைக்கும் பகுதி".to_string()),
        chapters: vec![
            chapter("கடவுள் வாழ்த்து", vec![
                verse(
                    "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு.",
                    "எழுத்துக்கள் எல்லாம் அகரத்தை முதலாகக் கொண்டுள்ளன; அதுபோல உலகம் கடவுளை முதலாகக் கொண்டுள்ளது.",
                ),
                verse(
                    "கற்றதனால் ஆய பயனென்கொல் வாலறிவன்\nநற்றாள் தொழாஅர் எனின்.",
                    "தூய அறிவு வடிவான இறைவனின் திருவடிகளைத் தொழாவிட்டால், கற்ற கல்வியால் பயன் என்ன?",
                ),
                verse(
                    "மலர்மிசை ஏகினான் மாணடி சேர்ந்தார்\nநிலமிசை நீடுவாழ் வார்.",
                    "அன்பரின் மனமலரில் வீற்றிருக்கும் இறைவனின் திருவடிகளைச் சேர்ந்தவர் நீடு வாழ்வர்.",
                ),
                verse(
                    "வேண்டுதல் வேண்டாமை இலானடி சேர்ந்தார்க்கு\nயாண்டும் இடும்பை இல.",
                    "விருப்பு வெறுப்பு இல்லாத இறைவனைச் சேர்ந்தவர்க்கு எப்போதும் துன்பம் இல்லை.",
                ),
            ]),
            chapter("வான்சிறப்பு", vec![
                verse(
                    "வான்நின்று உலகம் வழங்கி வருதலால்\nதான்அமிழ்தம் என்றுணரற் பாற்று.",
                    "மழை பெய்வதால் உலகம் நிலைபெறுகிறது; ஆகவே மழையே அமிழ்தம் என்று உணர வேண்டும்.",
                ),
                verse(
                    "துப்பார்க்குத் துப்பாய துப்பாக்கித் துப்பார்க்குத்\nதுப்பாய தூஉம் மழை.",
                    "உண்பவர்க்கு உணவை விளைவித்துத் தானும் உணவாவது மழை.",
                ),
            ]),
        ],
    };

    let porul = ClassicalSection {
        id: "porul".to_string(),
        title: "பொருட்பால்".to_string(),
        description: Some("அரசியல், சமூக வாழ்வு குறித்த பகுதி".to_string()),
        chapters: vec![chapter("கல்வி", vec![
            verse(
                "கற்க கசடறக் கற்பவை கற்றபின்\nநிற்க அதற்குத் தக.",
                "கற்க வேண்டியவற்றைப் பிழையின்றிக் கற்று, கற்றபின் அதன்படி நடக்க வேண்டும்.",
            ),
            verse(
                "எண்ணென்ப ஏனை எழுத்தென்ப இவ்விரண்டும்\nகண்ணென்ப வாழும் உயிர்க்கு.",
                "எண்ணும் எழுத்தும் வாழும் மக்களுக்கு இரு கண்கள் போன்றவை.",
            ),
            verse(
                "தொட்டனைத் தூறும் மணற்கேணி மாந்தர்க்குக்\nகற்றனைத் தூறும் அறிவு.",
                "தோண்டும் அளவுக்கு மணற்கேணியில் நீர் ஊறும்; கற்கும் அளவுக்கு அறிவு ஊறும்.",
            ),
        ])],
    };

    let inbam = ClassicalSection {
        id: "inbam".to_string(),
        title: "காமத்துப்பால்".to_string(),
        description: Some("அகவாழ்வின் உணர்வுகளைப் பாடும் பகுதி".to_string()),
        chapters: vec![chapter("தகையணங்குறுத்தல்", vec![verse(
            "அணங்குகொல் ஆய்மயில் கொல்லோ கனங்குழை\nமாதர்கொல் மாலும்என் நெஞ்சு.",
            "இவள் தெய்வமகளோ, அழகிய மயிலோ, கனத்த குழை அணிந்த பெண்ணோ என என் நெஞ்சம் மயங்குகிறது.",
        )])],
    };

    ClassicalWork {
        id: "thirukkural".to_string(),
        title: "திருக்குறள்".to_string(),
        author: "திருவள்ளுவர்".to_string(),
        description: "அறம், பொருள், இன்பம் என மூன்று பால்களில் 1330 குறள்களைக் கொண்ட உலகப் பொதுமறை."
            .to_string(),
        body: WorkBody::Sectioned(vec![aram, porul, inbam]),
    }
}

pub fn aathichoodi() -> ClassicalWork {
    ClassicalWork {
        id: "aathichoodi".to_string(),
        title: "ஆத்திசூடி".to_string(),
        author: "ஔவையார்".to_string(),
        description: "சிறுவர்களுக்கான அறநெறிகளை உயிர் எழுத்து வரிசையில் சொல்லும் நூல்.".to_string(),
        body: WorkBody::Flat(vec![
            chapter("உயிர் வருக்கம்", vec![
                verse("அறம் செய விரும்பு", "நல்ல செயல்களைச் செய்ய விரும்பு."),
                verse("ஆறுவது சினம்", "கோபம் தணிய வேண்டியது."),
                verse("இயல்வது கரவேல்", "உன்னால் கொடுக்க முடிந்ததை மறைக்காதே."),
                verse("ஈவது விலக்கேல்", "பிறர் கொடுப்பதைத் தடுக்காதே."),
                verse("உடையது விளம்பேல்", "உன்னிடம் உள்ளதைப் பெருமையாகப் பேசாதே."),
                verse("ஊக்கமது கைவிடேல்", "முயற்சியைக் கைவிடாதே."),
            ]),
            chapter("உயிர் வருக்கம் (தொடர்ச்சி)", vec![
                verse("எண் எழுத்து இகழேல்", "கணிதத்தையும் இலக்கியத்தையும் இகழாதே."),
                verse("ஏற்பது இகழ்ச்சி", "பிறரிடம் இரந்து பெறுவது இழிவு."),
                verse("ஐயம் இட்டு உண்", "இல்லாதவர்க்குக் கொடுத்து உண்."),
                verse("ஒப்புரவு ஒழுகு", "உலக நடைமுறைக்கு ஏற்ப நட."),
                verse("ஓதுவது ஒழியேல்", "கற்பதை நிறுத்தாதே."),
                verse("ஔவியம் பேசேல்", "பொறாமைச் சொற்களைப் பேசாதே."),
                verse("அஃகம் சுருக்கேல்", "தானியத்தைக் குறைத்து அளக்காதே."),
            ]),
        ]),
    }
}

pub fn kondrai_vendhan() -> ClassicalWork {
    ClassicalWork {
        id: "kondrai-vendhan".to_string(),
        title: "கொன்றை வேந்தன்".to_string(),
        author: "ஔவையார்".to_string(),
        description: "வாழ்வியல் உண்மைகளை எளிய வரிகளில் சொல்லும் நீதி நூல்.".to_string(),
        body: WorkBody::Flat(vec![chapter("நீதிகள்", vec![
            verse("அன்னையும் பிதாவும் முன்னறி தெய்வம்", "தாயும் தந்தையும் நாம் முதலில் அறியும் தெய்வங்கள்."),
            verse("ஆலயம் தொழுவது சாலவும் நன்று", "கோவிலுக்குச் சென்று வணங்குவது மிக நல்லது."),
            verse("இல்லறம் அல்லது நல்லறம் அன்று", "இல்வாழ்க்கையை விடச் சிறந்த அறம் இல்லை."),
            verse("ஈயார் தேட்டைத் தீயார் கொள்வர்", "பிறர்க்குக் கொடுக்காதவர் சேர்த்த பொருளைத் தீயவர் கொள்வர்."),
            verse("உண்டி சுருங்குதல் பெண்டிர்க்கு அழகு", "அளவாக உண்பது பெண்களுக்கு அழகு."),
            verse("ஊருடன் பகைக்கின் வேருடன் கெடும்", "ஊரோடு பகை கொண்டால் அடியோடு அழிவர்."),
            verse("எண்ணும் எழுத்தும் கண்ணெனத் தகும்", "கணிதமும் இலக்கியமும் கண்களுக்கு நிகர்."),
            verse("ஏவா மக்கள் மூவா மருந்து", "சொல்லாமலே செய்யும் பிள்ளைகள் அமிழ்தம் போன்றவர்."),
        ])]),
    }
}
