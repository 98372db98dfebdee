use chrono::{TimeZone, Utc};

use super::authors;
use crate::entities::{Category, Comment, Post, PostId, User};

// 2024-01-01T00:00:00Z; seed post `id` n was written n hours later.
const SEED_EPOCH: i64 = 1_704_067_200;

fn post(
    id: PostId,
    category: Category,
    author: User,
    title: &str,
    content: &str,
    likes: u32,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author,
        category,
        likes,
        comments: vec![],
        created_at: Utc
            .timestamp_opt(SEED_EPOCH + (id - 1000) * 3600, 0)
            .single()
            .unwrap_or_default(),
    }
}

fn with_comment(mut p: Post, id: i64, user: User, text: &str) -> Post {
    let created_at = p.created_at + chrono::Duration::minutes(30);
    p.comments.push(Comment {
        id,
        user,
        text: text.to_string(),
        created_at,
    });
    p
}

pub fn kavithai() -> Vec<Post> {
    use Category::Kavithai;

    vec![
        with_comment(
            post(
                1001,
                Kavithai,
                authors::bharathi(),
                "அச்சமில்லை",
                "அச்சமில்லை அச்சமில்லை அச்சமென்பதில்லையே\nஉச்சிமீது வானிடிந்து வீழுகின்ற போதினும்\nஅச்சமில்லை அச்சமில்லை அச்சமென்பதில்லையே.",
                128,
            ),
            1,
            authors::senthil(),
            "ஒவ்வொரு முறை படிக்கும்போதும் புதிய துணிவு பிறக்கிறது.",
        ),
        post(
            1009,
            Kavithai,
            authors::bharathidasan(),
            "இன்பத் தமிழ்",
            "தமிழுக்கும் அமுதென்று பேர்! அந்தத்\nதமிழ் இன்பத் தமிழ் எங்கள் உயிருக்கு நேர்!\nதமிழுக்கு நிலவென்று பேர்! இன்பத்\nதமிழ் எங்கள் சமூகத்தின் விளைவுக்கு நீர்!",
            96,
        ),
        post(
            1017,
            Kavithai,
            authors::na_muthukumar(),
            "அம்மாவின் கைகள்",
            "அம்மாவின் கைகளில் மழைக்கால இரவுகள்\nகதகதப்பாய் உறங்கின.\nதாய் மடியைத் தாண்டி\nஎந்தத் தேசமும் எனக்குப் பெரிதில்லை.",
            74,
        ),
        post(
            1025,
            Kavithai,
            authors::vairamuthu(),
            "நிலாவின் கடிதம்",
            "கடல் அலைகள் எழுதிய கவிதையை\nநிலா இரவெல்லாம் வாசிக்கிறது.\nஇயற்கை என்னும் பெரும் புத்தகத்தில்\nநான் ஒரு சிறிய மலர்.",
            52,
        ),
        post(
            1033,
            Kavithai,
            authors::kannadasan(),
            "காதல் சொல்லும் மொழி",
            "காதல் என்பது கண்களின் மொழி;\nசொல்லாமல் சொல்லும் சொற்கள் அதில் ஆயிரம்.",
            61,
        ),
    ]
}

pub fn stories() -> Vec<Post> {
    use Category::Kathai;

    vec![
        post(
            1002,
            Kathai,
            authors::aesop(),
            "முயலும் ஆமையும்",
            "வேகமாக ஓடும் முயல் ஆமையைக் கேலி செய்தது. பந்தயம் தொடங்கியது. தன் வேகத்தை நம்பிய முயல் வழியில் உறங்கியது. விடாமுயற்சியுடன் நடந்த ஆமை இலக்கை அடைந்தது. நிதானமும் உழைப்பும் வெற்றி தரும்.",
            88,
        ),
        post(
            1010,
            Kathai,
            authors::ki_ra(),
            "கோபல்ல கிராமத்து மழை",
            "கரிசல் மண்ணில் முதல் மழை விழுந்தபோது ஊரே வெளியே வந்து நின்றது. குழந்தைகள் காகிதக் கப்பல் விட்டனர். பாட்டி மட்டும் வானத்தைப் பார்த்து இந்த வருஷம் விளைச்சல் நிச்சயம் என்று சிரித்தாள்.",
            47,
        ),
        post(
            1018,
            Kathai,
            authors::kalki(),
            "வந்தியத்தேவனின் பயணம்",
            "வீர நாராயண ஏரிக்கரையில் குதிரையைச் செலுத்தியபடி வந்தியத்தேவன் ஆடிப்பெருக்கின் அழகை ரசித்தான். அவன் மனதில் அரசியல் சதிகளின் நிழல் படர்ந்திருந்தது.",
            103,
        ),
    ]
}

pub fn quotes() -> Vec<Post> {
    use Category::Merkol;

    vec![
        post(
            1003,
            Merkol,
            authors::kalam(),
            "கனவு காணுங்கள்",
            "கனவு என்பது தூக்கத்தில் வருவது அல்ல; உங்களைத் தூங்க விடாமல் செய்வதே கனவு.",
            210,
        ),
        post(
            1011,
            Merkol,
            authors::vivekananda(),
            "எழுமின் விழிமின்",
            "எழுமின், விழிமின், குறி சாரும் வரை நில்லாது செல்மின்.",
            150,
        ),
        post(
            1019,
            Merkol,
            authors::gandhi(),
            "மாற்றம்",
            "இந்த உலகில் நீ காண விரும்பும் மாற்றமாக நீயே இரு.",
            134,
        ),
    ]
}

pub fn katturai() -> Vec<Post> {
    use Category::Katturai;

    vec![
        post(
            1004,
            Katturai,
            authors::mu_va(),
            "தமிழும் வாழ்க்கையும்",
            "மொழி என்பது வெறும் கருவி அல்ல; அது ஒரு இனத்தின் வாழ்க்கை முறை. தமிழ் இலக்கியம் அறம், பொருள், இன்பம் என வாழ்வின் எல்லாப் பகுதிகளையும் பேசுகிறது.",
            39,
        ),
        post(
            1012,
            Katturai,
            authors::senthil(),
            "இணைய யுகத்தில் வாசிப்பு",
            "திரைகள் பெருகிய காலத்திலும் ஆழ்ந்த வாசிப்புக்கு இடம் உண்டு. நாளொன்றுக்கு இருபது நிமிடங்கள் புத்தகம் வாசிப்பது மன அமைதியைத் தரும்.",
            22,
        ),
        post(
            1020,
            Katturai,
            authors::anitha(),
            "நம் ஊர் ஏரிகள்",
            "பழந்தமிழர் நீர் மேலாண்மையில் சிறந்து விளங்கினர். ஏரிகளும் குளங்களும் ஊரின் உயிர்நாடியாக இருந்தன. அவற்றைக் காப்பது நம் கடமை.",
            31,
        ),
    ]
}

pub fn ponmozhigal() -> Vec<Post> {
    use Category::Ponmozhi;

    vec![
        post(
            1005,
            Ponmozhi,
            authors::buddha(),
            "மனமே எல்லாம்",
            "நாம் எதை நினைக்கிறோமோ அதுவாகவே ஆகிறோம்.",
            77,
        ),
        post(
            1013,
            Ponmozhi,
            authors::vivekananda(),
            "பலமே வாழ்வு",
            "பலமே வாழ்வு; பலவீனமே மரணம்.",
            64,
        ),
        post(
            1021,
            Ponmozhi,
            authors::kamarajar(),
            "கல்விக் கண்",
            "கல்வி ஒன்றே ஏழையின் கண்களைத் திறக்கும் சாவி.",
            58,
        ),
    ]
}

pub fn motivation() -> Vec<Post> {
    use Category::Ookkam;

    vec![
        post(
            1006,
            Ookkam,
            authors::kalam(),
            "தோல்வி ஒரு பாடம்",
            "தோல்வி என்பது முடிவு அல்ல. FAIL என்றால் First Attempt In Learning. மீண்டும் முயலுங்கள்.",
            176,
        ),
        post(
            1014,
            Ookkam,
            authors::raghavan(),
            "சிறு அடிகள்",
            "பெரிய இலக்குகள் சிறு அடிகளால் அடையப்படுகின்றன. இன்று ஒரு அடி எடுத்து வையுங்கள்.",
            43,
        ),
        post(
            1022,
            Ookkam,
            authors::meena(),
            "காலை நம்பிக்கை",
            "ஒவ்வொரு காலையும் ஒரு புதிய வாய்ப்பு. நேற்றைய தவறுகள் இன்றைய பாடங்கள்.",
            29,
        ),
    ]
}

pub fn history() -> Vec<Post> {
    use Category::Varalaru;

    vec![
        post(
            1007,
            Varalaru,
            authors::anitha(),
            "கல்லணை",
            "கரிகால சோழன் காவிரியின் குறுக்கே கட்டிய கல்லணை இன்றும் பயன்பாட்டில் உள்ள உலகின் பழமையான அணைகளில் ஒன்று.",
            91,
        ),
        post(
            1015,
            Varalaru,
            authors::senthil(),
            "தஞ்சைப் பெரிய கோவில்",
            "முதலாம் இராஜராஜ சோழனால் கட்டப்பட்ட பிரகதீஸ்வரர் கோவில் சோழர் கட்டடக் கலையின் உச்சம்.",
            85,
        ),
        post(
            1023,
            Varalaru,
            authors::raghavan(),
            "கீழடி அகழாய்வு",
            "வைகைக் கரையில் உள்ள கீழடி அகழாய்வு சங்க கால நகர நாகரிகத்தின் சான்றுகளை வெளிப்படுத்தியது.",
            67,
        ),
    ]
}

pub fn pazhamozhigal() -> Vec<Post> {
    use Category::Pazhamozhi;

    vec![
        post(
            1008,
            Pazhamozhi,
            authors::meena(),
            "சிறு துளி",
            "சிறு துளி பெரு வெள்ளம்.",
            40,
        ),
        post(
            1016,
            Pazhamozhi,
            authors::raghavan(),
            "ஆற்றில் போட்டாலும்",
            "ஆற்றில் போட்டாலும் அளந்து போடு.",
            33,
        ),
        post(
            1024,
            Pazhamozhi,
            authors::anitha(),
            "கற்றது கைம்மண் அளவு",
            "கற்றது கைம்மண் அளவு, கல்லாதது உலகளவு.",
            57,
        ),
    ]
}
