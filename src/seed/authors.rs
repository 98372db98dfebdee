use crate::entities::User;

macro_rules! authors {
    ($( $f:ident => ($id:literal, $name:literal, $avatar:literal) ),* $(,)?) => {
        $(
            pub fn $f() -> User {
                User {
                    id: $id,
                    name: $name.to_string(),
                    avatar_url: Some($avatar.to_string()),
                }
            }
        )*

        pub fn all() -> Vec<User> { vec![$( $f() ),*] }
    };
}

authors! {
    // poets
    bharathi => (101, "மகாகவி பாரதியார்", "https://ui-avatars.com/api/?name=MB&background=f43f5e&color=fff&bold=true"),
    bharathidasan => (102, "பாவேந்தர் பாரதிதாசன்", "https://ui-avatars.com/api/?name=PB&background=0ea5e9&color=fff&bold=true"),
    vairamuthu => (103, "கவிப்பேரரசு வைரமுத்து", "https://ui-avatars.com/api/?name=KV&background=8b5cf6&color=fff"),
    kannadasan => (104, "கவியரசு கண்ணதாசன்", "https://ui-avatars.com/api/?name=KK&background=10b981&color=fff"),
    na_muthukumar => (105, "நா. முத்துக்குமார்", "https://ui-avatars.com/api/?name=NM&background=f59e0b&color=fff"),

    // leaders and philosophers
    kalam => (201, "ஏ.பி.ஜெ. அப்துல் கலாம்", "https://ui-avatars.com/api/?name=AK&background=3b82f6&color=fff&bold=true"),
    vivekananda => (202, "சுவாமி விவேகானந்தர்", "https://ui-avatars.com/api/?name=SV&background=f97316&color=fff"),
    buddha => (204, "கௌதம புத்தர்", "https://ui-avatars.com/api/?name=GB&background=eab308&color=fff"),
    gandhi => (205, "மகாத்மா காந்தி", "https://ui-avatars.com/api/?name=MG&background=64748b&color=fff"),
    kamarajar => (206, "பெருந்தலைவர் காமராஜர்", "https://ui-avatars.com/api/?name=PK&background=ef4444&color=fff"),

    // storytellers and writers
    aesop => (301, "ஈசாப்", "https://ui-avatars.com/api/?name=Es&background=84cc16&color=fff"),
    kalki => (302, "கல்கி", "https://ui-avatars.com/api/?name=Kl&background=14b8a6&color=fff"),
    ki_ra => (304, "கி. ராஜநாராயணன்", "https://ui-avatars.com/api/?name=KR&background=d946ef&color=fff"),
    mu_va => (306, "மு. வரதராசனார்", "https://ui-avatars.com/api/?name=MV&background=059669&color=fff"),

    // community
    senthil => (401, "செந்தில் குமார்", "https://picsum.photos/seed/senthil/100"),
    anitha => (402, "அனிதா", "https://picsum.photos/seed/anitha/100"),
    raghavan => (403, "ராகவன்", "https://picsum.photos/seed/raghavan/100"),
    meena => (404, "மீனாட்சி", "https://picsum.photos/seed/meena/100"),
}

/// Identity installed by the login stub.
pub fn reader() -> User {
    User {
        id: 1,
        name: "வாசகர்".to_string(),
        avatar_url: Some(
            "https://ui-avatars.com/api/?name=User&background=be123c&color=fff".to_string(),
        ),
    }
}
