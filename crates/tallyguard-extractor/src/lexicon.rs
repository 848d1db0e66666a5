//! Controlled vocabularies for Uganda election claims
//!
//! Entries are ordered slices, not maps: extraction scans them in order
//! and takes the first hit, so the output is deterministic for a fixed
//! lexicon.

/// Party acronyms and their full names.
pub const KNOWN_PARTIES: &[(&str, &str)] = &[
    ("NRM", "National Resistance Movement"),
    ("NUP", "National Unity Platform"),
    ("FDC", "Forum for Democratic Change"),
    ("DP", "Democratic Party"),
    ("UPC", "Uganda Peoples Congress"),
    ("ANT", "Alliance for National Transformation"),
    ("JEEMA", "Justice Forum"),
    ("PPP", "People's Progressive Party"),
    ("UPDF", "Uganda Peoples' Defence Forces"),
    ("RPP", "Revolutionary People's Party"),
    ("NPP", "National Peasants Party"),
    ("CMP", "Common Man's Party"),
    ("CP", "Conservative Party"),
];

/// Known district and constituency names.
///
/// Matching must try longer names first so "Kampala Central" beats
/// "Kampala"; see [`districts_longest_first`].
pub const KNOWN_DISTRICTS: &[&str] = &[
    "Kampala",
    "Wakiso",
    "Mukono",
    "Jinja",
    "Gulu",
    "Lira",
    "Mbale",
    "Soroti",
    "Arua",
    "Mbarara",
    "Kabale",
    "Fort Portal",
    "Kabarole",
    "Masaka",
    "Entebbe",
    "Hoima",
    "Kasese",
    "Tororo",
    "Iganga",
    "Bushenyi",
    "Ntungamo",
    "Luweero",
    "Mityana",
    "Mpigi",
    "Kayunga",
    "Buikwe",
    "Busia",
    "Pallisa",
    "Kumi",
    "Katakwi",
    "Moroto",
    "Kotido",
    "Adjumani",
    "Moyo",
    "Nebbi",
    "Masindi",
    "Kibaale",
    "Bundibugyo",
    "Kisoro",
    "Kanungu",
    "Rukungiri",
    "Isingiro",
    "Kiruhura",
    "Lyantonde",
    "Rakai",
    "Kalangala",
    "Sembabule",
    "Gomba",
    "Butambala",
    "Kiboga",
    "Nakaseke",
    "Nakasongola",
    "Kamuli",
    "Buyende",
    "Luuka",
    "Namutumba",
    "Bugiri",
    "Namayingo",
    "Mayuge",
    "Kaliro",
    "Budaka",
    "Kibuku",
    "Butaleja",
    "Sironko",
    "Bulambuli",
    "Kapchorwa",
    "Bukwo",
    "Kween",
    "Amuria",
    "Ngora",
    "Serere",
    "Kaberamaido",
    "Amolatar",
    "Dokolo",
    "Alebtong",
    "Otuke",
    "Kole",
    "Oyam",
    "Apac",
    "Kwania",
    "Pader",
    "Agago",
    "Kitgum",
    "Lamwo",
    "Amuru",
    "Nwoya",
    "Omoro",
    "Zombo",
    "Pakwach",
    "Buliisa",
    "Kagadi",
    "Kakumiro",
    "Kiryandongo",
    "Kyankwanzi",
    "National",
    "UPDF",
    "Nakawa",
    "Obongi",
    "Kampala Central",
];

/// Recognized contested positions.
pub const KNOWN_POSITIONS: &[&str] = &[
    "President",
    "Member of Parliament",
    "MP",
    "LC5 Chairman",
    "LC5 Chairperson",
    "Woman Member of Parliament",
    "Woman MP",
    "District Chairman",
    "Mayor",
    "UPDF Male Representative to Parliament",
    "UPDF Female Representative to Parliament",
    "UPDF Representative",
];

/// Candidate aliases mapped to canonical names, scanned in order.
pub const KNOWN_CANDIDATES: &[(&str, &str)] = &[
    ("museveni", "Yoweri Kaguta Museveni"),
    ("yoweri museveni", "Yoweri Kaguta Museveni"),
    ("kaguta", "Yoweri Kaguta Museveni"),
    ("m7", "Yoweri Kaguta Museveni"),
    ("bobi wine", "Robert Kyagulanyi Ssentamu"),
    ("kyagulanyi", "Robert Kyagulanyi Ssentamu"),
    ("robert kyagulanyi", "Robert Kyagulanyi Ssentamu"),
    ("besigye", "Kizza Besigye"),
    ("kizza besigye", "Kizza Besigye"),
    ("mugisha muntu", "Gregory Mugisha Muntu Oyera"),
    ("muntu", "Gregory Mugisha Muntu Oyera"),
    ("nandala mafabi", "James Nathan Nandala Mafabi"),
    ("mafabi", "James Nathan Nandala Mafabi"),
    ("patrick amuriat", "Patrick Oboi Amuriat"),
    ("amuriat", "Patrick Oboi Amuriat"),
    ("norbert mao", "Norbert Mao"),
    ("mao", "Norbert Mao"),
    ("nsereko", "Muhammad Nsereko"),
    ("muhammad nsereko", "Muhammad Nsereko"),
    ("nancy kalembe", "Nancy Kalembe"),
    ("kalembe", "Nancy Kalembe"),
    ("tumukunde", "Henry Tumukunde"),
    ("henry tumukunde", "Henry Tumukunde"),
    ("katumba wamala", "Katumba Wamala"),
    ("wamala", "Katumba Wamala"),
    ("ssenyonyi", "Joel Ssenyonyi"),
    ("joel ssenyonyi", "Joel Ssenyonyi"),
    ("okidling sam", "Okidling SAM"),
    ("okidling", "Okidling SAM"),
    ("mugira james", "Mugira James"),
    ("mugira", "Mugira James"),
    ("kavuma samuel", "Kavuma Samuel"),
    ("meeme sylivia", "Meeme Sylivia"),
    ("meeme", "Meeme Sylivia"),
    ("ikiriza knight", "Ikiriza Knight"),
    ("minsa kabanda", "Hajjat Minsa Kabanda"),
    ("rubongoya", "David Lewis Rubongoya"),
];

/// Canonical names of known presidential candidates, lowercase.
///
/// When a claim names one of these without a position, the position
/// defaults to "President".
pub const PRESIDENTIAL_CANDIDATES: &[&str] = &[
    "yoweri kaguta museveni",
    "robert kyagulanyi ssentamu",
    "kizza besigye",
    "gregory mugisha muntu oyera",
    "james nathan nandala mafabi",
    "patrick oboi amuriat",
    "nancy kalembe",
    "henry tumukunde",
    "katumba wamala",
    "norbert mao",
];

/// Victory/defeat keywords, first occurrence captured as the result claim.
pub const RESULT_KEYWORDS: &[&str] = &[
    "won",
    "wins",
    "winning",
    "lost",
    "loses",
    "losing",
    "leading",
    "leads",
    "elected",
    "defeated",
    "beat",
    "beats",
    "beating",
    "declared",
    "announced",
    "garnered",
    "received",
    "got",
    "polled",
];

/// Keywords asserting victory, cross-checked against the official
/// winner flag.
pub const WIN_KEYWORDS: &[&str] = &["won", "wins", "winning", "elected"];

/// Keywords asserting defeat.
pub const LOSS_KEYWORDS: &[&str] = &["lost", "loses", "losing", "defeated"];

/// Districts sorted longest-first for containment matching.
pub fn districts_longest_first() -> Vec<&'static str> {
    let mut districts: Vec<&'static str> = KNOWN_DISTRICTS.to_vec();
    districts.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    districts
}
