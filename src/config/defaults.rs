/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
use super::CategoryRule;

// Source defaults
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/yokesh-ks/iptv/master/streams/in.m3u";
pub const DEFAULT_CONNECT_TIMEOUT: &str = "10s";
pub const DEFAULT_REQUEST_TIMEOUT: &str = "60s";

// Output defaults
pub const DEFAULT_OUTPUT_PATH: &str = "./data/channels.json";
pub const DEFAULT_SPLIT_DIR: &str = "./data/tv";
pub const DEFAULT_DATASET_VERSION: &str = "1.0.0";
pub const DEFAULT_PRETTY_OUTPUT: bool = true;

// Catalog defaults
pub const DEFAULT_CATEGORY: &str = "entertainment";
pub const DEFAULT_FEATURED_DISPLAY_ORDER: i32 = 1;
pub const DEFAULT_STANDARD_DISPLAY_ORDER: i32 = 2;
pub const DEFAULT_MAX_ID_LENGTH: usize = 50;

/// Curated names flagged as featured on the home surface
pub const DEFAULT_FEATURED_CHANNELS: &[&str] = &[
    "Aaj Tak",
    "ABP News",
    "NDTV India",
    "Zee News",
    "India TV",
    "Colors HD",
    "Star Plus HD",
    "Sony TV HD",
    "Zee TV HD",
    "Zee Cinema HD",
    "Star Gold HD",
    "Sony Max HD",
    "&pictures HD",
    "9XM",
    "MTV Beats HD",
    "Star Sports 1 HD",
    "Sony Ten 1 HD",
    "Discovery Channel",
    "National Geographic",
    "Sony Sab HD",
    "Star Bharat HD",
];

/// Known languages; the first entry is the fallback
pub const DEFAULT_LANGUAGES: &[&str] = &[
    "Hindi",
    "English",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Bengali",
    "Marathi",
    "Punjabi",
    "Gujarati",
];

/// Category table in classification priority order
pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "news",
            "News",
            "newspaper",
            1,
            &[
                "aaj tak",
                "abp",
                "india news",
                "republic",
                "times now",
                "ndtv",
                "news18",
                "zee news",
                "news24",
                "tv9",
                "dd news",
                "news",
                "cnbc",
                "et now",
            ],
        ),
        CategoryRule::new(
            "entertainment",
            "Entertainment",
            "tv",
            2,
            &[
                "colors",
                "star plus",
                "sony",
                "zee tv",
                "&tv",
                "sab",
                "star bharat",
                "dangal",
                "rishtey",
                "shemaroo",
                "entertainment",
            ],
        ),
        CategoryRule::new(
            "movies",
            "Movies",
            "film",
            3,
            &[
                "cinema",
                "movies",
                "movie",
                "gold",
                "max",
                "pix",
                "flix",
                "bollywood",
                "pictures",
            ],
        ),
        CategoryRule::new(
            "music",
            "Music",
            "music.note",
            4,
            &[
                "music",
                "9xm",
                "9x jalwa",
                "b4u",
                "mtv",
                "vh1",
                "mastii",
                "sangeet",
                "hungama",
                "zoom",
            ],
        ),
        CategoryRule::new(
            "sports",
            "Sports",
            "sportscourt",
            5,
            &[
                "sport",
                "cricket",
                "football",
                "tennis",
                "espn",
                "star sports",
                "sony ten",
                "eurosport",
            ],
        ),
        CategoryRule::new(
            "kids",
            "Kids",
            "figure.2.and.child.holdinghands",
            6,
            &[
                "kids",
                "nick",
                "pogo",
                "disney",
                "cartoon",
                "discovery kids",
                "hungama tv",
                "sony yay",
            ],
        ),
        CategoryRule::new(
            "devotional",
            "Devotional",
            "heart.circle",
            7,
            &[
                "aastha",
                "sanskar",
                "bhakti",
                "devotional",
                "god",
                "spiritual",
                "iskcon",
                "shubh",
            ],
        ),
        CategoryRule::new(
            "regional",
            "Regional",
            "globe",
            8,
            &[
                "tamil",
                "telugu",
                "kannada",
                "malayalam",
                "marathi",
                "bangla",
                "bengali",
                "punjabi",
                "gujarati",
                "odia",
                "assamese",
                "urdu",
            ],
        ),
    ]
}
