use regex::Regex;
use std::sync::LazyLock;

use crate::stats::Browser;

/// Matched anywhere in the path, so `photo.png.txt` counts as an image.
pub const IMAGE_PATTERN: &str = r"(?i)\.jpg|\.gif|\.png";

static IMAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IMAGE_PATTERN).expect("image pattern is a valid regex"));

/// Zero-padded `YYYY-MM-DD HH:MM:SS`, nothing before or after.
pub const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

static TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is a valid regex")
});

/// Checked in order; the first substring found in the user agent wins.
pub const BROWSER_PATTERNS: [(&str, Browser); 4] = [
    ("Chrome", Browser::Chrome),
    ("Firefox", Browser::Firefox),
    ("Safari", Browser::Safari),
    ("Trident", Browser::Ie),
];

pub fn is_image_path(path: &str) -> bool {
    IMAGE_REGEX.is_match(path)
}

pub fn is_exact_timestamp(value: &str) -> bool {
    TIMESTAMP_REGEX.is_match(value)
}

pub fn classify_user_agent(user_agent: &str) -> Browser {
    BROWSER_PATTERNS
        .iter()
        .find(|(pattern, _)| user_agent.contains(pattern))
        .map_or(Browser::Other, |&(_, browser)| browser)
}
