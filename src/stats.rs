use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Browser {
    Chrome,
    Safari,
    Firefox,
    #[serde(rename = "IE")]
    Ie,
    Other,
}

impl Browser {
    /// Fixed label order, used as the starting point of the ranking sort.
    pub const ALL: [Browser; 5] = [
        Browser::Chrome,
        Browser::Safari,
        Browser::Firefox,
        Browser::Ie,
        Browser::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Safari => "Safari",
            Browser::Firefox => "Firefox",
            Browser::Ie => "IE",
            Browser::Other => "Other",
        }
    }

    fn index(self) -> usize {
        match self {
            Browser::Chrome => 0,
            Browser::Safari => 1,
            Browser::Firefox => 2,
            Browser::Ie => 3,
            Browser::Other => 4,
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageRatio {
    pub image_count: usize,
    pub total_count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserCounts {
    counts: [u64; 5],
}

impl BrowserCounts {
    pub fn increment(&mut self, browser: Browser) {
        self.counts[browser.index()] += 1;
    }

    pub fn get(&self, browser: Browser) -> u64 {
        self.counts[browser.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Orders browsers by descending hits. Equal counts come out in reverse
    /// of `Browser::ALL`; that tie order is not part of the contract.
    pub fn into_ranking(self) -> BrowserRanking {
        let mut entries: Vec<BrowserHits> = Browser::ALL
            .iter()
            .map(|&browser| BrowserHits {
                browser,
                hits: self.get(browser),
            })
            .collect();
        entries.sort_by_key(|entry| entry.hits);
        entries.reverse();
        BrowserRanking { entries }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrowserHits {
    pub browser: Browser,
    pub hits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BrowserRanking {
    entries: Vec<BrowserHits>,
}

impl BrowserRanking {
    pub fn entries(&self) -> &[BrowserHits] {
        &self.entries
    }

    /// Never `None` for a ranking built from `BrowserCounts`.
    pub fn top(&self) -> Option<&BrowserHits> {
        self.entries.first()
    }

    pub fn hits(&self, browser: Browser) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.browser == browser)
            .map_or(0, |entry| entry.hits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub hits: u64,
}

/// Hour-of-day histogram, kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HourlyHits {
    buckets: Vec<HourBucket>,
}

impl HourlyHits {
    pub fn record(&mut self, hour: u32) {
        match self.buckets.iter_mut().find(|bucket| bucket.hour == hour) {
            Some(bucket) => bucket.hits += 1,
            None => self.buckets.push(HourBucket { hour, hits: 1 }),
        }
    }

    pub fn buckets(&self) -> &[HourBucket] {
        &self.buckets
    }

    pub fn get(&self, hour: u32) -> Option<u64> {
        self.buckets
            .iter()
            .find(|bucket| bucket.hour == hour)
            .map(|bucket| bucket.hits)
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.hits).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub image_ratio: ImageRatio,
    pub browsers: BrowserRanking,
    pub hourly: HourlyHits,
}
