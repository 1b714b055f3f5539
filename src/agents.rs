use tracing::info;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::patterns;
use crate::stats::{Browser, BrowserCounts, BrowserRanking};

pub fn count_browsers(dataset: &Dataset) -> Result<BrowserCounts> {
    let mut counts = BrowserCounts::default();
    for row in dataset.rows() {
        counts.increment(patterns::classify_user_agent(row.user_agent()?));
    }
    Ok(counts)
}

pub fn browser_ranking(dataset: &Dataset) -> Result<BrowserRanking> {
    let ranking = count_browsers(dataset)?.into_ranking();

    if let Some(top) = ranking.top() {
        info!(
            action = "complete",
            component = "browser_ranking",
            top_browser = %top.browser,
            top_hits = top.hits,
            other_hits = ranking.hits(Browser::Other),
            "Browser ranking computed"
        );
    }

    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn dataset(agents: &[&str]) -> Dataset {
        Dataset::from(
            agents
                .iter()
                .map(|ua| vec!["/", "2020-01-01 00:00:00", *ua])
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_bucket_sum_equals_row_count() {
        let data = dataset(&[
            "Chrome/90",
            "Firefox/80",
            "Safari/605",
            "Trident/7.0",
            "Wget/1.20",
            "Chrome/91 Safari/537",
        ]);
        let counts = count_browsers(&data).unwrap();
        assert_eq!(counts.total(), data.len() as u64);
        assert_eq!(counts.get(Browser::Chrome), 2);
        assert_eq!(counts.get(Browser::Safari), 1);
        assert_eq!(counts.get(Browser::Ie), 1);
        assert_eq!(counts.get(Browser::Other), 1);
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let data = dataset(&["Firefox", "Firefox", "Safari", "Chrome", "Firefox"]);
        let ranking = browser_ranking(&data).unwrap();
        assert_eq!(ranking.entries().len(), 5);
        assert!(ranking
            .entries()
            .windows(2)
            .all(|pair| pair[0].hits >= pair[1].hits));
        assert_eq!(ranking.top().unwrap().browser, Browser::Firefox);
        assert_eq!(ranking.top().unwrap().hits, 3);
    }

    #[test]
    fn test_empty_dataset_ranks_all_zero() {
        let ranking = browser_ranking(&Dataset::default()).unwrap();
        assert!(ranking.entries().iter().all(|entry| entry.hits == 0));
    }

    #[test]
    fn test_quoted_user_agent_with_commas() {
        let data = crate::dataset::parse_rows(
            "/a.jpg,2014-01-27 00:00:01,\"Mozilla/5.0 (KHTML, like Gecko) Chrome/32.0 Safari/537.36\"",
        )
        .unwrap();
        let counts = count_browsers(&data).unwrap();
        assert_eq!(counts.get(Browser::Chrome), 1);
        assert_eq!(counts.get(Browser::Other), 0);
    }

    #[test]
    fn test_missing_user_agent_column_fails() {
        let data = Dataset::from(vec![vec!["/a.png", "2020-01-01 00:00:00"]]);
        assert!(matches!(
            count_browsers(&data),
            Err(ReportError::RowShape { column: 2, .. })
        ));
    }
}
