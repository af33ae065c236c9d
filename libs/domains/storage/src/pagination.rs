//! Offset pagination over a fully materialized result set.

/// One page of results plus the totals it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_more: bool,
}

/// Cut page `page` (0-based) of `page_size` items out of `items`.
///
/// A page past the end is empty rather than an error. A `page_size` of zero
/// reports a single page.
pub fn paginate<T>(items: Vec<T>, page: u64, page_size: u64) -> Page<T> {
    let total_items = items.len() as u64;
    let total_pages = if page_size > 0 {
        total_items.div_ceil(page_size)
    } else {
        1
    };

    let offset = page.saturating_mul(page_size);
    let end = offset.saturating_add(page_size);
    let has_more = end < total_items;

    let start = offset.min(total_items) as usize;
    let stop = end.min(total_items) as usize;
    let items = items.into_iter().skip(start).take(stop - start).collect();

    Page {
        items,
        total_items,
        total_pages,
        page,
        page_size,
        has_more,
    }
}

/// `{path}?{params}&page={page + 1}&page_size={page_size}` with every value
/// percent-encoded.
pub fn next_page_url(path: &str, params: &[(&str, String)], page: u64, page_size: u64) -> String {
    let next_page = page.saturating_add(1).to_string();
    let page_size = page_size.to_string();

    let query = params
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .chain([("page", next_page.as_str()), ("page_size", page_size.as_str())])
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let page = paginate((0..10).collect(), 0, 4);
        assert_eq!(page.items, vec![0, 1, 2, 3]);
        assert_eq!(page.total_items, 10);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);
    }

    #[test]
    fn test_last_partial_page() {
        let page = paginate((0..10).collect(), 2, 4);
        assert_eq!(page.items, vec![8, 9]);
        assert!(!page.has_more);
    }

    #[test]
    fn test_exact_fit_has_no_more() {
        let page = paginate((0..8).collect(), 1, 4);
        assert_eq!(page.items, vec![4, 5, 6, 7]);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate((0..3).collect::<Vec<i32>>(), 5, 2);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
        assert!(!page.has_more);
    }

    #[test]
    fn test_zero_page_size() {
        let page = paginate((0..3).collect::<Vec<i32>>(), 0, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<i32>::new(), 0, 10);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = paginate((0..3).collect::<Vec<i32>>(), u64::MAX, u64::MAX);
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_pages_cover_everything_once() {
        let all: Vec<u32> = (0..23).collect();
        let page_size = 5;

        let mut seen = Vec::new();
        let mut page = 0;
        loop {
            let current = paginate(all.clone(), page, page_size);
            seen.extend(current.items);
            if !current.has_more {
                break;
            }
            page += 1;
        }

        assert_eq!(seen, all);
    }

    #[test]
    fn test_next_page_url_appends_paging() {
        let params = vec![("width", "20".to_string()), ("country_code", "jp".to_string())];
        assert_eq!(
            next_page_url("/api/search_storage", &params, 0, 50),
            "/api/search_storage?width=20&country_code=jp&page=1&page_size=50"
        );
    }

    #[test]
    fn test_next_page_url_encodes_values() {
        let params = vec![("q", "a b&c".to_string())];
        assert_eq!(
            next_page_url("/s", &params, 3, 10),
            "/s?q=a%20b%26c&page=4&page_size=10"
        );
    }
}
