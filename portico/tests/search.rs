//! Tests for the search box and toast queue.

use std::time::{Duration, Instant};

use portico::PortalConfig;
use portico::search::SearchBox;
use portico::toast::{Toast, ToastLevel, ToastQueue};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_suggestion_fires_after_quiet_period() {
    let start = Instant::now();
    let mut search = SearchBox::default();
    search.on_input("rus", start);
    search.on_input("rust", start + ms(100));

    assert_eq!(search.poll_suggestion(start + ms(500)), None);
    assert_eq!(search.next_deadline(), Some(start + ms(600)));
    assert_eq!(search.poll_suggestion(start + ms(600)).as_deref(), Some("rust"));
    assert_eq!(search.poll_suggestion(start + ms(2000)), None);
}

#[test]
fn test_short_query_never_suggests() {
    let start = Instant::now();
    let mut search = SearchBox::default();
    search.on_input("ru", start);
    assert_eq!(search.poll_suggestion(start + ms(1000)), None);
    assert_eq!(search.next_deadline(), None);
}

#[test]
fn test_query_length_counts_utf16_units() {
    let search = SearchBox::default();
    assert!(search.should_suggest("日本語"));
    assert!(!search.should_suggest("日本"));
    assert!(search.should_suggest("😀😀"));
    assert!(!search.should_suggest("😀"));
}

#[test]
fn test_search_url_encodes_query() {
    let search = SearchBox::default();
    assert_eq!(
        search.search_url("rust & go").as_deref(),
        Some("/cours/?search=rust%20%26%20go")
    );
    assert_eq!(search.search_url("   "), None);
}

#[test]
fn test_search_box_follows_config() {
    let config = PortalConfig {
        debounce_ms: 200,
        min_suggest_len: 1,
        search_path: "/search".to_string(),
        ..PortalConfig::default()
    };
    let start = Instant::now();
    let mut search = SearchBox::from_config(&config);
    search.on_input("a", start);
    assert_eq!(search.poll_suggestion(start + ms(200)).as_deref(), Some("a"));
    assert_eq!(search.search_url("a").as_deref(), Some("/search?search=a"));
}

#[test]
fn test_toasts_expire_after_duration() {
    let start = Instant::now();
    let mut toasts = ToastQueue::new();
    toasts.show(Toast::success("Saved"), start);
    toasts.show(Toast::error("Failed").with_duration(ms(1000)), start + ms(100));

    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts.next_deadline(), Some(start + ms(1100)));

    let expired = toasts.expire(start + ms(1100));
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].level, ToastLevel::Error);

    assert!(toasts.expire(start + ms(4499)).is_empty());
    let expired = toasts.expire(start + ms(4500));
    assert_eq!(expired[0].message, "Saved");
    assert!(toasts.is_empty());
}

#[test]
fn test_plain_strings_become_info_toasts() {
    let start = Instant::now();
    let mut toasts = ToastQueue::new();
    toasts.show("hello", start);
    let toast = toasts.active().next().expect("toast shown");
    assert_eq!(toast.level, ToastLevel::Info);
    assert_eq!(toast.duration, ms(4500));
}
