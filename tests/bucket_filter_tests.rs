// Window filter tests: whole vs partial buckets, edge allowances

use clustermon::listing::bucket_filter::WindowFilter;
use clustermon::listing::{ListingOptions, ListingWindow};
use clustermon::models::Bucket;

fn bucket(key: i64) -> Bucket {
    Bucket {
        key,
        doc_count: 1,
        ..Bucket::default()
    }
}

fn window(min_ms: i64, max_ms: i64, bucket_size_secs: u64) -> ListingWindow {
    ListingWindow {
        min_ms,
        max_ms,
        bucket_size_secs,
    }
}

fn options(ignore_early: bool, include_trailing_partial: bool) -> ListingOptions {
    ListingOptions {
        ignore_early,
        include_trailing_partial,
    }
}

#[test]
fn bucket_fully_inside_window_is_whole() {
    let filter = WindowFilter::new(&window(1_000, 10_000, 1), options(false, false));
    let buckets = vec![bucket(2_000)];
    assert!(filter.is_whole_at(&buckets, 0));
}

#[test]
fn bucket_ending_exactly_at_max_is_whole() {
    // key + bucket_size * 1000 == max is still inside the inclusive bound
    let filter = WindowFilter::new(&window(1_000, 3_000, 1), options(false, false));
    let buckets = vec![bucket(2_000)];
    assert!(filter.is_whole_at(&buckets, 0));
}

#[test]
fn bucket_overrunning_max_is_partial() {
    let filter = WindowFilter::new(&window(1_000, 2_500, 1), options(false, false));
    let buckets = vec![bucket(2_000)];
    assert!(!filter.is_whole_at(&buckets, 0));
}

#[test]
fn bucket_entirely_past_max_is_partial() {
    let filter = WindowFilter::new(&window(1_000, 2_000, 1), options(false, false));
    let buckets = vec![bucket(5_000)];
    assert!(!filter.is_whole_at(&buckets, 0));
}

#[test]
fn bucket_starting_before_min_is_partial_without_ignore_early() {
    let filter = WindowFilter::new(&window(1_000, 10_000, 1), options(false, false));
    let buckets = vec![bucket(500)];
    assert!(!filter.is_whole_at(&buckets, 0));
}

#[test]
fn ignore_early_accepts_clipped_first_bucket() {
    let filter = WindowFilter::new(&window(1_000, 10_000, 1), options(true, false));
    let buckets = vec![bucket(500), bucket(1_500)];
    assert!(filter.is_whole_at(&buckets, 0));
}

#[test]
fn ignore_early_only_applies_to_first_bucket() {
    let filter = WindowFilter::new(&window(2_000, 10_000, 1), options(true, false));
    let buckets = vec![bucket(0), bucket(1_500)];
    // second bucket also starts before min but is not first in sequence
    assert!(!filter.is_whole_at(&buckets, 1));
}

#[test]
fn trailing_partial_rejected_by_default() {
    let filter = WindowFilter::new(&window(1_000, 2_500, 1), options(true, false));
    let buckets = vec![bucket(1_000), bucket(2_000)];
    assert!(!filter.is_whole_at(&buckets, 1));
}

#[test]
fn include_trailing_partial_accepts_final_overrunning_bucket() {
    let filter = WindowFilter::new(&window(1_000, 2_500, 1), options(true, true));
    let buckets = vec![bucket(1_000), bucket(2_000)];
    assert!(filter.is_whole_at(&buckets, 1));
}

#[test]
fn include_trailing_partial_only_applies_to_last_bucket() {
    let filter = WindowFilter::new(&window(1_000, 2_500, 1), options(false, true));
    let buckets = vec![bucket(2_000), bucket(3_000)];
    // first bucket overruns max but is not last in sequence
    assert!(!filter.is_whole_at(&buckets, 0));
}
