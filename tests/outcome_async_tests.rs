//! Tests for the asynchronous Outcome combinators.
//!
//! The async variants carry the synchronous contracts onto deferred steps:
//! the supplied future settles before the combinator's result is observable,
//! failures produced by the future propagate unchanged, and the untaken
//! branch never constructs or awaits anything.

#![cfg(all(feature = "outcome", feature = "async"))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tagged_outcome::outcome::{failure, success};
use tokio::time::{Instant, sleep};

// =============================================================================
// and_then_async
// =============================================================================

#[tokio::test]
async fn and_then_async_chains_deferred_step() {
    let result = success::<i32, String>(5)
        .and_then_async(|n| async move { success::<i32, String>(n * 2) })
        .await;
    assert_eq!(result, success(10));
}

#[tokio::test]
async fn and_then_async_propagates_deferred_failure() {
    let result = success::<i32, String>(5)
        .and_then_async(|_| async move { failure::<i32, String>("deferred boom".to_string()) })
        .await;
    assert_eq!(result, failure("deferred boom".to_string()));
}

#[tokio::test]
async fn and_then_async_never_runs_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_step = Arc::clone(&calls);

    let result = failure::<i32, String>("boom".to_string())
        .and_then_async(move |n| {
            calls_in_step.fetch_add(1, Ordering::SeqCst);
            async move { success::<i32, String>(n * 2) }
        })
        .await;

    assert_eq!(result, failure("boom".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn and_then_async_settles_only_after_the_delay() {
    let started = Instant::now();

    let result = success::<i32, String>(5)
        .and_then_async(|n| async move {
            sleep(Duration::from_millis(50)).await;
            success::<i32, String>(n + 1)
        })
        .await;

    assert_eq!(result, success(6));
    assert!(
        started.elapsed() >= Duration::from_millis(50),
        "the deferred step must fully settle before the result is observable"
    );
}

// =============================================================================
// map_async
// =============================================================================

#[tokio::test]
async fn map_async_transforms_success_payload() {
    let result = success::<i32, String>(5)
        .map_async(|n| async move { n * 2 })
        .await;
    assert_eq!(result, success(10));
}

#[tokio::test]
async fn map_async_never_runs_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_step = Arc::clone(&calls);

    let result = failure::<i32, String>("boom".to_string())
        .map_async(move |n| {
            calls_in_step.fetch_add(1, Ordering::SeqCst);
            async move { n * 2 }
        })
        .await;

    assert_eq!(result, failure("boom".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// tap_async and tap_error_async
// =============================================================================

#[tokio::test]
async fn tap_async_awaits_observation_then_yields_original() {
    let seen = Arc::new(AtomicUsize::new(0));
    let seen_in_tap = Arc::clone(&seen);

    let result = success::<usize, String>(42)
        .tap_async(|&value| {
            let seen = Arc::clone(&seen_in_tap);
            async move {
                sleep(Duration::from_millis(1)).await;
                seen.store(value, Ordering::SeqCst);
            }
        })
        .await;

    assert_eq!(result, success(42));
    assert_eq!(seen.load(Ordering::SeqCst), 42);
}

#[tokio::test]
async fn tap_async_never_runs_on_failure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_tap = Arc::clone(&calls);

    let result = failure::<usize, String>("boom".to_string())
        .tap_async(move |_| {
            calls_in_tap.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await;

    assert_eq!(result, failure("boom".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn tap_error_async_observes_failure_unchanged() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_in_tap = Arc::clone(&calls);

    let result = failure::<usize, String>("boom".to_string())
        .tap_error_async(move |_| {
            calls_in_tap.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .await;

    assert_eq!(result, failure("boom".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Chained pipelines
// =============================================================================

#[tokio::test]
async fn mixed_sync_and_async_pipeline() {
    let result = success::<i32, String>(4)
        .map(|n| n + 1)
        .and_then_async(|n| async move {
            if n > 0 {
                success::<i32, String>(n * 10)
            } else {
                failure("not positive".to_string())
            }
        })
        .await
        .map_error(|e| format!("pipeline: {e}"));

    assert_eq!(result, success(50));
}
