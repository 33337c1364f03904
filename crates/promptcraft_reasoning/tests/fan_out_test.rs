//! Tests for the fan-out executor.

mod test_utils;

use promptcraft_core::GenerationRequest;
use promptcraft_error::{GenerationError, GenerationErrorKind};
use promptcraft_interface::PromptDriver;
use promptcraft_reasoning::FanOutExecutor;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockDriver, MockReply};
use tokio::time::Instant;

fn branch_number(request: &GenerationRequest) -> u64 {
    request
        .prompt()
        .trim_start_matches("branch ")
        .parse()
        .expect("numbered prompt")
}

#[tokio::test(start_paused = true)]
async fn test_results_follow_submission_order() {
    for n in 1..=5u64 {
        // Earlier branches finish last.
        let driver = MockDriver::scripted(move |request, _| {
            let branch = branch_number(request);
            MockReply::text(format!("reply {}", branch))
                .after(Duration::from_millis((n - branch + 1) * 10))
        });
        let executor = FanOutExecutor::new(driver);

        let requests = (1..=n)
            .map(|i| (i, GenerationRequest::new(format!("branch {}", i), 0.6)))
            .collect();
        let results = executor.run_parallel(requests).await.expect("all succeed");

        assert_eq!(results.len(), n as usize);
        for (position, (id, text)) in results.iter().enumerate() {
            assert_eq!(*id, position as u64 + 1);
            assert_eq!(text, &format!("reply {}", id));
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_branches_run_concurrently() {
    let driver = MockDriver::scripted(|_, _| {
        MockReply::text("done").after(Duration::from_millis(100))
    });
    let executor = FanOutExecutor::new(driver.clone());

    let started = Instant::now();
    let requests = (0..5)
        .map(|i| (i, GenerationRequest::new("same", 0.7)))
        .collect();
    executor.run_parallel(requests).await.expect("all succeed");

    assert!(started.elapsed() < Duration::from_millis(200));
    assert_eq!(driver.completed(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_first_failure_fails_the_batch() {
    let driver = MockDriver::scripted(|request, _| {
        if branch_number(request) == 2 {
            MockReply::error(GenerationError::failed("model unavailable"))
        } else {
            MockReply::text("fine").after(Duration::from_secs(1))
        }
    });
    let executor = FanOutExecutor::new(driver);

    let started = Instant::now();
    let requests = (1..=3u64)
        .map(|i| (i, GenerationRequest::new(format!("branch {}", i), 0.6)))
        .collect();
    let err = executor
        .run_parallel(requests)
        .await
        .expect_err("one branch failed");

    assert_eq!(
        err.kind(),
        &GenerationErrorKind::GenerationFailed("model unavailable".to_string())
    );
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_branches_still_complete() {
    let driver = MockDriver::scripted(|request, _| {
        if branch_number(request) == 1 {
            MockReply::error(GenerationError::rate_limited("quota"))
        } else {
            MockReply::text("late").after(Duration::from_millis(500))
        }
    });
    let executor = FanOutExecutor::new(driver.clone());

    let requests = (1..=4u64)
        .map(|i| (i, GenerationRequest::new(format!("branch {}", i), 0.6)))
        .collect();
    let err = executor.run_parallel(requests).await.expect_err("rate limited");
    assert!(err.is_rate_limited());

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(driver.completed(), 4);
}

#[tokio::test]
async fn test_sample_repeats_the_same_request() {
    for n in 2..=5 {
        let driver = MockDriver::scripted(|_, call| MockReply::text(format!("sample {}", call)));
        let executor = FanOutExecutor::new(driver.clone());

        let request = GenerationRequest::new("What is 2 + 2?", 0.7);
        let samples = executor.sample(&request, n).await.expect("all succeed");

        assert_eq!(samples.len(), n);
        let mut distinct = samples.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), n);

        let sent = driver.requests();
        assert_eq!(sent.len(), n);
        assert!(sent.iter().all(|r| r == &request));
    }
}

#[tokio::test]
async fn test_executor_accepts_trait_objects() {
    let driver: Arc<dyn PromptDriver> = MockDriver::echo();
    let executor = FanOutExecutor::new(driver);
    assert_eq!(executor.driver().model_name(), "mock-model");

    let requests = vec![
        ("first", GenerationRequest::new("one", 0.6)),
        ("second", GenerationRequest::new("two", 0.6)),
    ];
    let results = executor.run_parallel(requests).await.expect("all succeed");
    assert_eq!(
        results,
        vec![("first", "one".to_string()), ("second", "two".to_string())]
    );
}
