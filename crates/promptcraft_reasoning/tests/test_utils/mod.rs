//! Test utilities for reasoning tests.
//!
//! Provides a scripted mock driver that records every request it sees.

#![allow(dead_code)]

use async_trait::async_trait;
use promptcraft_core::GenerationRequest;
use promptcraft_error::{GenerationError, GenerationResult};
use promptcraft_interface::PromptDriver;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock does for one call.
pub struct MockReply {
    pub delay: Duration,
    pub outcome: GenerationResult<String>,
}

impl MockReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Ok(text.into()),
        }
    }

    pub fn error(error: GenerationError) -> Self {
        Self {
            delay: Duration::ZERO,
            outcome: Err(error),
        }
    }

    pub fn after(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }
}

type Handler = Box<dyn Fn(&GenerationRequest, usize) -> MockReply + Send + Sync>;

/// Mock driver whose replies are computed by a closure over the request
/// and the zero-based call number.
pub struct MockDriver {
    handler: Handler,
    requests: Mutex<Vec<GenerationRequest>>,
    completed: AtomicUsize,
}

impl MockDriver {
    pub fn scripted<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&GenerationRequest, usize) -> MockReply + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            completed: AtomicUsize::new(0),
        })
    }

    /// Replies with the prompt itself.
    pub fn echo() -> Arc<Self> {
        Self::scripted(|request, _| MockReply::text(request.prompt().clone()))
    }

    /// Every request received, in arrival order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }

    /// Prompts received, in arrival order.
    pub fn prompts(&self) -> Vec<String> {
        self.requests().iter().map(|r| r.prompt().clone()).collect()
    }

    /// Calls that ran to completion, including ones nobody waited for.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PromptDriver for MockDriver {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let call = {
            let mut requests = self.requests.lock().expect("request log poisoned");
            requests.push(request.clone());
            requests.len() - 1
        };

        let reply = (self.handler)(request, call);
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        reply.outcome
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
