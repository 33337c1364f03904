//! Concurrent execution of independent generation calls.

use futures::future::try_join_all;
use promptcraft_core::GenerationRequest;
use promptcraft_error::{GenerationError, GenerationResult};
use promptcraft_interface::PromptDriver;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Runs a batch of generation requests concurrently against one shared driver.
///
/// All requests start together and the call resolves once every request has
/// finished. Results come back in submission order. The first failure fails
/// the whole batch; branches still in flight are left to finish on their own
/// and their output is discarded.
#[derive(Debug)]
pub struct FanOutExecutor<D: ?Sized> {
    driver: Arc<D>,
}

impl<D: ?Sized> Clone for FanOutExecutor<D> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
        }
    }
}

impl<D> FanOutExecutor<D>
where
    D: PromptDriver + ?Sized + 'static,
{
    /// Creates an executor sharing `driver` across all branches.
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }

    /// The shared driver.
    pub fn driver(&self) -> &Arc<D> {
        &self.driver
    }

    /// Issues every request concurrently and pairs each output with its id.
    ///
    /// # Errors
    ///
    /// Returns the error of the first branch observed to fail.
    #[instrument(skip_all, fields(branches = requests.len(), provider = self.driver.provider_name()))]
    pub async fn run_parallel<I>(
        &self,
        requests: Vec<(I, GenerationRequest)>,
    ) -> GenerationResult<Vec<(I, String)>>
    where
        I: Send + 'static,
    {
        let handles: Vec<_> = requests
            .into_iter()
            .map(|(id, request)| {
                let driver = Arc::clone(&self.driver);
                tokio::spawn(async move {
                    let text = driver.generate(&request).await?;
                    Ok::<_, GenerationError>((id, text))
                })
            })
            .collect();

        let branches = handles.into_iter().map(|handle| async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(GenerationError::failed(format!("Branch task failed: {}", e))),
            }
        });

        let results = try_join_all(branches).await.map_err(|e| {
            error!(error = %e, "Fan-out branch failed");
            e
        })?;

        debug!(completed = results.len(), "All branches completed");
        Ok(results)
    }

    /// Submits the same request `n` times and returns the outputs in order.
    pub async fn sample(&self, request: &GenerationRequest, n: usize) -> GenerationResult<Vec<String>> {
        let requests = (0..n).map(|i| (i, request.clone())).collect();
        let results = self.run_parallel(requests).await?;
        Ok(results.into_iter().map(|(_, text)| text).collect())
    }
}
