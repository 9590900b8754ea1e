//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, while the record services are written
//! against tokio (timers, sync primitives). This module runs tokio futures
//! from GPUI tasks.
//!
//! ```text
//! GPUI task (cx.spawn)
//!       │
//!       ▼
//! run_in_tokio(async { store.query(..).await })
//!       │
//!       ▼
//! tokio::Runtime::spawn()
//!       │
//!       ▼
//! Result returned to GPUI
//! ```

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("exam-admin-io")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Execute a future in the tokio runtime and wait for the result
///
/// ```ignore
/// let slice = run_in_tokio(store.query(query)).await?;
/// ```
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}

/// Block on a future synchronously (startup and tests only)
pub fn block_on<F, T>(future: F) -> T
where
    F: Future<Output = T>,
{
    get_runtime().block_on(future)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_in_tokio_returns_value() {
        let value = block_on(async { run_in_tokio(async { 21 * 2 }).await });
        assert_eq!(value, 42);
    }
}
