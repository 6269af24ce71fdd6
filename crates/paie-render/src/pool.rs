//! # Renderer Pool — Bounded, Health-Checked Backend Reuse
//!
//! Starting a rendering backend is slow; rendering with one is fast. The
//! pool keeps a small set of long-lived backends and bounds the number of
//! in-flight renders with a semaphore: callers acquire a slot, check out
//! one backend exclusively, render once, and return it.
//!
//! ## Guarantees
//!
//! - At most `size` renders are in flight at once; waiters beyond the cap
//!   queue up to `acquire_timeout`, then fail with `BackendUnavailable`.
//! - A slot is released on every exit path — success, backend failure,
//!   timeout, or caller cancellation (the semaphore permit is a guard).
//! - A backend is never shared by two concurrent renders: it is checked
//!   out of the idle set for the duration of the render session.
//! - Backends that time out or report unhealthy are dropped, not returned;
//!   the next checkout builds a replacement from the factory.
//!
//! This is an explicit, injectable resource — deliberately not a lazily
//! initialized module-level singleton.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{Mutex, Semaphore};

use crate::backend::{BackendError, RenderBackend};
use crate::model::DocumentModel;

// ─── Configuration ───────────────────────────────────────────────────

/// Pool sizing and timeout bounds.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum concurrent in-flight renders (and resident backends).
    pub size: usize,
    /// How long a caller may wait for a free slot.
    pub acquire_timeout: Duration,
    /// Upper bound for one render.
    pub render_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            size: 2,
            acquire_timeout: Duration::from_secs(5),
            render_timeout: Duration::from_secs(10),
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Why a pooled render failed. `BackendUnavailable` and `Timeout` are
/// transient; retry policy belongs to the caller, never to the pool.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No slot became free within the acquire timeout, or the pool is
    /// shut down.
    #[error("no render backend available within {waited:?}")]
    BackendUnavailable {
        /// How long the caller waited.
        waited: Duration,
    },

    /// The render exceeded its time bound. The backend that was serving
    /// it is discarded.
    #[error("render exceeded {limit:?}")]
    Timeout {
        /// The configured bound.
        limit: Duration,
    },

    /// The backend failed the render.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The render task aborted (worker panic or runtime shutdown).
    #[error("render task aborted: {0}")]
    TaskAborted(String),
}

// ─── Pool ────────────────────────────────────────────────────────────

/// A bounded pool of rendering backends.
///
/// Cheap to clone via `Arc` at the call site; all methods take `&self`.
pub struct RendererPool<B: RenderBackend> {
    factory: Arc<dyn Fn() -> B + Send + Sync>,
    idle: Mutex<Vec<B>>,
    slots: Arc<Semaphore>,
    config: PoolConfig,
}

impl<B: RenderBackend> RendererPool<B> {
    /// Create a pool that builds backends with `factory` on demand.
    ///
    /// Backends are created lazily at first checkout, not eagerly at pool
    /// construction, so a pool can be built before the backend binary is
    /// warm.
    pub fn new(config: PoolConfig, factory: impl Fn() -> B + Send + Sync + 'static) -> Self {
        Self {
            factory: Arc::new(factory),
            idle: Mutex::new(Vec::with_capacity(config.size)),
            slots: Arc::new(Semaphore::new(config.size)),
            config,
        }
    }

    /// The configured bounds.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Render one document through a pooled backend.
    ///
    /// The render session is exclusive: the checked-out backend serves no
    /// other caller until this render finishes. The model is cloned into
    /// the render task and never mutated.
    ///
    /// # Errors
    ///
    /// - [`RenderError::BackendUnavailable`] if no slot frees up in time.
    /// - [`RenderError::Timeout`] if the render exceeds its bound; the
    ///   slot is still released and the backend replaced.
    /// - [`RenderError::Backend`] for backend-internal failures.
    pub async fn render(&self, model: &DocumentModel) -> Result<Vec<u8>, RenderError> {
        // The permit is a guard: dropped on every exit path, including
        // caller cancellation, releasing the slot.
        let _permit = tokio::time::timeout(
            self.config.acquire_timeout,
            Arc::clone(&self.slots).acquire_owned(),
        )
        .await
        .map_err(|_| RenderError::BackendUnavailable {
            waited: self.config.acquire_timeout,
        })?
        .map_err(|_| RenderError::BackendUnavailable {
            waited: self.config.acquire_timeout,
        })?;

        let mut backend = match self.idle.lock().await.pop() {
            Some(backend) => backend,
            None => {
                tracing::debug!("renderer pool: building backend instance");
                (self.factory)()
            }
        };

        let task_model = model.clone();
        let render_task = tokio::task::spawn_blocking(move || {
            let outcome = backend.render(&task_model);
            (backend, outcome)
        });

        match tokio::time::timeout(self.config.render_timeout, render_task).await {
            Ok(Ok((backend, outcome))) => {
                if backend.is_healthy() {
                    self.idle.lock().await.push(backend);
                } else {
                    // Dropped here; the next checkout builds a fresh one.
                    tracing::debug!("renderer pool: recycling unhealthy backend");
                }
                Ok(outcome?)
            }
            Ok(Err(join_error)) => Err(RenderError::TaskAborted(join_error.to_string())),
            Err(_) => {
                // The blocking task still owns the backend and will drop
                // it when it eventually finishes; it is not returned to
                // the idle set.
                tracing::warn!(
                    limit_ms = self.config.render_timeout.as_millis() as u64,
                    "renderer pool: render timed out; discarding backend"
                );
                Err(RenderError::Timeout {
                    limit: self.config.render_timeout,
                })
            }
        }
    }
}
