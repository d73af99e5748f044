//! Service context - dependency container for services
//!
//! Holds the record store and the per-call limits the services run under.

use std::sync::Arc;
use std::time::Duration;

use user_core::traits::UserRepository;

/// Default per-call deadline
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    call_timeout: Duration,
}

impl ServiceContext {
    /// Create a new service context; callers go through the builder
    pub(crate) fn new(user_repo: Arc<dyn UserRepository>, call_timeout: Duration) -> Self {
        Self {
            user_repo,
            call_timeout,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Deadline applied to each lifecycle operation
    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("call_timeout", &self.call_timeout)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    call_timeout: Option<Duration>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ContextError::Missing` if the repository was not supplied, or
    /// `ContextError::ZeroTimeout` for a zero deadline
    pub fn build(self) -> Result<ServiceContext, ContextError> {
        let user_repo = self.user_repo.ok_or(ContextError::Missing("user_repo"))?;
        let call_timeout = self.call_timeout.unwrap_or(DEFAULT_CALL_TIMEOUT);
        if call_timeout.is_zero() {
            return Err(ContextError::ZeroTimeout);
        }

        Ok(ServiceContext::new(user_repo, call_timeout))
    }
}

/// Errors raised while assembling a context
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("call timeout must be greater than zero")]
    ZeroTimeout,
}
