//! Service context - dependency container for services
//!
//! Holds the repository and flag-cache ports plus the feed settings every
//! service reads from.

use std::sync::Arc;

use feed_common::FeedConfig;
use feed_core::traits::{
    FlagCache, PostRepository, ReportRepository, UserActionRepository, UserProfileRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every port sits behind an `Arc`. Services borrow it for
/// the duration of one call.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    action_repo: Arc<dyn UserActionRepository>,
    profile_repo: Arc<dyn UserProfileRepository>,
    report_repo: Arc<dyn ReportRepository>,

    // Flag store
    flag_cache: Arc<dyn FlagCache>,

    // Settings
    feed_config: FeedConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        action_repo: Arc<dyn UserActionRepository>,
        profile_repo: Arc<dyn UserProfileRepository>,
        report_repo: Arc<dyn ReportRepository>,
        flag_cache: Arc<dyn FlagCache>,
        feed_config: FeedConfig,
    ) -> Self {
        Self {
            post_repo,
            action_repo,
            profile_repo,
            report_repo,
            flag_cache,
            feed_config,
        }
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the user action repository
    pub fn action_repo(&self) -> &dyn UserActionRepository {
        self.action_repo.as_ref()
    }

    /// Get the user profile repository
    pub fn profile_repo(&self) -> &dyn UserProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    // === Cache ===

    /// Get the unread flag store
    pub fn flag_cache(&self) -> &dyn FlagCache {
        self.flag_cache.as_ref()
    }

    // === Settings ===

    pub fn feed_config(&self) -> &FeedConfig {
        &self.feed_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("flag_cache", &"dyn FlagCache")
            .field("feed_config", &self.feed_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    action_repo: Option<Arc<dyn UserActionRepository>>,
    profile_repo: Option<Arc<dyn UserProfileRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    flag_cache: Option<Arc<dyn FlagCache>>,
    feed_config: Option<FeedConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            post_repo: None,
            action_repo: None,
            profile_repo: None,
            report_repo: None,
            flag_cache: None,
            feed_config: None,
        }
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn action_repo(mut self, repo: Arc<dyn UserActionRepository>) -> Self {
        self.action_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn UserProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn flag_cache(mut self, cache: Arc<dyn FlagCache>) -> Self {
        self.flag_cache = Some(cache);
        self
    }

    /// Feed settings; defaults apply when never set
    pub fn feed_config(mut self, config: FeedConfig) -> Self {
        self.feed_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    /// or the feed settings are inconsistent
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let feed_config = self.feed_config.unwrap_or_default();
        feed_config
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.action_repo
                .ok_or_else(|| ServiceError::validation("action_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            self.flag_cache
                .ok_or_else(|| ServiceError::validation("flag_cache is required"))?,
            feed_config,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
