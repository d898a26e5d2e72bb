//! Link creation, lookup, deletion and redirect counting.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Number of random candidates tried before giving up on finding a free code.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Origin used for displayed short URLs when no base URL is configured.
pub const DEFAULT_DISPLAY_ORIGIN: &str = "http://localhost:3000";

/// A freshly created link together with its shareable short URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service orchestrating the link operations over a [`LinkRepository`].
///
/// The configured base origin is injected at construction; nothing is read
/// from the environment at call time.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: Option<String>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the configured origin for short URLs. An empty value is
    /// treated as unset and a trailing `/` is dropped.
    pub fn new(link_repository: Arc<L>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty());

        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - Target URL; must be an absolute http(s) URL
    /// - `custom_code` - Optional caller-chosen code (6-8 alphanumerics)
    /// - `request_origin` - Origin used for the short URL when no base URL
    ///   is configured
    ///
    /// # Code selection
    ///
    /// Without a custom code, up to [`MAX_GENERATION_ATTEMPTS`] random codes
    /// are tried; the first unused one wins, otherwise the last candidate is
    /// kept. Either way the code is checked again right before insertion and
    /// the store's primary key rejects any code claimed in between.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `url` is absent or not http(s)
    /// - [`AppError::InvalidCode`] if `custom_code` fails the pattern
    /// - [`AppError::CodeConflict`] if the code is already taken
    /// - [`AppError::Internal`] on database errors
    pub async fn create_link(
        &self,
        url: Option<String>,
        custom_code: Option<String>,
        request_origin: &str,
    ) -> Result<CreatedLink, AppError> {
        let url = url.unwrap_or_default();
        validate_url(&url).map_err(|e| {
            AppError::invalid_url(
                "Invalid URL. Must be a valid http(s) URL.",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let code = match custom_code {
            Some(custom) => {
                validate_custom_code(&custom)?;
                custom
            }
            None => self.generate_candidate_code().await?,
        };

        if self.link_repository.exists(&code).await? {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": code }),
            ));
        }

        let link = self.link_repository.create(NewLink { code, url }).await?;
        let short_url = self.short_url(&link.code, request_origin);

        tracing::info!(code = %link.code, url = %link.url, "Short link created");

        Ok(CreatedLink { link, short_url })
    }

    /// Retrieves a link by its exact code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found", json!({ "code": code })))
    }

    /// Lists all links, newest first. Unpaginated.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist, including
    /// when it was already deleted.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found("Not found", json!({ "code": code })));
        }

        tracing::info!(code = %code, "Short link deleted");
        Ok(())
    }

    /// Counts a visit and returns the target URL.
    ///
    /// The increment, the `last_clicked` stamp and the URL read happen in one
    /// store statement, so concurrent visits are never lost.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (with no mutation) for unknown codes.
    pub async fn redirect_and_count(&self, code: &str) -> Result<String, AppError> {
        let url = self
            .link_repository
            .record_click(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found", json!({ "code": code })))?;

        tracing::debug!(code = %code, "Redirect counted");
        Ok(url)
    }

    /// Builds the short URL for `code`.
    ///
    /// Uses the configured base URL, or `fallback_origin` when none is set.
    pub fn short_url(&self, code: &str, fallback_origin: &str) -> String {
        let origin = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| fallback_origin.trim_end_matches('/'));

        format!("{}/{}", origin, code)
    }

    /// Picks a random code, preferring one not yet in the store.
    ///
    /// Gives up after [`MAX_GENERATION_ATTEMPTS`] and returns the last
    /// candidate; the insertion-time check then reports the collision.
    async fn generate_candidate_code(&self) -> Result<String, AppError> {
        let mut candidate = generate_code();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if !self.link_repository.exists(&candidate).await? {
                return Ok(candidate);
            }

            tracing::debug!(attempt, code = %candidate, "Generated code collided");

            if attempt < MAX_GENERATION_ATTEMPTS {
                candidate = generate_code();
            }
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Could not find a free code, keeping last candidate"
        );
        Ok(candidate)
    }
}
