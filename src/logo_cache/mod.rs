//! Logo resolution cache.
//!
//! Resolves the logo references of one company-list snapshot to displayable
//! URLs in a single concurrent batch. All lookups are launched together and
//! joined once; each failed lookup is converted to the placeholder URL on the
//! spot, so a batch as a whole never fails. A generation counter discards the
//! result of any batch that was superseded while in flight, so only the
//! latest-triggered batch is ever rendered.
//!
//! Batches are independent: nothing carries over between calls, and the map
//! returned for one snapshot never contains entries from another.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::future::join_all;
use tracing::{debug, warn};

use crate::models::Company;
use crate::services::DirectoryClient;

/// Placeholder served whenever a logo cannot be resolved.
pub const FALLBACK_LOGO_URL: &str = "/placeholder.svg";

/// Resolved logo URLs for one batch of companies.
///
/// Every company that had a lookup attempted has an entry (real URL or
/// placeholder). A missing key means no lookup was attempted and reads as
/// the placeholder too.
#[derive(Debug, Clone)]
pub struct ResolvedLogos {
    urls: HashMap<i64, String>,
    fallback_url: String,
}

impl ResolvedLogos {
    /// The URL resolved for this company id, if a lookup was attempted.
    pub fn get(&self, id: i64) -> Option<&str> {
        self.urls.get(&id).map(String::as_str)
    }

    /// The URL to render for this company. Missing entries degrade to the
    /// placeholder.
    pub fn display_url(&self, company: &Company) -> &str {
        self.urls
            .get(&company.id)
            .map(String::as_str)
            .unwrap_or(&self.fallback_url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Batched logo resolver with a stale-batch guard.
#[derive(Debug)]
pub struct LogoCache {
    directory: DirectoryClient,
    fallback_url: String,
    latest_generation: AtomicU64,
}

impl LogoCache {
    pub fn new(directory: DirectoryClient, fallback_url: String) -> Self {
        Self {
            directory,
            fallback_url,
            latest_generation: AtomicU64::new(0),
        }
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Resolve logos for one snapshot of the company list.
    ///
    /// Companies without a logo reference are skipped and get no entry. The
    /// call itself never fails: every individual lookup failure is absorbed
    /// as a placeholder entry.
    ///
    /// Returns `None` when a newer batch was issued while this one was in
    /// flight; a stale result must not be rendered.
    pub async fn resolve(&self, companies: &[Company]) -> Option<ResolvedLogos> {
        let generation = self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1;

        let lookups = companies
            .iter()
            .filter(|company| company.has_logo_ref())
            .map(|company| self.resolve_one(company.id));
        let resolved = join_all(lookups).await;

        if self.latest_generation.load(Ordering::SeqCst) != generation {
            debug!(
                "Discarding stale logo batch (generation {}, {} lookups)",
                generation,
                resolved.len()
            );
            return None;
        }

        let mut urls = HashMap::with_capacity(resolved.len());
        for (id, url) in resolved {
            urls.insert(id, url);
        }

        Some(ResolvedLogos {
            urls,
            fallback_url: self.fallback_url.clone(),
        })
    }

    /// One lookup. Failure is converted to the placeholder here and never
    /// propagates.
    async fn resolve_one(&self, id: i64) -> (i64, String) {
        match self.directory.fetch_company_image(id).await {
            Ok(image) => (id, image.image_url),
            Err(e) => {
                warn!("Logo lookup for company {} failed, using placeholder: {}", id, e);
                (id, self.fallback_url.clone())
            }
        }
    }
}
