//! Page assembly: fan out item resolution, fan in one verification batch.

use crate::error::PageError;
use crate::metrics;
use crate::resolver::ImageResolver;
use crate::verifier::ClaimVerifier;
use futures::future::join_all;
use roost_core::{Digest, Page, PageItem, PageWindow};
use std::sync::Arc;

pub struct PageAssembler {
    resolver: Arc<ImageResolver>,
    verifier: Arc<ClaimVerifier>,
}

impl PageAssembler {
    pub fn new(resolver: Arc<ImageResolver>, verifier: Arc<ClaimVerifier>) -> Self {
        Self { resolver, verifier }
    }

    /// Assemble one page.
    ///
    /// Every id in the window is resolved on its own task and the page waits
    /// for all of them. Resolution tasks outlive an abandoned page request and
    /// still populate the item cache. Failed fetches stay in the page without
    /// content; only a verification failure fails the page.
    pub async fn get_page(&self, page_index: u32) -> Result<Page, PageError> {
        let window = PageWindow::for_page(page_index);
        if window.is_empty() {
            return Ok(Page::empty(page_index));
        }

        let timer = metrics::PAGE_ASSEMBLY_DURATION.start_timer();

        let tasks = window.ids().map(|id| {
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move { resolver.resolve(id).await })
        });
        let mut resolutions = Vec::with_capacity(window.len());
        for joined in join_all(tasks).await {
            resolutions.push(joined.map_err(|e| PageError::Task(e.to_string()))?);
        }

        let hashes: Vec<Digest> = resolutions
            .iter()
            .filter_map(|resolution| resolution.as_ref().ok().map(|item| item.content_hash))
            .collect();

        let verification = if hashes.is_empty() {
            None
        } else {
            Some(self.verifier.verify_batch(&hashes).await?)
        };

        let mut failed = 0usize;
        let items: Vec<PageItem> = resolutions
            .into_iter()
            .map(|resolution| match resolution {
                Ok(item) => {
                    let txhash = verification
                        .as_ref()
                        .and_then(|result| result.txhash(&item.content_hash));
                    PageItem::resolved(&item, txhash)
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(id = %e.id, url = %e.url, error = %e.source, "Image fetch failed");
                    PageItem::unresolved(e.id, e.url)
                }
            })
            .collect();

        timer.observe_duration();
        tracing::debug!(
            page_index,
            items = items.len(),
            failed,
            verified = hashes.len(),
            "Assembled page"
        );

        Ok(Page {
            items,
            page_index,
            has_more: window.has_more(),
        })
    }
}
