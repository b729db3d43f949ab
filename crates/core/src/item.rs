//! Catalogue items and page windows.

use crate::content_uri::ContentUri;
use crate::digest::Digest;
use crate::{COLLECTION_SIZE, PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalogue item, always in `[0, COLLECTION_SIZE)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(id: u32) -> crate::Result<Self> {
        if id >= COLLECTION_SIZE {
            return Err(crate::Error::ItemOutOfRange {
                id: id.into(),
                size: COLLECTION_SIZE,
            });
        }
        Ok(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Position of this item in positionally indexed collections.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for ItemId {
    type Error = crate::Error;

    fn try_from(id: u32) -> crate::Result<Self> {
        Self::new(id)
    }
}

impl From<ItemId> for u32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved catalogue item. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub url: String,
    pub content_uri: ContentUri,
    pub content_hash: Digest,
}

/// One entry of an assembled page.
///
/// Items whose image could not be fetched keep their `id` and `url` but carry
/// no content URI, no hash and no claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageItem {
    pub id: ItemId,
    pub url: String,
    pub content_uri: Option<ContentUri>,
    pub content_hash: Option<Digest>,
    /// Claim transaction id, or `None` when unclaimed or unknown.
    pub txhash: Option<String>,
}

impl PageItem {
    /// Entry for a resolved item with its merged claim status.
    pub fn resolved(item: &Item, txhash: Option<String>) -> Self {
        Self {
            id: item.id,
            url: item.url.clone(),
            content_uri: Some(item.content_uri.clone()),
            content_hash: Some(item.content_hash),
            txhash,
        }
    }

    /// Entry for an item whose image fetch failed.
    pub fn unresolved(id: ItemId, url: String) -> Self {
        Self {
            id,
            url,
            content_uri: None,
            content_hash: None,
            txhash: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.content_uri.is_some()
    }

    pub fn is_claimed(&self) -> bool {
        self.txhash.is_some()
    }
}

/// An assembled page. Built fresh on every request, never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<PageItem>,
    pub page_index: u32,
    pub has_more: bool,
}

impl Page {
    pub fn empty(page_index: u32) -> Self {
        Self {
            items: Vec::new(),
            page_index,
            has_more: false,
        }
    }
}

/// The contiguous id range `[start, end)` covered by one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: u32,
    start: u32,
    end: u32,
}

impl PageWindow {
    pub fn for_page(page_index: u32) -> Self {
        let start = page_index.saturating_mul(PAGE_SIZE).min(COLLECTION_SIZE);
        let end = start.saturating_add(PAGE_SIZE).min(COLLECTION_SIZE);
        Self {
            page_index,
            start,
            end,
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether ids remain after this window.
    pub fn has_more(&self) -> bool {
        !self.is_empty() && self.end < COLLECTION_SIZE
    }

    /// Ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + use<> {
        (self.start..self.end).map(ItemId)
    }
}
