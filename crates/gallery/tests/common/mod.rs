pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{CountingImageSource, ScriptedRegistry, StaticTraits, expected_hash, image_bytes};

use roost_core::ItemId;
use roost_gallery::Gallery;
use roost_sources::Sources;
use std::sync::Arc;

/// Gallery wired to the given fakes.
#[allow(dead_code)]
pub fn gallery_with(
    images: Arc<CountingImageSource>,
    registry: Arc<ScriptedRegistry>,
    traits: Arc<StaticTraits>,
) -> Gallery {
    Gallery::new(Sources {
        images,
        registry,
        traits,
    })
}

#[allow(dead_code)]
pub fn id(n: u32) -> ItemId {
    ItemId::new(n).unwrap()
}
