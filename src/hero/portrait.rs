//! Portrait previews: the per-selection resource of the detail view.
//!
//! A portrait is expensive in the game (a rendered character model), so the
//! detail view holds at most one and hands it back before taking the next.

use super::model::HeroRef;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// A rendered preview of one hero.
#[derive(Debug, PartialEq, Eq)]
pub struct Portrait {
    serial: u64,
    hero_id: String,
}

impl Portrait {
    /// Id of the hero shown.
    pub fn hero_id(&self) -> &str {
        &self.hero_id
    }
}

/// Source of portrait previews.
pub trait PortraitCache {
    /// Renders a portrait of `hero`.
    fn acquire(&self, hero: &HeroRef) -> Result<Portrait>;

    /// Returns a portrait; its resources are freed.
    fn release(&self, portrait: Portrait);
}

impl<P: PortraitCache + ?Sized> PortraitCache for Arc<P> {
    fn acquire(&self, hero: &HeroRef) -> Result<Portrait> {
        (**self).acquire(hero)
    }

    fn release(&self, portrait: Portrait) {
        (**self).release(portrait)
    }
}

/// In-memory portrait source that counts live portraits.
#[derive(Debug, Default)]
pub struct PortraitPool {
    serial: AtomicU64,
    live: AtomicUsize,
}

impl PortraitPool {
    /// A pool with no live portraits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Portraits acquired and not yet released.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Portraits acquired over the pool's lifetime.
    pub fn acquired(&self) -> u64 {
        self.serial.load(Ordering::SeqCst)
    }
}

impl PortraitCache for PortraitPool {
    fn acquire(&self, hero: &HeroRef) -> Result<Portrait> {
        let hero_id = hero.read(|h| h.id.clone())?;
        let serial = self.serial.fetch_add(1, Ordering::SeqCst) + 1;
        self.live.fetch_add(1, Ordering::SeqCst);
        debug!(target: "commander::detail", serial, hero = %hero_id, "portrait acquired");
        Ok(Portrait { serial, hero_id })
    }

    fn release(&self, portrait: Portrait) {
        self.live.fetch_sub(1, Ordering::SeqCst);
        debug!(target: "commander::detail", serial = portrait.serial, "portrait released");
    }
}
