//! In-process hero store: the query collaborator and the action API.

use super::model::{Hero, HeroRef};
use crate::domain::{DomainQuery, Query};
use crate::error::{Error, Result};
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Edits a hero through the game's rules.
///
/// The detail view calls these; it never writes to a hero directly.
pub trait HeroActions {
    /// Renames a hero. Empty names are refused.
    fn rename(&self, hero: &HeroRef, name: &str) -> Result<()>;

    /// Moves a hero to another clan.
    fn set_clan(&self, hero: &HeroRef, clan: &str) -> Result<()>;

    /// Sets a hero's level. Level 0 is refused.
    fn set_level(&self, hero: &HeroRef, level: u32) -> Result<()>;
}

impl<A: HeroActions + ?Sized> HeroActions for Arc<A> {
    fn rename(&self, hero: &HeroRef, name: &str) -> Result<()> {
        (**self).rename(hero, name)
    }

    fn set_clan(&self, hero: &HeroRef, clan: &str) -> Result<()> {
        (**self).set_clan(hero, clan)
    }

    fn set_level(&self, hero: &HeroRef, level: u32) -> Result<()> {
        (**self).set_level(hero, level)
    }
}

/// Every hero in the game.
///
/// Heroes are added through a shared reference so a roster wrapped in an
/// `Arc` can be queried by the list and edited by the detail view at once.
#[derive(Debug, Default)]
pub struct Roster {
    heroes: RwLock<Vec<HeroRef>>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hero and returns its handle.
    pub fn add(&self, hero: Hero) -> HeroRef {
        let handle = HeroRef::new(hero);
        if let Ok(mut heroes) = self.heroes.write() {
            heroes.push(handle.clone());
        }
        handle
    }

    /// Number of heroes that still exist.
    pub fn len(&self) -> usize {
        self.heroes
            .read()
            .map(|heroes| heroes.iter().filter(|h| h.is_alive()).count())
            .unwrap_or(0)
    }

    /// Whether no living hero is left.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First living hero named exactly `name`.
    pub fn find(&self, name: &str) -> Option<HeroRef> {
        let heroes = self.heroes.read().ok()?;
        heroes
            .iter()
            .find(|h| h.read(|hero| hero.name == name).unwrap_or(false))
            .cloned()
    }

    /// Destroys a hero and forgets it. Outstanding handles become invalid.
    pub fn destroy(&self, hero: &HeroRef) -> Result<()> {
        hero.destroy()?;
        let mut heroes = self
            .heroes
            .write()
            .map_err(|_| Error::Action("roster is unavailable".to_string()))?;
        heroes.retain(|h| h != hero);
        info!(target: "commander::hero", remaining = heroes.len(), "hero destroyed");
        Ok(())
    }
}

impl DomainQuery for Roster {
    type Handle = HeroRef;

    fn query(&self, query: &Query) -> Result<Vec<HeroRef>> {
        let heroes = self
            .heroes
            .read()
            .map_err(|_| Error::Query("roster is unavailable".to_string()))?;
        let needle = query.text.to_lowercase();
        let found: Vec<HeroRef> = heroes
            .iter()
            .filter(|handle| {
                handle
                    .read(|hero| {
                        (query.include_inactive || hero.active)
                            && hero.kind.passes(query.type_flags, query.match_all)
                            && (needle.is_empty() || hero.name.to_lowercase().contains(&needle))
                    })
                    .unwrap_or(false)
            })
            .cloned()
            .collect();
        debug!(
            target: "commander::hero",
            text = %query.text,
            types = ?query.type_flags,
            found = found.len(),
            "roster queried"
        );
        Ok(found)
    }
}

impl HeroActions for Roster {
    fn rename(&self, hero: &HeroRef, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Action("a hero needs a name".to_string()));
        }
        hero.write(|h| h.name = name.to_string())?;
        debug!(target: "commander::hero", name, "hero renamed");
        Ok(())
    }

    fn set_clan(&self, hero: &HeroRef, clan: &str) -> Result<()> {
        hero.write(|h| h.clan = clan.trim().to_string())
    }

    fn set_level(&self, hero: &HeroRef, level: u32) -> Result<()> {
        if level == 0 {
            return Err(Error::Action("level must be at least 1".to_string()));
        }
        hero.write(|h| h.level = level)
    }
}
