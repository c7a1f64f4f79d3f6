//! The hero game object and its shared handle.

use crate::domain::TypeFlags;
use crate::error::{Error, Result};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

static LAST_HERO_ID: AtomicU64 = AtomicU64::new(0);

fn next_hero_id() -> String {
    format!("hero_{:06}", LAST_HERO_ID.fetch_add(1, Ordering::SeqCst) + 1)
}

/// A hero as the game owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    /// Unique, never-reused identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Clan name; empty for clanless heroes.
    pub clan: String,
    /// Kingdom name; empty for independent heroes.
    pub kingdom: String,
    /// Culture name.
    pub culture: String,
    /// Character level, at least 1.
    pub level: u32,
    /// Age in years.
    pub age: u32,
    /// Categories the hero belongs to.
    pub kind: TypeFlags,
    /// Inactive heroes (dead, retired) only show up when a query asks for them.
    pub active: bool,
    /// Set once the game removed the hero; its handles become invalid.
    pub destroyed: bool,
}

impl Hero {
    /// An active adult lord with no clan, kingdom or culture.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_hero_id(),
            name: name.into(),
            clan: String::new(),
            kingdom: String::new(),
            culture: String::new(),
            level: 1,
            age: 30,
            kind: TypeFlags::LORD,
            active: true,
            destroyed: false,
        }
    }

    /// Sets the clan.
    pub fn with_clan(mut self, clan: impl Into<String>) -> Self {
        self.clan = clan.into();
        self
    }

    /// Sets the kingdom.
    pub fn with_kingdom(mut self, kingdom: impl Into<String>) -> Self {
        self.kingdom = kingdom.into();
        self
    }

    /// Sets the culture.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = culture.into();
        self
    }

    /// Sets the level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Sets the age.
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the categories.
    pub fn with_kind(mut self, kind: TypeFlags) -> Self {
        self.kind = kind;
        self
    }

    /// Marks the hero inactive.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Shared handle to a hero owned by a [`Roster`](super::Roster).
///
/// Two handles are equal only when they point at the same hero.
#[derive(Clone)]
pub struct HeroRef(Arc<RwLock<Hero>>);

impl HeroRef {
    /// Wraps a hero that is not part of any roster.
    pub fn new(hero: Hero) -> Self {
        Self(Arc::new(RwLock::new(hero)))
    }

    /// Runs `f` against the hero. Fails when the hero was destroyed.
    pub fn read<T>(&self, f: impl FnOnce(&Hero) -> T) -> Result<T> {
        let hero = self.0.read().map_err(|_| Error::InvalidHandle)?;
        if hero.destroyed {
            return Err(Error::InvalidHandle);
        }
        Ok(f(&hero))
    }

    /// Runs `f` against the hero mutably. Fails when the hero was destroyed.
    pub fn write<T>(&self, f: impl FnOnce(&mut Hero) -> T) -> Result<T> {
        let mut hero = self.0.write().map_err(|_| Error::InvalidHandle)?;
        if hero.destroyed {
            return Err(Error::InvalidHandle);
        }
        Ok(f(&mut hero))
    }

    /// Whether the hero still exists.
    pub fn is_alive(&self) -> bool {
        self.0.read().is_ok_and(|hero| !hero.destroyed)
    }

    /// Removes the hero from the game. Every handle becomes invalid.
    pub fn destroy(&self) -> Result<()> {
        self.write(|hero| hero.destroyed = true)
    }
}

impl PartialEq for HeroRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for HeroRef {}

impl fmt::Debug for HeroRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_read() {
            Ok(hero) => f
                .debug_tuple("HeroRef")
                .field(&hero.id)
                .field(&hero.name)
                .finish(),
            Err(_) => f.write_str("HeroRef(<locked>)"),
        }
    }
}
