//! The hero list row and its sortable columns.

use super::model::HeroRef;
use crate::compare::ComparatorTable;
use crate::domain::TypeFlags;
use crate::error::Result;
use crate::record::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Columns of the hero list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroSortKey {
    /// Hero name; the default column.
    Name,
    /// Clan name.
    Clan,
    /// Kingdom name.
    Kingdom,
    /// Culture name.
    Culture,
    /// Character level.
    Level,
    /// Age in years.
    Age,
}

/// A column name that is not a [`HeroSortKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column: {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for HeroSortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "clan" => Ok(Self::Clan),
            "kingdom" => Ok(Self::Kingdom),
            "culture" => Ok(Self::Culture),
            "level" => Ok(Self::Level),
            "age" => Ok(Self::Age),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Snapshot of one hero for the list.
#[derive(Debug, Clone)]
pub struct HeroRecord {
    handle: HeroRef,
    id: String,
    name: String,
    clan: String,
    kingdom: String,
    culture: String,
    level: u32,
    age: u32,
    kind: TypeFlags,
}

impl HeroRecord {
    /// Clan at projection time.
    pub fn clan(&self) -> &str {
        &self.clan
    }

    /// Kingdom at projection time.
    pub fn kingdom(&self) -> &str {
        &self.kingdom
    }

    /// Culture at projection time.
    pub fn culture(&self) -> &str {
        &self.culture
    }

    /// Level at projection time.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Age at projection time.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Categories at projection time.
    pub fn kind(&self) -> TypeFlags {
        self.kind
    }
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for HeroRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<14} {:<14} {:<10} {:>3} {:>3}",
            self.name, self.clan, self.kingdom, self.culture, self.level, self.age
        )
    }
}

impl Record for HeroRecord {
    type Handle = HeroRef;
    type SortKey = HeroSortKey;

    fn project(handle: &HeroRef) -> Result<Self> {
        handle.read(|hero| Self {
            handle: handle.clone(),
            id: hero.id.clone(),
            name: hero.name.clone(),
            clan: hero.clan.clone(),
            kingdom: hero.kingdom.clone(),
            culture: hero.culture.clone(),
            level: hero.level,
            age: hero.age,
            kind: hero.kind,
        })
    }

    fn is_valid(handle: &HeroRef) -> bool {
        handle.is_alive()
    }

    fn handle(&self) -> &HeroRef {
        &self.handle
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn comparators() -> ComparatorTable<Self> {
        ComparatorTable::new(HeroSortKey::Name, |a: &Self, b: &Self| cmp_text(&a.name, &b.name))
            .with(HeroSortKey::Clan, |a, b| cmp_text(&a.clan, &b.clan))
            .with(HeroSortKey::Kingdom, |a, b| cmp_text(&a.kingdom, &b.kingdom))
            .with(HeroSortKey::Culture, |a, b| cmp_text(&a.culture, &b.culture))
            .with(HeroSortKey::Level, |a, b| a.level.cmp(&b.level))
            .with(HeroSortKey::Age, |a, b| a.age.cmp(&b.age))
    }
}
