//! Hero detail view: mirrors the selected hero and edits it.

use super::model::{Hero, HeroRef};
use super::portrait::{Portrait, PortraitCache};
use super::roster::HeroActions;
use crate::detail::DetailView;
use crate::domain::TypeFlags;
use crate::error::{Error, Result};
use lipgloss_extras::prelude::*;
use tracing::{debug, info};

/// Fields mirrored from the selected hero.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct HeroFields {
    pub name: String,
    pub clan: String,
    pub kingdom: String,
    pub culture: String,
    pub level: u32,
    pub age: u32,
    pub kind: TypeFlags,
}

impl From<&Hero> for HeroFields {
    fn from(hero: &Hero) -> Self {
        Self {
            name: hero.name.clone(),
            clan: hero.clan.clone(),
            kingdom: hero.kingdom.clone(),
            culture: hero.culture.clone(),
            level: hero.level,
            age: hero.age,
            kind: hero.kind,
        }
    }
}

/// Styles for [`HeroDetail::view`].
#[derive(Debug, Clone)]
pub struct DetailStyles {
    /// The hero's name.
    pub title: Style,
    /// Field labels.
    pub label: Style,
    /// Field values.
    pub value: Style,
    /// Shown when no hero is selected.
    pub empty: Style,
}

impl Default for DetailStyles {
    fn default() -> Self {
        Self {
            title: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#AD58B4",
                Dark: "#EE6FF8",
            }),
            label: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding_right(1),
            value: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            empty: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}

/// Detail view for heroes.
///
/// Holds the selected hero's handle, a mirror of its fields and one portrait
/// preview. Edits go through `A`; after each one the mirror is re-read from
/// the hero.
pub struct HeroDetail<A: HeroActions, P: PortraitCache> {
    actions: A,
    portraits: P,
    hero: Option<HeroRef>,
    fields: Option<HeroFields>,
    portrait: Option<Portrait>,
    /// View styles.
    pub styles: DetailStyles,
}

impl<A: HeroActions, P: PortraitCache> HeroDetail<A, P> {
    /// An empty view editing through `actions`.
    pub fn new(actions: A, portraits: P) -> Self {
        Self {
            actions,
            portraits,
            hero: None,
            fields: None,
            portrait: None,
            styles: DetailStyles::default(),
        }
    }

    /// The mirrored fields, while a hero is shown.
    pub fn fields(&self) -> Option<&HeroFields> {
        self.fields.as_ref()
    }

    /// The portrait held for the shown hero.
    pub fn portrait(&self) -> Option<&Portrait> {
        self.portrait.as_ref()
    }

    /// The portrait source.
    pub fn portraits(&self) -> &P {
        &self.portraits
    }

    /// Renames the shown hero.
    pub fn rename(&mut self, name: &str) -> Result<()> {
        let hero = self.shown()?;
        self.actions.rename(&hero, name)?;
        self.mirror(&hero)
    }

    /// Moves the shown hero to `clan`.
    pub fn set_clan(&mut self, clan: &str) -> Result<()> {
        let hero = self.shown()?;
        self.actions.set_clan(&hero, clan)?;
        self.mirror(&hero)
    }

    /// Sets the shown hero's level.
    pub fn set_level(&mut self, level: u32) -> Result<()> {
        let hero = self.shown()?;
        self.actions.set_level(&hero, level)?;
        self.mirror(&hero)
    }

    fn shown(&self) -> Result<HeroRef> {
        self.hero.clone().ok_or(Error::InvalidHandle)
    }

    fn mirror(&mut self, hero: &HeroRef) -> Result<()> {
        self.fields = Some(hero.read(|h| HeroFields::from(h))?);
        Ok(())
    }

    fn release_portrait(&mut self) {
        if let Some(portrait) = self.portrait.take() {
            self.portraits.release(portrait);
        }
    }
}

impl<A: HeroActions, P: PortraitCache> DetailView<HeroRef> for HeroDetail<A, P> {
    fn refresh_for(&mut self, handle: &HeroRef) -> Result<()> {
        self.clear();
        let fields = handle.read(|h| HeroFields::from(h))?;
        let portrait = self.portraits.acquire(handle)?;
        info!(target: "commander::detail", hero = %fields.name, "showing hero");
        self.hero = Some(handle.clone());
        self.fields = Some(fields);
        self.portrait = Some(portrait);
        Ok(())
    }

    fn clear(&mut self) {
        self.release_portrait();
        if self.hero.take().is_some() {
            debug!(target: "commander::detail", "detail cleared");
        }
        self.fields = None;
    }

    fn current(&self) -> Option<&HeroRef> {
        self.hero.as_ref()
    }

    fn view(&self) -> String {
        let s = &self.styles;
        let Some(fields) = &self.fields else {
            return s.empty.render("No hero selected.");
        };
        let kind = fields
            .kind
            .iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        let level = fields.level.to_string();
        let age = fields.age.to_string();
        let rows = [
            ("Clan", fields.clan.as_str()),
            ("Kingdom", fields.kingdom.as_str()),
            ("Culture", fields.culture.as_str()),
            ("Level", level.as_str()),
            ("Age", age.as_str()),
            ("Kind", kind.as_str()),
        ];
        let mut lines = vec![s.title.render(&fields.name)];
        lines.extend(rows.iter().map(|(label, value)| {
            format!(
                "{}{}",
                s.label.render(&format!("{label:<8}")),
                s.value.render(value)
            )
        }));
        lines.join("\n")
    }
}

impl<A: HeroActions, P: PortraitCache> Drop for HeroDetail<A, P> {
    fn drop(&mut self) {
        self.release_portrait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{PortraitPool, Roster};
    use std::sync::Arc;

    fn setup() -> (Arc<Roster>, Arc<PortraitPool>, HeroDetail<Arc<Roster>, Arc<PortraitPool>>) {
        let roster = Arc::new(Roster::new());
        let pool = Arc::new(PortraitPool::new());
        let detail = HeroDetail::new(roster.clone(), pool.clone());
        (roster, pool, detail)
    }

    #[test]
    fn test_refresh_mirrors_fields() {
        let (roster, pool, mut detail) = setup();
        let hero = roster.add(Hero::new("Monchug").with_kingdom("Khuzait").with_level(30));
        detail.refresh_for(&hero).unwrap();
        let fields = detail.fields().unwrap();
        assert_eq!(fields.name, "Monchug");
        assert_eq!(fields.kingdom, "Khuzait");
        assert_eq!(detail.current(), Some(&hero));
        assert_eq!(pool.live(), 1);
    }

    #[test]
    fn test_refresh_releases_previous_portrait() {
        let (roster, pool, mut detail) = setup();
        let a = roster.add(Hero::new("Monchug"));
        let b = roster.add(Hero::new("Urkun"));
        for _ in 0..5 {
            detail.refresh_for(&a).unwrap();
            detail.refresh_for(&b).unwrap();
        }
        assert_eq!(pool.live(), 1);
        assert_eq!(detail.portrait().unwrap().hero_id(), b.read(|h| h.id.clone()).unwrap());
        detail.clear();
        assert_eq!(pool.live(), 0);
        assert!(detail.current().is_none());
    }

    #[test]
    fn test_refresh_for_destroyed_hero_leaves_view_empty() {
        let (roster, pool, mut detail) = setup();
        let a = roster.add(Hero::new("Monchug"));
        let b = roster.add(Hero::new("Urkun"));
        detail.refresh_for(&a).unwrap();
        roster.destroy(&b).unwrap();
        assert!(detail.refresh_for(&b).is_err());
        assert!(detail.current().is_none());
        assert!(detail.fields().is_none());
        assert_eq!(pool.live(), 0);
    }

    #[test]
    fn test_edits_go_through_actions() {
        let (roster, _pool, mut detail) = setup();
        let hero = roster.add(Hero::new("Monchug"));
        assert!(matches!(detail.rename("x"), Err(Error::InvalidHandle)));

        detail.refresh_for(&hero).unwrap();
        detail.rename("Monchug Khan").unwrap();
        detail.set_level(31).unwrap();
        assert_eq!(detail.fields().unwrap().name, "Monchug Khan");
        assert_eq!(hero.read(|h| h.level).unwrap(), 31);
        assert!(detail.rename("").is_err());
        assert_eq!(detail.fields().unwrap().name, "Monchug Khan");
    }

    #[test]
    fn test_drop_releases_portrait() {
        let (roster, pool, mut detail) = setup();
        detail.refresh_for(&roster.add(Hero::new("Urkun"))).unwrap();
        drop(detail);
        assert_eq!(pool.live(), 0);
    }
}
