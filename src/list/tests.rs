//! Tests for the list controller.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::compare::SortDirection;
    use crate::config::{Config, FilterMode};
    use crate::domain::{DomainQuery, Query};
    use crate::error::{Error, Result};
    use crate::hero::{Hero, HeroActions, HeroRecord, HeroRef, HeroSortKey, Roster};
    use crate::record::Record;
    use crate::status::StatusKind;
    use bubbletea_rs::{KeyMsg, Msg, WindowSizeMsg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    type HeroList = ListController<HeroRecord, Arc<Roster>>;

    fn roster(count: usize) -> Arc<Roster> {
        let roster = Arc::new(Roster::new());
        for i in 1..=count {
            roster.add(Hero::new(format!("Hero{i:03}")).with_level((i % 5) as u32 + 1));
        }
        roster
    }

    fn list(roster: &Arc<Roster>) -> HeroList {
        ListController::new(roster.clone(), &Config::default())
    }

    fn finish<R: Record, Q: DomainQuery<Handle = R::Handle>>(
        list: &mut ListController<R, Q>,
        now: Instant,
    ) {
        while list.is_loading() {
            list.tick_at(now);
        }
    }

    fn loaded(count: usize) -> (Arc<Roster>, HeroList, Instant) {
        let roster = roster(count);
        let mut list = list(&roster);
        let now = Instant::now();
        assert!(list.start_load(Query::all()));
        finish(&mut list, now);
        (roster, list, now)
    }

    fn names(list: &HeroList) -> Vec<String> {
        list.items().iter().map(|r| r.record().name().to_string()).collect()
    }

    fn visible_names(list: &HeroList) -> Vec<String> {
        list.visible().map(|r| r.record().name().to_string()).collect()
    }

    fn selected_count(list: &HeroList) -> usize {
        list.items().iter().filter(|r| r.selected()).count()
    }

    fn after_debounce(list: &HeroList, now: Instant) -> Instant {
        now + list.config().debounce() + Duration::from_millis(1)
    }

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn plain_view(list: &HeroList) -> String {
        strip_ansi_escapes::strip_str(list.view())
    }

    /// Counts queries and can be told to fail.
    struct CountingQuery {
        roster: Arc<Roster>,
        calls: AtomicUsize,
        fail: bool,
        extra: Vec<HeroRef>,
    }

    impl CountingQuery {
        fn new(roster: Arc<Roster>) -> Self {
            Self {
                roster,
                calls: AtomicUsize::new(0),
                fail: false,
                extra: Vec::new(),
            }
        }
    }

    impl DomainQuery for CountingQuery {
        type Handle = HeroRef;

        fn query(&self, query: &Query) -> Result<Vec<HeroRef>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::Query("campaign not loaded".to_string()));
            }
            let mut found = self.roster.query(query)?;
            found.extend(self.extra.iter().cloned());
            Ok(found)
        }
    }

    // Loading

    #[test]
    fn test_start_load_defers_query_to_tick() {
        let counting = CountingQuery::new(roster(10));
        let mut list: ListController<HeroRecord, CountingQuery> =
            ListController::new(counting, &Config::default());

        assert!(list.start_load(Query::all()));
        assert!(list.is_loading());
        assert_eq!(list.source().calls.load(Ordering::SeqCst), 0);
        assert!(list.is_empty());

        list.tick();
        assert_eq!(list.source().calls.load(Ordering::SeqCst), 1);
        assert_eq!(list.len(), 10);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_start_load_rejected_while_loading() {
        let roster = roster(120);
        let mut list = list(&roster);
        assert!(list.start_load(Query::all()));
        let generation = list.generation();

        assert!(!list.start_load(Query::text("Hero1")));
        assert_eq!(list.generation(), generation);
        assert_eq!(list.last_query(), &Query::all());

        finish(&mut list, Instant::now());
        assert_eq!(list.len(), 120);
        assert!(list.start_load(Query::text("Hero1")));
    }

    #[test]
    fn test_transfer_moves_one_batch_per_tick() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        assert_eq!(list.progress_text(), "Loading…");

        let mut sizes = Vec::new();
        while list.is_loading() {
            list.tick_at(now);
            sizes.push(list.len());
            if list.is_loading() {
                assert_eq!(list.progress_text(), format!("Loading {}/120", list.len()));
            }
        }
        assert_eq!(sizes, vec![25, 50, 75, 100, 120]);
        assert_eq!(list.progress_text(), "");
    }

    #[test]
    fn test_zero_results_complete_on_first_tick() {
        let roster = roster(5);
        let mut list = list(&roster);
        list.start_load(Query::text("Arenicos"));
        list.tick();
        assert!(!list.is_loading());
        assert!(list.is_empty());
        assert!(plain_view(&list).contains("No heroes."));
    }

    #[test]
    fn test_order_is_final_from_first_batch() {
        let roster = Arc::new(Roster::new());
        for i in 0..120usize {
            roster.add(Hero::new(format!("Hero{:03}", (i * 37) % 120 + 1)));
        }
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());

        let mut expected: Vec<String> = (1..=120).map(|i| format!("Hero{i:03}")).collect();
        expected.sort();

        list.tick_at(now);
        assert_eq!(names(&list), expected[..25]);
        finish(&mut list, now);
        assert_eq!(names(&list), expected);
    }

    #[test]
    fn test_sort_change_mid_load_keeps_order() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        list.tick_at(now);

        list.set_sort(HeroSortKey::Name, SortDirection::Descending);
        list.tick_at(now);
        let current = names(&list);
        let mut descending = current.clone();
        descending.sort();
        descending.reverse();
        assert_eq!(current.len(), 50);
        assert_eq!(current, descending);

        let mut expected: Vec<String> = (1..=120).map(|i| format!("Hero{i:03}")).collect();
        expected.reverse();

        finish(&mut list, now);
        assert_eq!(names(&list), expected);
    }

    #[test]
    fn test_query_error_completes_empty_with_status() {
        let mut counting = CountingQuery::new(roster(10));
        counting.fail = true;
        let mut list: ListController<HeroRecord, CountingQuery> =
            ListController::new(counting, &Config::default());
        let now = Instant::now();

        list.start_load(Query::all());
        list.tick_at(now);
        assert!(!list.is_loading());
        assert!(list.is_empty());
        let status = list.status().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(
            status.text,
            "Could not load heroes: query failed: campaign not loaded"
        );

        list.tick_at(now + list.config().status_lifetime());
        assert!(list.status().is_none());
    }

    #[test]
    fn test_stale_handles_are_skipped() {
        let mut counting = CountingQuery::new(roster(3));
        let ghost = HeroRef::new(Hero::new("Ghost"));
        ghost.destroy().unwrap();
        counting.extra.push(ghost);
        let mut list: ListController<HeroRecord, CountingQuery> =
            ListController::new(counting, &Config::default());

        list.start_load(Query::all());
        list.tick();
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_cancelled_load_transfers_nothing_more() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        list.tick_at(now);
        let generation = list.generation();

        assert!(list.cancel_load());
        assert!(list.generation() > generation);
        assert!(!list.is_loading());
        for _ in 0..10 {
            list.tick_at(now);
        }
        assert_eq!(list.len(), 25);
        assert!(!list.cancel_load());
    }

    #[test]
    fn test_refresh_replaces_collection_mid_load() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        list.tick_at(now);
        list.select(3);

        assert!(list.refresh(Query::text("Hero00")));
        assert!(list.is_empty());
        assert!(list.selected_index().is_none());
        finish(&mut list, now);
        assert_eq!(names(&list).len(), 9);
        assert_eq!(names(&list)[0], "Hero001");
    }

    #[test]
    fn test_reload_uses_last_query() {
        let (roster, mut list, now) = loaded(0);
        roster.add(Hero::new("Hero001"));
        list.start_load(Query::text("hero"));
        finish(&mut list, now);
        roster.add(Hero::new("Hero002"));
        roster.add(Hero::new("Lucon"));

        assert!(list.reload());
        finish(&mut list, now);
        assert_eq!(names(&list), vec!["Hero001", "Hero002"]);
    }

    #[test]
    fn test_clear_drops_rows() {
        let (_, mut list, _) = loaded(30);
        list.select(2);
        list.clear();
        assert!(list.is_empty());
        assert!(list.selected_handle().is_none());
    }

    // Sorting

    #[test]
    fn test_concrete_120_hero_scenario() {
        let (_, mut list, now) = loaded(120);
        assert_eq!(list.len(), 120);

        list.set_sort_key(HeroSortKey::Name);
        list.set_sort_key(HeroSortKey::Name);
        assert_eq!(list.direction(), SortDirection::Descending);
        assert_eq!(list.items()[0].record().name(), "Hero120");

        list.set_filter_at("Hero01", now);
        list.tick_at(after_debounce(&list, now));
        let visible = visible_names(&list);
        assert_eq!(visible.len(), 10);
        let mut expected: Vec<String> = (10..=19).map(|i| format!("Hero{i:03}")).collect();
        expected.reverse();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let (_, mut list, _) = loaded(60);
        for key in [HeroSortKey::Level, HeroSortKey::Name, HeroSortKey::Clan] {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                list.set_sort(key, direction);
                let once = names(&list);
                list.set_sort(key, direction);
                assert_eq!(names(&list), once, "{key:?} {direction:?}");
            }
        }
    }

    #[test]
    fn test_level_sort_breaks_ties_by_name() {
        let (_, mut list, _) = loaded(10);
        list.set_sort_key(HeroSortKey::Level);
        assert_eq!(list.direction(), SortDirection::Ascending);
        // Levels are i % 5 + 1, so level 1 holds Hero005 and Hero010.
        assert_eq!(names(&list)[..2], ["Hero005", "Hero010"]);

        list.set_sort_key(HeroSortKey::Level);
        assert_eq!(names(&list)[..2], ["Hero009", "Hero004"]);
    }

    #[test]
    fn test_sort_keeps_flags_and_selection() {
        let (_, mut list, now) = loaded(40);
        let change = list.select(12).unwrap();
        list.set_filter_at("Hero01", now);
        list.apply_filter_now();
        let hidden_before: Vec<String> = list
            .items()
            .iter()
            .filter(|r| r.filtered())
            .map(|r| r.record().name().to_string())
            .collect();

        list.set_sort(HeroSortKey::Level, SortDirection::Descending);
        let mut hidden_after: Vec<String> = list
            .items()
            .iter()
            .filter(|r| r.filtered())
            .map(|r| r.record().name().to_string())
            .collect();
        hidden_after.sort();
        assert_eq!(hidden_after, hidden_before);
        assert_eq!(selected_count(&list), 1);
        assert_eq!(list.selected_handle(), change.handle.as_ref());
        assert_eq!(list.selected_row().unwrap().record().name(), "Hero013");
    }

    #[test]
    fn test_sort_key_named_falls_back_to_default() {
        let (_, mut list, _) = loaded(5);
        list.set_sort_key_named("age");
        assert_eq!(list.sort_key(), HeroSortKey::Age);
        list.set_sort_key_named("renown");
        assert_eq!(list.sort_key(), HeroSortKey::Name);
        assert_eq!(list.direction(), SortDirection::Ascending);
    }

    // Filtering

    #[test]
    fn test_filter_is_not_applied_immediately() {
        let (_, mut list, now) = loaded(50);
        list.set_filter_at("Hero04", now);
        assert!(list.has_pending_filter());
        assert_eq!(list.visible_len(), 50);
        list.tick_at(now + Duration::from_millis(10));
        assert_eq!(list.visible_len(), 50);
        list.tick_at(after_debounce(&list, now));
        assert_eq!(list.visible_len(), 10);
        assert!(!list.has_pending_filter());
    }

    #[test]
    fn test_debounce_coalesces_rapid_edits() {
        let (_, mut list, now) = loaded(120);
        let before = list.filter_applications();
        let step = Duration::from_millis(40);
        let mut at = now;
        for text in ["H", "He", "Her", "Hero", "Hero1", "Hero11"] {
            list.set_filter_at(text, at);
            list.tick_at(at);
            at += step;
        }
        let last = at - step;
        list.tick_at(last + list.config().debounce());
        list.tick_at(last + list.config().debounce() * 2);

        assert_eq!(list.filter_applications(), before + 1);
        assert_eq!(list.filter_text(), "Hero11");
        assert_eq!(list.visible_len(), 10);
    }

    #[test]
    fn test_empty_filter_restores_every_row() {
        let (_, mut list, now) = loaded(60);
        list.set_filter_at("Hero05", now);
        list.apply_filter_now();
        assert_eq!(list.visible_len(), 10);

        list.set_filter_at("", now);
        list.tick_at(after_debounce(&list, now));
        assert!(list.items().iter().all(|r| !r.filtered()));

        list.set_filter_at("zzz", now);
        list.apply_filter_now();
        assert_eq!(list.visible_len(), 0);
        list.clear_filter();
        assert_eq!(list.visible_len(), 60);
    }

    #[test]
    fn test_filter_waits_for_load_then_applies() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        list.set_filter_at("Hero11", now);

        let later = after_debounce(&list, now);
        list.tick_at(later);
        assert!(list.is_loading());
        assert_eq!(list.filter_applications(), 0);
        assert!(list.items().iter().all(|r| !r.filtered()));

        finish(&mut list, later);
        assert_eq!(list.filter_applications(), 1);
        assert_eq!(list.visible_len(), 10);
    }

    #[test]
    fn test_rows_arrive_filtered_under_applied_filter() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.set_filter_at("Hero01", now);
        list.apply_filter_now();

        list.start_load(Query::all());
        list.tick_at(now);
        assert_eq!(list.len(), 25);
        assert_eq!(list.visible_len(), 10);
    }

    #[test]
    fn test_fuzzy_filter_mode() {
        let roster = roster(120);
        let config = Config {
            filter_mode: FilterMode::Fuzzy,
            ..Config::default()
        };
        let mut list: HeroList = ListController::new(roster, &config);
        let now = Instant::now();
        list.start_load(Query::all());
        finish(&mut list, now);

        list.set_filter_at("h12", now);
        list.apply_filter_now();
        let visible = visible_names(&list);
        assert!(visible.contains(&"Hero012".to_string()));
        assert!(visible.contains(&"Hero120".to_string()));
        assert!(!visible.contains(&"Hero021".to_string()));
    }

    // Selection

    #[test]
    fn test_reselect_fires_no_second_notification() {
        let (_, mut list, _) = loaded(20);
        let first = list.select(5);
        assert!(first.is_some_and(|c| c.handle.is_some()));
        assert!(list.select(5).is_none());
        assert_eq!(list.selected_index(), Some(5));
    }

    #[test]
    fn test_at_most_one_selected() {
        let (_, mut list, _) = loaded(30);
        for index in [3, 7, 7, 0, 29, 31, 4, 12] {
            list.select(index);
            assert!(selected_count(&list) <= 1);
        }
        assert_eq!(list.selected_index(), Some(12));
    }

    #[test]
    fn test_out_of_range_selects_none() {
        let (_, mut list, _) = loaded(10);
        list.select(2);
        let change = list.select(10).unwrap();
        assert!(change.handle.is_none());
        assert_eq!(selected_count(&list), 0);
        assert!(list.select(10).is_none());
    }

    #[test]
    fn test_stale_row_selects_none() {
        let (roster, mut list, _) = loaded(10);
        list.select(0);
        let victim = list.items()[4].handle().clone();
        roster.destroy(&victim).unwrap();

        let change = list.select(4).unwrap();
        assert!(change.handle.is_none());
        assert!(list.selected_index().is_none());
    }

    #[test]
    fn test_reselecting_destroyed_row_selects_none() {
        let (roster, mut list, _) = loaded(10);
        list.select(3);
        let victim = list.items()[3].handle().clone();
        roster.destroy(&victim).unwrap();

        let change = list.select(3).unwrap();
        assert!(change.handle.is_none());
        assert!(list.selected_index().is_none());
        assert_eq!(selected_count(&list), 0);
        assert!(list.select(3).is_none());
    }

    #[test]
    fn test_selection_survives_filter() {
        let (_, mut list, now) = loaded(30);
        list.select(20);
        list.set_filter_at("Hero00", now);
        list.apply_filter_now();
        assert!(list.items()[20].filtered());
        assert!(list.items()[20].selected());
        assert_eq!(list.selected_index(), Some(20));
    }

    #[test]
    fn test_reproject_updates_snapshot_only() {
        let (roster, mut list, now) = loaded(30);
        list.set_filter_at("Hero01", now);
        list.apply_filter_now();
        let index = names(&list).iter().position(|n| n == "Hero012").unwrap();
        list.select(index);
        let handle = list.items()[index].handle().clone();

        roster.rename(&handle, "Champion").unwrap();
        assert_eq!(list.items()[index].record().name(), "Hero012");

        assert!(list.reproject(&handle).unwrap());
        // "Champion" sorts ahead of every "Hero" row.
        let row = &list.items()[0];
        assert_eq!(row.record().name(), "Champion");
        assert!(row.selected());
        assert!(row.filtered());
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(selected_count(&list), 1);
        assert_eq!(list.visible_len(), 9);

        let stranger = HeroRef::new(Hero::new("Stranger"));
        assert!(!list.reproject(&stranger).unwrap());
    }

    #[test]
    fn test_reproject_mid_load_keeps_batches_ordered() {
        let roster = roster(120);
        let mut list = list(&roster);
        let now = Instant::now();
        list.start_load(Query::all());
        list.tick_at(now);
        list.tick_at(now);
        assert!(list.is_loading());
        let loaded = list.len();

        let handle = list.items()[1].handle().clone();
        list.select(1);
        roster.rename(&handle, "Hero999").unwrap();
        assert!(list.reproject(&handle).unwrap());
        assert_eq!(list.items()[loaded - 1].record().name(), "Hero999");
        assert_eq!(list.selected_index(), Some(loaded - 1));

        finish(&mut list, now);
        let current = names(&list);
        let mut sorted = current.clone();
        sorted.sort();
        assert_eq!(current, sorted);
        assert_eq!(current.last().map(String::as_str), Some("Hero999"));
        assert_eq!(list.selected_index(), Some(119));
        assert_eq!(selected_count(&list), 1);
    }

    #[test]
    fn test_reproject_destroyed_row_fails() {
        let (roster, mut list, _) = loaded(5);
        let handle = list.items()[1].handle().clone();
        roster.destroy(&handle).unwrap();
        assert!(matches!(list.reproject(&handle), Err(Error::InvalidHandle)));
        assert_eq!(list.items()[1].record().name(), "Hero002");
    }

    // Keys and messages

    #[test]
    fn test_cursor_keys_select_rows() {
        let (_, mut list, _) = loaded(50);
        let change = list.handle_key(&key(KeyCode::Down)).unwrap();
        assert_eq!(change.handle.as_ref(), Some(list.items()[0].handle()));
        list.handle_key(&key(KeyCode::Char('j')));
        list.handle_key(&key(KeyCode::Char('j')));
        assert_eq!(list.selected_index(), Some(2));
        list.handle_key(&key(KeyCode::Up));
        assert_eq!(list.selected_index(), Some(1));

        list.handle_key(&key(KeyCode::Char('G')));
        assert_eq!(list.selected_index(), Some(49));
        assert_eq!(list.cursor(), 49);
        list.handle_key(&key(KeyCode::Home));
        assert_eq!(list.selected_index(), Some(0));
        list.handle_key(&key(KeyCode::PageDown));
        assert_eq!(list.cursor(), 19);
    }

    #[test]
    fn test_cursor_moves_over_visible_rows_only() {
        let (_, mut list, now) = loaded(40);
        list.set_filter_at("Hero03", now);
        list.apply_filter_now();
        list.handle_key(&key(KeyCode::Down));
        assert_eq!(list.selected_row().unwrap().record().name(), "Hero030");
        list.handle_key(&key(KeyCode::Down));
        assert_eq!(list.selected_row().unwrap().record().name(), "Hero031");
    }

    #[test]
    fn test_filter_typing() {
        let (_, mut list, _) = loaded(120);
        assert!(list.handle_key(&key(KeyCode::Char('/'))).is_none());
        assert!(list.is_filter_input_active());
        for c in "hero01".chars() {
            list.handle_key(&key(KeyCode::Char(c)));
        }
        list.handle_key(&key(KeyCode::Backspace));
        list.handle_key(&key(KeyCode::Char('2')));
        assert!(list.has_pending_filter());
        assert_eq!(list.visible_len(), 120);

        list.handle_key(&key(KeyCode::Enter));
        assert!(!list.is_filter_input_active());
        assert_eq!(list.filter_text(), "hero02");
        assert_eq!(list.visible_len(), 10);

        list.handle_key(&key(KeyCode::Esc));
        assert_eq!(list.filter_text(), "");
        assert_eq!(list.visible_len(), 120);
    }

    #[test]
    fn test_cancel_filter_input_clears() {
        let (_, mut list, _) = loaded(20);
        list.handle_key(&key(KeyCode::Char('/')));
        list.handle_key(&key(KeyCode::Char('x')));
        list.handle_key(&key(KeyCode::Esc));
        assert!(!list.is_filter_input_active());
        assert!(!list.has_pending_filter());
        assert_eq!(list.visible_len(), 20);
    }

    #[test]
    fn test_sort_keys() {
        let (_, mut list, _) = loaded(20);
        list.handle_key(&key(KeyCode::Char('s')));
        assert_eq!(list.sort_key(), HeroSortKey::Clan);
        list.handle_key(&key(KeyCode::Char('o')));
        assert_eq!(list.direction(), SortDirection::Descending);
        for _ in 0..5 {
            list.handle_key(&key(KeyCode::Char('s')));
        }
        assert_eq!(list.sort_key(), HeroSortKey::Name);
        assert_eq!(list.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_ctrl_r_reloads() {
        let (_, mut list, _) = loaded(20);
        list.select(3);
        let reload = KeyMsg {
            key: KeyCode::Char('r'),
            modifiers: KeyModifiers::CONTROL,
        };
        let change = list.handle_key(&reload).unwrap();
        assert!(change.handle.is_none());
        assert!(list.is_loading());
        assert!(list.is_empty());
    }

    #[test]
    fn test_frames_carry_id_and_tag() {
        let (_, mut list, _) = loaded(0);
        let _ = list.init();

        let stale = Box::new(FrameMsg::new(list.id, list.tag - 1)) as Msg;
        assert!(list.update(stale).is_none());
        let foreign = Box::new(FrameMsg::new(list.id + 1000, list.tag)) as Msg;
        assert!(list.update(foreign).is_none());

        list.start_load(Query::all());
        let frame = Box::new(FrameMsg::new(list.id, list.tag)) as Msg;
        assert!(list.update(frame).is_some());
        assert!(!list.is_loading());
    }

    #[test]
    fn test_key_update_emits_selection_command() {
        let (_, mut list, _) = loaded(5);
        assert!(list.update(Box::new(key(KeyCode::Down)) as Msg).is_some());
        assert!(list.update(Box::new(key(KeyCode::Char('s'))) as Msg).is_none());
    }

    #[test]
    fn test_window_resize_shrinks_viewport() {
        let (_, mut list, _) = loaded(40);
        let resize = WindowSizeMsg {
            width: 60,
            height: 10,
        };
        assert!(list.update(Box::new(resize) as Msg).is_none());
        assert_eq!(list.config().height, 10);
        list.go_to_end();

        let view = plain_view(&list);
        assert!(view.contains("Hero040"));
        assert!(view.contains("Hero036"));
        assert!(!view.contains("Hero035"));
    }

    // View

    #[test]
    fn test_view_shows_rows_and_status_bar() {
        let (_, mut list, _) = loaded(120);
        let view = plain_view(&list);
        assert!(view.contains("Heroes"));
        assert!(view.contains("Name ▲"));
        assert!(view.contains("> Hero001"));
        assert!(view.contains("1/120 heroes"));
        assert!(!view.contains("Hero120"));

        list.select(1);
        let view = plain_view(&list);
        assert!(view.contains("● Hero002"));
        assert!(view.contains("2/120 heroes"));
    }

    #[test]
    fn test_view_while_loading_shows_progress() {
        let roster = roster(120);
        let mut list = list(&roster);
        list.start_load(Query::all());
        assert!(plain_view(&list).contains("Loading…"));
        list.tick();
        assert!(plain_view(&list).contains("Loading 25/120"));
    }

    #[test]
    fn test_view_filter_summary_and_no_matches() {
        let (_, mut list, now) = loaded(30);
        list.set_filter_at("Hero02", now);
        list.apply_filter_now();
        assert!(plain_view(&list).contains("“Hero02” 10 of 30"));

        list.set_filter_at("Lucon", now);
        list.apply_filter_now();
        assert!(plain_view(&list).contains("No matches."));

        list.handle_key(&key(KeyCode::Char('/')));
        assert!(plain_view(&list).contains("Filter: Lucon"));
    }
}
