//! Registry and team behavior through the public API: key uniqueness,
//! last-write-wins, removal, ordering stability and the query scenarios.

use roster_core::{
    format, query, Coach, JerseyNumber, KeyedRegistry, Player, RosterCategory, Staff, StatValue,
    Team,
};
use rstest::rstest;

fn eagles() -> Team {
    let mut team = Team::new(
        "Philadelphia Eagles",
        "Nick Sirianni",
        "Lincoln Financial Field",
        "NFC East.",
    );
    team.add_player(Player::new(1, "Jalen Hurts", "QB", "Oklahoma"));
    team.add_player(Player::new(6, "DeVonta Smith", "WR", "Alabama"));
    team
}

// ---------------------------------------------------------------------------
// 1. KeyedRegistry properties
// ---------------------------------------------------------------------------

#[rstest]
#[case::distinct(vec![(1, 'a'), (2, 'b'), (3, 'c')])]
#[case::repeated(vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (1, 'e')])]
#[case::single_key(vec![(7, 'a'), (7, 'b'), (7, 'c')])]
#[case::empty(vec![])]
fn size_counts_distinct_keys_and_get_sees_last_put(#[case] puts: Vec<(u32, char)>) {
    let mut reg = KeyedRegistry::new();
    for (k, v) in &puts {
        reg.put(*k, *v);
    }

    let mut distinct: Vec<u32> = puts.iter().map(|(k, _)| *k).collect();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(reg.len(), distinct.len());

    for k in distinct {
        let last = puts.iter().rev().find(|(key, _)| *key == k).map(|(_, v)| v);
        assert_eq!(reg.get(&k), last);
    }
}

#[rstest]
#[case::present(2, 2)]
#[case::absent(9, 3)]
fn remove_then_get_is_absent(#[case] key: u32, #[case] size_after: usize) {
    let mut reg: KeyedRegistry<u32, &str> = [(1, "a"), (2, "b"), (3, "c")].into_iter().collect();
    reg.remove(&key);
    assert_eq!(reg.get(&key), None);
    assert_eq!(reg.len(), size_after);
}

#[test]
fn views_are_insertion_ordered_for_any_key_type() {
    let mut reg = KeyedRegistry::new();
    for name in ["zeta", "alpha", "mu"] {
        reg.put(name.to_string(), name.len());
    }
    let keys: Vec<&String> = reg.keys().collect();
    assert_eq!(keys, ["zeta", "alpha", "mu"]);
    let pairs: Vec<(&String, &usize)> = reg.iter().collect();
    assert_eq!(pairs[1], (&"alpha".to_string(), &5));
}

#[test]
fn serializes_as_ordered_map() {
    let reg: KeyedRegistry<String, StatValue> = [
        ("Wins".to_string(), StatValue::Integer(649)),
        ("Draws".to_string(), StatValue::Integer(27)),
    ]
    .into_iter()
    .collect();
    let json = serde_json::to_string(&reg).expect("serialize");
    assert_eq!(json, r#"{"Wins":649,"Draws":27}"#);
}

// ---------------------------------------------------------------------------
// 2. Team ordering stability
// ---------------------------------------------------------------------------

#[test]
fn identical_insertions_give_identical_listings() {
    let build = || {
        let mut t = Team::new("T", "C", "S", "D");
        for n in [88, 1, 51, 26, 1, 11] {
            t.add_player(Player::new(n, format!("Player {n}"), "X", "Y"));
        }
        t
    };
    let a = build();
    let b = build();
    assert!(a.list_players().eq(b.list_players()));
    assert_eq!(format::roster(&a), format::roster(&b));
}

// ---------------------------------------------------------------------------
// 3. Concrete scenario
// ---------------------------------------------------------------------------

#[test]
fn hurts_and_smith_scenario() {
    let mut team = eagles();

    assert_eq!(
        query::find(&team, JerseyNumber(1)).map(|p| p.name.as_str()),
        Some("Jalen Hurts")
    );
    assert!(query::find(&team, JerseyNumber(99)).is_none());

    let smith = query::search_players(&team, "smith");
    assert_eq!(smith.len(), 1);
    assert_eq!(smith[0].number, JerseyNumber(6));

    assert_eq!(
        query::search_players(&team, "hurts"),
        query::search_players(&team, "HURTS")
    );
    let full: Vec<&Player> = team.list_players().collect();
    assert_eq!(query::search_players(&team, ""), full);

    team.set_stat("Wins", 12);
    team.set_stat("Losses", 5);
    assert_eq!(team.get_stat("Wins"), Some(StatValue::Integer(12)));
    let order: Vec<&str> = team.get_stats().keys().map(String::as_str).collect();
    assert_eq!(order, ["Wins", "Losses"]);
}

#[test]
fn number_search_is_exact_not_substring() {
    let mut team = eagles();
    team.add_player(Player::new(10, "Bradden Mann", "P", "Texas A&M"));
    team.add_player(Player::new(21, "Sydney Brown", "S", "Illinois"));

    let hits = query::search_players(&team, "1");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jalen Hurts");
}

#[test]
fn category_search_over_mixed_roster() {
    let mut team = eagles();
    team.add_coach(Coach::new("Joe Barry", "Defensive Coordinator", "Defense"));
    team.add_staff(Staff::new("Ryan Patrizio", "Communications", "Director of Communications"));

    assert_eq!(query::search_category(&team, RosterCategory::Coaches, "").len(), 1);
    assert!(query::search_category(&team, RosterCategory::Staff, "barry").is_empty());
    assert_eq!(
        query::search_category(&team, RosterCategory::Staff, "director").len(),
        1
    );
}
