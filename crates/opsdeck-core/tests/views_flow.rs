use chrono::{NaiveDate, TimeZone, Utc, Weekday};
use opsdeck_core::board::Board;
use opsdeck_core::calendar::{events_on, month_grid, upcoming};
use opsdeck_core::listing::ListState;
use opsdeck_core::record::{Event, EventKind, Task, User, UserSortKey, UserStatus};
use opsdeck_core::seed;

fn named_user(name: &str) -> User {
    let login = Utc
        .with_ymd_and_hms(2024, 1, 15, 10, 0, 0)
        .single()
        .expect("valid instant");
    User::new(
        name,
        format!("{}@company.com", name.to_lowercase()),
        "Viewer",
        "",
        UserStatus::Active,
        login,
    )
}

#[test]
fn users_table_search_and_sort_scenario() {
    let users = vec![
        named_user("Alice"),
        named_user("bob"),
        named_user("Charlie"),
    ];
    let mut list = ListState::new(users, 5);

    list.set_query("b");
    let names: Vec<String> = list
        .visible_page()
        .rows
        .iter()
        .map(|user| user.name.clone())
        .collect();
    assert_eq!(names, vec!["bob"]);

    list.set_query("");
    list.toggle_sort(UserSortKey::Name);
    list.toggle_sort(UserSortKey::Name);
    let names: Vec<String> = list
        .visible_page()
        .rows
        .iter()
        .map(|user| user.name.clone())
        .collect();
    assert_eq!(names, vec!["Charlie", "bob", "Alice"]);
}

#[test]
fn seeded_users_paginate_like_the_table() {
    let mut list = ListState::new(seed::seed_users(), 2);
    assert_eq!(list.total_pages(), 2);

    let first = list.visible_page();
    assert_eq!(first.first_row, 1);
    assert_eq!(first.last_row, 2);

    list.set_page(2);
    let second = list.visible_page();
    assert_eq!(second.rows.len(), 2);
    assert_eq!(second.first_row, 3);
    assert_eq!(second.last_row, 4);
}

#[test]
fn board_drag_then_reload_round_trip() {
    let mut board = Board::new(seed::seed_tasks());
    let dragged = board.tasks()[1].id;

    assert!(board.move_task(
        dragged,
        opsdeck_core::record::TaskStatus::Done
    ));
    board.add_tag(dragged, "  reviewed ");

    // What the kanban view writes to its local slot on every change.
    let slot = serde_json::to_string(board.tasks()).expect("serialize slot");

    // What the next mount reads back.
    let restored: Vec<Task> = serde_json::from_str(&slot).expect("parse slot");
    assert_eq!(restored, board.tasks());
    assert_eq!(
        restored[1].status,
        opsdeck_core::record::TaskStatus::Done
    );
    assert!(restored[1].tags.contains(&"reviewed".to_string()));
}

#[test]
fn calendar_places_and_lists_a_dated_event() {
    let day = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
    let today = NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid date");

    let mut events = seed::seed_events(today);
    events.push(Event::new("Launch", day, "09:00", EventKind::Event));

    let grid = month_grid(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        Weekday::Sun,
    );
    let cell = grid
        .iter()
        .copied()
        .find(|cell| *cell == day)
        .expect("January grid contains day 20");
    assert!(
        events_on(&events, cell)
            .iter()
            .any(|event| event.title == "Launch")
    );

    // 2024-01-20 is after "today", so it shows in upcoming too.
    assert!(
        upcoming(&events, today, 10)
            .iter()
            .any(|event| event.title == "Launch")
    );
}
