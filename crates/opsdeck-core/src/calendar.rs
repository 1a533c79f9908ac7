use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  Weekday
};

use crate::record::Event;

/// Cells in the fixed month grid:
/// six rows of seven days.
pub const MONTH_GRID_CELLS: usize = 42;

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

/// Month navigation keeps the
/// day-of-month where the target
/// month has it, otherwise clamps to
/// the month's last day.
pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

/// The complete 7-column grid for the
/// focus month, padded with
/// adjacent-month days on both ends.
pub fn month_grid(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<NaiveDate> {
  let first = first_day_of_month(
    focus.year(),
    focus.month()
  );
  let grid_start =
    start_of_week(first, week_start);

  (0..MONTH_GRID_CELLS as i64)
    .map(|offset| {
      add_days(grid_start, offset)
    })
    .collect()
}

pub fn weekday_labels(
  week_start: Weekday
) -> [&'static str; 7] {
  match week_start {
    | Weekday::Sun => [
      "Sun", "Mon", "Tue", "Wed",
      "Thu", "Fri", "Sat"
    ],
    | _ => [
      "Mon", "Tue", "Wed", "Thu",
      "Fri", "Sat", "Sun"
    ]
  }
}

/// Records whose date falls on the
/// given day, in insertion order.
pub fn events_on(
  events: &[Event],
  day: NaiveDate
) -> Vec<&Event> {
  events
    .iter()
    .filter(|event| event.date == day)
    .collect()
}

/// Future records (today inclusive)
/// ascending by date, truncated.
/// Stable sort keeps insertion order
/// within one day.
pub fn upcoming(
  events: &[Event],
  today: NaiveDate,
  limit: usize
) -> Vec<&Event> {
  let mut future: Vec<&Event> = events
    .iter()
    .filter(|event| {
      event.date >= today
    })
    .collect();
  future.sort_by_key(|event| {
    event.date
  });
  future.truncate(limit);
  future
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::EventKind;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn grid_is_complete_and_aligned() {
    let grid = month_grid(
      date(2024, 1, 15),
      Weekday::Sun
    );

    assert_eq!(
      grid.len(),
      MONTH_GRID_CELLS
    );
    // January 2024 starts on a
    // Monday; a Sunday-start grid
    // begins on Dec 31.
    assert_eq!(
      grid[0],
      date(2023, 12, 31)
    );
    for pair in grid.windows(2) {
      assert_eq!(
        pair[1],
        add_days(pair[0], 1)
      );
    }
    for week in grid.chunks(7) {
      assert_eq!(
        week[0].weekday(),
        Weekday::Sun
      );
    }
  }

  #[test]
  fn event_lands_in_its_day_cell() {
    let event = Event::new(
      "Design Review",
      date(2024, 1, 20),
      "14:00",
      EventKind::Meeting
    );
    let events = vec![event];

    let grid = month_grid(
      date(2024, 1, 1),
      Weekday::Sun
    );
    let cell = grid
      .iter()
      .find(|day| {
        **day == date(2024, 1, 20)
      })
      .expect("day 20 in grid");

    let bucket =
      events_on(&events, *cell);
    assert_eq!(bucket.len(), 1);
    assert_eq!(
      bucket[0].title,
      "Design Review"
    );
    assert!(events_on(
      &events,
      date(2024, 1, 21)
    )
    .is_empty());
  }

  #[test]
  fn upcoming_filters_sorts_truncates()
  {
    let today = date(2024, 1, 16);
    let events = vec![
      Event::new(
        "past",
        date(2024, 1, 10),
        "09:00",
        EventKind::Meeting
      ),
      Event::new(
        "later",
        date(2024, 1, 25),
        "10:00",
        EventKind::Event
      ),
      Event::new(
        "today",
        date(2024, 1, 16),
        "09:00",
        EventKind::Meeting
      ),
      Event::new(
        "soon",
        date(2024, 1, 20),
        "17:00",
        EventKind::Deadline
      ),
    ];

    let list =
      upcoming(&events, today, 4);
    let titles: Vec<&str> = list
      .iter()
      .map(|event| {
        event.title.as_str()
      })
      .collect();
    assert_eq!(
      titles,
      vec!["today", "soon", "later"]
    );

    let truncated =
      upcoming(&events, today, 2);
    assert_eq!(truncated.len(), 2);
  }

  #[test]
  fn upcoming_includes_event_on_today()
  {
    let events = vec![Event::new(
      "launch",
      date(2024, 1, 20),
      "09:00",
      EventKind::Event
    )];

    assert_eq!(
      upcoming(
        &events,
        date(2024, 1, 20),
        4
      )
      .len(),
      1
    );
    assert!(upcoming(
      &events,
      date(2024, 1, 21),
      4
    )
    .is_empty());
  }

  #[test]
  fn shift_preserves_or_clamps_day() {
    assert_eq!(
      shift_months(
        date(2024, 1, 15),
        1
      ),
      date(2024, 2, 15)
    );
    assert_eq!(
      shift_months(
        date(2024, 1, 31),
        1
      ),
      date(2024, 2, 29)
    );
    assert_eq!(
      shift_months(
        date(2024, 3, 31),
        -1
      ),
      date(2024, 2, 29)
    );
    assert_eq!(
      shift_months(
        date(2024, 12, 15),
        1
      ),
      date(2025, 1, 15)
    );
  }

  #[test]
  fn start_of_week_respects_start_day()
  {
    // 2024-01-17 is a Wednesday.
    let wednesday =
      date(2024, 1, 17);
    assert_eq!(
      start_of_week(
        wednesday,
        Weekday::Mon
      ),
      date(2024, 1, 15)
    );
    assert_eq!(
      start_of_week(
        wednesday,
        Weekday::Sun
      ),
      date(2024, 1, 14)
    );
  }
}
