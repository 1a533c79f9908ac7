use chrono::{
  Datelike,
  NaiveDate,
  Utc,
  Weekday
};
use opsdeck_core::calendar::{
  events_on,
  month_grid,
  shift_months,
  upcoming,
  weekday_labels
};
use opsdeck_core::record::{
  Event,
  EventKind
};
use opsdeck_core::seed;
use uuid::Uuid;
use web_sys::SubmitEvent;
use yew::{
  Callback,
  Html,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};

use crate::components::{
  ConfirmDialog,
  input_value,
  select_value,
  textarea_value
};

const UPCOMING_LIMIT: usize = 4;
const WEEK_START: Weekday =
  Weekday::Sun;

/// Form draft behind the add/edit
/// modal; dates stay strings until
/// submit, matching the input
/// elements.
#[derive(Clone, PartialEq)]
struct EventDraft {
  editing:     Option<Uuid>,
  title:       String,
  date:        String,
  time:        String,
  kind:        EventKind,
  location:    String,
  description: String
}

impl EventDraft {
  fn add(day: NaiveDate) -> Self {
    Self {
      editing:     None,
      title:       String::new(),
      date:        day
        .format("%Y-%m-%d")
        .to_string(),
      time:        "10:00".to_string(),
      kind:        EventKind::Event,
      location:    String::new(),
      description: String::new()
    }
  }

  fn edit(event: &Event) -> Self {
    Self {
      editing:     Some(event.id),
      title:       event.title.clone(),
      date:        event
        .date
        .format("%Y-%m-%d")
        .to_string(),
      time:        event.time.clone(),
      kind:        event.kind,
      location:    event
        .location
        .clone()
        .unwrap_or_default(),
      description: event
        .description
        .clone()
        .unwrap_or_default()
    }
  }
}

#[function_component(CalendarWorkspace)]
pub fn calendar_workspace() -> Html {
  let today =
    Utc::now().date_naive();
  let cursor = use_state(|| today);
  let selected = use_state(|| today);
  let events = use_state(|| {
    seed::seed_events(today)
  });
  let draft =
    use_state(|| None::<EventDraft>);
  let delete_id =
    use_state(|| None::<Uuid>);

  let prev_month = {
    let cursor = cursor.clone();
    Callback::from(move |_| {
      cursor
        .set(shift_months(*cursor, -1));
    })
  };
  let next_month = {
    let cursor = cursor.clone();
    Callback::from(move |_| {
      cursor
        .set(shift_months(*cursor, 1));
    })
  };

  let open_add = {
    let draft = draft.clone();
    let selected = selected.clone();
    Callback::from(move |_| {
      draft.set(Some(
        EventDraft::add(*selected)
      ));
    })
  };

  let grid =
    month_grid(*cursor, WEEK_START);

  let cells: Vec<Html> = grid
    .iter()
    .copied()
    .map(|day| {
      let bucket =
        events_on(&events, day);
      let outside = day.month()
        != cursor.month();
      let is_today = day == today;
      let is_selected =
        day == *selected;
      let select = {
        let selected =
          selected.clone();
        Callback::from(move |_| {
          selected.set(day);
        })
      };
      let more = bucket
        .len()
        .saturating_sub(2);
      html! {
          <div
              class={classes!(
                  "calendar-cell",
                  outside.then_some("outside"),
                  is_today.then_some("today"),
                  is_selected.then_some("selected")
              )}
              onclick={select}
          >
              <div class="calendar-cell-day">{ day.day() }</div>
              {
                  for bucket.iter().take(2).map(|event| html! {
                      <div class={classes!("event-chip", event.kind.as_key())}>
                          { &event.title }
                      </div>
                  })
              }
              {
                  if more > 0 {
                      html! { <div class="muted">{ format!("+{more} more") }</div> }
                  } else {
                      html! {}
                  }
              }
          </div>
      }
    })
    .collect();

  let day_events =
    events_on(&events, *selected);
  let day_panel: Vec<Html> =
    day_events
      .iter()
      .map(|event| {
        let edit = {
          let draft = draft.clone();
          let snapshot =
            (*event).clone();
          Callback::from(move |_| {
            draft.set(Some(
              EventDraft::edit(
                &snapshot
              )
            ));
          })
        };
        let request_delete = {
          let delete_id =
            delete_id.clone();
          let id = event.id;
          Callback::from(move |_| {
            delete_id.set(Some(id));
          })
        };
        html! {
            <div class="event-row">
                <span class={classes!("status-dot", event.kind.as_key())}></span>
                <div class="event-row-body">
                    <div class="event-row-head">
                        <span class="event-title">{ &event.title }</span>
                        <span class="row-actions">
                            <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                            <button class="btn ghost danger" onclick={request_delete}>{ "Delete" }</button>
                        </span>
                    </div>
                    <div class="muted">
                        { &event.time }
                        {
                            match event.location.as_ref() {
                                Some(location) => html! {
                                    <span>{ format!(" \u{00B7} {location}") }</span>
                                },
                                None => html! {},
                            }
                        }
                    </div>
                    {
                        match event.description.as_ref() {
                            Some(description) => html! {
                                <div class="muted">{ description }</div>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
        }
      })
      .collect();

  let upcoming_panel: Vec<Html> =
    upcoming(
      &events,
      today,
      UPCOMING_LIMIT
    )
    .iter()
    .map(|event| {
      html! {
          <div class="event-row">
              <span class={classes!("status-dot", event.kind.as_key())}></span>
              <div class="event-row-body">
                  <div class="event-title">{ &event.title }</div>
                  <div class="muted">
                      { format!(
                          "{} at {}",
                          event.date.format("%b %d"),
                          event.time
                      ) }
                  </div>
              </div>
          </div>
      }
    })
    .collect();

  let delete_dialog = match *delete_id
  {
    | Some(id) => {
      let confirm = {
        let events = events.clone();
        let delete_id =
          delete_id.clone();
        Callback::from(move |_| {
          let mut next =
            (*events).clone();
          next.retain(|event| {
            event.id != id
          });
          events.set(next);
          delete_id.set(None);
        })
      };
      let cancel = {
        let delete_id =
          delete_id.clone();
        Callback::from(move |_| {
          delete_id.set(None);
        })
      };
      html! {
          <ConfirmDialog
              title="Delete Event"
              message="Are you sure you want to delete this event? This action cannot be undone."
              on_confirm={confirm}
              on_cancel={cancel}
          />
      }
    }
    | None => html! {}
  };

  let modal = match (*draft).clone() {
    | Some(current) => {
      render_event_modal(
        current,
        draft.clone(),
        events.clone(),
        *selected
      )
    }
    | None => html! {}
  };

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Calendar" }</h1>
                  <p class="muted">{ "Manage your schedule and upcoming events." }</p>
              </div>
              <button class="btn primary" onclick={open_add}>{ "Add Event" }</button>
          </div>
          <div class="calendar-layout">
              <div class="panel calendar-panel">
                  <div class="calendar-head">
                      <h2>{ cursor.format("%B %Y").to_string() }</h2>
                      <div>
                          <button class="btn ghost" onclick={prev_month}>{ "\u{2039}" }</button>
                          <button class="btn ghost" onclick={next_month}>{ "\u{203A}" }</button>
                      </div>
                  </div>
                  <div class="calendar-weekdays">
                      {
                          for weekday_labels(WEEK_START).into_iter().map(|label| html! {
                              <div class="calendar-weekday">{ label }</div>
                          })
                      }
                  </div>
                  <div class="calendar-grid">
                      { for cells.into_iter() }
                  </div>
              </div>
              <div class="calendar-side">
                  <div class="panel">
                      <div class="panel-title">
                          { selected.format("%A, %B %d").to_string() }
                      </div>
                      {
                          if day_panel.is_empty() {
                              html! { <p class="empty-state">{ "No events scheduled" }</p> }
                          } else {
                              html! { <>{ for day_panel.into_iter() }</> }
                          }
                      }
                  </div>
                  <div class="panel">
                      <div class="panel-title">{ "Upcoming Events" }</div>
                      {
                          if upcoming_panel.is_empty() {
                              html! { <p class="empty-state">{ "Nothing coming up" }</p> }
                          } else {
                              html! { <>{ for upcoming_panel.into_iter() }</> }
                          }
                      }
                  </div>
              </div>
          </div>
          { modal }
          { delete_dialog }
      </div>
  }
}

fn render_event_modal(
  current: EventDraft,
  draft: UseStateHandle<
    Option<EventDraft>
  >,
  events: UseStateHandle<Vec<Event>>,
  selected: NaiveDate
) -> Html {
  let title =
    if current.editing.is_some() {
      "Edit Event"
    } else {
      "Add New Event"
    };

  let on_title = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(EventDraft {
        title: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_date = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(EventDraft {
        date: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_time = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(EventDraft {
        time: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_kind = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      let kind = EventKind::from_key(
        &select_value(&event)
      )
      .unwrap_or(current.kind);
      draft.set(Some(EventDraft {
        kind,
        ..current.clone()
      }));
    })
  };
  let on_location = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(EventDraft {
        location: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_description = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(EventDraft {
        description: textarea_value(
          &event
        ),
        ..current.clone()
      }));
    })
  };

  let cancel = {
    let draft = draft.clone();
    Callback::from(move |_| {
      draft.set(None);
    })
  };

  let save = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(
      move |submit: SubmitEvent| {
        submit.prevent_default();
        let date =
          NaiveDate::parse_from_str(
            &current.date,
            "%Y-%m-%d"
          )
          .unwrap_or(selected);
        let mut record = Event::new(
          current.title.clone(),
          date,
          current.time.clone(),
          current.kind
        );
        if !current
          .location
          .trim()
          .is_empty()
        {
          record = record
            .with_location(
              current.location.trim()
            );
        }
        if !current
          .description
          .trim()
          .is_empty()
        {
          record = record
            .with_description(
              current
                .description
                .trim()
            );
        }

        let mut next =
          (*events).clone();
        match current.editing {
          | Some(id) => {
            record.id = id;
            if let Some(slot) = next
              .iter_mut()
              .find(|event| {
                event.id == id
              })
            {
              *slot = record;
            }
          }
          | None => {
            next.push(record);
          }
        }
        events.set(next);
        draft.set(None);
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-title">{ title }</div>
              <form onsubmit={save}>
                  <label>{ "Title" }</label>
                  <input
                      type="text"
                      required={true}
                      value={current.title.clone()}
                      oninput={on_title}
                  />
                  <div class="form-row">
                      <div>
                          <label>{ "Date" }</label>
                          <input
                              type="date"
                              required={true}
                              value={current.date.clone()}
                              oninput={on_date}
                          />
                      </div>
                      <div>
                          <label>{ "Time" }</label>
                          <input
                              type="time"
                              required={true}
                              value={current.time.clone()}
                              oninput={on_time}
                          />
                      </div>
                  </div>
                  <label>{ "Event Type" }</label>
                  <select onchange={on_kind}>
                      {
                          for EventKind::all().into_iter().map(|kind| html! {
                              <option
                                  value={kind.as_key()}
                                  selected={current.kind == kind}
                              >
                                  { kind.label() }
                              </option>
                          })
                      }
                  </select>
                  <label>{ "Location (optional)" }</label>
                  <input
                      type="text"
                      value={current.location.clone()}
                      oninput={on_location}
                  />
                  <label>{ "Description (optional)" }</label>
                  <textarea
                      value={current.description.clone()}
                      oninput={on_description}
                  />
                  <div class="modal-actions">
                      <button type="button" class="btn" onclick={cancel}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary">{ "Save Event" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
