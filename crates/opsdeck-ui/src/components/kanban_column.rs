use chrono::{
  NaiveDate,
  Utc
};
use opsdeck_core::record::{
  Task,
  TaskPriority,
  TaskStatus
};
use uuid::Uuid;
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::{
  KanbanCard,
  input_value,
  select_value,
  textarea_value
};

#[derive(Properties, PartialEq)]
pub struct KanbanColumnProps {
  pub status:        TaskStatus,
  pub cards:         Vec<Task>,
  pub dragging:      Option<Uuid>,
  pub drag_over:     bool,
  pub on_move:
    Callback<(Uuid, TaskStatus)>,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>,
  pub on_drag_over:
    Callback<TaskStatus>,
  pub on_add:        Callback<Task>,
  pub on_edit:       Callback<Task>,
  pub on_delete:     Callback<Uuid>,
  pub on_add_tag:
    Callback<(Uuid, String)>,
  pub on_remove_tag:
    Callback<(Uuid, usize)>
}

#[function_component(KanbanColumn)]
pub fn kanban_column(
  props: &KanbanColumnProps
) -> Html {
  let show_form = use_state(|| false);
  let draft_title =
    use_state(String::new);
  let draft_desc =
    use_state(String::new);
  let draft_priority = use_state(|| {
    TaskPriority::Medium.as_key()
      .to_string()
  });
  let draft_assignee =
    use_state(String::new);
  let draft_due = use_state(|| {
    Utc::now()
      .date_naive()
      .format("%Y-%m-%d")
      .to_string()
  });

  let status = props.status;

  let ondragover = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drag_over.emit(status);
      }
    )
  };

  let ondrop = {
    let on_move =
      props.on_move.clone();
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        if let Some(transfer) =
          event.data_transfer()
        {
          match transfer
            .get_data("text/plain")
          {
            | Ok(raw) => {
              match Uuid::parse_str(
                raw.trim()
              ) {
                | Ok(id) => {
                  on_move
                    .emit((id, status));
                }
                | Err(_) => {
                  tracing::warn!(
                    raw,
                    "discarded drag \
                     payload with \
                     invalid task id"
                  );
                }
              }
            }
            | Err(error) => {
              tracing::warn!(
                ?error,
                "failed reading \
                 drag data"
              );
            }
          }
        }
        on_drag_end.emit(());
      }
    )
  };

  let submit_draft = {
    let show_form = show_form.clone();
    let draft_title =
      draft_title.clone();
    let draft_desc =
      draft_desc.clone();
    let draft_priority =
      draft_priority.clone();
    let draft_assignee =
      draft_assignee.clone();
    let draft_due = draft_due.clone();
    let on_add = props.on_add.clone();
    Callback::from(move |_| {
      let title =
        draft_title.trim().to_string();
      if title.is_empty() {
        return;
      }
      let due = NaiveDate::parse_from_str(
        &draft_due, "%Y-%m-%d"
      )
      .unwrap_or_else(|_| {
        Utc::now().date_naive()
      });
      let priority =
        TaskPriority::from_key(
          &draft_priority
        )
        .unwrap_or(
          TaskPriority::Medium
        );

      on_add.emit(Task::new(
        title,
        (*draft_desc).clone(),
        priority,
        status,
        (*draft_assignee).clone(),
        due,
        vec![]
      ));

      show_form.set(false);
      draft_title
        .set(String::new());
      draft_desc.set(String::new());
      draft_assignee
        .set(String::new());
    })
  };

  let form = if *show_form {
    let cancel = {
      let show_form =
        show_form.clone();
      Callback::from(move |_| {
        show_form.set(false);
      })
    };
    let on_title = {
      let draft_title =
        draft_title.clone();
      Callback::from(move |event| {
        draft_title
          .set(input_value(&event));
      })
    };
    let on_desc = {
      let draft_desc =
        draft_desc.clone();
      Callback::from(move |event| {
        draft_desc.set(
          textarea_value(&event)
        );
      })
    };
    let on_priority = {
      let draft_priority =
        draft_priority.clone();
      Callback::from(move |event| {
        draft_priority
          .set(select_value(&event));
      })
    };
    let on_assignee = {
      let draft_assignee =
        draft_assignee.clone();
      Callback::from(move |event| {
        draft_assignee
          .set(input_value(&event));
      })
    };
    let on_due = {
      let draft_due =
        draft_due.clone();
      Callback::from(move |event| {
        draft_due
          .set(input_value(&event));
      })
    };

    html! {
        <div class="kanban-add-form">
            <input
                type="text"
                placeholder="Title"
                value={(*draft_title).clone()}
                oninput={on_title}
            />
            <textarea
                placeholder="Description"
                value={(*draft_desc).clone()}
                oninput={on_desc}
            />
            <select onchange={on_priority}>
                {
                    for TaskPriority::all().into_iter().map(|priority| html! {
                        <option
                            value={priority.as_key()}
                            selected={*draft_priority == priority.as_key()}
                        >
                            { format!("{} Priority", priority.label()) }
                        </option>
                    })
                }
            </select>
            <input
                type="date"
                value={(*draft_due).clone()}
                oninput={on_due}
            />
            <input
                type="text"
                placeholder="Assignee"
                value={(*draft_assignee).clone()}
                oninput={on_assignee}
            />
            <div class="form-row">
                <button class="btn" onclick={cancel}>{ "Cancel" }</button>
                <button class="btn primary" onclick={submit_draft}>{ "Add Task" }</button>
            </div>
        </div>
    }
  } else {
    let open = {
      let show_form =
        show_form.clone();
      Callback::from(move |_| {
        show_form.set(true);
      })
    };
    html! {
        <button class="kanban-add-button" onclick={open}>
            { "+ Add Task" }
        </button>
    }
  };

  html! {
      <div
          class={classes!(
              "kanban-column",
              props.drag_over.then_some("drop-hint")
          )}
          {ondragover}
          {ondrop}
      >
          <div class="kanban-column-header">
              <span class={classes!("status-dot", status.as_key())}></span>
              <span class="kanban-column-title">{ status.label() }</span>
              <span class="badge">{ props.cards.len() }</span>
          </div>
          <div class="kanban-column-body">
              {
                  for props.cards.iter().cloned().map(|task| {
                      let dragging = props.dragging == Some(task.id);
                      html! {
                          <KanbanCard
                              {task}
                              {dragging}
                              on_drag_start={props.on_drag_start.clone()}
                              on_drag_end={props.on_drag_end.clone()}
                              on_edit={props.on_edit.clone()}
                              on_delete={props.on_delete.clone()}
                              on_add_tag={props.on_add_tag.clone()}
                              on_remove_tag={props.on_remove_tag.clone()}
                          />
                      }
                  })
              }
              { form }
          </div>
      </div>
  }
}
