use chrono::NaiveDate;
use opsdeck_core::board::Board;
use opsdeck_core::record::{
  Task,
  TaskPriority,
  TaskStatus
};
use opsdeck_core::seed;
use uuid::Uuid;
use web_sys::SubmitEvent;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  ConfirmDialog,
  KanbanColumn,
  input_value,
  select_value,
  textarea_value
};
use crate::storage;

#[function_component(KanbanWorkspace)]
pub fn kanban_workspace() -> Html {
  let board = use_state(|| {
    let tasks =
      storage::load_kanban_slot()
        .unwrap_or_else(
          seed::seed_tasks
        );
    Board::new(tasks)
  });
  let dragging =
    use_state(|| None::<Uuid>);
  let drag_over =
    use_state(|| None::<TaskStatus>);
  let edit_draft =
    use_state(|| None::<Task>);
  let delete_id =
    use_state(|| None::<Uuid>);

  {
    let board = board.clone();
    use_effect_with(
      (*board).clone(),
      move |board: &Board| {
        storage::save_kanban_slot(
          board.tasks()
        );
        tracing::debug!(
          count = board.len(),
          "persisted kanban slot"
        );
        || ()
      }
    );
  }

  let on_drag_start = {
    let dragging = dragging.clone();
    Callback::from(move |id: Uuid| {
      dragging.set(Some(id));
    })
  };

  let on_drag_end = {
    let dragging = dragging.clone();
    let drag_over = drag_over.clone();
    Callback::from(move |_: ()| {
      dragging.set(None);
      drag_over.set(None);
    })
  };

  let on_drag_over = {
    let drag_over = drag_over.clone();
    Callback::from(
      move |status: TaskStatus| {
        drag_over.set(Some(status));
      }
    )
  };

  let on_move = {
    let board = board.clone();
    let dragging = dragging.clone();
    let drag_over = drag_over.clone();
    Callback::from(
      move |(id, status): (
        Uuid,
        TaskStatus
      )| {
        let mut next =
          (*board).clone();
        next.move_task(id, status);
        board.set(next);
        dragging.set(None);
        drag_over.set(None);
      }
    )
  };

  let on_add = {
    let board = board.clone();
    Callback::from(
      move |task: Task| {
        let mut next =
          (*board).clone();
        next.add_task(task);
        board.set(next);
      }
    )
  };

  let on_edit = {
    let edit_draft =
      edit_draft.clone();
    Callback::from(
      move |task: Task| {
        edit_draft.set(Some(task));
      }
    )
  };

  let on_delete_request = {
    let delete_id = delete_id.clone();
    Callback::from(move |id: Uuid| {
      delete_id.set(Some(id));
    })
  };

  let on_add_tag = {
    let board = board.clone();
    Callback::from(
      move |(id, raw): (
        Uuid,
        String
      )| {
        let mut next =
          (*board).clone();
        if next.add_tag(id, &raw) {
          board.set(next);
        }
      }
    )
  };

  let on_remove_tag = {
    let board = board.clone();
    Callback::from(
      move |(id, index): (
        Uuid,
        usize
      )| {
        let mut next =
          (*board).clone();
        if next.remove_tag(id, index) {
          board.set(next);
        }
      }
    )
  };

  let delete_dialog = match *delete_id
  {
    | Some(id) => {
      let confirm = {
        let board = board.clone();
        let delete_id =
          delete_id.clone();
        Callback::from(move |_| {
          let mut next =
            (*board).clone();
          next.remove_task(id);
          board.set(next);
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
              title="Delete Task"
              message="Are you sure you want to delete this task? This action cannot be undone."
              on_confirm={confirm}
              on_cancel={cancel}
          />
      }
    }
    | None => html! {}
  };

  let edit_modal =
    match (*edit_draft).clone() {
      | Some(draft) => render_edit_modal(
        draft,
        edit_draft.clone(),
        board.clone()
      ),
      | None => html! {}
    };

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Kanban Board" }</h1>
                  <p class="muted">{ "Organize and track your team's work progress." }</p>
              </div>
          </div>
          <div class="kanban-board">
              {
                  for TaskStatus::all().into_iter().map(|status| {
                      let cards: Vec<Task> = board
                          .tasks_in(status)
                          .into_iter()
                          .cloned()
                          .collect();
                      html! {
                          <KanbanColumn
                              {status}
                              {cards}
                              dragging={*dragging}
                              drag_over={*drag_over == Some(status)}
                              on_move={on_move.clone()}
                              on_drag_start={on_drag_start.clone()}
                              on_drag_end={on_drag_end.clone()}
                              on_drag_over={on_drag_over.clone()}
                              on_add={on_add.clone()}
                              on_edit={on_edit.clone()}
                              on_delete={on_delete_request.clone()}
                              on_add_tag={on_add_tag.clone()}
                              on_remove_tag={on_remove_tag.clone()}
                          />
                      }
                  })
              }
          </div>
          { edit_modal }
          { delete_dialog }
      </div>
  }
}

fn render_edit_modal(
  draft: Task,
  edit_draft: yew::UseStateHandle<
    Option<Task>
  >,
  board: yew::UseStateHandle<Board>
) -> Html {
  let on_title = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      edit_draft.set(Some(Task {
        title: input_value(&event),
        ..draft.clone()
      }));
    })
  };
  let on_desc = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      edit_draft.set(Some(Task {
        description: textarea_value(
          &event
        ),
        ..draft.clone()
      }));
    })
  };
  let on_priority = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      let priority =
        TaskPriority::from_key(
          &select_value(&event)
        )
        .unwrap_or(draft.priority);
      edit_draft.set(Some(Task {
        priority,
        ..draft.clone()
      }));
    })
  };
  let on_status = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      let status =
        TaskStatus::from_key(
          &select_value(&event)
        )
        .unwrap_or(draft.status);
      edit_draft.set(Some(Task {
        status,
        ..draft.clone()
      }));
    })
  };
  let on_due = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      let due =
        NaiveDate::parse_from_str(
          &input_value(&event),
          "%Y-%m-%d"
        )
        .unwrap_or(draft.due_date);
      edit_draft.set(Some(Task {
        due_date: due,
        ..draft.clone()
      }));
    })
  };
  let on_assignee = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(move |event| {
      edit_draft.set(Some(Task {
        assignee: input_value(&event),
        ..draft.clone()
      }));
    })
  };

  let cancel = {
    let edit_draft =
      edit_draft.clone();
    Callback::from(move |_| {
      edit_draft.set(None);
    })
  };

  let save = {
    let edit_draft =
      edit_draft.clone();
    let draft = draft.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        let mut next =
          (*board).clone();
        next
          .update_task(draft.clone());
        board.set(next);
        edit_draft.set(None);
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-title">{ "Edit Task" }</div>
              <form onsubmit={save}>
                  <label>{ "Title" }</label>
                  <input
                      type="text"
                      required={true}
                      value={draft.title.clone()}
                      oninput={on_title}
                  />
                  <label>{ "Description" }</label>
                  <textarea
                      value={draft.description.clone()}
                      oninput={on_desc}
                  />
                  <label>{ "Priority" }</label>
                  <select onchange={on_priority}>
                      {
                          for TaskPriority::all().into_iter().map(|priority| html! {
                              <option
                                  value={priority.as_key()}
                                  selected={draft.priority == priority}
                              >
                                  { priority.label() }
                              </option>
                          })
                      }
                  </select>
                  <label>{ "Status" }</label>
                  <select onchange={on_status}>
                      {
                          for TaskStatus::all().into_iter().map(|status| html! {
                              <option
                                  value={status.as_key()}
                                  selected={draft.status == status}
                              >
                                  { status.label() }
                              </option>
                          })
                      }
                  </select>
                  <label>{ "Due Date" }</label>
                  <input
                      type="date"
                      value={draft.due_date.format("%Y-%m-%d").to_string()}
                      oninput={on_due}
                  />
                  <label>{ "Assignee" }</label>
                  <input
                      type="text"
                      value={draft.assignee.clone()}
                      oninput={on_assignee}
                  />
                  <div class="modal-actions">
                      <button type="button" class="btn" onclick={cancel}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary">{ "Update" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
