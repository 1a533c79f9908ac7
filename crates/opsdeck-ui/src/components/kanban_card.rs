use opsdeck_core::record::{
  Task,
  TaskPriority
};
use uuid::Uuid;
use web_sys::{
  DragEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use super::input_value;

fn priority_class(
  priority: TaskPriority
) -> &'static str {
  match priority {
    | TaskPriority::High => {
      "priority high"
    }
    | TaskPriority::Medium => {
      "priority medium"
    }
    | TaskPriority::Low => {
      "priority low"
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct KanbanCardProps {
  pub task:          Task,
  pub dragging:      bool,
  pub on_drag_start: Callback<Uuid>,
  pub on_drag_end:   Callback<()>,
  pub on_edit:       Callback<Task>,
  pub on_delete:     Callback<Uuid>,
  pub on_add_tag:
    Callback<(Uuid, String)>,
  pub on_remove_tag:
    Callback<(Uuid, usize)>
}

#[function_component(KanbanCard)]
pub fn kanban_card(
  props: &KanbanCardProps
) -> Html {
  let expanded = use_state(|| false);
  let tag_input =
    use_state(String::new);

  let task_id = props.task.id;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(transfer) =
          event.data_transfer()
        {
          let _ = transfer.set_data(
            "text/plain",
            &task_id.to_string()
          );
          transfer
            .set_effect_allowed("move");
        }
        on_drag_start.emit(task_id);
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_: DragEvent| {
      on_drag_end.emit(());
    })
  };

  let toggle_expand = {
    let expanded = expanded.clone();
    Callback::from(move |_| {
      expanded.set(!*expanded);
    })
  };

  let on_edit = {
    let on_edit =
      props.on_edit.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_edit.emit(task.clone());
    })
  };

  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    Callback::from(move |_| {
      on_delete.emit(task_id);
    })
  };

  let submit_tag = {
    let tag_input =
      tag_input.clone();
    let on_add_tag =
      props.on_add_tag.clone();
    move || {
      on_add_tag.emit((
        task_id,
        (*tag_input).clone()
      ));
      tag_input.set(String::new());
    }
  };

  let add_tag_click = {
    let submit_tag =
      submit_tag.clone();
    Callback::from(move |_| {
      submit_tag();
    })
  };

  let add_tag_key = {
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter" {
          submit_tag();
        }
      }
    )
  };

  let on_tag_input = {
    let tag_input =
      tag_input.clone();
    Callback::from(move |event| {
      tag_input
        .set(input_value(&event));
    })
  };

  let details = if *expanded {
    html! {
        <div class="kanban-card-details">
            <p class="kanban-card-desc">{ &props.task.description }</p>
            <div class="tag-row">
                {
                    for props.task.tags.iter().enumerate().map(|(index, tag)| {
                        let on_remove_tag = props.on_remove_tag.clone();
                        html! {
                            <span class="tag-chip">
                                { tag }
                                <button
                                    class="tag-remove"
                                    onclick={Callback::from(move |_| {
                                        on_remove_tag.emit((task_id, index));
                                    })}
                                >
                                    { "\u{00D7}" }
                                </button>
                            </span>
                        }
                    })
                }
            </div>
            <div class="tag-editor">
                <input
                    type="text"
                    placeholder="Add tag"
                    value={(*tag_input).clone()}
                    oninput={on_tag_input}
                    onkeydown={add_tag_key}
                />
                <button class="btn primary" onclick={add_tag_click}>{ "Add" }</button>
            </div>
        </div>
    }
  } else {
    html! {}
  };

  html! {
      <div
          class={classes!("kanban-card", props.dragging.then_some("dragging"))}
          draggable="true"
          {ondragstart}
          {ondragend}
      >
          <div class="kanban-card-top">
              <span class={priority_class(props.task.priority)}>
                  { props.task.priority.label() }
              </span>
              <div class="kanban-card-actions">
                  <button class="btn ghost" onclick={on_edit}>{ "Edit" }</button>
                  <button class="btn ghost danger" onclick={on_delete}>{ "Delete" }</button>
                  <button class="btn ghost" onclick={toggle_expand}>
                      { if *expanded { "\u{25B4}" } else { "\u{25BE}" } }
                  </button>
              </div>
          </div>
          <div class="kanban-card-title">{ &props.task.title }</div>
          { details }
          <div class="kanban-card-meta">
              <span>{ props.task.due_date.format("%b %d").to_string() }</span>
              <span>{ props.task.assignee_short() }</span>
          </div>
      </div>
  }
}
