use chrono::Utc;
use opsdeck_core::listing::ListState;
use opsdeck_core::record::{
  User,
  UserSortKey,
  UserStatus
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
  Pagination,
  input_value,
  select_value
};

const PAGE_SIZE: usize = 5;

const ROLE_CHOICES: [&str; 5] = [
  "Admin", "Manager", "Developer",
  "Designer", "Viewer"
];

/// Draft behind the add/edit modal.
/// `editing` keeps the original row
/// so avatar and last-login survive
/// an edit untouched.
#[derive(Clone, PartialEq)]
struct UserDraft {
  editing: Option<User>,
  name:    String,
  email:   String,
  role:    String,
  status:  UserStatus
}

impl UserDraft {
  fn add() -> Self {
    Self {
      editing: None,
      name:    String::new(),
      email:   String::new(),
      role:    String::new(),
      status:  UserStatus::Active
    }
  }

  fn edit(user: User) -> Self {
    Self {
      name:    user.name.clone(),
      email:   user.email.clone(),
      role:    user.role.clone(),
      status:  user.status,
      editing: Some(user)
    }
  }
}

#[function_component(UsersWorkspace)]
pub fn users_workspace() -> Html {
  let list = use_state(|| {
    ListState::new(
      seed::seed_users(),
      PAGE_SIZE
    )
  });
  let draft =
    use_state(|| None::<UserDraft>);
  let delete_id =
    use_state(|| None::<Uuid>);

  let page = list.visible_page();

  let on_query = {
    let list = list.clone();
    Callback::from(move |event| {
      let mut next = (*list).clone();
      next.set_query(input_value(
        &event
      ));
      list.set(next);
    })
  };

  let on_page = {
    let list = list.clone();
    Callback::from(
      move |page: usize| {
        let mut next =
          (*list).clone();
        next.set_page(page);
        list.set(next);
      }
    )
  };

  let on_sort = {
    let list = list.clone();
    Callback::from(
      move |key: UserSortKey| {
        let mut next =
          (*list).clone();
        next.toggle_sort(key);
        list.set(next);
      }
    )
  };

  let on_toggle_row = {
    let list = list.clone();
    Callback::from(move |id: Uuid| {
      let mut next = (*list).clone();
      next.toggle_selected(id);
      list.set(next);
    })
  };

  let on_toggle_all = {
    let list = list.clone();
    Callback::from(move |_| {
      let mut next = (*list).clone();
      next.toggle_select_all_visible();
      list.set(next);
    })
  };

  let on_bulk_delete = {
    let list = list.clone();
    Callback::from(move |_| {
      let mut next = (*list).clone();
      next.remove_selected();
      list.set(next);
    })
  };

  let open_add = {
    let draft = draft.clone();
    Callback::from(move |_| {
      draft.set(Some(UserDraft::add()));
    })
  };

  let sort_header = |key: UserSortKey,
                     label: &str| {
    let on_sort = on_sort.clone();
    let arrow = match list.sort() {
      | Some((active, direction))
        if active == key =>
      {
        direction.arrow()
      }
      | _ => ""
    };
    let text =
      format!("{label} {arrow}");
    html! {
        <th onclick={Callback::from(move |_| on_sort.emit(key))}>
            { text.trim().to_string() }
        </th>
    }
  };

  let all_visible_selected =
    !page.rows.is_empty()
      && page.rows.iter().all(|user| {
        list.is_selected(user.id)
      });

  let bulk_bar = if list
    .selected_count()
    > 0
  {
    html! {
        <div class="bulk-bar">
            <span>{ format!("{} selected", list.selected_count()) }</span>
            <button class="btn danger" onclick={on_bulk_delete}>{ "Delete" }</button>
        </div>
    }
  } else {
    html! {}
  };

  let body = if page.rows.is_empty() {
    html! {
        <tr>
            <td colspan="6" class="empty-state">{ "No users found" }</td>
        </tr>
    }
  } else {
    html! {
        <>
            {
                for page.rows.iter().cloned().map(|user| {
                    let id = user.id;
                    let checked = list.is_selected(id);
                    let on_toggle_row = on_toggle_row.clone();
                    let edit = {
                        let draft = draft.clone();
                        let user = user.clone();
                        Callback::from(move |_| {
                            draft.set(Some(UserDraft::edit(user.clone())));
                        })
                    };
                    let request_delete = {
                        let delete_id = delete_id.clone();
                        Callback::from(move |_| {
                            delete_id.set(Some(id));
                        })
                    };
                    html! {
                        <tr>
                            <td>
                                <input
                                    type="checkbox"
                                    checked={checked}
                                    onchange={Callback::from(move |_| on_toggle_row.emit(id))}
                                />
                            </td>
                            <td>
                                <div class="user-cell">
                                    <img class="avatar" src={user.avatar.clone()} alt={user.name.clone()} />
                                    <div>
                                        <div class="user-name">{ &user.name }</div>
                                        <div class="muted">{ &user.email }</div>
                                    </div>
                                </div>
                            </td>
                            <td><span class="badge">{ &user.role }</span></td>
                            <td>
                                <span class={classes!("badge", "status", user.status.as_key())}>
                                    { user.status.label() }
                                </span>
                            </td>
                            <td class="muted">
                                { user.last_login.format("%Y-%m-%d %H:%M").to_string() }
                            </td>
                            <td class="row-actions">
                                <button class="btn ghost" onclick={edit}>{ "Edit" }</button>
                                <button class="btn ghost danger" onclick={request_delete}>{ "Delete" }</button>
                            </td>
                        </tr>
                    }
                })
            }
        </>
    }
  };

  let delete_dialog = match *delete_id
  {
    | Some(id) => {
      let confirm = {
        let list = list.clone();
        let delete_id =
          delete_id.clone();
        Callback::from(move |_| {
          let mut next =
            (*list).clone();
          next.remove_row(id);
          list.set(next);
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
              title="Confirm Deletion"
              message="Are you sure you want to delete this user? This action cannot be undone."
              on_confirm={confirm}
              on_cancel={cancel}
          />
      }
    }
    | None => html! {}
  };

  let modal =
    match (*draft).clone() {
      | Some(current) => {
        render_user_modal(
          current,
          draft.clone(),
          list.clone()
        )
      }
      | None => html! {}
    };

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Users" }</h1>
                  <p class="muted">{ "Manage your team members and their permissions." }</p>
              </div>
              <button class="btn primary" onclick={open_add}>{ "Add User" }</button>
          </div>
          <div class="panel">
              <div class="panel-toolbar">
                  <input
                      class="search"
                      type="text"
                      placeholder="Search users..."
                      value={list.query().to_string()}
                      oninput={on_query}
                  />
                  { bulk_bar }
              </div>
              <table class="table">
                  <thead>
                      <tr>
                          <th>
                              <input
                                  type="checkbox"
                                  checked={all_visible_selected}
                                  onchange={on_toggle_all}
                              />
                          </th>
                          { sort_header(UserSortKey::Name, "Name") }
                          { sort_header(UserSortKey::Role, "Role") }
                          { sort_header(UserSortKey::Status, "Status") }
                          { sort_header(UserSortKey::LastLogin, "Last Login") }
                          <th>{ "Actions" }</th>
                      </tr>
                  </thead>
                  <tbody>
                      { body }
                  </tbody>
              </table>
              <Pagination
                  page={list.page()}
                  total_pages={page.total_pages}
                  total_rows={page.total_rows}
                  first_row={page.first_row}
                  last_row={page.last_row}
                  on_page={on_page}
              />
          </div>
          { modal }
          { delete_dialog }
      </div>
  }
}

fn render_user_modal(
  current: UserDraft,
  draft: UseStateHandle<
    Option<UserDraft>
  >,
  list: UseStateHandle<
    ListState<User>
  >
) -> Html {
  let title =
    if current.editing.is_some() {
      "Edit User"
    } else {
      "Add New User"
    };

  let on_name = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(UserDraft {
        name: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_email = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(UserDraft {
        email: input_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_role = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      draft.set(Some(UserDraft {
        role: select_value(&event),
        ..current.clone()
      }));
    })
  };
  let on_status = {
    let draft = draft.clone();
    let current = current.clone();
    Callback::from(move |event| {
      let status =
        UserStatus::from_key(
          &select_value(&event)
        )
        .unwrap_or(current.status);
      draft.set(Some(UserDraft {
        status,
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
      move |event: SubmitEvent| {
        event.prevent_default();
        let mut next = (*list).clone();
        match current.editing.clone() {
          | Some(mut user) => {
            user.name =
              current.name.clone();
            user.email =
              current.email.clone();
            user.role =
              current.role.clone();
            user.status =
              current.status;
            next.update_row(user);
          }
          | None => {
            let avatar = format!(
              "https://i.pravatar.cc/150?u={}",
              Uuid::new_v4()
            );
            next.add_row(User::new(
              current.name.clone(),
              current.email.clone(),
              current.role.clone(),
              avatar,
              current.status,
              Utc::now()
            ));
          }
        }
        list.set(next);
        draft.set(None);
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-title">{ title }</div>
              <form onsubmit={save}>
                  <label>{ "Name" }</label>
                  <input
                      type="text"
                      required={true}
                      value={current.name.clone()}
                      oninput={on_name}
                  />
                  <label>{ "Email" }</label>
                  <input
                      type="email"
                      required={true}
                      value={current.email.clone()}
                      oninput={on_email}
                  />
                  <label>{ "Role" }</label>
                  <select required={true} onchange={on_role}>
                      <option value="" selected={current.role.is_empty()}>
                          { "Select a role" }
                      </option>
                      {
                          for ROLE_CHOICES.into_iter().map(|role| html! {
                              <option value={role} selected={current.role == role}>
                                  { role }
                              </option>
                          })
                      }
                  </select>
                  <label>{ "Status" }</label>
                  <select onchange={on_status}>
                      <option
                          value="active"
                          selected={current.status == UserStatus::Active}
                      >
                          { "Active" }
                      </option>
                      <option
                          value="inactive"
                          selected={current.status == UserStatus::Inactive}
                      >
                          { "Inactive" }
                      </option>
                  </select>
                  <div class="modal-actions">
                      <button type="button" class="btn" onclick={cancel}>{ "Cancel" }</button>
                      <button type="submit" class="btn primary">
                          { if current.editing.is_some() { "Update User" } else { "Add User" } }
                      </button>
                  </div>
              </form>
          </div>
      </div>
  }
}
