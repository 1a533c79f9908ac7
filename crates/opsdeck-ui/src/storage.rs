//! Browser local-storage access. Every failure path is logged and
//! degrades to "nothing stored"; no view treats the store as
//! reliable.

use opsdeck_core::record::Task;
use web_sys::Storage;

use crate::app::{
  Section,
  ThemeMode
};

const THEME_STORAGE_KEY: &str =
  "opsdeck.theme";
const SECTION_STORAGE_KEY: &str =
  "opsdeck.section";
const KANBAN_SLOT_KEY: &str =
  "opsdeck.kanban.tasks";

fn local_storage() -> Option<Storage> {
  web_sys::window().and_then(
    |window| {
      window
        .local_storage()
        .ok()
        .flatten()
    }
  )
}

pub fn load_theme_mode() -> ThemeMode {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("night") => ThemeMode::Night,
    | _ => ThemeMode::Day
  }
}

pub fn save_theme_mode(
  theme: ThemeMode
) {
  if let Some(storage) =
    local_storage()
  {
    let _ = storage.set_item(
      THEME_STORAGE_KEY,
      theme.storage_value()
    );
  }
}

pub fn load_section() -> Section {
  let stored = local_storage()
    .and_then(|storage| {
      storage
        .get_item(SECTION_STORAGE_KEY)
        .ok()
        .flatten()
    });

  stored
    .as_deref()
    .and_then(Section::from_key)
    .unwrap_or(Section::Dashboard)
}

pub fn save_section(
  section: Section
) {
  if let Some(storage) =
    local_storage()
  {
    let _ = storage.set_item(
      SECTION_STORAGE_KEY,
      section.as_key()
    );
  }
}

/// The kanban view's persisted copy:
/// the whole task list as one JSON
/// array. `None` means the slot is
/// absent or unreadable, and the
/// caller falls back to seed data.
pub fn load_kanban_slot()
-> Option<Vec<Task>> {
  let raw = local_storage()
    .and_then(|storage| {
      storage
        .get_item(KANBAN_SLOT_KEY)
        .ok()
        .flatten()
    })?;

  match serde_json::from_str::<
    Vec<Task>
  >(&raw)
  {
    | Ok(tasks) => {
      tracing::debug!(
        count = tasks.len(),
        "loaded kanban slot"
      );
      Some(tasks)
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing kanban slot \
         from local storage"
      );
      None
    }
  }
}

/// Unconditional overwrite on every
/// board mutation; single writer per
/// tab, last write wins.
pub fn save_kanban_slot(
  tasks: &[Task]
) {
  let Some(storage) = local_storage()
  else {
    return;
  };

  match serde_json::to_string(tasks) {
    | Ok(json) => {
      let _ = storage.set_item(
        KANBAN_SLOT_KEY,
        &json
      );
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed serializing kanban \
         slot"
      );
    }
  }
}
