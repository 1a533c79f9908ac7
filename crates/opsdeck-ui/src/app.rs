use opsdeck_core::icon::IconId;
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::components::{
  Header,
  Sidebar
};
use crate::storage;
use crate::workspaces::{
  AnalyticsWorkspace,
  CalendarWorkspace,
  DashboardWorkspace,
  KanbanWorkspace,
  SettingsWorkspace,
  UsersWorkspace
};

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ThemeMode {
  Day,
  Night
}

impl ThemeMode {
  pub fn as_class(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "theme-day",
      | Self::Night => "theme-night"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Day => Self::Night,
      | Self::Night => Self::Day
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "day",
      | Self::Night => "night"
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Day => "Night",
      | Self::Night => "Day"
    }
  }
}

/// The six fixed sections of the
/// shell. The active one is the only
/// state other views observe.
#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum Section {
  Dashboard,
  Users,
  Calendar,
  Kanban,
  Analytics,
  Settings
}

impl Section {
  pub fn all() -> [Self; 6] {
    [
      Self::Dashboard,
      Self::Users,
      Self::Calendar,
      Self::Kanban,
      Self::Analytics,
      Self::Settings
    ]
  }

  pub fn as_key(
    self
  ) -> &'static str {
    match self {
      | Self::Dashboard => {
        "dashboard"
      }
      | Self::Users => "users",
      | Self::Calendar => "calendar",
      | Self::Kanban => "kanban",
      | Self::Analytics => {
        "analytics"
      }
      | Self::Settings => "settings"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "dashboard" => {
        Some(Self::Dashboard)
      }
      | "users" => Some(Self::Users),
      | "calendar" => {
        Some(Self::Calendar)
      }
      | "kanban" => {
        Some(Self::Kanban)
      }
      | "analytics" => {
        Some(Self::Analytics)
      }
      | "settings" => {
        Some(Self::Settings)
      }
      | _ => None
    }
  }

  pub fn label(
    self
  ) -> &'static str {
    match self {
      | Self::Dashboard => {
        "Dashboard"
      }
      | Self::Users => "Users",
      | Self::Calendar => "Calendar",
      | Self::Kanban => "Kanban",
      | Self::Analytics => {
        "Analytics"
      }
      | Self::Settings => "Settings"
    }
  }

  pub fn icon(self) -> IconId {
    match self {
      | Self::Dashboard => {
        IconId::Dashboard
      }
      | Self::Users => IconId::Users,
      | Self::Calendar => {
        IconId::Calendar
      }
      | Self::Kanban => IconId::Board,
      | Self::Analytics => {
        IconId::Chart
      }
      | Self::Settings => {
        IconId::Settings
      }
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let theme =
    use_state(storage::load_theme_mode);
  let section =
    use_state(storage::load_section);
  let collapsed = use_state(|| false);

  {
    let theme = theme.clone();
    use_effect_with(
      *theme,
      move |mode| {
        storage::save_theme_mode(*mode);
        tracing::debug!(
          theme = mode.storage_value(),
          "persisted theme"
        );
        || ()
      }
    );
  }

  {
    let section = section.clone();
    use_effect_with(
      *section,
      move |active| {
        storage::save_section(*active);
        tracing::debug!(
          section = active.as_key(),
          "persisted active section"
        );
        || ()
      }
    );
  }

  let on_nav = {
    let section = section.clone();
    Callback::from(
      move |next: Section| {
        section.set(next);
      }
    )
  };

  let on_toggle_collapse = {
    let collapsed = collapsed.clone();
    Callback::from(move |_| {
      collapsed.set(!*collapsed);
    })
  };

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_| {
      theme.set(theme.next());
    })
  };

  let workspace = match *section {
    | Section::Dashboard => {
      html! { <DashboardWorkspace /> }
    }
    | Section::Users => {
      html! { <UsersWorkspace /> }
    }
    | Section::Calendar => {
      html! { <CalendarWorkspace /> }
    }
    | Section::Kanban => {
      html! { <KanbanWorkspace /> }
    }
    | Section::Analytics => {
      html! { <AnalyticsWorkspace /> }
    }
    | Section::Settings => {
      html! {
        <SettingsWorkspace
          theme={*theme}
          on_toggle_theme={on_toggle_theme.clone()}
        />
      }
    }
  };

  html! {
      <div class={classes!("app", theme.as_class())}>
          <Sidebar
              active={*section}
              collapsed={*collapsed}
              on_nav={on_nav}
              on_toggle_collapse={on_toggle_collapse}
          />
          <div class="app-main">
              <Header
                  theme={*theme}
                  on_toggle_theme={on_toggle_theme}
              />
              <main class="app-content">
                  { workspace }
              </main>
          </div>
      </div>
  }
}
