use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use crate::app::ThemeMode;
use crate::components::{
  input_value,
  textarea_value
};

const SAVE_DELAY_MS: u32 = 800;
const SAVED_BANNER_MS: u32 = 3_000;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum SettingsTab {
  Profile,
  Notifications,
  Security,
  Appearance
}

impl SettingsTab {
  fn all() -> [Self; 4] {
    [
      Self::Profile,
      Self::Notifications,
      Self::Security,
      Self::Appearance
    ]
  }

  fn label(self) -> &'static str {
    match self {
      | Self::Profile => "Profile",
      | Self::Notifications => {
        "Notifications"
      }
      | Self::Security => "Security",
      | Self::Appearance => {
        "Appearance"
      }
    }
  }
}

#[derive(Clone, PartialEq)]
struct ProfileDraft {
  first_name: String,
  last_name:  String,
  email:      String,
  bio:        String
}

impl Default for ProfileDraft {
  fn default() -> Self {
    Self {
      first_name: "Sarah".to_string(),
      last_name:  "Johnson"
        .to_string(),
      email:      "sarah.johnson@company.com".to_string(),
      bio:        "Keeps the dashboards honest.".to_string()
    }
  }
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum NotifyKey {
  NewUsers,
  TaskAssignments,
  ProjectUpdates,
  WeeklyReports,
  SecurityAlerts,
  PushBrowser,
  PushMobile,
  PushDesktop
}

#[derive(Clone, PartialEq)]
struct NotifyPrefs {
  new_users:        bool,
  task_assignments: bool,
  project_updates:  bool,
  weekly_reports:   bool,
  security_alerts:  bool,
  push_browser:     bool,
  push_mobile:      bool,
  push_desktop:     bool
}

impl Default for NotifyPrefs {
  fn default() -> Self {
    Self {
      new_users:        true,
      task_assignments: true,
      project_updates:  true,
      weekly_reports:   false,
      security_alerts:  true,
      push_browser:     true,
      push_mobile:      true,
      push_desktop:     true
    }
  }
}

impl NotifyPrefs {
  fn get(
    &self,
    key: NotifyKey
  ) -> bool {
    match key {
      | NotifyKey::NewUsers => {
        self.new_users
      }
      | NotifyKey::TaskAssignments => {
        self.task_assignments
      }
      | NotifyKey::ProjectUpdates => {
        self.project_updates
      }
      | NotifyKey::WeeklyReports => {
        self.weekly_reports
      }
      | NotifyKey::SecurityAlerts => {
        self.security_alerts
      }
      | NotifyKey::PushBrowser => {
        self.push_browser
      }
      | NotifyKey::PushMobile => {
        self.push_mobile
      }
      | NotifyKey::PushDesktop => {
        self.push_desktop
      }
    }
  }

  fn toggled(
    mut self,
    key: NotifyKey
  ) -> Self {
    match key {
      | NotifyKey::NewUsers => {
        self.new_users =
          !self.new_users;
      }
      | NotifyKey::TaskAssignments => {
        self.task_assignments =
          !self.task_assignments;
      }
      | NotifyKey::ProjectUpdates => {
        self.project_updates =
          !self.project_updates;
      }
      | NotifyKey::WeeklyReports => {
        self.weekly_reports =
          !self.weekly_reports;
      }
      | NotifyKey::SecurityAlerts => {
        self.security_alerts =
          !self.security_alerts;
      }
      | NotifyKey::PushBrowser => {
        self.push_browser =
          !self.push_browser;
      }
      | NotifyKey::PushMobile => {
        self.push_mobile =
          !self.push_mobile;
      }
      | NotifyKey::PushDesktop => {
        self.push_desktop =
          !self.push_desktop;
      }
    }
    self
  }
}

const SESSIONS: [(&str, &str, &str);
  2] = [
  (
    "MacBook Pro (Chrome)",
    "Austin, US",
    "2 hours ago"
  ),
  (
    "iPhone 15 (Safari)",
    "Austin, US",
    "1 day ago"
  )
];

#[derive(Properties, PartialEq)]
pub struct SettingsWorkspaceProps {
  pub theme: ThemeMode,
  pub on_toggle_theme: Callback<()>
}

#[function_component(SettingsWorkspace)]
pub fn settings_workspace(
  props: &SettingsWorkspaceProps
) -> Html {
  let tab = use_state(|| {
    SettingsTab::Profile
  });
  let profile =
    use_state(ProfileDraft::default);
  let notify =
    use_state(NotifyPrefs::default);
  let two_factor =
    use_state(|| false);
  let compact_mode =
    use_state(|| false);
  let show_sidebar =
    use_state(|| true);
  let saving = use_state(|| false);
  let saved = use_state(|| false);

  // Simulated save: nothing is
  // persisted, the delay only drives
  // the indicator.
  let on_save = {
    let saving = saving.clone();
    let saved = saved.clone();
    Callback::from(move |_| {
      if *saving {
        return;
      }
      saving.set(true);
      saved.set(false);
      let saving = saving.clone();
      let saved = saved.clone();
      spawn_local(async move {
        TimeoutFuture::new(
          SAVE_DELAY_MS
        )
        .await;
        saving.set(false);
        saved.set(true);
        TimeoutFuture::new(
          SAVED_BANNER_MS
        )
        .await;
        saved.set(false);
      });
    })
  };

  let profile_field =
    |setter: fn(
      ProfileDraft,
      String
    ) -> ProfileDraft| {
      let profile = profile.clone();
      Callback::from(move |event| {
        profile.set(setter(
          (*profile).clone(),
          input_value(&event)
        ));
      })
    };

  let notify_row = |key: NotifyKey,
                    label: &str| {
    let notify = notify.clone();
    let checked = notify.get(key);
    html! {
        <label class="toggle-row">
            <input
                type="checkbox"
                checked={checked}
                onchange={Callback::from(move |_| {
                    notify.set((*notify).clone().toggled(key));
                })}
            />
            <span>{ label }</span>
        </label>
    }
  };

  let body = match *tab {
    | SettingsTab::Profile => {
      let on_first = profile_field(
        |mut draft, value| {
          draft.first_name = value;
          draft
        }
      );
      let on_last = profile_field(
        |mut draft, value| {
          draft.last_name = value;
          draft
        }
      );
      let on_email = profile_field(
        |mut draft, value| {
          draft.email = value;
          draft
        }
      );
      let on_bio = {
        let profile = profile.clone();
        Callback::from(move |event| {
          let mut draft =
            (*profile).clone();
          draft.bio =
            textarea_value(&event);
          profile.set(draft);
        })
      };
      html! {
          <>
              <div class="form-row">
                  <div>
                      <label>{ "First Name" }</label>
                      <input
                          type="text"
                          value={profile.first_name.clone()}
                          oninput={on_first}
                      />
                  </div>
                  <div>
                      <label>{ "Last Name" }</label>
                      <input
                          type="text"
                          value={profile.last_name.clone()}
                          oninput={on_last}
                      />
                  </div>
              </div>
              <label>{ "Email" }</label>
              <input
                  type="email"
                  value={profile.email.clone()}
                  oninput={on_email}
              />
              <label>{ "Bio" }</label>
              <textarea
                  value={profile.bio.clone()}
                  oninput={on_bio}
              />
          </>
      }
    }
    | SettingsTab::Notifications => {
      html! {
          <>
              <div class="panel-title">{ "Email Notifications" }</div>
              { notify_row(NotifyKey::NewUsers, "New users") }
              { notify_row(NotifyKey::TaskAssignments, "Task assignments") }
              { notify_row(NotifyKey::ProjectUpdates, "Project updates") }
              { notify_row(NotifyKey::WeeklyReports, "Weekly reports") }
              { notify_row(NotifyKey::SecurityAlerts, "Security alerts") }
              <div class="panel-title">{ "Push Notifications" }</div>
              { notify_row(NotifyKey::PushBrowser, "Browser") }
              { notify_row(NotifyKey::PushMobile, "Mobile") }
              { notify_row(NotifyKey::PushDesktop, "Desktop") }
          </>
      }
    }
    | SettingsTab::Security => {
      let two_factor_toggle = {
        let two_factor =
          two_factor.clone();
        Callback::from(move |_| {
          two_factor
            .set(!*two_factor);
        })
      };
      html! {
          <>
              <label class="toggle-row">
                  <input
                      type="checkbox"
                      checked={*two_factor}
                      onchange={two_factor_toggle}
                  />
                  <span>{ "Two-factor authentication" }</span>
              </label>
              <div class="panel-title">{ "Active Sessions" }</div>
              {
                  for SESSIONS.into_iter().map(|(device, location, last)| html! {
                      <div class="point-row">
                          <span>{ device }</span>
                          <span class="muted">{ format!("{location} \u{00B7} {last}") }</span>
                      </div>
                  })
              }
          </>
      }
    }
    | SettingsTab::Appearance => {
      let theme_toggle = {
        let on_toggle_theme = props
          .on_toggle_theme
          .clone();
        Callback::from(move |_| {
          on_toggle_theme.emit(());
        })
      };
      let compact_toggle = {
        let compact_mode =
          compact_mode.clone();
        Callback::from(move |_| {
          compact_mode
            .set(!*compact_mode);
        })
      };
      let sidebar_toggle = {
        let show_sidebar =
          show_sidebar.clone();
        Callback::from(move |_| {
          show_sidebar
            .set(!*show_sidebar);
        })
      };
      html! {
          <>
              <label class="toggle-row">
                  <input
                      type="checkbox"
                      checked={props.theme == ThemeMode::Night}
                      onchange={theme_toggle}
                  />
                  <span>{ "Night theme" }</span>
              </label>
              <label class="toggle-row">
                  <input
                      type="checkbox"
                      checked={*compact_mode}
                      onchange={compact_toggle}
                  />
                  <span>{ "Compact mode" }</span>
              </label>
              <label class="toggle-row">
                  <input
                      type="checkbox"
                      checked={*show_sidebar}
                      onchange={sidebar_toggle}
                  />
                  <span>{ "Show sidebar" }</span>
              </label>
          </>
      }
    }
  };

  html! {
      <div class="workspace">
          <div class="workspace-head">
              <div>
                  <h1>{ "Settings" }</h1>
                  <p class="muted">{ "Manage your account and preferences." }</p>
              </div>
          </div>
          <div class="settings-layout">
              <div class="settings-tabs">
                  {
                      for SettingsTab::all().into_iter().map(|choice| {
                          let active = *tab == choice;
                          let tab = tab.clone();
                          html! {
                              <button
                                  class={classes!("nav-item", active.then_some("active"))}
                                  onclick={Callback::from(move |_| tab.set(choice))}
                              >
                                  { choice.label() }
                              </button>
                          }
                      })
                  }
              </div>
              <div class="panel settings-panel">
                  { body }
                  <div class="modal-actions">
                      {
                          if *saved {
                              html! { <span class="save-ok">{ "Saved" }</span> }
                          } else {
                              html! {}
                          }
                      }
                      <button
                          class="btn primary"
                          disabled={*saving}
                          onclick={on_save}
                      >
                          { if *saving { "Saving..." } else { "Save Changes" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
