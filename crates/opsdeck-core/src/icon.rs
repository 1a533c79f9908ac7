use serde::{
  Deserialize,
  Serialize
};
use tracing::warn;

/// The closed icon set. Records store
/// a variant, never a free-form
/// string, so a rename in one place
/// cannot silently break rendering.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
  Dashboard,
  Users,
  Calendar,
  Board,
  Chart,
  Settings,
  Revenue,
  Trend,
  Views,
  Activity
}

impl IconId {
  /// Variants offered by the metric
  /// card editor.
  pub fn metric_choices() -> [Self; 4]
  {
    [
      Self::Revenue,
      Self::Users,
      Self::Trend,
      Self::Views
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
      | Self::Board => "board",
      | Self::Chart => "chart",
      | Self::Settings => "settings",
      | Self::Revenue => "revenue",
      | Self::Trend => "trend",
      | Self::Views => "views",
      | Self::Activity => "activity"
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
      | Self::Board => "Board",
      | Self::Chart => "Chart",
      | Self::Settings => "Settings",
      | Self::Revenue => "Revenue",
      | Self::Trend => "Trend",
      | Self::Views => "Views",
      | Self::Activity => "Activity"
    }
  }

  /// Unknown keys are rejected and
  /// logged, never mapped to a
  /// fallback glyph.
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    let found = match key {
      | "dashboard" => {
        Some(Self::Dashboard)
      }
      | "users" => Some(Self::Users),
      | "calendar" => {
        Some(Self::Calendar)
      }
      | "board" => Some(Self::Board),
      | "chart" => Some(Self::Chart),
      | "settings" => {
        Some(Self::Settings)
      }
      | "revenue" => {
        Some(Self::Revenue)
      }
      | "trend" => Some(Self::Trend),
      | "views" => Some(Self::Views),
      | "activity" => {
        Some(Self::Activity)
      }
      | _ => None
    };

    if found.is_none() {
      warn!(
        key,
        "unknown icon key rejected"
      );
    }
    found
  }
}

#[cfg(test)]
mod tests {
  use super::IconId;

  #[test]
  fn keys_round_trip() {
    let all = [
      IconId::Dashboard,
      IconId::Users,
      IconId::Calendar,
      IconId::Board,
      IconId::Chart,
      IconId::Settings,
      IconId::Revenue,
      IconId::Trend,
      IconId::Views,
      IconId::Activity,
    ];
    for icon in all {
      assert_eq!(
        IconId::from_key(
          icon.as_key()
        ),
        Some(icon)
      );
    }
  }

  #[test]
  fn unknown_key_is_rejected() {
    assert_eq!(
      IconId::from_key("sparkles"),
      None
    );
  }
}
