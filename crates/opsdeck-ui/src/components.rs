mod charts;
mod confirm_dialog;
mod header;
mod icon;
mod kanban_card;
mod kanban_column;
mod pagination;
mod sidebar;

pub use charts::{
  AreaChart,
  BarChart,
  MultiLineChart,
  PieChart
};
pub use confirm_dialog::ConfirmDialog;
pub use header::Header;
pub use icon::Icon;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use pagination::Pagination;
pub use sidebar::Sidebar;

use opsdeck_core::series::SeriesPoint;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement,
  InputEvent
};
use yew::TargetCast;

/// Fallback chart colors for points
/// without an explicit one.
pub const PALETTE: [&str; 6] = [
  "#3B82F6", "#8B5CF6", "#10B981",
  "#F59E0B", "#EF4444", "#6366F1"
];

pub fn point_color(
  point: &SeriesPoint,
  index: usize
) -> String {
  match point.color.as_ref() {
    | Some(color) => color.clone(),
    | None => PALETTE
      [index % PALETTE.len()]
    .to_string()
  }
}

pub fn input_value(
  event: &InputEvent
) -> String {
  event
    .target_unchecked_into::<HtmlInputElement>()
    .value()
}

pub fn textarea_value(
  event: &InputEvent
) -> String {
  event
    .target_unchecked_into::<HtmlTextAreaElement>()
    .value()
}

pub fn select_value(
  event: &Event
) -> String {
  event
    .target_unchecked_into::<HtmlSelectElement>()
    .value()
}
