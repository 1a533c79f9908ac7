mod analytics;
mod calendar;
mod dashboard;
mod kanban;
mod settings;
mod users;

pub use analytics::AnalyticsWorkspace;
pub use calendar::CalendarWorkspace;
pub use dashboard::DashboardWorkspace;
pub use kanban::KanbanWorkspace;
pub use settings::SettingsWorkspace;
pub use users::UsersWorkspace;
