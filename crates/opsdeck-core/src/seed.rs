//! The in-memory data set every view starts from. Nothing here is
//! durable; the kanban slot replaces `seed_tasks` after the first
//! visit to the board.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::calendar::add_days;
use crate::icon::IconId;
use crate::record::{Activity, Event, EventKind, Task, TaskPriority, TaskStatus, User, UserStatus};
use crate::series::{MetricCard, PerfRow, PerfTable, Series, SeriesPoint, Trend};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .earliest()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(
            "Sarah Johnson",
            "sarah.johnson@company.com",
            "Admin",
            "https://i.pravatar.cc/150?u=sarah",
            UserStatus::Active,
            instant(2024, 1, 15, 10, 30),
        ),
        User::new(
            "Michael Chen",
            "michael.chen@company.com",
            "Developer",
            "https://i.pravatar.cc/150?u=michael",
            UserStatus::Active,
            instant(2024, 1, 15, 9, 15),
        ),
        User::new(
            "Emily Rodriguez",
            "emily.rodriguez@company.com",
            "Designer",
            "https://i.pravatar.cc/150?u=emily",
            UserStatus::Inactive,
            instant(2024, 1, 14, 16, 45),
        ),
        User::new(
            "David Wilson",
            "david.wilson@company.com",
            "Manager",
            "https://i.pravatar.cc/150?u=david",
            UserStatus::Active,
            instant(2024, 1, 15, 11, 20),
        ),
    ]
}

pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(
            "Design System Updates",
            "Update the design system components with new brand guidelines",
            TaskPriority::High,
            TaskStatus::InProgress,
            "Emily Rodriguez",
            ymd(2024, 1, 20),
            vec!["design".to_string(), "urgent".to_string()],
        ),
        Task::new(
            "API Integration",
            "Integrate third-party payment API",
            TaskPriority::Medium,
            TaskStatus::Todo,
            "Michael Chen",
            ymd(2024, 1, 25),
            vec!["development".to_string(), "backend".to_string()],
        ),
        Task::new(
            "User Testing",
            "Conduct user testing for new dashboard features",
            TaskPriority::Medium,
            TaskStatus::Todo,
            "Sarah Johnson",
            ymd(2024, 1, 22),
            vec!["testing".to_string(), "ux".to_string()],
        ),
        Task::new(
            "Database Optimization",
            "Optimize database queries for better performance",
            TaskPriority::Low,
            TaskStatus::Done,
            "Michael Chen",
            ymd(2024, 1, 18),
            vec!["development".to_string(), "performance".to_string()],
        ),
    ]
}

/// Calendar events anchored to the day the app starts.
pub fn seed_events(today: NaiveDate) -> Vec<Event> {
    vec![
        Event::new("Team Standup", today, "09:00", EventKind::Meeting)
            .with_description("Daily team sync")
            .with_location("Conference Room A"),
        Event::new(
            "Project Deadline",
            add_days(today, 1),
            "17:00",
            EventKind::Deadline,
        )
        .with_description("Submit final project deliverables"),
        Event::new(
            "Design Review",
            add_days(today, 2),
            "14:00",
            EventKind::Meeting,
        )
        .with_description("Review new design proposals"),
        Event::new(
            "Company All-Hands",
            add_days(today, 9),
            "10:00",
            EventKind::Event,
        )
        .with_description("Monthly company meeting"),
    ]
}

pub fn seed_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard {
            id: 1,
            title: "Total Revenue".to_string(),
            value: "$45,231".to_string(),
            change: "+12.5%".to_string(),
            trend: Trend::Up,
            icon: IconId::Revenue,
        },
        MetricCard {
            id: 2,
            title: "Active Users".to_string(),
            value: "2,345".to_string(),
            change: "+8.7%".to_string(),
            trend: Trend::Up,
            icon: IconId::Users,
        },
        MetricCard {
            id: 3,
            title: "Conversion Rate".to_string(),
            value: "3.2%".to_string(),
            change: "-1.2%".to_string(),
            trend: Trend::Down,
            icon: IconId::Trend,
        },
        MetricCard {
            id: 4,
            title: "Page Views".to_string(),
            value: "12,893".to_string(),
            change: "+5.4%".to_string(),
            trend: Trend::Up,
            icon: IconId::Views,
        },
    ]
}

pub fn seed_revenue() -> Series {
    Series::new(vec![
        SeriesPoint::new(1, "Jan", 4000.0),
        SeriesPoint::new(2, "Feb", 3000.0),
        SeriesPoint::new(3, "Mar", 5000.0),
        SeriesPoint::new(4, "Apr", 2780.0),
        SeriesPoint::new(5, "May", 1890.0),
        SeriesPoint::new(6, "Jun", 2390.0),
    ])
}

pub fn seed_traffic() -> Series {
    Series::new(vec![
        SeriesPoint::new(1, "Direct", 35.0).with_color("#3B82F6"),
        SeriesPoint::new(2, "Organic", 25.0).with_color("#8B5CF6"),
        SeriesPoint::new(3, "Social", 20.0).with_color("#10B981"),
        SeriesPoint::new(4, "Referral", 12.0).with_color("#F59E0B"),
        SeriesPoint::new(5, "Email", 8.0).with_color("#EF4444"),
    ])
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(1, "Sarah Johnson", "created new project", "2 minutes ago"),
        Activity::new(2, "Michael Chen", "completed task", "1 hour ago"),
        Activity::new(3, "Emily Rodriguez", "updated design system", "3 hours ago"),
        Activity::new(4, "David Wilson", "approved budget request", "5 hours ago"),
    ]
}

pub fn seed_performance() -> PerfTable {
    PerfTable::new(vec![
        PerfRow {
            id: 1,
            label: "Jan".to_string(),
            sales: 4000.0,
            users: 2400.0,
            revenue: 2400.0,
        },
        PerfRow {
            id: 2,
            label: "Feb".to_string(),
            sales: 3000.0,
            users: 1398.0,
            revenue: 2210.0,
        },
        PerfRow {
            id: 3,
            label: "Mar".to_string(),
            sales: 2000.0,
            users: 9800.0,
            revenue: 2290.0,
        },
        PerfRow {
            id: 4,
            label: "Apr".to_string(),
            sales: 2780.0,
            users: 3908.0,
            revenue: 2000.0,
        },
        PerfRow {
            id: 5,
            label: "May".to_string(),
            sales: 1890.0,
            users: 4800.0,
            revenue: 2181.0,
        },
        PerfRow {
            id: 6,
            label: "Jun".to_string(),
            sales: 2390.0,
            users: 3800.0,
            revenue: 2500.0,
        },
    ])
}

pub fn seed_categories() -> Series {
    Series::new(vec![
        SeriesPoint::new(1, "Electronics", 35.0).with_color("#3B82F6"),
        SeriesPoint::new(2, "Clothing", 25.0).with_color("#8B5CF6"),
        SeriesPoint::new(3, "Home & Garden", 20.0).with_color("#10B981"),
        SeriesPoint::new(4, "Sports", 12.0).with_color("#F59E0B"),
        SeriesPoint::new(5, "Books", 8.0).with_color("#EF4444"),
    ])
}

pub fn seed_conversion() -> Series {
    Series::new(vec![
        SeriesPoint::new(1, "Visitors", 10000.0).with_color("#E5E7EB"),
        SeriesPoint::new(2, "Leads", 3000.0).with_color("#BFDBFE"),
        SeriesPoint::new(3, "Opportunities", 800.0).with_color("#93C5FD"),
        SeriesPoint::new(4, "Customers", 200.0).with_color("#3B82F6"),
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn seeded_ids_are_unique() {
        let users: BTreeSet<_> = seed_users().iter().map(|user| user.id).collect();
        assert_eq!(users.len(), 4);

        let tasks: BTreeSet<_> = seed_tasks().iter().map(|task| task.id).collect();
        assert_eq!(tasks.len(), 4);

        let today = ymd(2024, 1, 16);
        let events: BTreeSet<_> = seed_events(today).iter().map(|event| event.id).collect();
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn seeded_events_track_the_anchor_day() {
        let today = ymd(2024, 1, 16);
        let events = seed_events(today);
        assert_eq!(events[0].date, today);
        assert_eq!(events[1].date, ymd(2024, 1, 17));
    }
}
