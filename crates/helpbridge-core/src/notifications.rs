//! Notifications
//!
//! Notification records and the filters used by the notification center.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    Donation,
    Volunteer,
    Update,
    Alert,
    Other(String),
}

impl NotificationKind {
    /// Kinds offered as filter tabs
    pub const TABS: &'static [NotificationKind] = &[
        NotificationKind::Donation,
        NotificationKind::Volunteer,
        NotificationKind::Update,
        NotificationKind::Alert,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::Donation => "donation",
            NotificationKind::Volunteer => "volunteer",
            NotificationKind::Update => "update",
            NotificationKind::Alert => "alert",
            NotificationKind::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NotificationKind::Donation => "Donations",
            NotificationKind::Volunteer => "Volunteering",
            NotificationKind::Update => "Updates",
            NotificationKind::Alert => "Alerts",
            NotificationKind::Other(s) => s,
        }
    }
}

impl From<String> for NotificationKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "donation" => NotificationKind::Donation,
            "volunteer" => NotificationKind::Volunteer,
            "update" => NotificationKind::Update,
            "alert" => NotificationKind::Alert,
            _ => NotificationKind::Other(s),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(k: NotificationKind) -> Self {
        k.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Which notifications the center shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    pub fn accepts(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Kind(kind) => notification.kind == *kind,
        }
    }
}

/// Notifications passing `filter`, in their original order
pub fn filter_notifications(list: &[Notification], filter: &NotificationFilter) -> Vec<Notification> {
    list.iter().filter(|n| filter.accepts(n)).cloned().collect()
}

pub fn unread_count(list: &[Notification]) -> usize {
    list.iter().filter(|n| !n.read).count()
}

/// Mark one notification as read. Returns false if it was missing or already read.
pub fn mark_read(list: &mut [Notification], id: u32) -> bool {
    match list.iter_mut().find(|n| n.id == id) {
        Some(n) if !n.read => {
            n.read = true;
            true
        }
        _ => false,
    }
}

/// Mark everything read, returning how many changed
pub fn mark_all_read(list: &mut [Notification]) -> usize {
    let mut changed = 0;
    for n in list.iter_mut().filter(|n| !n.read) {
        n.read = true;
        changed += 1;
    }
    changed
}

/// Human-readable age such as "3 hours ago"
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap()
    }

    fn notification(id: u32, kind: &str, read: bool) -> Notification {
        Notification {
            id,
            kind: NotificationKind::from(kind.to_string()),
            title: format!("Notification {}", id),
            message: String::new(),
            created_at: now(),
            read,
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            notification(1, "donation", false),
            notification(2, "volunteer", true),
            notification(3, "donation", true),
            notification(4, "alert", false),
        ]
    }

    #[test]
    fn test_filter_by_kind_keeps_order() {
        let list = sample();
        let donations = filter_notifications(&list, &NotificationFilter::Kind(NotificationKind::Donation));
        let ids: Vec<u32> = donations.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_unread_and_all() {
        let list = sample();
        assert_eq!(filter_notifications(&list, &NotificationFilter::All).len(), 4);
        let unread = filter_notifications(&list, &NotificationFilter::Unread);
        assert_eq!(unread.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(unread_count(&list), 2);
    }

    #[test]
    fn test_mark_read() {
        let mut list = sample();
        assert!(mark_read(&mut list, 1));
        assert!(!mark_read(&mut list, 1));
        assert!(!mark_read(&mut list, 99));
        assert_eq!(unread_count(&list), 1);

        assert_eq!(mark_all_read(&mut list), 1);
        assert_eq!(unread_count(&list), 0);
    }

    #[test]
    fn test_unknown_kind_round_trips() {
        let kind = NotificationKind::from("badge".to_string());
        assert_eq!(kind, NotificationKind::Other("badge".to_string()));
        assert_eq!(String::from(kind), "badge");
    }

    #[test]
    fn test_relative_time() {
        let now = now();
        assert_eq!(relative_time(now, now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::minutes(45), now), "45 minutes ago");
        assert_eq!(relative_time(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(relative_time(now - Duration::days(3), now), "3 days ago");
    }
}
