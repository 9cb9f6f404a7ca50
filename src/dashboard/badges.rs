use super::dto::{Badge, BadgeStatus};

fn rank(status: BadgeStatus) -> u8 {
    match status {
        BadgeStatus::Achieved => 0,
        BadgeStatus::Pending => 1,
        BadgeStatus::Locked => 2,
    }
}

/// Display order: achieved first, then pending, then locked; within a
/// status, titles compare case-insensitively. The sort is stable, so
/// duplicate `(status, title)` pairs keep their incoming order.
pub fn sort_for_display(badges: &mut [Badge]) {
    badges.sort_by(|a, b| {
        rank(a.status)
            .cmp(&rank(b.status))
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
}
