use tracing::error;

use super::badges::sort_for_display;
use super::dto::{DashboardView, IntakeSnapshot};
use super::source::DashboardSource;

/// Fan-out over the four dashboard fragments. The fetches are
/// independent and run concurrently; a failed fragment degrades to an
/// absent section without blocking the others. No consistency is
/// promised across fragments.
pub async fn compose(source: &dyn DashboardSource) -> DashboardView {
    let (health, intake, recommendations, badges) = tokio::join!(
        source.health_profile(),
        source.intake(),
        source.recommendations(),
        source.badges(),
    );

    let health = match health {
        Ok(profile) => Some(profile),
        Err(e) => {
            error!(error = %e, "health fragment failed");
            None
        }
    };

    let intake = match intake {
        Ok(raw) => match serde_json::from_value::<IntakeSnapshot>(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                error!(error = %e, "intake fragment malformed");
                None
            }
        },
        Err(e) => {
            error!(error = %e, "intake fragment failed");
            None
        }
    };

    let recommendations = match recommendations {
        Ok(items) => Some(items),
        Err(e) => {
            error!(error = %e, "recommendations fragment failed");
            None
        }
    };

    let badges = match badges {
        Ok(mut list) => {
            sort_for_display(&mut list);
            Some(list)
        }
        Err(e) => {
            error!(error = %e, "badges fragment failed");
            None
        }
    };

    DashboardView {
        health,
        intake,
        recommendations,
        badges,
    }
}
