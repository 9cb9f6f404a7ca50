pub mod aggregator;
pub mod badges;
pub mod dto;
pub mod fixtures;
pub mod handlers;
pub mod source;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::router()
}
