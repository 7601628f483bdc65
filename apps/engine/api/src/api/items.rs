use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};
use domain_merchants::PgMerchantRepository;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let service = ItemService::new(
        PgItemRepository::new(state.db.clone()),
        PgMerchantRepository::new(state.db.clone()),
    );
    handlers::router(service)
}
