use axum::Router;
use domain_users::{SqlUserRepository, UserService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = SqlUserRepository::new(state.db.clone());
    let service = UserService::new(repository);
    handlers::router(service)
}
