use std::sync::Arc;

use farelink_search::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SearchService>,
}
