use std::sync::Arc;

use crate::provider::FortuneProvider;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<FortuneProvider>,
}
