use api::ApiConfig;
use api::HttpActivityApi;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub api: HttpActivityApi,
}

/// Stable, non-reactive state shared through context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self(Arc::new(AppStateData {
            api: HttpActivityApi::new(config),
        }))
    }
}
