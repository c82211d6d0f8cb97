//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use item_client::{ApiConfig, ItemsClient, Refresh, RestItemRepository};

/// Client type used by every component
pub type AppClient = ItemsClient<RestItemRepository, AppContext>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items from the endpoint - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items from the endpoint - write
    set_reload_trigger: WriteSignal<u32>,
    /// Collection endpoint
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: ApiConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of items
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Client bound to the configured endpoint, refreshing this context
    pub fn client(&self) -> AppClient {
        let repo = RestItemRepository::new(self.config.get_value());
        ItemsClient::new(repo, *self)
    }
}

impl Refresh for AppContext {
    fn refresh(&self) {
        self.reload();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
