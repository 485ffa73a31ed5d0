use std::rc::Rc;
use yew::prelude::*;

use crate::config::AppConfig;

/// Reads the configuration provided at the root of the app. Components
/// rendered outside the provider (tests, previews) get the defaults.
#[hook]
pub fn use_app_config() -> Rc<AppConfig> {
    use_context::<Rc<AppConfig>>().unwrap_or_default()
}
