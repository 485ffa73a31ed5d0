use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_config::use_app_config;
use super::view_state::ViewState;
use crate::config::AppConfig;
use crate::models::error::AppError;

/// Runs `fetcher` once when the calling component mounts and tracks the
/// outcome. Results that arrive after unmount are dropped.
#[hook]
pub fn use_fetch<T, F, Fut>(
    label: &'static str,
    failure_message: &'static str,
    fetcher: F,
) -> UseStateHandle<ViewState<T>>
where
    T: Clone + PartialEq + 'static,
    F: FnOnce(Rc<AppConfig>) -> Fut + 'static,
    Fut: Future<Output = Result<Option<T>, AppError>> + 'static,
{
    let state = use_state(|| ViewState::Loading);
    let config = use_app_config();

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetcher(config).await;
                if aborted_check.get() {
                    return; // Page unmounted, ignore result
                }

                if let Err(e) = &result {
                    gloo::console::error!(&format!("{label}: {e}"));
                }
                state.set(ViewState::from_result(result, failure_message));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
