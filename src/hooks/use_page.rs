use gloo_storage::Storage;
use yew::prelude::*;

use crate::config::Config;
use crate::pages::Page;

/// Handle returned by `use_page` hook
#[derive(Clone, PartialEq)]
pub struct PageHandle {
    pub page: Page,
    pub set_page: Callback<Page>,
}

/// Selected dashboard page, remembered across visits
#[hook]
pub fn use_page() -> PageHandle {
    let page = use_state(|| load_page_preference().unwrap_or_default());

    {
        let page_value = *page;
        use_effect_with(page_value, move |page| {
            save_page_preference(*page);
            || ()
        });
    }

    let set_page = {
        let page = page.clone();
        Callback::from(move |new_page| page.set(new_page))
    };

    PageHandle {
        page: *page,
        set_page,
    }
}

fn load_page_preference() -> Option<Page> {
    gloo_storage::LocalStorage::get::<String>(Config::PAGE_STORAGE_KEY)
        .ok()
        .and_then(|key| key.parse().ok())
}

fn save_page_preference(page: Page) {
    if let Err(e) = gloo_storage::LocalStorage::set(Config::PAGE_STORAGE_KEY, page.key()) {
        gloo::console::warn!(&format!("Failed to save page: {e:?}"));
    }
}
