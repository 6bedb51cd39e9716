use dogbreed_core::{tag_from_query, Route};

use crate::page::{self, js_err};

pub(crate) fn current_route() -> Option<Route> {
    let window = page::window().ok()?;
    let path = match window.location().pathname() {
        Ok(path) => path,
        Err(err) => {
            gloo::console::warn!("location pathname unavailable", js_err(err));
            return None;
        }
    };
    match Route::from_path(&path) {
        Ok(route) => Some(route),
        Err(err) => {
            gloo::console::log!("route", err.to_string());
            None
        }
    }
}

/// The classification tag carried by the result redirect, if any.
pub(crate) fn load_result_tag() -> Option<String> {
    let window = page::window().ok()?;
    let search = window.location().search().ok()?;
    tag_from_query(&search)
}
