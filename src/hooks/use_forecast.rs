use std::cell::Cell;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::data_state::DataState;
use crate::models::forecast::ForecastSnapshot;
use crate::services::api::fetch_forecast;

/// Fetches the latest forecast once per mount
#[hook]
pub fn use_forecast() -> UseStateHandle<DataState<ForecastSnapshot>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_forecast().await;
                if aborted_check.get() {
                    return; // Unmounted while the request was in flight
                }

                match &result {
                    Ok(snapshot) => {
                        console::log!(format!("Loaded forecast with {} hours", snapshot.series.len()));
                    }
                    Err(e) if e.is_empty_data() => console::warn!(format!("Forecast empty: {e}")),
                    Err(e) => console::error!(format!("Forecast fetch failed: {e}")),
                }

                state.set(DataState::from_result(result));
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
