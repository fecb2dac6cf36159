use std::cell::Cell;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::data_state::DataState;
use crate::models::supply::SupplySnapshot;
use crate::services::api::fetch_hourly_data;

/// Fetches the latest supply mix and interchange once per mount
#[hook]
pub fn use_hourly_data() -> UseStateHandle<DataState<SupplySnapshot>> {
    let state = use_state(|| DataState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                let result = fetch_hourly_data().await;
                if aborted_check.get() {
                    return;
                }

                match &result {
                    Ok(snapshot) => console::log!(format!(
                        "Loaded supply snapshot {}",
                        snapshot.file_key.as_deref().unwrap_or("(unnamed)")
                    )),
                    Err(e) if e.is_empty_data() => console::warn!(format!("Hourly data empty: {e}")),
                    Err(e) => console::error!(format!("Hourly data fetch failed: {e}")),
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
