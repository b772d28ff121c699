//! Weight Page Components
//!
//! Query form, record table, create/edit modal and the comparison tab.
//! Mutations go to the server first once records were loaded from it.

pub mod comparison;
pub mod form_modal;
pub mod query_form;
pub mod record_table;

pub use comparison::WeightComparison;
pub use form_modal::WeightFormModal;
pub use query_form::WeightQueryForm;
pub use record_table::WeightRecordTable;

use leptos::*;

use crate::api;
use crate::state::{GlobalState, WeightState};

/// Records fetched per request when syncing with the server
pub const SYNC_BATCH: usize = 50;

pub const EXPORT_FILENAME: &str = "weight-records.csv";

/// Replace the table contents with the server's records
pub fn reload_records(weight: WeightState, global: GlobalState) {
    global.loading.set(true);

    spawn_local(async move {
        let gateway = api::gateway(global);
        if let Ok(records) = gateway.fetch_all_records(SYNC_BATCH).await {
            let count = records.len();
            weight.load_remote(records);
            web_sys::console::log_1(&format!("Loaded {} records from server", count).into());
        }
        global.loading.set(false);
    });
}

/// Download the server-side export
pub fn export_records(global: GlobalState) {
    global.loading.set(true);

    spawn_local(async move {
        let gateway = api::gateway(global);
        if let Ok(bytes) = gateway.export_records().await {
            match api::save_download(&bytes, EXPORT_FILENAME) {
                Ok(()) => global.show_success("Export downloaded"),
                Err(e) => global.show_error(&format!("Export failed: {}", e)),
            }
        }
        global.loading.set(false);
    });
}
