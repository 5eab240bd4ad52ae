//! Browser localStorage for the practices checklist

use terra_core::practices::{IMPLEMENTED_TIPS_KEY, WATER_SAVED_KEY};
use terra_core::TipChecklist;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_checklist() -> TipChecklist {
    let raw = local_storage().and_then(|storage| storage.get_item(IMPLEMENTED_TIPS_KEY).ok().flatten());
    TipChecklist::from_json(raw.as_deref())
}

/// Persist the flags and the derived total
pub fn save_checklist(checklist: &TipChecklist, water_saved: u32) {
    let Some(storage) = local_storage() else {
        log::warn!("[STORAGE] localStorage unavailable, progress not saved");
        return;
    };

    match checklist.to_json() {
        Ok(json) => {
            if let Err(e) = storage.set_item(IMPLEMENTED_TIPS_KEY, &json) {
                log::warn!("[STORAGE] failed to save {}: {:?}", IMPLEMENTED_TIPS_KEY, e);
            }
        }
        Err(e) => log::warn!("[STORAGE] failed to encode checklist: {}", e),
    }
    if let Err(e) = storage.set_item(WATER_SAVED_KEY, &water_saved.to_string()) {
        log::warn!("[STORAGE] failed to save {}: {:?}", WATER_SAVED_KEY, e);
    }
}
