use ocean_core::AppMode;
use web_sys as web;

/// Show the section for `mode` and hide the others.
pub fn show_mode(document: &web::Document, mode: AppMode) {
    for m in AppMode::ALL {
        if let Some(el) = document.get_element_by_id(m.view_id()) {
            let cl = el.class_list();
            if m == mode {
                _ = cl.remove_1("hidden");
            } else {
                _ = cl.add_1("hidden");
            }
        }
    }
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-mode", mode.as_str());
    }
}
