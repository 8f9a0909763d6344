use crate::constants::{INFO_DESC_ID, INFO_PANEL_ID, INFO_TITLE_ID};
use crate::core::Selected;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INFO_PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:block");
    }
}

/// Fill the info panel with the picked item and make it visible.
///
/// There is no matching "clear": once open, the panel keeps the last pick.
pub fn show_selection(document: &web::Document, selected: &Selected) {
    if let Some(el) = document.get_element_by_id(INFO_TITLE_ID) {
        el.set_text_content(Some(&selected.title));
    }
    if let Some(el) = document.get_element_by_id(INFO_DESC_ID) {
        el.set_text_content(Some(&selected.description));
    }
    show(document);
}
