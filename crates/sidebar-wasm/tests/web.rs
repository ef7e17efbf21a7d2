//! Browser-side checks, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use sidebar_wasm::SidebarEngine;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn shipped_engine_shows_sidebar_on_desktop() {
    let engine = SidebarEngine::new();
    assert_eq!(engine.should_show_sidebar("desktop").ok(), Some(true));
    assert_eq!(engine.has_visible_widgets("right", "tablet").ok(), Some(false));
}

#[wasm_bindgen_test]
fn edits_are_visible_to_queries() {
    let mut engine = SidebarEngine::new();
    assert!(engine.toggle_widget("calendar", false).is_ok());
    assert_eq!(engine.is_collapsed("tags", Some("left".into()), 25).ok(), Some(true));
    assert!(engine.remove_widget("weather", None).is_err());
}

#[wasm_bindgen_test]
fn plans_serialize() {
    let engine = SidebarEngine::new();
    assert!(engine.page_plan(true).is_ok());
    assert!(engine.grid_layout(false).is_ok());
}
