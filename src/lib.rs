#![cfg(target_arch = "wasm32")]
use cardfx_core::parse_log_level;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod classes;
mod constants;
mod dom;
mod listener;
mod mount;
mod tilt;
mod wobble;

pub use mount::{hydrate, hydrate_into, Page};
pub use tilt::{ElementKind, TiltBody, TiltContainer, TiltItem};
pub use wobble::WobbleSurface;

thread_local! {
    // The page mounted by `start`; replaced or dropped by the exported helpers.
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn configured_log_level(document: Option<&web::Document>) -> (log::Level, Option<String>) {
    let raw = document
        .and_then(|d| d.document_element())
        .and_then(|el| el.get_attribute(constants::ATTR_LOG_LEVEL));
    match raw {
        None => (log::Level::Info, None),
        Some(raw) => match parse_log_level(&raw) {
            Ok(level) => (level, None),
            Err(e) => (log::Level::Info, Some(e.to_string())),
        },
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = dom::window_document();
    let (level, problem) = configured_log_level(document.as_ref());
    console_log::init_with_level(level).ok();
    if let Some(problem) = problem {
        log::warn!("[config] {}; using {}", problem, constants::DEFAULT_LOG_LEVEL);
    }
    log::info!("cardfx-web starting");

    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(document: Option<web::Document>) -> anyhow::Result<()> {
    let document = document.ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let page = mount::hydrate(&document, &root)?;
    log::info!(
        "[mount] {} tilt containers, {} items, {} wobble surfaces",
        page.container_count(),
        page.item_count(),
        page.surface_count()
    );
    PAGE.with(|p| *p.borrow_mut() = Some(page));
    Ok(())
}

/// Release cards removed from the document and mount the ones added since
/// the last hydration.
#[wasm_bindgen]
pub fn rehydrate() -> Result<(), JsValue> {
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| JsValue::from_str("no document element"))?;
    PAGE.with(|p| {
        let mut slot = p.borrow_mut();
        let page = slot.get_or_insert_with(Page::default);
        mount::hydrate_into(&document, &root, page).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Detach every listener, remove inserted wrappers and restore the `class`
/// and `style` attributes of every mounted element.
#[wasm_bindgen]
pub fn unmount() {
    let page = PAGE.with(|p| p.borrow_mut().take());
    if page.is_some() {
        drop(page);
        log::info!("[mount] page unmounted");
    }
}
