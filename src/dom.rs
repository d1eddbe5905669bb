use crate::classes::cn;
use cardfx_core::Rect;
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Current bounding rect, or `None` while the element is detached.
pub fn measure(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, css: &str) {
    set_style(el, "transform", css);
}

/// Prepend the classes of `base` the element does not already carry.
pub fn merge_class(el: &web::Element, base: &str) {
    let current = el.class_name();
    let missing: Vec<&str> = base
        .split_whitespace()
        .filter(|c| !current.split_whitespace().any(|have| have == *c))
        .collect();
    el.set_class_name(&cn(&[&missing.join(" "), &current]));
}

pub fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Put `wrapper` where `el` is and move `el` inside it.
pub fn wrap(el: &web::Element, wrapper: &web::Element) -> anyhow::Result<()> {
    let parent = el
        .parent_node()
        .ok_or_else(|| anyhow::anyhow!("cannot wrap a detached element"))?;
    let anchor: &web::Node = el;
    parent.insert_before(wrapper, Some(anchor)).map_err(js_err)?;
    wrapper.append_child(el).map_err(js_err)?;
    Ok(())
}

/// Inverse of [`wrap`]: put `el` back where `wrapper` is and drop the wrapper.
pub fn unwrap(el: &web::Element, wrapper: &web::Element) {
    if let Some(parent) = wrapper.parent_node() {
        let anchor: &web::Node = wrapper;
        _ = parent.insert_before(el, Some(anchor));
        _ = parent.remove_child(wrapper);
    }
}

pub fn move_children(from: &web::Node, to: &web::Node) -> anyhow::Result<()> {
    while let Some(child) = from.first_child() {
        to.append_child(&child).map_err(js_err)?;
    }
    Ok(())
}

/// Direct element children that are HTML elements.
pub fn child_elements(el: &web::Element) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    let mut next = el.first_element_child();
    while let Some(child) = next {
        next = child.next_element_sibling();
        if let Ok(html) = child.dyn_into::<web::HtmlElement>() {
            out.push(html);
        }
    }
    out
}

/// `class` and `style` attributes as they were before mounting.
pub struct SavedAttrs {
    class: Option<String>,
    style: Option<String>,
}

impl SavedAttrs {
    pub fn capture(el: &web::Element) -> Self {
        Self {
            class: el.get_attribute("class"),
            style: el.get_attribute("style"),
        }
    }

    pub fn restore(&self, el: &web::Element) {
        for (name, value) in [("class", &self.class), ("style", &self.style)] {
            let _ = match value {
                Some(v) => el.set_attribute(name, v),
                None => el.remove_attribute(name),
            };
        }
    }
}
