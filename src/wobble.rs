use crate::classes::cn_with;
use crate::constants::{
    ATTR_MOUNTED, WOBBLE_INNER_CLASS, WOBBLE_OUTER_CLASS, WOBBLE_SHADOW, WOBBLE_SHADOW_CLASS,
};
use crate::dom::{self, SavedAttrs};
use crate::listener::EventListener;
use cardfx_core::{WobbleConfig, WobbleState, WobbleSurfaceState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Outer shell and inner content share one state, so both transforms are
/// written together after every state change.
fn render(outer: &web::HtmlElement, inner: &web::HtmlElement, state: &WobbleSurfaceState) {
    dom::set_transform(outer, &state.outer_transform().to_css());
    dom::set_transform(inner, &state.inner_transform().to_css());
}

pub struct WobbleSurface {
    outer: web::HtmlElement,
    saved: SavedAttrs,
    shadow: web::HtmlElement,
    inner: web::HtmlElement,
    state: Rc<RefCell<WobbleSurfaceState>>,
    _listeners: [EventListener; 3],
}

impl WobbleSurface {
    /// Turn `outer` into a wobble surface. Its current children move into the
    /// inner content layer, which also receives `inner_class`.
    pub fn mount(
        document: &web::Document,
        outer: web::HtmlElement,
        config: WobbleConfig,
        inner_class: Option<&str>,
    ) -> anyhow::Result<Self> {
        let shadow = dom::create_div(document, WOBBLE_SHADOW_CLASS)?;
        dom::set_style(&shadow, "box-shadow", WOBBLE_SHADOW);
        let inner = dom::create_div(document, &cn_with(WOBBLE_INNER_CLASS, inner_class))?;

        let saved = SavedAttrs::capture(&outer);
        dom::move_children(&outer, &inner)?;
        shadow.append_child(&inner).map_err(dom::js_err)?;
        outer.append_child(&shadow).map_err(dom::js_err)?;

        dom::merge_class(&outer, WOBBLE_OUTER_CLASS);
        let transition = config.transition_css();
        dom::set_style(&outer, "transition", &transition);
        dom::set_style(&inner, "transition", &transition);
        _ = outer.set_attribute(ATTR_MOUNTED, "");

        let state = Rc::new(RefCell::new(WobbleSurfaceState::new(config)));
        render(&outer, &inner, &state.borrow());

        let target: &web::EventTarget = outer.as_ref();
        let enter = {
            let (state, o, i) = (state.clone(), outer.clone(), inner.clone());
            EventListener::pointer(target, "pointerenter", move |_ev| {
                let mut s = state.borrow_mut();
                s.pointer_enter();
                render(&o, &i, &s);
            })
        };
        let moved = {
            let (state, o, i) = (state.clone(), outer.clone(), inner.clone());
            EventListener::pointer(target, "pointermove", move |ev| {
                let mut s = state.borrow_mut();
                if s.pointer_move(dom::measure(&o), dom::pointer_client(&ev)) {
                    render(&o, &i, &s);
                }
            })
        };
        let leave = {
            let (state, o, i) = (state.clone(), outer.clone(), inner.clone());
            EventListener::pointer(target, "pointerleave", move |_ev| {
                let mut s = state.borrow_mut();
                s.pointer_leave();
                render(&o, &i, &s);
            })
        };

        log::debug!("[wobble] mounted surface (divisor {})", config.divisor);
        Ok(Self {
            outer,
            saved,
            shadow,
            inner,
            state,
            _listeners: [enter, moved, leave],
        })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.outer
    }

    #[inline]
    pub fn content(&self) -> &web::HtmlElement {
        &self.inner
    }

    pub fn config(&self) -> WobbleConfig {
        *self.state.borrow().config()
    }

    pub fn state(&self) -> WobbleState {
        self.state.borrow().state()
    }
}

impl Drop for WobbleSurface {
    fn drop(&mut self) {
        self.state.borrow_mut().pointer_leave();
        _ = dom::move_children(&self.inner, &self.outer);
        _ = self.outer.remove_child(&self.shadow);
        _ = self.outer.remove_attribute(ATTR_MOUNTED);
        self.saved.restore(&self.outer);
        log::debug!("[wobble] unmounted surface");
    }
}
