use crate::classes::cn_with;
use crate::constants::{
    ATTR_MOUNTED, PERSPECTIVE_WRAPPER_CLASS, PRESERVE_3D, TILT_BODY_CLASS, TILT_CONTAINER_CLASS,
    TILT_ITEM_CLASS,
};
use crate::dom::{self, SavedAttrs};
use crate::listener::EventListener;
use cardfx_core::{
    ActivitySignal, DepthItem, Subscription, TiltConfig, TiltContainerState, TiltVector,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element types a [`TiltItem`] can be created as.
pub trait ElementKind: JsCast + AsRef<web::HtmlElement> + Clone + 'static {
    const TAG: &'static str;
}

macro_rules! element_kind {
    ($($ty:ty => $tag:literal),* $(,)?) => {
        $(impl ElementKind for $ty {
            const TAG: &'static str = $tag;
        })*
    };
}

element_kind! {
    web::HtmlDivElement => "div",
    web::HtmlSpanElement => "span",
    web::HtmlParagraphElement => "p",
    web::HtmlAnchorElement => "a",
    web::HtmlButtonElement => "button",
    web::HtmlImageElement => "img",
}

// Direct visual write; bypasses the activity channel.
#[inline]
fn write_rotation(el: &web::HtmlElement, v: TiltVector) {
    dom::set_transform(el, &v.to_css());
}

/// A perspective viewport whose inner element rotates with the pointer.
pub struct TiltContainer {
    wrapper: web::HtmlElement,
    element: web::HtmlElement,
    saved: SavedAttrs,
    state: Rc<RefCell<TiltContainerState>>,
    _listeners: [EventListener; 3],
}

impl TiltContainer {
    /// Wrap `element` in a perspective wrapper and start tracking the pointer
    /// over it. `container_class` is added to the wrapper.
    pub fn mount(
        document: &web::Document,
        element: web::HtmlElement,
        config: TiltConfig,
        container_class: Option<&str>,
    ) -> anyhow::Result<Self> {
        let wrapper_class = cn_with(PERSPECTIVE_WRAPPER_CLASS, container_class);
        let wrapper = dom::create_div(document, &wrapper_class)?;
        dom::set_style(&wrapper, "perspective", &config.perspective_css());
        let saved = SavedAttrs::capture(&element);
        dom::wrap(&element, &wrapper)?;

        dom::merge_class(&element, TILT_CONTAINER_CLASS);
        dom::set_style(&element, "transform-style", PRESERVE_3D);
        dom::set_style(&element, "transition", &config.transition_css());
        write_rotation(&element, TiltVector::ZERO);
        _ = element.set_attribute(ATTR_MOUNTED, "");

        let state = Rc::new(RefCell::new(TiltContainerState::new(config)));
        let target: &web::EventTarget = element.as_ref();

        let enter = {
            let state = state.clone();
            EventListener::pointer(target, "pointerenter", move |_ev| {
                state.borrow_mut().pointer_enter();
            })
        };
        let moved = {
            let state = state.clone();
            let el = element.clone();
            EventListener::pointer(target, "pointermove", move |ev| {
                let rotation = state
                    .borrow()
                    .pointer_move(dom::measure(&el), dom::pointer_client(&ev));
                if let Some(v) = rotation {
                    write_rotation(&el, v);
                }
            })
        };
        let leave = {
            let state = state.clone();
            let el = element.clone();
            EventListener::pointer(target, "pointerleave", move |_ev| {
                let v = state.borrow_mut().pointer_leave();
                write_rotation(&el, v);
            })
        };

        log::debug!("[tilt] mounted container (divisor {})", config.divisor);
        Ok(Self {
            wrapper,
            element,
            saved,
            state,
            _listeners: [enter, moved, leave],
        })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.element
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state.borrow().is_active()
    }

    pub fn signal(&self) -> ActivitySignal {
        self.state.borrow().signal()
    }

    pub fn config(&self) -> TiltConfig {
        *self.state.borrow().config()
    }

    /// Adopt an existing descendant as an item at `depth`.
    pub fn attach_item<E>(&self, element: E, depth: f64) -> TiltItem<E>
    where
        E: JsCast + AsRef<web::HtmlElement> + Clone + 'static,
    {
        TiltItem::attach(element, depth, Some(self.signal()), &self.config())
    }

    /// Create a new `E` item and append it to the container.
    pub fn create_item<E: ElementKind>(
        &self,
        document: &web::Document,
        depth: f64,
        class: Option<&str>,
        attrs: &[(&str, &str)],
    ) -> anyhow::Result<TiltItem<E>> {
        let config = self.config();
        let signal = Some(self.signal());
        let item = TiltItem::<E>::create(document, depth, signal, &config, class, attrs)?;
        let node: &web::HtmlElement = item.element().as_ref();
        self.element.append_child(node).map_err(dom::js_err)?;
        Ok(item)
    }
}

impl Drop for TiltContainer {
    fn drop(&mut self) {
        self.state.borrow_mut().pointer_leave();
        _ = self.element.remove_attribute(ATTR_MOUNTED);
        self.saved.restore(&self.element);
        dom::unwrap(&self.element, &self.wrapper);
        log::debug!("[tilt] unmounted container");
    }
}

/// Card body: keeps its children in the container's 3D context until dropped.
pub struct TiltBody {
    element: web::HtmlElement,
    saved: Vec<(web::HtmlElement, SavedAttrs)>,
}

impl TiltBody {
    pub fn mark(element: web::HtmlElement) -> Self {
        let children = dom::child_elements(&element);
        let mut saved = Vec::with_capacity(children.len() + 1);
        saved.push((element.clone(), SavedAttrs::capture(&element)));
        saved.extend(children.iter().map(|c| (c.clone(), SavedAttrs::capture(c))));

        dom::merge_class(&element, TILT_BODY_CLASS);
        dom::set_style(&element, "transform-style", PRESERVE_3D);
        for child in &children {
            dom::set_style(child, "transform-style", PRESERVE_3D);
        }
        _ = element.set_attribute(ATTR_MOUNTED, "");
        Self { element, saved }
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.element
    }
}

impl Drop for TiltBody {
    fn drop(&mut self) {
        _ = self.element.remove_attribute(ATTR_MOUNTED);
        for (el, saved) in &self.saved {
            saved.restore(el);
        }
    }
}

/// An element that moves along the depth axis while its container is active.
///
/// Generic over the element kind so callers keep the concrete `web-sys` type
/// (anchor, image, ...) they created or adopted.
pub struct TiltItem<E = web::HtmlElement> {
    element: E,
    html: web::HtmlElement,
    saved: SavedAttrs,
    item: DepthItem,
    _subscription: Option<Subscription>,
}

impl<E> TiltItem<E>
where
    E: JsCast + AsRef<web::HtmlElement> + Clone + 'static,
{
    /// Adopt `element`. With no `signal` the item stays at depth zero.
    pub fn attach(
        element: E,
        depth: f64,
        signal: Option<ActivitySignal>,
        config: &TiltConfig,
    ) -> Self {
        let item = DepthItem::new(depth, signal);
        let html: &web::HtmlElement = element.as_ref();
        let saved = SavedAttrs::capture(html);
        dom::merge_class(html, TILT_ITEM_CLASS);
        dom::set_style(html, "transition", &config.transition_css());
        dom::set_transform(html, &item.transform_css());
        _ = html.set_attribute(ATTR_MOUNTED, "");

        let html = html.clone();
        let target = html.clone();
        let subscription = item.watch(move |css| dom::set_transform(&target, &css));
        if subscription.is_none() {
            log::debug!("[tilt] item outside any container stays flat");
        }
        Self {
            element,
            html,
            saved,
            item,
            _subscription: subscription,
        }
    }

    #[inline]
    pub fn element(&self) -> &E {
        &self.element
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.item.offset.depth
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.item.is_active()
    }

    #[inline]
    pub fn translate_z(&self) -> f64 {
        self.item.translate_z()
    }
}

impl<E> Drop for TiltItem<E> {
    fn drop(&mut self) {
        _ = self.html.remove_attribute(ATTR_MOUNTED);
        self.saved.restore(&self.html);
    }
}

impl<E: ElementKind> TiltItem<E> {
    /// Create a detached `<E::TAG>` element with `attrs` forwarded verbatim.
    pub fn create(
        document: &web::Document,
        depth: f64,
        signal: Option<ActivitySignal>,
        config: &TiltConfig,
        class: Option<&str>,
        attrs: &[(&str, &str)],
    ) -> anyhow::Result<Self> {
        let element = document
            .create_element(E::TAG)
            .map_err(dom::js_err)?
            .dyn_into::<E>()
            .map_err(|_| anyhow::anyhow!("<{}> is not the expected element type", E::TAG))?;
        let html: &web::HtmlElement = element.as_ref();
        if let Some(class) = class {
            html.set_class_name(class);
        }
        for (name, value) in attrs {
            html.set_attribute(name, value).map_err(dom::js_err)?;
        }
        Ok(Self::attach(element, depth, signal, config))
    }
}
