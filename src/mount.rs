//! Hydration: find marked-up elements and attach the engines to them.

use crate::constants::*;
use crate::dom;
use crate::tilt::{TiltBody, TiltContainer, TiltItem};
use crate::wobble::WobbleSurface;
use cardfx_core::{parse_depth, parse_divisor, resolve_attr, TiltConfig, WobbleConfig};
use web_sys as web;

/// Everything mounted under one root. Dropping it detaches every listener,
/// takes out the wrapper elements it inserted, moves wobble content back, and
/// puts each touched element's `class` and `style` attributes back as they
/// were before mounting.
#[derive(Default)]
pub struct Page {
    // Field order is drop order: items, then bodies, then containers.
    items: Vec<TiltItem>,
    bodies: Vec<TiltBody>,
    containers: Vec<TiltContainer>,
    surfaces: Vec<WobbleSurface>,
}

impl Page {
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn containers(&self) -> &[TiltContainer] {
        &self.containers
    }

    pub fn items(&self) -> &[TiltItem] {
        &self.items
    }

    pub fn surfaces(&self) -> &[WobbleSurface] {
        &self.surfaces
    }

    /// Drop everything whose element has left the document, releasing its
    /// listeners and subscriptions. Returns how many entries were released.
    pub fn prune_detached(&mut self) -> usize {
        let before = self.len();
        self.items.retain(|i| i.element().is_connected());
        self.bodies.retain(|b| b.element().is_connected());
        self.containers.retain(|c| c.element().is_connected());
        self.surfaces.retain(|s| s.element().is_connected());
        let released = before - self.len();
        if released > 0 {
            log::debug!("[mount] released {} detached entries", released);
        }
        released
    }

    fn len(&self) -> usize {
        self.items.len() + self.bodies.len() + self.containers.len() + self.surfaces.len()
    }

    /// Nearest mounted container enclosing `el`, if any.
    fn enclosing(&self, el: &web::Element) -> Option<&TiltContainer> {
        let parent = el.parent_element()?;
        let nearest = parent.closest(TILT_CONTAINER_SELECTOR).ok()??;
        let nearest: &web::Node = &nearest;
        self.containers
            .iter()
            .find(|c| c.element().is_same_node(Some(nearest)))
    }
}

#[inline]
fn is_mounted(el: &web::Element) -> bool {
    el.has_attribute(ATTR_MOUNTED)
}

fn divisor_attr(el: &web::Element, attr: &str, default: f64) -> f64 {
    resolve_attr(attr, el.get_attribute(attr).as_deref(), parse_divisor, default)
}

fn depth_attr(el: &web::Element) -> f64 {
    resolve_attr(ATTR_DEPTH, el.get_attribute(ATTR_DEPTH).as_deref(), parse_depth, 0.0)
}

/// Release entries for elements that left the document, then mount every
/// marked descendant of `root` not already mounted. Containers mount first so
/// items can find them.
pub fn hydrate_into(
    document: &web::Document,
    root: &web::Element,
    page: &mut Page,
) -> anyhow::Result<()> {
    page.prune_detached();
    let before = (page.containers.len(), page.items.len(), page.surfaces.len());

    for el in dom::query_all(root, TILT_CONTAINER_SELECTOR) {
        if is_mounted(&el) {
            continue;
        }
        let defaults = TiltConfig::default();
        let config = TiltConfig {
            divisor: divisor_attr(&el, ATTR_TILT_DIVISOR, defaults.divisor),
            ..defaults
        };
        let container_class = el.get_attribute(ATTR_CONTAINER_CLASS);
        page.containers
            .push(TiltContainer::mount(document, el, config, container_class.as_deref())?);
    }

    for el in dom::query_all(root, TILT_BODY_SELECTOR) {
        if !is_mounted(&el) {
            page.bodies.push(TiltBody::mark(el));
        }
    }

    for el in dom::query_all(root, TILT_ITEM_SELECTOR) {
        if is_mounted(&el) {
            continue;
        }
        let depth = depth_attr(&el);
        let item = match page.enclosing(&el) {
            Some(container) => container.attach_item(el, depth),
            None => TiltItem::attach(el, depth, None, &TiltConfig::default()),
        };
        page.items.push(item);
    }

    for el in dom::query_all(root, WOBBLE_SELECTOR) {
        if is_mounted(&el) {
            continue;
        }
        let defaults = WobbleConfig::default();
        let config = WobbleConfig {
            divisor: divisor_attr(&el, ATTR_WOBBLE_DIVISOR, defaults.divisor),
            ..defaults
        };
        let inner_class = el.get_attribute(ATTR_WOBBLE_CLASS);
        page.surfaces
            .push(WobbleSurface::mount(document, el, config, inner_class.as_deref())?);
    }

    log::debug!(
        "[mount] +{} containers, +{} items, +{} surfaces",
        page.containers.len() - before.0,
        page.items.len() - before.1,
        page.surfaces.len() - before.2
    );
    Ok(())
}

pub fn hydrate(document: &web::Document, root: &web::Element) -> anyhow::Result<Page> {
    let mut page = Page::default();
    hydrate_into(document, root, &mut page)?;
    Ok(page)
}
