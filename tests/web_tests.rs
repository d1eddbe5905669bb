// Browser tests for hydration, pointer wiring and unmounting.
// Run with `wasm-pack test --headless --chrome`; empty on the host.

#![cfg(target_arch = "wasm32")]

use cardfx_web::{hydrate, hydrate_into, TiltItem};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

/// Markup pinned to the viewport origin; removed from the body on drop.
struct Fixture {
    document: web::Document,
    root: web::HtmlElement,
}

impl Fixture {
    fn new(html: &str) -> Self {
        let document = web::window().unwrap().document().unwrap();
        let root: web::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        _ = root.set_attribute("style", "position:fixed;left:0;top:0;margin:0;padding:0");
        root.set_inner_html(html);
        document.body().unwrap().append_child(&root).unwrap();
        Self { document, root }
    }

    fn get(&self, id: &str) -> web::HtmlElement {
        self.root
            .query_selector(&format!("#{id}"))
            .unwrap()
            .unwrap_or_else(|| panic!("missing #{id}"))
            .dyn_into()
            .unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn pointer(el: &web::HtmlElement, kind: &str, x: i32, y: i32) {
    let init = web::PointerEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let ev = web::PointerEvent::new_with_event_init_dict(kind, &init).unwrap();
    el.dispatch_event(&ev).unwrap();
}

fn transform(el: &web::HtmlElement) -> String {
    el.style().get_property_value("transform").unwrap()
}

const CARD: &str = r#"
<div id="card" data-tilt-container style="width:200px;height:100px">
  <div data-tilt-body>
    <span id="title" data-tilt-item data-depth="50">Title</span>
    <p id="flat" data-tilt-item>Body</p>
  </div>
</div>"#;

#[wasm_bindgen_test]
fn container_rotates_with_pointer_and_resets_on_leave() {
    let fx = Fixture::new(CARD);
    let page = hydrate(&fx.document, &fx.root).unwrap();
    assert_eq!(page.container_count(), 1);
    assert_eq!(page.body_count(), 1);
    assert_eq!(page.item_count(), 2);

    let card = fx.get("card");
    let title = fx.get("title");
    let flat = fx.get("flat");
    let rect = card.get_bounding_client_rect();
    assert_eq!((rect.left(), rect.top()), (0.0, 0.0));
    assert_eq!(transform(&title), "translateZ(0px)");

    pointer(&card, "pointerenter", 150, 80);
    pointer(&card, "pointermove", 150, 80);
    assert!(page.containers()[0].is_active());
    assert_eq!(transform(&card), "rotateY(2deg) rotateX(1.2deg)");
    assert_eq!(transform(&title), "translateZ(50px)");
    assert_eq!(transform(&flat), "translateZ(0px)");

    pointer(&card, "pointerleave", 300, 300);
    assert!(!page.containers()[0].is_active());
    assert_eq!(transform(&card), "rotateY(0deg) rotateX(0deg)");
    assert_eq!(transform(&title), "translateZ(0px)");
}

#[wasm_bindgen_test]
fn item_outside_any_container_stays_flat() {
    let fx = Fixture::new(&format!(
        r#"{CARD}<span id="orphan" data-tilt-item data-depth="80">Loose</span>"#
    ));
    let page = hydrate(&fx.document, &fx.root).unwrap();
    let orphan = fx.get("orphan");

    pointer(&fx.get("card"), "pointerenter", 10, 10);
    assert_eq!(transform(&fx.get("title")), "translateZ(50px)");
    assert_eq!(transform(&orphan), "translateZ(0px)");
    let loose = page
        .items()
        .iter()
        .find(|i| i.element().id() == "orphan")
        .unwrap();
    assert!(!loose.is_active());
    assert_eq!(loose.translate_z(), 0.0);
}

#[wasm_bindgen_test]
fn item_follows_its_nearest_container() {
    let fx = Fixture::new(
        r#"
<div id="outer" data-tilt-container style="width:300px;height:200px">
  <div id="inner" data-tilt-container style="width:100px;height:50px">
    <span id="deep" data-tilt-item data-depth="40">x</span>
  </div>
  <span id="shallow" data-tilt-item data-depth="20">y</span>
</div>"#,
    );
    let _page = hydrate(&fx.document, &fx.root).unwrap();

    pointer(&fx.get("outer"), "pointerenter", 5, 5);
    assert_eq!(transform(&fx.get("shallow")), "translateZ(20px)");
    assert_eq!(transform(&fx.get("deep")), "translateZ(0px)");

    pointer(&fx.get("inner"), "pointerenter", 5, 5);
    assert_eq!(transform(&fx.get("deep")), "translateZ(40px)");
}

#[wasm_bindgen_test]
fn wobble_layers_move_apart_and_reset() {
    let fx = Fixture::new(
        r#"<section id="wob" data-wobble data-wobble-class="pad" style="width:300px;height:100px"><h3 id="head">Hi</h3></section>"#,
    );
    let page = hydrate(&fx.document, &fx.root).unwrap();
    let surface = &page.surfaces()[0];
    let wob = fx.get("wob");
    let content = surface.content().clone();
    let head = fx.get("head");
    let head: &web::Node = &head;
    assert!(content.contains(Some(head)));
    assert!(content.class_name().split_whitespace().any(|c| c == "pad"));

    pointer(&wob, "pointerenter", 180, 70);
    pointer(&wob, "pointermove", 180, 70);
    let state = surface.state();
    assert!(state.hovering);
    assert_eq!((state.offset.x, state.offset.y), (1.5, 1.0));
    assert!(transform(&wob).starts_with("translate3d(1.5px, 1px"));
    assert!(transform(&content).starts_with("translate3d(-1.5px, -1px"));
    assert!(transform(&content).contains("scale3d(1.03, 1.03, 1)"));

    pointer(&wob, "pointerleave", 500, 500);
    assert!(!surface.state().hovering);
    assert!(transform(&content).starts_with("translate3d(0px, 0px"));
}

#[wasm_bindgen_test]
fn invalid_attributes_fall_back_to_defaults() {
    let fx = Fixture::new(
        r#"
<div data-tilt-container data-tilt-divisor="steep" style="width:200px;height:100px">
  <span data-tilt-item data-depth="deep">x</span>
</div>
<section data-wobble data-wobble-divisor="0" style="width:300px;height:100px">y</section>"#,
    );
    let page = hydrate(&fx.document, &fx.root).unwrap();
    assert_eq!(page.containers()[0].config().divisor, cardfx_core::TILT_DIVISOR);
    assert_eq!(page.items()[0].depth(), 0.0);
    assert_eq!(page.surfaces()[0].config().divisor, cardfx_core::WOBBLE_DIVISOR);
}

#[wasm_bindgen_test]
fn dropping_the_page_detaches_listeners_and_restores_markup() {
    let fx = Fixture::new(&format!(
        r#"{CARD}<section id="wob" data-wobble class="mine" style="width:300px;height:100px"><b>z</b></section>"#
    ));
    let original = fx.root.inner_html();
    let page = hydrate(&fx.document, &fx.root).unwrap();
    assert_ne!(fx.root.inner_html(), original);

    drop(page);
    assert_eq!(fx.root.inner_html(), original);

    let card = fx.get("card");
    pointer(&card, "pointerenter", 150, 80);
    pointer(&card, "pointermove", 150, 80);
    assert_eq!(transform(&card), "");
    assert_eq!(transform(&fx.get("title")), "");
    pointer(&fx.get("wob"), "pointerenter", 180, 70);
    assert_eq!(transform(&fx.get("wob")), "");
}

#[wasm_bindgen_test]
fn rehydrating_releases_removed_cards_and_mounts_new_ones() {
    let fx = Fixture::new(CARD);
    let mut page = hydrate(&fx.document, &fx.root).unwrap();
    assert_eq!(page.container_count(), 1);

    let card = fx.get("card");
    card.parent_element().unwrap().remove();
    assert!(!card.is_connected());

    hydrate_into(&fx.document, &fx.root, &mut page).unwrap();
    assert_eq!(page.container_count(), 0);
    assert_eq!(page.body_count(), 0);
    assert_eq!(page.item_count(), 0);

    fx.root.set_inner_html(CARD);
    hydrate_into(&fx.document, &fx.root, &mut page).unwrap();
    assert_eq!(page.container_count(), 1);
    assert_eq!(page.item_count(), 2);

    hydrate_into(&fx.document, &fx.root, &mut page).unwrap();
    assert_eq!(page.container_count(), 1);
    assert_eq!(page.prune_detached(), 0);
}

#[wasm_bindgen_test]
fn created_items_keep_their_element_type() {
    let fx = Fixture::new(
        r#"<div id="card" data-tilt-container style="width:200px;height:100px"></div>"#,
    );
    let page = hydrate(&fx.document, &fx.root).unwrap();
    let container = &page.containers()[0];

    let link: TiltItem<web::HtmlAnchorElement> = container
        .create_item(&fx.document, 30.0, Some("link"), &[("href", "#top"), ("title", "Top")])
        .unwrap();
    let anchor = link.element();
    assert_eq!(anchor.tag_name(), "A");
    assert!(anchor.href().ends_with("#top"));
    assert_eq!(anchor.get_attribute("title").as_deref(), Some("Top"));
    let anchor_node: &web::Node = anchor;
    assert!(container.element().contains(Some(anchor_node)));

    let flat: TiltItem<web::HtmlDivElement> = TiltItem::create(
        &fx.document,
        30.0,
        None,
        &container.config(),
        None,
        &[],
    )
    .unwrap();

    pointer(&fx.get("card"), "pointerenter", 10, 10);
    assert!(link.is_active());
    assert_eq!(transform(anchor.as_ref()), "translateZ(30px)");
    assert!(!flat.is_active());
    assert_eq!(flat.element().tag_name(), "DIV");
}
