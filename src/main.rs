//! Modelo Portfolio entry point
//!
//! On the web, renders the page into `#app` and mounts the reveal component.
//! Natively, prints the pre-rendered page (all sections revealed) to stdout.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Weak;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, MouseEvent, PageTransitionEvent};

    use modelo_portfolio::consts::APP_ROOT_ID;
    use modelo_portfolio::platform::web::{DomHost, DomIntersectionWatcher};
    use modelo_portfolio::render::render_page;
    use modelo_portfolio::{
        MountSlot, MountedPage, NavAction, RevealConfig, RevealPage, VisibilityMap,
    };

    thread_local! {
        /// The mounted page, alive until the document is unloaded
        static MOUNTED: RefCell<MountSlot<DomHost, DomIntersectionWatcher>> =
            RefCell::new(MountSlot::new());
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Modelo Portfolio starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let config = RevealConfig::load();
        render_into_root(&document, &config)?;

        let host = DomHost::new(document.clone());
        let mounted = MountedPage::mount(host, config, |threshold, sink| {
            DomIntersectionWatcher::create(threshold, sink)
        });

        setup_nav_buttons(&document, mounted.downgrade());
        setup_teardown(&window);

        MOUNTED.with(|m| m.borrow_mut().install(mounted));
        log::info!("Modelo Portfolio running!");
        Ok(())
    }

    /// Render the page in its pre-reveal state, replacing anything in `#app`
    fn render_into_root(document: &Document, config: &RevealConfig) -> Result<(), JsValue> {
        let root = match document.get_element_by_id(APP_ROOT_ID) {
            Some(root) => root,
            None => {
                let root = document.create_element("div")?;
                root.set_id(APP_ROOT_ID);
                document
                    .body()
                    .ok_or_else(|| JsValue::from_str("no body"))?
                    .append_child(&root)?;
                root
            }
        };

        if root.child_element_count() > 0 {
            log::info!("Replacing pre-rendered markup");
        }
        root.set_inner_html(&render_page(&VisibilityMap::new(), config));
        Ok(())
    }

    fn setup_nav_buttons(document: &Document, page: Weak<RefCell<RevealPage<DomHost>>>) {
        for action in NavAction::ALL {
            let Some(btn) = document.get_element_by_id(action.button_id()) else {
                log::warn!("Missing nav button '{}'", action.button_id());
                continue;
            };
            let page = page.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let action = event
                    .current_target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| NavAction::from_button_id(&el.id()));
                match (action, page.upgrade()) {
                    (Some(action), Some(page)) => {
                        page.borrow_mut().navigate(action);
                    }
                    (None, _) => log::warn!("Click from an unknown nav button"),
                    (_, None) => log::debug!("Nav click after unmount ignored"),
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Unmount on `pagehide`, unless the page is going into the back/forward
    /// cache and may be restored
    fn setup_teardown(window: &web_sys::Window) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PageTransitionEvent| {
            let persisted = event.persisted();
            MOUNTED.with(|m| m.borrow_mut().on_page_hide(persisted));
        });
        let _ = window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_page::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use modelo_portfolio::content::animated_sections;
    use modelo_portfolio::render::render_page;
    use modelo_portfolio::{RevealConfig, VisibilityMap};

    env_logger::init();
    log::info!("Modelo Portfolio (native) pre-rendering...");
    log::info!("Run with `trunk serve` for the animated web version");

    let config = RevealConfig::load();
    let mut visibility = VisibilityMap::new();
    visibility.reveal_all(animated_sections().map(|s| s.id));

    println!("{}", render_page(&visibility, &config));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
