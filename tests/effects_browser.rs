#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement, MouseEvent, MouseEventInit};

use glassfx::boot_runtime::{add_boot_phase_hook, boot_phase, remove_boot_phase_hook};
use glassfx::glitch::{GlitchEffects, GlitchText};
use glassfx::layout::randomize_panel_positions;
use glassfx::panels::DragController;
use glassfx::ripple::spawn_ripple;
use glassfx::scroll::install_smooth_scroll;
use glassfx::terminal::run_terminal_sequence;
use glassfx::EffectsApp;
use glassfx_core::config::{
    DragConfig, GlitchConfig, LayoutConfig, RippleConfig, ScrollConfig, TypewriterConfig,
};
use glassfx_core::{AnchorPolicy, BootPhase, EffectsConfig, Point, RandomSource, Viewport};

wasm_bindgen_test_configure!(run_in_browser);

struct Midpoint;

impl RandomSource for Midpoint {
    fn next_unit(&mut self) -> f64 {
        0.5
    }
}

fn document() -> Document {
    web_sys::window()
        .and_then(|window| window.document())
        .expect("document available")
}

fn mount(html: &str) -> HtmlElement {
    let document = document();
    let root: HtmlElement = document
        .create_element("div")
        .expect("create test root")
        .dyn_into()
        .expect("div is an HtmlElement");
    root.set_inner_html(html);
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    root
}

fn find(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("missing {selector}"))
        .dyn_into()
        .expect("HtmlElement")
}

fn mouse(event_type: &str, x: i32, y: i32) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_client_x(x);
    init.set_client_y(y);
    MouseEvent::new_with_mouse_event_init_dict(event_type, &init).expect("mouse event")
}

async fn wait_until(label: &str, mut done: impl FnMut() -> bool) {
    let start = Date::now();
    while !done() {
        if Date::now() - start > 5000.0 {
            panic!("{label} not reached after 5s");
        }
        TimeoutFuture::new(10).await;
    }
}

#[wasm_bindgen_test(async)]
async fn typewriter_writes_every_line_then_cursor() {
    let root = mount(
        r#"<div class="terminal-loading"><div id="terminal-lines"></div></div>"#,
    );
    let config = TypewriterConfig {
        lines: vec!["> boot".to_string(), "".to_string(), "> ready now".to_string()],
        char_delay_ms: 1,
        line_pause_ms: 1,
        hide_delay_ms: 60_000,
        remove_delay_ms: 0,
    };

    assert!(run_terminal_sequence(&config).await);

    let container = find(&root, "#terminal-lines");
    let children = container.children();
    assert_eq!(children.length(), 4);
    for (index, line) in config.lines.iter().enumerate() {
        let child = children.item(index as u32).expect("line region");
        assert_eq!(child.class_name(), "terminal-line");
        assert_eq!(child.text_content().unwrap_or_default(), *line);
    }
    let cursor = children.item(3).expect("cursor");
    assert_eq!(cursor.class_name(), "terminal-cursor");
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn typewriter_without_markup_does_nothing() {
    assert!(!run_terminal_sequence(&TypewriterConfig::default()).await);
}

#[wasm_bindgen_test(async)]
async fn terminal_hides_after_the_sequence() {
    let root = mount(
        r#"<div class="terminal-loading"><div id="terminal-lines"></div></div>"#,
    );
    let config = TypewriterConfig {
        lines: vec!["x".to_string()],
        char_delay_ms: 1,
        line_pause_ms: 1,
        hide_delay_ms: 20,
        remove_delay_ms: 20,
    };
    assert!(run_terminal_sequence(&config).await);
    let terminal = find(&root, ".terminal-loading");
    assert!(!terminal.class_list().contains("hidden"));
    wait_until("terminal removed", || {
        terminal.style().get_property_value("display").unwrap_or_default() == "none"
    })
    .await;
    assert!(terminal.class_list().contains("hidden"));
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn ripple_is_centered_and_removed() {
    let root = mount(
        r#"<button class="glass-button" style="position:fixed;left:0;top:0;width:100px;height:40px;padding:0;border:0"></button>"#,
    );
    let button = find(&root, ".glass-button");
    let config = RippleConfig { lifetime_ms: 50 };

    let ripple = spawn_ripple(&button, 30.0, 10.0, &config).expect("ripple spawned");
    let style = ripple.style();
    assert_eq!(style.get_property_value("width").unwrap(), "100px");
    assert_eq!(style.get_property_value("height").unwrap(), "100px");
    assert_eq!(style.get_property_value("left").unwrap(), "-20px");
    assert_eq!(style.get_property_value("top").unwrap(), "-40px");
    assert_eq!(button.query_selector_all(".ripple").unwrap().length(), 1);

    wait_until("ripple removed", || {
        button.query_selector_all(".ripple").unwrap().length() == 0
    })
    .await;
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn dragging_translates_panel_by_pointer_delta() {
    let root = mount(
        r#"<div class="draggable-panel" style="position:fixed;left:0;top:0;width:100px;height:100px"></div>"#,
    );
    let panel = find(&root, ".draggable-panel");
    let controller = DragController::install(vec![panel.clone()], DragConfig { active_linger_ms: 30 });
    let document = document();

    panel.dispatch_event(&mouse("mousedown", 10, 10)).unwrap();
    assert!(panel.class_list().contains("dragging"));
    assert!(panel.class_list().contains("active"));

    document.dispatch_event(&mouse("mousemove", 40, 25)).unwrap();
    document.dispatch_event(&mouse("mouseup", 40, 25)).unwrap();

    assert_eq!(controller.offset(0), Some(Point::new(30.0, 15.0)));
    assert_eq!(
        panel.style().get_property_value("transform").unwrap(),
        "translate(30px, 15px)"
    );
    assert!(!panel.class_list().contains("dragging"));
    assert!(panel.class_list().contains("active"));

    // Moves after the release belong to nobody.
    document.dispatch_event(&mouse("mousemove", 300, 300)).unwrap();
    assert_eq!(controller.offset(0), Some(Point::new(30.0, 15.0)));

    wait_until("active marker cleared", || !panel.class_list().contains("active")).await;
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn layout_uses_fixed_zones_and_staggers_entrance() {
    let root = mount(
        r#"<div class="draggable-panel" style="position:fixed;width:300px;height:200px;opacity:0"></div>
           <div class="draggable-panel" style="position:fixed;width:300px;height:200px;opacity:0"></div>"#,
    );
    let panels: Vec<HtmlElement> = (0..2)
        .map(|index| {
            root.children()
                .item(index)
                .expect("panel")
                .dyn_into()
                .expect("HtmlElement")
        })
        .collect();
    let config = LayoutConfig::default();

    let (placed, _entrances) = randomize_panel_positions(
        &panels,
        Viewport::new(1200.0, 800.0),
        &config,
        &mut Midpoint,
    );

    assert_eq!(placed, vec![Point::new(100.0, 120.0), Point::new(800.0, 200.0)]);
    assert_eq!(panels[0].style().get_property_value("left").unwrap(), "100px");
    assert_eq!(panels[0].style().get_property_value("top").unwrap(), "120px");
    assert_eq!(panels[1].style().get_property_value("left").unwrap(), "800px");
    assert_eq!(panels[1].style().get_property_value("top").unwrap(), "200px");

    wait_until("entrance done", || {
        panels[1].style().get_property_value("opacity").unwrap_or_default() == "1"
    })
    .await;
    assert_eq!(panels[0].style().get_property_value("opacity").unwrap(), "1");
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn restarted_glitch_still_settles_on_original() {
    let root = mount(r#"<span class="scramble-text">Dark Glass</span>"#);
    let span = find(&root, ".scramble-text");
    let config = GlitchConfig {
        tick_ms: 2,
        steps_per_char: 3,
        stagger_ms: 0,
    };
    let text = GlitchText::new(span.clone(), config);

    text.scramble();
    TimeoutFuture::new(10).await;
    text.scramble();
    assert!(text.is_running());

    wait_until("glitch resolved", || !text.is_running()).await;
    assert_eq!(span.text_content().unwrap_or_default(), "Dark Glass");
    assert_eq!(text.original(), "Dark Glass");
    root.remove();
}

fn left_of(element: &HtmlElement) -> String {
    element.style().get_property_value("left").unwrap_or_default()
}

fn clicked_and_prevented(anchor: &HtmlElement) -> bool {
    let event = mouse("click", 0, 0);
    anchor.dispatch_event(&event).unwrap();
    event.default_prevented()
}

#[wasm_bindgen_test(async)]
async fn orchestrator_waits_for_typing_before_effects() {
    let root = mount(
        r#"<div class="terminal-loading"><div id="terminal-lines"></div></div>
           <span class="scramble-text">Glass</span>
           <div class="draggable-panel" style="position:fixed;width:60px;height:40px"></div>"#,
    );
    let lines = find(&root, "#terminal-lines");
    let panel = find(&root, ".draggable-panel");

    let seen: Rc<RefCell<Vec<(BootPhase, bool, bool)>>> = Rc::new(RefCell::new(Vec::new()));
    let hook = {
        let seen = seen.clone();
        let lines = lines.clone();
        let panel = panel.clone();
        add_boot_phase_hook(Rc::new(move |phase: BootPhase| {
            let typed = lines.query_selector(".terminal-cursor").ok().flatten().is_some();
            let placed = !left_of(&panel).is_empty();
            seen.borrow_mut().push((phase, typed, placed));
        }))
    };

    let config = EffectsConfig {
        typewriter: TypewriterConfig {
            lines: vec!["> go".to_string()],
            char_delay_ms: 1,
            line_pause_ms: 1,
            hide_delay_ms: 60_000,
            remove_delay_ms: 0,
        },
        glitch: GlitchConfig {
            tick_ms: 2,
            steps_per_char: 3,
            stagger_ms: 0,
        },
        ..EffectsConfig::default()
    };
    let app = EffectsApp::new(config);
    app.clone().run().await;
    remove_boot_phase_hook(hook);

    assert_eq!(
        *seen.borrow(),
        vec![
            (BootPhase::Typing, false, false),
            (BootPhase::Effects, true, false),
            (BootPhase::Ready, true, true),
        ]
    );
    assert_eq!(boot_phase(), BootPhase::Ready);
    assert!(app.drag_controller().is_some());
    let texts = app.glitch_texts();
    assert_eq!(texts.len(), 1);
    wait_until("glitch started", || texts[0].runs() == 1).await;
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn resize_relays_out_all_panels_only_when_one_is_off_screen() {
    let root = mount(
        r#"<div class="draggable-panel" style="position:fixed;width:60px;height:40px"></div>
           <div class="draggable-panel" style="position:fixed;width:60px;height:40px"></div>"#,
    );
    let first = find(&root, ".draggable-panel:nth-child(1)");
    let second = find(&root, ".draggable-panel:nth-child(2)");
    let window = web_sys::window().expect("window available");
    let width = window.inner_width().unwrap().as_f64().unwrap();

    let app = EffectsApp::new(EffectsConfig::default());
    app.install_immediate();
    app.clone().run().await;
    let right_zone = format!("{}px", width - 60.0 - 100.0);
    assert_eq!(left_of(&first), "100px");
    assert_eq!(left_of(&second), right_zone);

    for (panel, left) in [(&first, "10px"), (&second, "20px")] {
        panel.style().set_property("left", left).unwrap();
        panel.style().set_property("top", "10px").unwrap();
    }
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(left_of(&first), "10px");
    assert_eq!(left_of(&second), "20px");

    second
        .style()
        .set_property("left", &format!("{}px", width + 10.0))
        .unwrap();
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(left_of(&first), "100px");
    assert_eq!(left_of(&second), right_zone);
    root.remove();
}

#[wasm_bindgen_test(async)]
async fn glitch_texts_stagger_then_restart_on_hover() {
    let root = mount(
        r#"<span class="scramble-text">ab</span><span class="scramble-text">cd</span>"#,
    );
    let effects = GlitchEffects::install(GlitchConfig {
        tick_ms: 2,
        steps_per_char: 3,
        stagger_ms: 400,
    });
    let texts = effects.texts().to_vec();
    assert_eq!(texts.len(), 2);

    wait_until("first run finished", || {
        texts[0].runs() == 1 && !texts[0].is_running()
    })
    .await;
    assert_eq!(texts[1].runs(), 0);
    wait_until("second run started", || texts[1].runs() == 1).await;

    let first = find(&root, ".scramble-text");
    first
        .dispatch_event(&Event::new("mouseenter").unwrap())
        .unwrap();
    assert_eq!(texts[0].runs(), 2);
    assert!(texts[0].is_running());
    wait_until("hover run finished", || !texts[0].is_running()).await;
    assert_eq!(first.text_content().unwrap_or_default(), "ab");
    root.remove();
}

#[wasm_bindgen_test]
fn smooth_scroll_prevents_jump_per_anchor_policy() {
    let root = mount(
        r##"<a id="to-target" href="#glassfx-scroll-target">go</a>
            <a id="to-nowhere" href="#glassfx-missing">lost</a>
            <div id="glassfx-scroll-target"></div>"##,
    );
    let to_target = find(&root, "#to-target");
    let to_nowhere = find(&root, "#to-nowhere");

    {
        let _listeners = install_smooth_scroll(ScrollConfig {
            anchor_policy: AnchorPolicy::PreventWhenTargetExists,
        });
        assert!(clicked_and_prevented(&to_target));
        assert!(!clicked_and_prevented(&to_nowhere));
    }
    {
        let _listeners = install_smooth_scroll(ScrollConfig {
            anchor_policy: AnchorPolicy::AlwaysPrevent,
        });
        assert!(clicked_and_prevented(&to_target));
        assert!(clicked_and_prevented(&to_nowhere));
    }
    root.remove();
}
