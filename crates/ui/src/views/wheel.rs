use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::wheel::{WheelLayout, responsive_surface_size};
use services::{SpinRequest, WheelFrame, WheelSelector};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{HUB_RADIUS, map_wheel_svg, rotation_transform};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

const VIEWPORT_SCRIPT: &str = r"
    dioxus.send(window.innerWidth);
    window.addEventListener('resize', () => dioxus.send(window.innerWidth));
";

#[component]
pub fn WheelView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let clock = ctx.clock();
    let handoff = ctx.handoff();
    let dataset = ctx.dataset();

    let mut selector = use_signal(move || WheelSelector::new(&dataset));
    let mut frame = use_signal(WheelFrame::default);
    let mut surface = use_signal(|| responsive_surface_size(DEFAULT_VIEWPORT_WIDTH));
    let mut error = use_signal(|| None::<ViewError>);
    let mut confirming = use_signal(|| false);

    use_future(move || async move {
        let mut viewport = eval(VIEWPORT_SCRIPT);
        while let Ok(width) = viewport.recv::<f64>().await {
            surface.set(responsive_surface_size(width));
        }
    });

    let on_spin = move |_: MouseEvent| {
        let request = selector.write().spin(clock.now());
        match request {
            Ok(SpinRequest::Started(_)) => {
                error.set(None);
                frame.set(selector.write().tick(clock.now()));
                spawn(async move {
                    loop {
                        tokio::time::sleep(FRAME_INTERVAL).await;
                        let next = selector.write().tick(clock.now());
                        let finished = !next.is_spinning;
                        frame.set(next);
                        if finished {
                            break;
                        }
                    }
                });
            }
            Ok(SpinRequest::AlreadySpinning) => {}
            Err(_) => error.set(Some(ViewError::NoCategories)),
        }
    };

    let on_confirm = move |_: MouseEvent| {
        if confirming() {
            return;
        }
        confirming.set(true);
        let handoff = handoff.clone();
        // No signal borrow may span the await.
        let snapshot = WheelSelector::clone(&selector.peek());
        spawn(async move {
            match snapshot.confirm(&handoff).await {
                Ok(_) => {
                    navigator.push(Route::Study {});
                }
                Err(services::ConfirmError::Wheel(_)) => {
                    error.set(Some(ViewError::NothingSelected));
                }
                Err(err) => {
                    tracing::warn!(error = %err, "wheel confirm failed");
                    error.set(Some(ViewError::HandoffFailed));
                }
            }
            confirming.set(false);
        });
    };

    let selector_guard = selector.read();
    let current = frame();
    let layout = WheelLayout::new(surface()).ok();
    let svg = selector_guard
        .geometry()
        .zip(layout)
        .map(|(geometry, layout)| map_wheel_svg(geometry, &layout));
    let has_categories = selector_guard.geometry().is_some();
    let spin_disabled = current.is_spinning || !has_categories;
    let no_categories = ViewError::NoCategories.message();

    rsx! {
        div { class: "page wheel-page",
            h2 { "Spin the Wheel" }
            if let Some(svg) = svg {
                div { class: "wheel-stage",
                    svg {
                        class: "wheel-canvas",
                        width: "{svg.size}",
                        height: "{svg.size}",
                        view_box: "0 0 {svg.size} {svg.size}",
                        g { transform: rotation_transform(current.rotation, svg.center),
                            for sector in svg.sectors.iter() {
                                g { key: "{sector.index}",
                                    path {
                                        d: "{sector.path}",
                                        fill: "{sector.color}",
                                        stroke: "#ffffff",
                                        stroke_width: "2",
                                        title { "{sector.title}" }
                                    }
                                    text {
                                        x: "{sector.label_x}",
                                        y: "{sector.label_y}",
                                        transform: "{sector.label_transform}",
                                        text_anchor: "end",
                                        fill: "#ffffff",
                                        font_size: "14",
                                        font_weight: "bold",
                                        "{sector.label}"
                                    }
                                }
                            }
                        }
                        circle {
                            cx: "{svg.center}",
                            cy: "{svg.center}",
                            r: "{HUB_RADIUS}",
                            fill: "#333333",
                        }
                        polygon {
                            class: "wheel-pointer",
                            points: "{svg.pointer_points}",
                            fill: "#ff0000",
                            stroke: "#ffffff",
                            stroke_width: "2",
                        }
                    }
                }
            } else if !has_categories {
                p { class: "wheel-empty", "{no_categories}" }
            }
            div { class: "wheel-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: spin_disabled,
                    onclick: on_spin,
                    if has_categories { "Spin" } else { "{no_categories}" }
                }
            }
            if let Some(category) = current.resolved.as_ref() {
                div { class: "wheel-result",
                    h3 { "Selected Category" }
                    p { class: "wheel-result__name", "{category}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: confirming(),
                        onclick: on_confirm,
                        "Study This Category"
                    }
                }
            }
            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }
            button {
                class: "btn btn-secondary wheel-back",
                r#type: "button",
                onclick: move |_| {
                    navigator.push(Route::Study {});
                },
                "Back to Flashcards"
            }
        }
    }
}
