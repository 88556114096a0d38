use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::Judgement;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    CategoryItemVm, EMPTY_POOL_MESSAGE, MissedItemVm, REVEAL_HINT, StudyCardVm, StudyIntent,
    StudyVm, start_study,
};

#[component]
pub fn StudyView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let services = ctx.services();

    let vm = use_signal(|| None::<StudyVm>);
    let mut nav_open = use_signal(|| false);

    let resource = use_resource(move || {
        let services = services.clone();
        async move {
            let mut vm = vm;
            vm.set(Some(start_study(&services).await));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: StudyIntent| {
        if matches!(intent, StudyIntent::SelectCategory(_)) {
            nav_open.set(false);
        }
        let mut vm = vm;
        let mut guard = vm.write();
        if let Some(vm) = guard.as_mut() {
            if let Some(outcome) = vm.apply(intent) {
                tracing::debug!(
                    streak = outcome.streak,
                    newly_missed = outcome.newly_missed,
                    reshuffled = outcome.reshuffled,
                    "card judged"
                );
            }
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        if evt.data.code() == Code::Space {
            evt.prevent_default();
            dispatch_intent.call(StudyIntent::ToggleReveal);
            return;
        }
        if let Key::Character(value) = evt.data.key() {
            match value.as_str() {
                "1" => dispatch_intent.call(StudyIntent::Judge(Judgement::Incorrect)),
                "2" => dispatch_intent.call(StudyIntent::Judge(Judgement::Correct)),
                "s" | "S" => dispatch_intent.call(StudyIntent::Reshuffle),
                _ => {}
            }
        }
    };

    let vm_guard = vm.read();
    let vm_ref = vm_guard.as_ref();
    let score_label = vm_ref.map_or_else(|| "Score: 0".to_string(), StudyVm::score_label);
    let active_label = vm_ref.map(StudyVm::active_label).unwrap_or_default();
    let progress_label = vm_ref.and_then(StudyVm::progress_label);
    let categories = vm_ref.map(StudyVm::category_items).unwrap_or_default();
    let card = vm_ref.and_then(StudyVm::card);
    let missed = vm_ref.map(StudyVm::missed_items).unwrap_or_default();
    let missed_label = vm_ref.map(StudyVm::missed_header_label).unwrap_or_default();
    let missed_open = vm_ref.is_some_and(StudyVm::is_missed_panel_open);
    let sidebar_class = if nav_open() {
        "study-sidebar study-sidebar--open"
    } else {
        "study-sidebar"
    };

    rsx! {
        div { class: "page study-page", id: "study-root", tabindex: "0", onkeydown: on_key,
            header { class: "study-header",
                button {
                    class: "btn btn-secondary study-nav-toggle",
                    r#type: "button",
                    onclick: move |_| nav_open.toggle(),
                    if nav_open() { "Close" } else { "Categories" }
                }
                h2 { class: "study-title", "{active_label}" }
                if let Some(progress) = progress_label {
                    span { class: "study-progress", "{progress}" }
                }
                span { class: "study-score", "{score_label}" }
            }
            div { class: "study-body",
                nav { class: "{sidebar_class}",
                    ul { class: "category-list",
                        for item in categories {
                            CategoryButton {
                                key: "{item.label}",
                                item,
                                on_intent: dispatch_intent,
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary wheel-link",
                        r#type: "button",
                        onclick: move |_| {
                            navigator.push(Route::Wheel {});
                        },
                        "Spin Category Wheel"
                    }
                }
                section { class: "study-main",
                    match state {
                        ViewState::Idle => rsx! {
                            p { "Idle" }
                        },
                        ViewState::Loading => rsx! {
                            p { "Loading..." }
                        },
                        ViewState::Ready(()) => rsx! {
                            if let Some(card) = card {
                                Flashcard { card, on_intent: dispatch_intent }
                            } else {
                                p { class: "study-empty", "{EMPTY_POOL_MESSAGE}" }
                            }
                        },
                        ViewState::Error(err) => rsx! {
                            p { class: "error", "{err.message()}" }
                        },
                    }
                    if !missed.is_empty() {
                        MissedPanel {
                            items: missed,
                            label: missed_label,
                            open: missed_open,
                            on_intent: dispatch_intent,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryButton(item: CategoryItemVm, on_intent: EventHandler<StudyIntent>) -> Element {
    let class = if item.selected {
        "category-item category-item--active"
    } else {
        "category-item"
    };
    let filter = item.filter.clone();

    rsx! {
        li {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_intent.call(StudyIntent::SelectCategory(filter.clone())),
                "{item.label}"
            }
        }
    }
}

#[component]
fn Flashcard(card: StudyCardVm, on_intent: EventHandler<StudyIntent>) -> Element {
    let card_class = if card.answer.is_some() {
        "flashcard flashcard--revealed"
    } else {
        "flashcard"
    };

    rsx! {
        div { class: "flashcard-stack",
            div {
                class: "{card_class}",
                onclick: move |_| on_intent.call(StudyIntent::ToggleReveal),
                div { class: "flashcard-category", "{card.category}" }
                div { class: "flashcard-prompt", "{card.prompt}" }
                if let Some(answer) = card.answer.as_ref() {
                    div { class: "flashcard-answer", "{answer}" }
                } else {
                    div { class: "flashcard-hint", "{REVEAL_HINT}" }
                }
            }
            div { class: "study-actions",
                button {
                    class: "btn btn-incorrect",
                    r#type: "button",
                    title: "Incorrect (1)",
                    onclick: move |_| on_intent.call(StudyIntent::Judge(Judgement::Incorrect)),
                    "Incorrect"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    title: "Shuffle (S)",
                    onclick: move |_| on_intent.call(StudyIntent::Reshuffle),
                    "Shuffle"
                }
                button {
                    class: "btn btn-correct",
                    r#type: "button",
                    title: "Correct (2)",
                    onclick: move |_| on_intent.call(StudyIntent::Judge(Judgement::Correct)),
                    "Correct"
                }
            }
        }
    }
}

#[component]
fn MissedPanel(
    items: Vec<MissedItemVm>,
    label: String,
    open: bool,
    on_intent: EventHandler<StudyIntent>,
) -> Element {
    let class = if open {
        "missed-panel missed-panel--open"
    } else {
        "missed-panel"
    };

    rsx! {
        aside { class: "{class}",
            div { class: "missed-panel__header",
                button {
                    class: "missed-panel__toggle",
                    r#type: "button",
                    onclick: move |_| on_intent.call(StudyIntent::ToggleMissedPanel),
                    "{label}"
                }
                button {
                    class: "btn btn-secondary missed-panel__clear",
                    r#type: "button",
                    title: "Clear all incorrect questions",
                    onclick: move |_| on_intent.call(StudyIntent::ClearMissed),
                    "Clear"
                }
            }
            if open {
                ul { class: "missed-panel__list",
                    for (index, item) in items.iter().enumerate() {
                        li { key: "{index}", class: "missed-item",
                            div { class: "missed-item__prompt", "{item.prompt}" }
                            div { class: "missed-item__answer", "{item.answer}" }
                        }
                    }
                }
            }
        }
    }
}
