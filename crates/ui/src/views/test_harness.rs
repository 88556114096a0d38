use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::{Dataset, Question};
use quiz_core::time::fixed_now;
use services::{AppServices, Clock};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{StudyView, WheelView};

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
}

impl UiApp for TestApp {
    fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Study,
    Wheel,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Study => rsx! { StudyView {} },
        ViewKind::Wheel => rsx! { WheelView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn networking_dataset() -> Dataset {
    Dataset::new(vec![
        Question::new("OSI", "Which layer routes packets?", "Network layer").unwrap(),
        Question::new("OSI", "Which layer segments data?", "Transport layer").unwrap(),
        Question::new("IP", "What is the IPv4 loopback address?", "127.0.0.1").unwrap(),
        Question::new("Routing protocols", "Which protocol uses hop count?", "RIP").unwrap(),
    ])
}

pub fn setup_view_harness(view: ViewKind, dataset: Dataset) -> ViewHarness {
    setup_view_harness_with_storage(view, dataset, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    dataset: Dataset,
    storage: Storage,
) -> ViewHarness {
    let services = Arc::new(AppServices::new(
        Clock::fixed(fixed_now()),
        Arc::new(dataset),
        &storage,
    ));
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
