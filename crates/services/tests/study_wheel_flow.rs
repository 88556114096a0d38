use std::f64::consts::TAU;
use std::sync::Arc;

use chrono::Duration;
use quiz_core::model::{CategoryFilter, CategoryName, Dataset, Question};
use quiz_core::time::fixed_now;
use quiz_core::wheel::SpinPlan;
use services::{AppServices, Clock, Judgement};

fn dataset() -> Arc<Dataset> {
    let rows = [
        ("OSI", "How many layers does the OSI model have?", "Seven"),
        ("OSI", "Which layer routes packets?", "Network"),
        ("IPv4", "How long is an IPv4 address?", "32 bits"),
        ("Routing", "What does OSPF stand for?", "Open Shortest Path First"),
    ];
    Arc::new(Dataset::new(
        rows.iter()
            .map(|(c, p, a)| Question::new(*c, *p, *a).unwrap())
            .collect(),
    ))
}

#[tokio::test]
async fn wheel_pick_drives_next_study_session() {
    let services = AppServices::in_memory(Clock::fixed(fixed_now()), dataset());

    let mut wheel = services.wheel();
    let start = fixed_now();
    // A quarter turn clockwise leaves wheel angle 3/4 turn at the pointer,
    // which is inside the third of three sectors.
    wheel
        .spin_with(SpinPlan::new(start, TAU * 4.0 + TAU / 4.0, Duration::milliseconds(3_500)))
        .unwrap();
    let frame = wheel.tick(start + Duration::milliseconds(3_500));
    let picked = frame.resolved.expect("wheel resolved");
    assert_eq!(picked.as_str(), "Routing");

    wheel.confirm(&services.handoff()).await.unwrap();

    let mut session = services.start_study().await;
    assert_eq!(
        session.active_category(),
        &CategoryFilter::Filtered(CategoryName::new("Routing").unwrap())
    );
    assert_eq!(session.pool().len(), 1);
    session.judge(Judgement::Correct);
    assert_eq!(session.streak(), 1);

    let next = services.start_study().await;
    assert_eq!(next.active_category(), &CategoryFilter::Unfiltered);
    assert_eq!(next.pool().len(), 4);
}

#[tokio::test]
async fn sqlite_backed_handoff_survives_between_sessions() {
    let services = AppServices::new_sqlite(
        "sqlite:file:memdb_services_flow?mode=memory&cache=shared",
        Clock::fixed(fixed_now()),
        dataset(),
    )
    .await
    .expect("services");

    services
        .handoff()
        .hand_off(&CategoryName::new("IPv4").unwrap())
        .await
        .unwrap();

    let session = services.start_study().await;
    assert_eq!(session.pool().len(), 1);
    assert_eq!(
        session.current_question().unwrap().answer(),
        "32 bits"
    );
}
