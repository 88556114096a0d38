use quiz_core::model::Dataset;
use storage::repository::{HandoffRepository, Storage};

use super::test_harness::{
    ViewKind, networking_dataset, setup_view_harness, setup_view_harness_with_storage,
};

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_renders_card_and_categories() {
    let mut harness = setup_view_harness(ViewKind::Study, networking_dataset());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Tap to show answer"), "missing hint in {html}");
    assert!(html.contains("All Categories"), "missing all-categories entry in {html}");
    assert!(html.contains("Routing protocols"), "missing category in {html}");
    assert!(html.contains("Spin Category Wheel"), "missing wheel link in {html}");
    assert!(!html.contains("Incorrect answers"), "missed panel should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_applies_pending_category() {
    let storage = Storage::in_memory();
    storage.handoff.put_pending("IP").await.expect("put pending");
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Study, networking_dataset(), storage);

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("What is the IPv4 loopback address?"),
        "missing IP question in {html}"
    );
    assert!(html.contains("1 / 1"), "missing progress in {html}");
    let slot = harness.storage.handoff.take_pending().await.expect("take pending");
    assert_eq!(slot, None);
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_smoke_reports_empty_pool() {
    let mut harness = setup_view_harness(ViewKind::Study, Dataset::default());

    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("No questions available for this category."),
        "missing empty message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn wheel_view_smoke_renders_sectors() {
    let mut harness = setup_view_harness(ViewKind::Wheel, networking_dataset());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Spin the Wheel"), "missing heading in {html}");
    assert!(html.contains("Routing pr..."), "missing truncated label in {html}");
    assert!(html.contains("#FF6384"), "missing first sector colour in {html}");
    assert!(html.contains("Back to Flashcards"), "missing back link in {html}");
    assert!(!html.contains("Selected Category"), "nothing selected yet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wheel_view_smoke_without_categories() {
    let mut harness = setup_view_harness(ViewKind::Wheel, Dataset::default());

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No categories available"), "missing empty state in {html}");
    assert!(html.contains("disabled"), "spin should be disabled in {html}");
}
