//! Helpers shared by the page tests.

use std::time::Duration;

use egui_kittest::Harness;
use pyme_ui::state::State;

/// Delay between frames while waiting on the mock server.
pub const FRAME_WAIT: Duration = Duration::from_millis(20);

/// Steps the harness until `done` holds, giving spawned requests time to finish.
///
/// Pages show a spinner while loading, which keeps requesting repaints, so this
/// uses `step` and only calls `run` once `done` holds.
pub async fn step_until(harness: &mut Harness<'_, State>, done: impl Fn(&State) -> bool) -> bool {
    for _ in 0..50 {
        tokio::time::sleep(FRAME_WAIT).await;
        harness.step();
        if done(harness.state()) {
            harness.run();
            return true;
        }
    }
    false
}

/// Waits `delay`, then steps a few frames so late responses get drained.
#[allow(unused)]
pub async fn settle(harness: &mut Harness<'_, State>, delay: Duration) {
    tokio::time::sleep(delay).await;
    for _ in 0..5 {
        harness.step();
    }
}
