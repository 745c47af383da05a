use std::{sync::Arc, time::Duration};
use tokio::time::sleep;

use egg_timer::{
    state::{AlertSignal, AppState, Phase, TimerSnapshot},
    tasks::countdown_ticker_task,
};

fn shared_state() -> Arc<AppState> {
    Arc::new(AppState::new(0, "127.0.0.1".to_string(), Duration::from_secs(1)))
}

fn remaining(state: &AppState) -> u32 {
    state.get_timer_state().unwrap().remaining_seconds
}

#[tokio::test(start_paused = true)]
async fn first_tick_lands_one_period_after_start() {
    let state = shared_state();
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));

    state.select_preset("hard").unwrap();
    state.start().unwrap();

    sleep(Duration::from_millis(999)).await;
    assert_eq!(remaining(&state), 600);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(remaining(&state), 599);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn medium_run_completes_and_stops() {
    let state = shared_state();
    let mut alerts = state.subscribe_alerts();
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));

    state.select_preset("medium").unwrap();
    state.start().unwrap();

    sleep(Duration::from_millis(480_500)).await;
    let snapshot = state.get_timer_state().unwrap();
    assert_eq!(snapshot.remaining_seconds, 0);
    assert!(!snapshot.is_running);
    assert_eq!(snapshot.phase, Phase::Running);
    assert_eq!(snapshot.display, "00:00");
    assert_eq!(snapshot.progress_fraction, 1.0);

    let mut received = Vec::new();
    while let Ok(alert) = alerts.try_recv() {
        received.push(alert);
    }
    assert_eq!(
        received,
        vec![
            AlertSignal::Interval { remaining_seconds: 360 },
            AlertSignal::Interval { remaining_seconds: 240 },
            AlertSignal::Interval { remaining_seconds: 120 },
            AlertSignal::Completion,
        ]
    );

    // Nothing left to tick
    sleep(Duration::from_secs(30)).await;
    assert_eq!(remaining(&state), 0);
    assert!(alerts.try_recv().is_err());

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn pause_holds_the_countdown() {
    let state = shared_state();
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));

    state.select_preset("soft").unwrap();
    state.start().unwrap();

    sleep(Duration::from_millis(10_500)).await;
    assert_eq!(remaining(&state), 350);

    state.pause_or_resume().unwrap();
    sleep(Duration::from_secs(100)).await;
    assert_eq!(remaining(&state), 350);

    state.pause_or_resume().unwrap();
    sleep(Duration::from_millis(5_200)).await;
    assert_eq!(remaining(&state), 345);

    ticker.abort();
}

#[tokio::test(start_paused = true)]
async fn reset_cancels_pending_ticks() {
    let state = shared_state();
    let ticker = tokio::spawn(countdown_ticker_task(Arc::clone(&state)));

    state.select_preset("hard").unwrap();
    state.start().unwrap();
    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(remaining(&state), 597);

    state.reset().unwrap();
    sleep(Duration::from_secs(10)).await;
    assert_eq!(state.get_timer_state().unwrap(), TimerSnapshot::default());
    assert!(!state.run_state().running);

    // A new run after reset starts from the full duration
    state.select_preset("soft").unwrap();
    state.start().unwrap();
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(remaining(&state), 358);

    ticker.abort();
}
