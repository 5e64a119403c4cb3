//! Poll loop
//!
//! Drives the controller one step per pass and yields to the executor in
//! between, so nothing in the loop ever sleeps for the sample interval.
//!
//! The Sample step is the one long step: the DHT11 transfer busy-waits
//! about 18 ms for the start pulse plus about 5 ms for the frame, holding
//! the executor for that time. Render and Idle return in microseconds.

use defmt::*;
use dewpoint_core::config::PollConfig;
use dewpoint_core::traits::{Clock, HumitureSensor, StatusDisplay};
use dewpoint_core::{Phase, PollCycleController};

/// Run the poll cycle forever
pub async fn run<S, D, C>(config: PollConfig, sensor: &mut S, display: &mut D, clock: &C) -> !
where
    S: HumitureSensor,
    D: StatusDisplay,
    C: Clock,
{
    let mut controller = PollCycleController::new(config);
    controller.start(sensor, display);
    info!(
        "Poll loop started: interval={}ms, mode={}",
        controller.config().sample_interval_ms,
        controller.renderer().mode()
    );

    loop {
        let previous = controller.state().phase();
        let phase = controller.tick(sensor, display, clock);

        if previous == Phase::Render {
            let state = controller.state();
            trace!(
                "Cycle done: valid={}, frames={}",
                state.is_valid(),
                state.frames_presented()
            );
        }

        if phase != previous {
            trace!("{} -> {}", previous, phase);
        }

        embassy_futures::yield_now().await;
    }
}
