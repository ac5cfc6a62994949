//! Wheel Controller
//!
//! Bridges the selector's capability traits to GPUI: spin requests travel
//! over a channel to the page's animation loop, and the viewport is read from
//! the window.

use gpui::Window;
use smol::channel::{Receiver, Sender};

use crate::state::capabilities::{AnimationDriver, SpinRequest, Viewport, ViewportProvider};

/// Animation driver that hands spin requests to the page's spin loop
#[derive(Debug, Clone)]
pub struct ChannelSpinDriver {
    tx: Sender<SpinRequest>,
}

impl AnimationDriver for ChannelSpinDriver {
    fn start_spin(&mut self, request: SpinRequest) {
        if let Err(e) = self.tx.try_send(request) {
            // Without a running loop nothing will complete the spin.
            tracing::error!(error = %e, "Spin loop is gone, wheel will not stop");
        }
    }
}

/// Create a driver and the receiving end for the spin loop
pub fn spin_channel() -> (ChannelSpinDriver, Receiver<SpinRequest>) {
    let (tx, rx) = smol::channel::unbounded();
    (ChannelSpinDriver { tx }, rx)
}

/// Viewport of a GPUI window
pub struct WindowViewport<'a>(pub &'a Window);

impl ViewportProvider for WindowViewport<'_> {
    fn current_size(&self) -> Viewport {
        let size = self.0.viewport_size();
        Viewport::new(f32::from(size.width), f32::from(size.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_forwards_requests_in_order() {
        let (mut driver, rx) = spin_channel();
        driver.start_spin(SpinRequest { index: 2, pool_size: 4 });
        driver.start_spin(SpinRequest { index: 0, pool_size: 3 });

        assert_eq!(rx.try_recv(), Ok(SpinRequest { index: 2, pool_size: 4 }));
        assert_eq!(rx.try_recv(), Ok(SpinRequest { index: 0, pool_size: 3 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_driver_survives_closed_loop() {
        let (mut driver, rx) = spin_channel();
        drop(rx);
        driver.start_spin(SpinRequest { index: 1, pool_size: 2 });
    }
}
