// src/animation/driver.rs
//
// The tick gate for the widget animation.
//
// A throttled redraw loop: while active, one animation step every fixed
// delay. Implemented as a dt accumulator fed by the host's update
// callback, so nothing ever blocks the event loop.

#[derive(Debug)]
pub struct FrameDriver {
    active: bool,
    frame_timer: f32,
    tick_interval: f32,
}

impl FrameDriver {
    pub fn new(tick_interval: f32) -> Self {
        Self {
            active: false,
            frame_timer: 0.0,
            tick_interval,
        }
    }

    /// Accumulate dt; true when the next animation step is due.
    /// A stalled frame yields a single tick, not a burst.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.frame_timer += dt;
        if self.frame_timer < self.tick_interval {
            return false;
        }
        self.frame_timer %= self.tick_interval;
        true
    }

    pub fn activate(&mut self) {
        if !self.active {
            self.active = true;
            self.frame_timer = 0.0;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.frame_timer = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_driver_never_ticks() {
        let mut driver = FrameDriver::new(0.02);
        assert!(!driver.tick(1.0));
        assert!(!driver.tick(1.0));
    }

    #[test]
    fn ticks_once_per_interval() {
        let mut driver = FrameDriver::new(0.02);
        driver.activate();
        assert!(!driver.tick(0.01));
        assert!(driver.tick(0.01));
        assert!(!driver.tick(0.01));
        assert!(driver.tick(0.01));
    }

    #[test]
    fn stall_collapses_to_one_tick() {
        let mut driver = FrameDriver::new(0.02);
        driver.activate();
        // a 200ms hitch still produces a single step
        assert!(driver.tick(0.2));
        assert!(!driver.tick(0.0));
    }

    #[test]
    fn deactivate_resets_the_accumulator() {
        let mut driver = FrameDriver::new(0.02);
        driver.activate();
        assert!(!driver.tick(0.019));
        driver.deactivate();
        driver.activate();
        assert!(!driver.tick(0.019));
        assert!(driver.tick(0.001));
    }

    #[test]
    fn activate_is_idempotent() {
        let mut driver = FrameDriver::new(0.02);
        driver.activate();
        assert!(!driver.tick(0.019));
        // re-activating mid-interval must not reset the timer
        driver.activate();
        assert!(driver.tick(0.001));
    }
}
