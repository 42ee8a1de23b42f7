// src/views/path_square.rs
//
// The PathSquareInstance is the main updating entity in the visualisation.
//
// It owns the color-node chain and the tick driver, feeds driver ticks
// into the chain, and is the only thing that draws either. One tap
// animates exactly one segment: the driver stops on settlement.

use log::debug;
use nannou::prelude::*;

use crate::{
    animation::FrameDriver,
    config::Config,
    draw::{draw_path_square, DrawParams},
    models::Palette,
    views::square_chain::{Settlement, SquareChain},
};

pub struct PathSquareInstance {
    chain: SquareChain,
    driver: FrameDriver,
    palette: Palette,
    // per-tick progress step
    step: f32,
    parts: usize,
    stroke_factor: f32,
    size_factor: f32,
}

impl PathSquareInstance {
    pub fn new(config: &Config, palette: Palette) -> Self {
        Self {
            chain: SquareChain::new(palette.len()),
            driver: FrameDriver::new(config.animation.tick_interval),
            palette,
            step: config.animation.step(),
            parts: config.animation.parts,
            stroke_factor: config.style.stroke_factor,
            size_factor: config.style.size_factor,
        }
    }

    /// A tap arms the current node and starts the driver. Taps during an
    /// in-flight segment are no-ops.
    pub fn handle_tap(&mut self) {
        if self.chain.start() {
            self.driver.activate();
            debug!("tap: node {} armed", self.chain.current_index());
        }
    }

    /// Drive the animation from the host's update callback.
    pub fn update(&mut self, dt: f32) -> Option<Settlement> {
        if !self.driver.tick(dt) {
            return None;
        }
        let settlement = self.chain.update(self.step)?;
        debug!(
            "settled: node {} checkpoint {} flipped {}",
            settlement.index, settlement.checkpoint, settlement.flipped
        );
        self.driver.deactivate();
        Some(settlement)
    }

    /// Draw the current node's shape at its current scale.
    pub fn draw(&self, draw: &Draw, window: Rect) {
        let short_edge = window.w().min(window.h());
        let node = self.chain.current();
        let params = DrawParams {
            color: self.palette.color(node.index),
            stroke_weight: short_edge / self.stroke_factor,
        };
        draw_path_square(
            draw,
            node.scale.progress(),
            short_edge / self.size_factor,
            self.parts,
            &params,
        );
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    pub fn current_index(&self) -> usize {
        self.chain.current_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Palette;

    fn test_instance() -> PathSquareInstance {
        let config: Config = toml::from_str(
            r##"
                [window]
                width = 800
                height = 800

                [style]
                stroke_factor = 90.0
                size_factor = 5.6

                [palette]
                colors = ["#f44336", "#9C27B0", "#2196F3", "#BF360C", "#01579B"]
                background = "#BDBDBD"

                [animation]
                parts = 3
                scale_step = 0.02
                tick_interval = 0.02
            "##,
        )
        .unwrap();
        let palette = Palette::from_config(&config.palette).unwrap();
        PathSquareInstance::new(&config, palette)
    }

    // run update at a steady tick-length frame time until settlement
    fn run_to_settlement(instance: &mut PathSquareInstance) -> Settlement {
        for _ in 0..10_000 {
            if let Some(settlement) = instance.update(0.02) {
                return settlement;
            }
        }
        panic!("animation never settled");
    }

    #[test]
    fn idle_instance_ignores_updates() {
        let mut instance = test_instance();
        assert!(!instance.is_animating());
        for _ in 0..100 {
            assert_eq!(instance.update(0.02), None);
        }
        assert_eq!(instance.current_index(), 0);
    }

    #[test]
    fn tap_animates_exactly_one_segment() {
        let mut instance = test_instance();
        instance.handle_tap();
        assert!(instance.is_animating());

        let settlement = run_to_settlement(&mut instance);
        assert_eq!(settlement.index, 1);
        assert_eq!(settlement.checkpoint, 1.0);
        assert!(!settlement.flipped);

        // driver stopped itself; nothing moves without another tap
        assert!(!instance.is_animating());
        for _ in 0..100 {
            assert_eq!(instance.update(0.02), None);
        }
        assert_eq!(instance.current_index(), 1);
    }

    #[test]
    fn re_tap_during_flight_is_a_no_op() {
        let mut instance = test_instance();
        instance.handle_tap();
        for _ in 0..5 {
            assert_eq!(instance.update(0.02), None);
        }
        instance.handle_tap();
        let settlement = run_to_settlement(&mut instance);
        assert_eq!(settlement.index, 1);
    }

    #[test]
    fn five_taps_reach_the_far_end_and_flip() {
        let mut instance = test_instance();
        for expected in [1, 2, 3, 4] {
            instance.handle_tap();
            let settlement = run_to_settlement(&mut instance);
            assert_eq!(settlement.index, expected);
        }
        instance.handle_tap();
        let settlement = run_to_settlement(&mut instance);
        assert_eq!(settlement.index, 4);
        assert!(settlement.flipped);
    }
}
