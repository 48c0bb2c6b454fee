//! Fluent builder for constructing an [`Engine`].

use swiftex_core::{Clock, SystemClock};

use crate::config::EngineConfig;
use crate::engine::Engine;

/// Builder for [`Engine`]. `.config(..)` defaults to [`EngineConfig::seed_default`];
/// `.clock(..)` defaults to [`SystemClock`].
pub struct EngineBuilder<C: Clock = SystemClock> {
    config: Option<EngineConfig>,
    clock: C,
}

impl EngineBuilder<SystemClock> {
    pub fn new() -> Self {
        EngineBuilder { config: None, clock: SystemClock }
    }
}

impl Default for EngineBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EngineBuilder<C> {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Swap in a different clock source (e.g. `FixedClock` for tests).
    pub fn clock<C2: Clock>(self, clock: C2) -> EngineBuilder<C2> {
        EngineBuilder { config: self.config, clock }
    }

    pub fn build(self) -> Engine<C> {
        Engine::new(self.config.unwrap_or_default(), self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftex_core::FixedClock;

    #[test]
    fn defaults_to_seed_config_and_system_clock() {
        let engine = EngineBuilder::new().build();
        assert_eq!(engine.graph().city_name(swiftex_core::CityId(1)), Some("Lahore"));
    }

    #[test]
    fn clock_can_be_swapped() {
        let engine = EngineBuilder::new().clock(FixedClock::new(42)).build();
        assert_eq!(engine.clock().now_secs(), 42);
    }
}
