use orrery::{FrameBuffers, FrameGate, OrbitResult, Simulation, SystemConfig};

/// Wires the orbit simulation to the browser's animation callback.
///
/// The bridge keeps one runner in a `thread_local!` and exposes free
/// functions via `#[wasm_bindgen]`.
pub struct OrreryRunner {
    sim: Simulation,
    gate: FrameGate,
    buffers: FrameBuffers,
}

impl OrreryRunner {
    pub fn new(config: &SystemConfig) -> OrbitResult<Self> {
        let sim = Simulation::from_config(config)?;
        Ok(Self::from_simulation(sim, config.frame_rate))
    }

    /// Build from an optional JSON config. Unparseable or invalid configs
    /// fall back to the default catalog with a warning.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let parsed = json.map(|j| SystemConfig::from_json(j).and_then(|cfg| Self::new(&cfg)));
        match parsed {
            Some(Ok(runner)) => runner,
            Some(Err(e)) => {
                log::warn!("orrery: config rejected ({e}), using default catalog");
                Self::default_catalog()
            }
            None => Self::default_catalog(),
        }
    }

    fn default_catalog() -> Self {
        let config = SystemConfig::default();
        let (sim, _) = Simulation::from_config_lenient(&config);
        Self::from_simulation(sim, config.frame_rate)
    }

    fn from_simulation(sim: Simulation, frame_rate: f64) -> Self {
        let buffers = FrameBuffers::new(&sim);
        Self {
            sim,
            gate: FrameGate::new(frame_rate),
            buffers,
        }
    }

    /// Handle one animation frame. Returns true when a tick ran.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.gate.should_tick(timestamp_ms) {
            return false;
        }
        self.sim.tick();
        self.buffers.update(&self.sim);
        true
    }

    /// Apply a new speed multiplier. Invalid values are ignored and the
    /// current speed is returned unchanged.
    pub fn set_speed(&mut self, speed: f64) -> f64 {
        match self.sim.set_speed_multiplier(speed) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("orrery: {e}");
                self.sim.speed_multiplier()
            }
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.sim.toggle_pause()
    }

    /// Forget frame timing, e.g. when the page becomes visible again.
    pub fn reset_timing(&mut self) {
        self.gate.reset();
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Number of orbiting bodies (excludes the star).
    pub fn body_count(&self) -> u32 {
        self.sim.len() as u32
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffers.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffers.instance_count()
    }

    pub fn trace_vertices_ptr(&self) -> *const f32 {
        self.buffers.trace_vertices_ptr()
    }

    pub fn trace_vertex_count(&self) -> u32 {
        self.buffers.trace_vertex_count()
    }

    pub fn trace_offset(&self, body: usize) -> Option<u32> {
        self.buffers.trace_offset(body)
    }

    pub fn trace_len(&self, body: usize) -> Option<u32> {
        self.buffers.trace_len(body)
    }

    pub fn orbit_colors(&self) -> &[u32] {
        self.buffers.orbit_colors()
    }

    pub fn body_names(&self) -> impl Iterator<Item = &str> {
        self.sim.bodies().iter().map(|b| b.name())
    }
}
