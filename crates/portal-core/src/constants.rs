// Shared tuning constants for the orb backdrop and its controls.

// Population
pub const INITIAL_ORBS: usize = 12; // orbs created at startup
pub const MIN_ORBS: usize = 2; // remove_orb floor
pub const EXTRA_ORBS: usize = 2; // how far add_orb may grow past the startup count

// Appearance
pub const BASE_OPACITY: f32 = 0.3; // opacity of a freshly (re)created orb at full life
pub const SCALE_BASE: f32 = 0.8; // scale at zero life
pub const SCALE_SPAN: f32 = 0.4; // extra scale gained at full life
pub const FRESH_SCALE: f32 = 1.0; // scale published on the tick an orb is recreated
pub const ORB_BLUR_PX: f32 = 80.0;

// Life
pub const DEFAULT_MAX_LIFE: f32 = 1.0;
pub const MIN_MAX_LIFE: f32 = 0.05; // floor for scale_life; orbs always live a few dozen ticks
pub const DISSIPATE_MIN: f32 = 0.001; // life lost per tick, lower bound
pub const DISSIPATE_SPAN: f32 = 0.002; // width of the dissipation range

// Pointer attraction
pub const POINTER_RADIUS: f32 = 200.0; // px
pub const POINTER_STRENGTH: f32 = 0.01;
pub const POINTER_INTERVAL_MS: i32 = 50;

// Keyboard speed steps
pub const SPEED_UP_FACTOR: f32 = 1.2;
pub const SLOW_DOWN_FACTOR: f32 = 0.8;

// Palette: (color, size px, speed scale)
pub const ORB_PALETTE: [(&str, f32, f32); 4] = [
    ("#ef4444", 300.0, 0.5), // red, small, quick
    ("#3b82f6", 400.0, 0.3), // blue
    ("#ef4444", 350.0, 0.4), // red
    ("#3b82f6", 450.0, 0.2), // blue, large, slow
];
