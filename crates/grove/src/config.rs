use crate::city::Rgb8;

// =============================================================================
// Roster
// =============================================================================

/// Upper bound on fronds; beyond this the crown becomes an unreadable blur.
pub const MAX_BRANCHES: usize = 48;

/// Seed used when neither the config file nor the environment supplies one.
pub const DEFAULT_LAYOUT_SEED: u64 = 42;

// =============================================================================
// Frond layout
// =============================================================================

pub const FROND_BASE_LENGTH: f32 = 4.2;
pub const FROND_LENGTH_WAVE: f32 = 0.4;
pub const FROND_LENGTH_JITTER: f32 = 0.18;
/// Full width of the random angle offset (radians), centred on zero.
pub const FROND_ANGLE_JITTER: f32 = 0.07;

/// Control point sits at this fraction of the frond length.
pub const FROND_MID_FRACTION: f32 = 0.7;
pub const FROND_MID_DROP: f32 = -0.7;
pub const FROND_MID_DROOP_JITTER: f32 = 0.15;
pub const FROND_END_DROP: f32 = -2.2;
pub const FROND_END_DROOP_JITTER: f32 = 0.18;

pub const FRUIT_PER_FROND: usize = 24;
/// Number of bunches along the frond (half-periods of the sine clustering).
pub const FRUIT_CLUSTER_FREQUENCY: f32 = 8.0;
pub const FRUIT_CLUSTER_AMPLITUDE: f32 = 0.15;
pub const FRUIT_VERTICAL_JITTER: f32 = 0.1;
pub const FRUIT_RADIUS: f32 = 0.06;

/// Leaflets come in mirrored pairs, one on each side of the stem.
pub const LEAFLET_PAIRS: usize = 44;
pub const LEAFLET_BASE_SIZE: f32 = 0.13;
pub const LEAFLET_SIZE_SWELL: f32 = 0.5;
pub const LEAFLET_SIZE_JITTER: f32 = 0.08;
pub const LEAFLET_HEIGHT: f32 = 0.1;
pub const LEAFLET_HEIGHT_JITTER: f32 = 0.02;
pub const LEAFLET_OFFSET: f32 = 0.14;
pub const LEAFLET_OFFSET_JITTER: f32 = 0.01;
pub const LEAFLET_YAW_JITTER: f32 = 0.04;
pub const LEAFLET_ROLL: f32 = std::f32::consts::PI / 5.0;
pub const LEAFLET_ROLL_JITTER: f32 = 0.1;
/// Leaflets closer to the trunk than this parameter use the dark green.
pub const LEAFLET_COLOR_SPLIT: f32 = 0.5;
pub const LEAFLET_INNER_GREEN: Rgb8 = Rgb8::new(0x2e, 0x7d, 0x32);
pub const LEAFLET_OUTER_GREEN: Rgb8 = Rgb8::new(0x6f, 0xcf, 0x97);

pub const LABEL_LIFT: f32 = 0.5;

pub const STEM_TUBE_SEGMENTS: usize = 50;
pub const STEM_TUBE_SIDES: usize = 8;
pub const STEM_TUBE_RADIUS: f32 = 0.02;
pub const STEM_COLOR: Rgb8 = Rgb8::new(0x8b, 0x45, 0x13);

// =============================================================================
// Trunk
// =============================================================================

pub const TRUNK_SEGMENTS: usize = 20;
pub const TRUNK_BASE_Y: f32 = -2.0;
pub const TRUNK_SEGMENT_HEIGHT: f32 = 0.48;
pub const TRUNK_BASE_RADIUS: f32 = 0.35;
pub const TRUNK_RADIUS_STEP: f32 = 0.011;
pub const TRUNK_SEGMENT_TAPER: f32 = 0.015;
pub const TRUNK_BEND: f32 = 0.10;
/// The bend follows a sine over this many half-turns of the trunk height.
pub const TRUNK_BEND_PERIODS: f32 = 1.2;
pub const TRUNK_RING_MINOR_RADIUS: f32 = 0.025;
pub const TRUNK_RING_GAP: f32 = 0.01;
pub const TRUNK_COLOR: Rgb8 = Rgb8::new(0x8b, 0x5c, 0x2a);
pub const TRUNK_RING_COLOR: Rgb8 = Rgb8::new(0x6b, 0x3f, 0x1d);
pub const CROWN_RADIUS: f32 = 0.2;

// =============================================================================
// Fill gradient
// =============================================================================

/// Stops are kept at least this far from either end of the gradient.
pub const GRADIENT_STOP_MARGIN: f32 = 0.01;
pub const GRADIENT_TEXTURE_SIZE: u32 = 32;
pub const GRADIENT_LIGHT_BROWN: Rgb8 = Rgb8::new(0xc6, 0x86, 0x42);
pub const GRADIENT_RICH_BROWN: Rgb8 = Rgb8::new(0x8b, 0x5c, 0x2a);
pub const GRADIENT_DARK_BROWN: Rgb8 = Rgb8::new(0x5c, 0x33, 0x17);

// =============================================================================
// Labels
// =============================================================================

/// Approximate advance of one glyph in label pixels.
pub const LABEL_GLYPH_WIDTH: f32 = 8.5;
pub const LABEL_PADDING: f32 = 10.0;
pub const LABEL_HEIGHT: f32 = 22.0;

// =============================================================================
// Motion
// =============================================================================

pub const TREE_SWAY_RATE: f32 = 0.1;
pub const TREE_SWAY_AMPLITUDE: f32 = 0.1;
pub const FROND_PITCH_RATE: f32 = 0.4;
pub const FROND_PITCH_AMPLITUDE: f32 = 0.05;
pub const FROND_ROLL_RATE: f32 = 0.3;
pub const FROND_ROLL_AMPLITUDE: f32 = 0.03;
pub const FROND_PHASE_STEP: f32 = 0.1;
pub const FRUIT_PITCH_RATE: f32 = 0.5;
pub const FRUIT_PITCH_AMPLITUDE: f32 = 0.1;
pub const FRUIT_ROLL_RATE: f32 = 0.3;
pub const FRUIT_ROLL_AMPLITUDE: f32 = 0.05;
