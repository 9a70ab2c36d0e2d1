/// Scene tuning constants.
///
/// These express intended behavior (entity counts, easing factors, motion
/// amplitudes) and keep magic numbers out of the update loop.
// Viewport threshold below which the scene is built in its reduced form.
// Counts are chosen once at construction and are not revisited on resize.
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0;
pub const PARTICLES_MOBILE: usize = 100;
pub const PARTICLES_DESKTOP: usize = 300;
pub const SHAPES_MOBILE: usize = 3;
pub const SHAPES_DESKTOP: usize = 8;

// Scene clock: a fixed nominal step accumulated once per frame. Effective
// animation speed drifts with the true display refresh rate.
pub const FRAME_STEP_SEC: f32 = 0.016;

// Particle cloud sampling bounds (centered on the origin) and point sizes
pub const PARTICLE_SPREAD_XY: f32 = 100.0;
pub const PARTICLE_SPREAD_Z: f32 = 50.0;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;

// Three-color palette: #667eea, #764ba2, #4facfe
pub const PALETTE: [[f32; 3]; 3] = [
    [0.4, 0.494_117_65, 0.917_647_06],
    [0.462_745_1, 0.294_117_65, 0.635_294_12],
    [0.309_803_92, 0.674_509_8, 0.996_078_43],
];

// Particle batch rotation chases (pointer.y, pointer.x) scaled by the target
// scale, converging exponentially at the fixed per-frame factor
pub const PARTICLE_ROT_TARGET_SCALE: f32 = 0.1;
pub const PARTICLE_ROT_EASE: f32 = 0.05;

// Floating shape generation ranges
pub const SHAPE_SPREAD_X: f32 = 80.0;
pub const SHAPE_SPREAD_Y: f32 = 60.0;
pub const SHAPE_SPREAD_Z: f32 = 40.0;
pub const SHAPE_ROT_SPEED_SPAN: f32 = 0.02; // per-axis, radians per frame
pub const SPHERE_RADIUS_MIN: f32 = 0.5;
pub const SPHERE_RADIUS_SPAN: f32 = 2.0;
pub const CUBOID_EDGE_MIN: f32 = 1.0;
pub const CUBOID_EDGE_SPAN: f32 = 3.0;
pub const CONE_RADIUS_MIN: f32 = 0.5;
pub const CONE_RADIUS_SPAN: f32 = 2.0;
pub const CONE_HEIGHT_MIN: f32 = 2.0;
pub const CONE_HEIGHT_SPAN: f32 = 4.0;
pub const SPHERE_SEGMENTS: u32 = 16;
pub const CONE_SEGMENTS: u32 = 8;

// Shape tinting: random hue in a violet-blue band, fixed saturation/lightness
pub const SHAPE_HUE_MIN: f32 = 0.65;
pub const SHAPE_HUE_SPAN: f32 = 0.2;
pub const SHAPE_SATURATION: f32 = 0.7;
pub const SHAPE_LIGHTNESS: f32 = 0.6;
pub const SHAPE_OPACITY: f32 = 0.3;

// Floating motion: per-axis sine/cosine terms, phase-offset by shape index
pub const FLOAT_FREQ_X: f32 = 0.5;
pub const FLOAT_AMP_X: f32 = 3.0;
pub const FLOAT_FREQ_Y: f32 = 0.3;
pub const FLOAT_AMP_Y: f32 = 2.0;
pub const FLOAT_FREQ_Z: f32 = 0.4;
pub const FLOAT_AMP_Z: f32 = 1.0;
pub const FLOAT_Z_PHASE_PER_INDEX: f32 = 0.5;
pub const POINTER_SHAPE_OFFSET: f32 = 2.0;

// Camera
pub const CAMERA_Z: f32 = 30.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_TARGET_X_SCALE: f32 = 5.0;
pub const CAMERA_TARGET_Y_SCALE: f32 = 3.0;
pub const CAMERA_EASE: f32 = 0.02;

// Depth-cueing fog (shares the first palette color)
pub const FOG_COLOR: [f32; 3] = PALETTE[0];
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 100.0;

// Fixed lights
pub const AMBIENT_COLOR: [f32; 3] = PALETTE[2];
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const DIRECTIONAL_COLOR: [f32; 3] = PALETTE[0];
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [10.0, 10.0, 20.0];

// Animated point lights: antiphase circular motion in the XZ plane
pub const POINT_LIGHT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_RANGE: f32 = 50.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const PARTICLE_WORLD_SCALE: f32 = 0.1;
