use glam::{Mat4, Vec3};

/// Movement request resolved against the camera's current orientation.
///
/// Scene code maps raw key codes to these, keeping the camera free of any
/// windowing-library types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

// Default camera options
const YAW: f32 = -90.0;
const PITCH: f32 = 0.0;
const SPEED: f32 = 2.5;
const SENSITIVITY: f32 = 0.1;
const ZOOM: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// First-person fly camera.
///
/// Orientation lives in `yaw`/`pitch` (degrees); the front/right/up basis is
/// a cached derivation of those angles, rebuilt after every angle mutation.
/// The angles stay private so nothing can move them without refreshing the
/// basis.
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    // last-seen cursor position, needed to turn absolute coordinates into
    // per-call deltas
    last_cursor: (f32, f32),
    pub speed: f32,
    pub boost: bool,
    pub sensitivity: f32,
    zoom: f32,
}

impl Camera {
    /// Camera at `position` looking down negative Z, with the cursor assumed
    /// to start at the center of a `width` x `height` viewport.
    pub fn new(width: u32, height: u32, position: Vec3) -> Self {
        Self::with_orientation(width, height, position, Vec3::Y, YAW, PITCH)
    }

    pub fn with_orientation(
        width: u32,
        height: u32,
        position: Vec3,
        world_up: Vec3,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            last_cursor: (width as f32 / 2.0, height as f32 / 2.0),
            speed: SPEED,
            boost: false,
            sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection whose field of view follows the scroll zoom.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect, 0.1, 100.0)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Move the camera for one frame's worth of a held key.
    ///
    /// Forward/backward travel along the horizontal projection of the front
    /// vector (yaw only), so looking up while walking does not lift the
    /// camera off the ground plane. Up/down travel along world Y regardless
    /// of orientation. `dt` is the frame duration in seconds and the only
    /// place frame timing enters the camera.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let yaw = self.yaw.to_radians();
        let forward = Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize();
        let velocity = (if self.boost { 2.0 } else { 1.0 }) * self.speed * dt;
        match direction {
            CameraMovement::Forward => self.position += forward * velocity,
            CameraMovement::Backward => self.position -= forward * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += Vec3::Y * velocity,
            CameraMovement::Down => self.position -= Vec3::Y * velocity,
        }
    }

    /// Turn the camera toward an absolute cursor position.
    ///
    /// The offset against the last-seen position is scaled by sensitivity and
    /// added to yaw/pitch; vertical motion is inverted so moving the mouse up
    /// looks up. The first call after a discontinuous cursor jump sees a
    /// stale last position and produces one oversized delta.
    pub fn process_mouse(&mut self, x: f32, y: f32, constrain_pitch: bool) {
        let x_offset = (x - self.last_cursor.0) * self.sensitivity;
        let y_offset = (self.last_cursor.1 - y) * self.sensitivity;
        self.last_cursor = (x, y);

        self.yaw += x_offset;
        self.pitch += y_offset;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrow or widen the field of view from a scroll wheel step.
    pub fn process_scroll(&mut self, delta: f32) {
        self.zoom = (self.zoom - delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Rebuild front/right/up from the current yaw/pitch.
    ///
    /// Each cross product is re-normalized: the intermediate vectors shrink
    /// toward zero length as the look direction approaches world up.
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
