use cgmath::{Deg, Matrix3, Matrix4, Vector3};

/// Local transform of a scene node
///
/// Rotation is stored as Euler angles in degrees and applied Z first, then X,
/// then Y, so a pure yaw only touches the Y component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub euler_degrees: Vector3<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            euler_degrees: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Builder pattern: Set local position
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vector3::new(x, y, z);
        self
    }

    /// Builder pattern: Set local Euler angles in degrees
    pub fn with_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.euler_degrees = Vector3::new(x, y, z);
        self
    }

    /// Builder pattern: Set non-uniform local scale
    pub fn with_scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = Vector3::new(x, y, z);
        self
    }

    /// Local yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.euler_degrees.y
    }

    /// Rotation-only matrix (Y * X * Z)
    pub fn rotation(&self) -> Matrix3<f32> {
        Matrix3::from_angle_y(Deg(self.euler_degrees.y))
            * Matrix3::from_angle_x(Deg(self.euler_degrees.x))
            * Matrix3::from_angle_z(Deg(self.euler_degrees.z))
    }

    /// Complete local matrix. Order matters: T * R * S
    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * Matrix4::from(self.rotation()) * s
    }

    /// Euler angles in degrees that reproduce a pure rotation matrix
    ///
    /// Inverse of [`Transform::rotation`]. At ±90° pitch the yaw absorbs the roll
    /// and Z comes back as zero.
    pub fn euler_from_rotation(m: Matrix3<f32>) -> Vector3<f32> {
        let sin_x = (-m.z.y).clamp(-1.0, 1.0);
        let x = sin_x.asin();
        let (y, z) = if sin_x.abs() < 0.9999 {
            (m.z.x.atan2(m.z.z), m.x.y.atan2(m.y.y))
        } else {
            ((-m.x.z).atan2(m.x.x), 0.0)
        };
        Vector3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}
