//! The fixed bathroom scene: object list, model transforms, primitive
//! meshes and texture sources.
//!
//! The scene is static. [`Scene::bathroom`] describes every draw call in
//! order; the renderer uploads one mesh per [`ShapeKind`] and one uniform
//! block per [`SceneObject`].

pub mod mesh_gen;
pub mod textures;

use glam::{Mat4, Vec3};

pub use mesh_gen::{MeshData, Vertex};
pub use textures::TextureImage;

/// Primitive mesh used by a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// 2×2 quad in the XZ plane.
    Plane,
    /// Unit cube centred on the origin.
    Box,
    /// Unit-radius cylinder from y = 0 to y = 1.
    Cylinder,
    /// Unit-radius sphere.
    Sphere,
}

impl ShapeKind {
    /// Every shape kind.
    pub const ALL: [Self; 4] = [Self::Plane, Self::Box, Self::Cylinder, Self::Sphere];

    /// Generate the mesh for this shape.
    #[must_use]
    pub fn mesh(self) -> MeshData {
        match self {
            Self::Plane => mesh_gen::plane(),
            Self::Box => mesh_gen::unit_box(),
            Self::Cylinder => mesh_gen::cylinder(mesh_gen::CYLINDER_SEGMENTS),
            Self::Sphere => {
                mesh_gen::sphere(mesh_gen::SPHERE_STACKS, mesh_gen::SPHERE_SLICES)
            }
        }
    }
}

/// Named texture used by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Countertop.
    Wood,
    /// Back wall.
    Brick,
    /// Faucet.
    Metal,
}

impl TextureSlot {
    /// Every texture slot.
    pub const ALL: [Self; 3] = [Self::Wood, Self::Brick, Self::Metal];
}

/// How an object's fragments are colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Flat RGBA color.
    Color([f32; 4]),
    /// Sampled texture.
    Texture(TextureSlot),
}

/// Scale, Euler rotation (degrees, applied X then Y then Z) and
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Per-axis scale.
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees.
    pub rotation_degrees: Vec3,
    /// Translation.
    pub position: Vec3,
}

impl Transform {
    /// Unrotated transform.
    #[must_use]
    pub fn new(scale: Vec3, position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees: Vec3::ZERO,
            position,
        }
    }

    /// Same transform with the given rotation.
    #[must_use]
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation_degrees = Vec3::new(x, y, z);
        self
    }

    /// `T * Rx * Ry * Rz * S`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation_degrees;
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(r.x.to_radians())
            * Mat4::from_rotation_y(r.y.to_radians())
            * Mat4::from_rotation_z(r.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

/// One draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Human-readable label, used in logs and GPU debug labels.
    pub name: &'static str,
    /// Mesh to draw.
    pub shape: ShapeKind,
    /// Model transform.
    pub transform: Transform,
    /// Color or texture.
    pub surface: Surface,
}

impl SceneObject {
    fn new(
        name: &'static str,
        shape: ShapeKind,
        transform: Transform,
        surface: Surface,
    ) -> Self {
        Self {
            name,
            shape,
            transform,
            surface,
        }
    }
}

/// Ordered list of draw calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Build a scene from an explicit object list.
    #[must_use]
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Objects in draw order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Distinct texture slots referenced by the scene, in first-use order.
    #[must_use]
    pub fn textures_used(&self) -> Vec<TextureSlot> {
        let mut slots = Vec::new();
        for object in &self.objects {
            if let Surface::Texture(slot) = object.surface {
                if !slots.contains(&slot) {
                    slots.push(slot);
                }
            }
        }
        slots
    }

    /// The bathroom: floor, brick wall with mirror, wooden countertop with
    /// sink, faucet and knobs, a vase with two leaves, and a light globe.
    #[must_use]
    pub fn bathroom() -> Self {
        use ShapeKind::{Box, Cylinder, Plane, Sphere};
        use Surface::{Color, Texture};

        let knob = |x: f32| {
            SceneObject::new(
                "knob",
                Sphere,
                Transform::new(Vec3::splat(0.2), Vec3::new(x, 1.2, -3.0)),
                Color([0.2, 0.2, 0.2, 1.0]),
            )
        };

        Self::new(vec![
            SceneObject::new(
                "floor",
                Plane,
                Transform::new(Vec3::new(100.0, 1.0, 100.0), Vec3::new(0.0, -0.5, 0.0)),
                Color([0.9, 0.9, 0.9, 1.0]),
            ),
            SceneObject::new(
                "wall",
                Box,
                Transform::new(Vec3::new(5.0, 5.0, 0.1), Vec3::new(0.0, 4.0, -4.9)),
                Texture(TextureSlot::Brick),
            ),
            SceneObject::new(
                "mirror",
                Box,
                Transform::new(Vec3::new(3.6, 3.6, 0.05), Vec3::new(0.0, 4.0, -4.85)),
                Color([0.7, 0.8, 0.9, 1.0]),
            ),
            SceneObject::new(
                "countertop",
                Box,
                Transform::new(Vec3::new(10.0, 1.0, 3.0), Vec3::new(0.0, 0.5, -3.0)),
                Texture(TextureSlot::Wood),
            ),
            SceneObject::new(
                "sink",
                Cylinder,
                Transform::new(Vec3::new(2.0, 0.5, 2.0), Vec3::new(0.0, 1.0, -3.0)),
                Color([1.0, 1.0, 1.0, 1.0]),
            ),
            SceneObject::new(
                "faucet",
                Cylinder,
                Transform::new(Vec3::new(0.1, 1.0, 0.1), Vec3::new(0.0, 1.75, -3.0))
                    .rotated(-20.0, 0.0, 0.0),
                Texture(TextureSlot::Metal),
            ),
            knob(-0.5),
            knob(0.5),
            SceneObject::new(
                "vase",
                Cylinder,
                Transform::new(Vec3::new(0.4, 1.0, 0.4), Vec3::new(-3.0, 1.0, -3.0)),
                Color([0.6, 0.4, 0.2, 1.0]),
            ),
            SceneObject::new(
                "leaf",
                Sphere,
                Transform::new(Vec3::new(0.1, 1.3, 0.02), Vec3::new(-2.8, 2.2, -3.0))
                    .rotated(30.0, 0.0, 20.0),
                Color([0.0, 0.8, 0.0, 1.0]),
            ),
            SceneObject::new(
                "leaf",
                Sphere,
                Transform::new(Vec3::new(0.1, 1.0, 0.02), Vec3::new(-3.2, 2.0, -3.2))
                    .rotated(40.0, 10.0, 0.0),
                Color([0.0, 0.8, 0.0, 1.0]),
            ),
            SceneObject::new(
                "light",
                Sphere,
                Transform::new(Vec3::ONE, Vec3::new(0.0, 8.0, -3.0)),
                Color([1.0, 1.0, 0.8, 1.0]),
            ),
        ])
    }
}
