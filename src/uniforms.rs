use glam::{Mat3, Mat4, Vec3, Vec4};
use glium::texture::SrgbTexture2d;
use glium::uniforms::{UniformValue, Uniforms};

/// Surface reflectance passed to the lighting shader as `material.*`.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

/// Point light passed to the lighting shader as `light.*`.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

/// Uniforms staged by name for a single draw call.
///
/// Names are resolved against the program at draw time, every time; a staged
/// name with no matching active uniform is skipped silently, mirroring the
/// underlying API. Existing shader files rely on that, so it stays.
#[derive(Default)]
pub struct UniformSet<'a> {
    values: Vec<(String, UniformValue<'a>)>,
}

impl<'a> UniformSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, name: &str, value: UniformValue<'a>) -> Self {
        self.values.push((name.to_owned(), value));
        self
    }

    pub fn int(self, name: &str, value: i32) -> Self {
        self.push(name, UniformValue::SignedInt(value))
    }

    pub fn bool_(self, name: &str, value: bool) -> Self {
        self.push(name, UniformValue::Bool(value))
    }

    pub fn float(self, name: &str, value: f32) -> Self {
        self.push(name, UniformValue::Float(value))
    }

    pub fn vec3(self, name: &str, value: Vec3) -> Self {
        self.push(name, UniformValue::Vec3(value.to_array()))
    }

    pub fn vec4(self, name: &str, value: Vec4) -> Self {
        self.push(name, UniformValue::Vec4(value.to_array()))
    }

    pub fn mat3(self, name: &str, value: Mat3) -> Self {
        self.push(name, UniformValue::Mat3(value.to_cols_array_2d()))
    }

    pub fn mat4(self, name: &str, value: Mat4) -> Self {
        self.push(name, UniformValue::Mat4(value.to_cols_array_2d()))
    }

    pub fn sampler(self, name: &str, texture: &'a SrgbTexture2d) -> Self {
        self.push(name, UniformValue::SrgbTexture2d(texture, None))
    }

    /// Decompose a whole material into the `material.<field>` names the
    /// paired GLSL declares.
    pub fn material(self, material: &Material) -> Self {
        self.vec3("material.ambient", material.ambient)
            .vec3("material.diffuse", material.diffuse)
            .vec3("material.specular", material.specular)
            .float("material.shininess", material.shininess)
    }

    /// Decompose a whole light into the `light.<field>` names the paired
    /// GLSL declares.
    pub fn light(self, light: &Light) -> Self {
        self.vec3("light.position", light.position)
            .vec3("light.ambient", light.ambient)
            .vec3("light.diffuse", light.diffuse)
            .vec3("light.specular", light.specular)
    }
}

impl Uniforms for UniformSet<'_> {
    fn visit_values<'b, F: FnMut(&str, UniformValue<'b>)>(&'b self, mut output: F) {
        for (name, value) in &self.values {
            output(name, *value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged_names(set: &UniformSet) -> Vec<String> {
        let mut names = Vec::new();
        set.visit_values(|name, _| names.push(name.to_owned()));
        names
    }

    #[test]
    fn material_decomposes_with_the_fixed_naming() {
        let material = Material {
            ambient: Vec3::new(1.0, 0.5, 0.31),
            diffuse: Vec3::new(1.0, 0.5, 0.31),
            specular: Vec3::splat(0.5),
            shininess: 32.0,
        };
        let set = UniformSet::new().material(&material);
        assert_eq!(
            staged_names(&set),
            [
                "material.ambient",
                "material.diffuse",
                "material.specular",
                "material.shininess",
            ]
        );
    }

    #[test]
    fn light_decomposes_with_the_fixed_naming() {
        let light = Light {
            position: Vec3::new(1.2, 1.0, 2.0),
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
        };
        let set = UniformSet::new().light(&light);
        assert_eq!(
            staged_names(&set),
            [
                "light.position",
                "light.ambient",
                "light.diffuse",
                "light.specular",
            ]
        );
    }

    #[test]
    fn scalar_values_survive_staging() {
        let set = UniformSet::new().float("mixValue", 0.5).int("texture1", 0);
        let mut seen = Vec::new();
        set.visit_values(|name, value| seen.push((name.to_owned(), value)));

        assert!(matches!(
            seen[0],
            (ref name, UniformValue::Float(v)) if name == "mixValue" && (v - 0.5).abs() < f32::EPSILON
        ));
        assert!(matches!(
            seen[1],
            (ref name, UniformValue::SignedInt(0)) if name == "texture1"
        ));
    }

    #[test]
    fn matrices_stage_column_major_arrays() {
        let translation = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let set = UniformSet::new().mat4("model", translation);
        let mut visited = false;
        set.visit_values(|_, value| {
            if let UniformValue::Mat4(columns) = value {
                assert_eq!(columns[3][0], 1.0);
                assert_eq!(columns[3][1], 2.0);
                assert_eq!(columns[3][2], 3.0);
                visited = true;
            }
        });
        assert!(visited);
    }

    #[test]
    fn staging_order_is_insertion_order() {
        let set = UniformSet::new()
            .vec4("ourColor", Vec4::ONE)
            .vec3("offset", Vec3::ZERO)
            .float("mixValue", 1.0);
        assert_eq!(staged_names(&set), ["ourColor", "offset", "mixValue"]);
    }
}
