use glow::HasContext;

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    // Position the light shines from; the shader normalizes it into a direction.
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

// Three-light rig: ambient fill plus key and front directional lights.
#[derive(Debug, Clone)]
pub struct LightRig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub key: DirectionalLight,
    pub fill: DirectionalLight,
}

impl LightRig {
    pub fn new() -> Self {
        Self {
            // 0x404040 ambient
            ambient_color: [0.25, 0.25, 0.25],
            ambient_intensity: 0.8,
            key: DirectionalLight {
                position: [5.0, 10.0, 5.0],
                color: [1.0, 1.0, 1.0],
                intensity: 1.2,
            },
            fill: DirectionalLight {
                position: [0.0, 5.0, 10.0],
                color: [1.0, 1.0, 1.0],
                intensity: 0.6,
            },
        }
    }

    pub fn upload(&self, gl: &glow::Context, shader_program: glow::Program) {
        unsafe {
            let set_vec3 = |name: &str, v: [f32; 3]| {
                if let Some(loc) = gl.get_uniform_location(shader_program, name) {
                    gl.uniform_3_f32(Some(&loc), v[0], v[1], v[2]);
                }
            };
            let set_f32 = |name: &str, v: f32| {
                if let Some(loc) = gl.get_uniform_location(shader_program, name) {
                    gl.uniform_1_f32(Some(&loc), v);
                }
            };

            set_vec3("ambient_color", self.ambient_color);
            set_f32("ambient_intensity", self.ambient_intensity);
            set_vec3("key_light_pos", self.key.position);
            set_vec3("key_light_color", self.key.color);
            set_f32("key_light_intensity", self.key.intensity);
            set_vec3("fill_light_pos", self.fill.position);
            set_vec3("fill_light_color", self.fill.color);
            set_f32("fill_light_intensity", self.fill.intensity);
        }
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}
