use std::path::Path;

use glow::HasContext;

use crate::engine::components::{Camera, LightRig};
use crate::engine::utils::gltf_loader_utils::load_mascot_asset;
use crate::mascot::pointer::normalized_pointer;
use crate::mascot::{Mascot, WaveTuning};

const MASCOT_MODEL_PATH: &str = "assets/models/rat/scene.gltf";
const WAVE_TUNING_PATH: &str = "assets/wave_tuning.json";

fn compile_shader(
    gl: &glow::Context,
    shader_type: u32,
    source: &str
) -> Result<glow::Shader, String> {
    unsafe {
        let shader = gl.create_shader(shader_type)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(format!("Shader compile error: {}", log));
        }
        Ok(shader)
    }
}

fn create_shader_program(
    gl: &glow::Context,
    vertex_source: &str,
    fragment_source: &str
) -> Result<glow::Program, String> {
    unsafe {
        let vs = compile_shader(gl, glow::VERTEX_SHADER, vertex_source)?;
        let fs = compile_shader(gl, glow::FRAGMENT_SHADER, fragment_source)?;

        let program = gl.create_program()?;
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        gl.delete_shader(vs);
        gl.delete_shader(fs);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(format!("Shader program link error: {}", log));
        }
        Ok(program)
    }
}

/// GL-side owner of the mascot scene: shader program, camera, lighting rig,
/// and the mascot itself. A failed model load leaves the scene mascot-less
/// but otherwise functional.
pub struct Program {
    gl: glow::Context,
    shader_program: glow::Program,
    camera: Camera,
    lights: LightRig,
    mascot: Option<Mascot>,
}

impl Program {
    pub fn new(gl: glow::Context) -> Result<Self, String> {
        let shader_program = create_shader_program(
            &gl,
            include_str!("../../assets/shaders/vertex_animated.glsl"),
            include_str!("../../assets/shaders/fragment_animated.glsl")
        )?;

        unsafe {
            gl.enable(glow::DEPTH_TEST);
        }

        let camera = Camera::new([0.0, 2.0, 8.0], [0.0, 0.0, 0.0]);
        let lights = LightRig::new();

        let tuning = WaveTuning::load_or_default(Path::new(WAVE_TUNING_PATH));
        let mascot = match load_mascot_asset(&gl, Path::new(MASCOT_MODEL_PATH)) {
            Ok(asset) => Some(Mascot::from_asset(asset, tuning)),
            Err(e) => {
                eprintln!("❌ Failed to load mascot model from {}: {}", MASCOT_MODEL_PATH, e);
                None
            }
        };

        println!("✅ Program initialized successfully");

        Ok(Self {
            gl,
            shader_program,
            camera,
            lights,
            mascot,
        })
    }

    pub fn pointer_entered(&mut self) {
        println!("👋 Remy says hi!");
        if let Some(mascot) = &mut self.mascot {
            mascot.animator.pointer_entered();
        }
    }

    pub fn pointer_left(&mut self) {
        println!("👋 Remy waves goodbye!");
        if let Some(mascot) = &mut self.mascot {
            mascot.animator.pointer_left();
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if let Some(mascot) = &mut self.mascot {
            mascot
                .animator
                .set_pointer(normalized_pointer(x, y, width, height));
        }
    }

    /// Advance the animation by `dt` seconds and draw one frame.
    pub fn render(&mut self, width: u32, height: u32, dt: f32) -> Result<(), String> {
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
            self.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let Some(mascot) = &mut self.mascot else {
            // Load failed earlier: lights and camera only, an empty scene.
            return Ok(());
        };

        mascot.update(dt);

        let aspect_ratio = (width as f32) / (height.max(1) as f32);
        let viewport_txfm = crate::engine::utils::math::mat4x4_mul(
            self.camera.projection_matrix(aspect_ratio),
            self.camera.view_matrix(),
        );

        unsafe {
            self.gl.use_program(Some(self.shader_program));

            if let Some(loc) = self.gl.get_uniform_location(self.shader_program, "viewport_txfm") {
                self.gl
                    .uniform_matrix_4_f32_slice(Some(&loc), true, &viewport_txfm);
            }
            if let Some(loc) = self.gl.get_uniform_location(self.shader_program, "baseColorTexture") {
                self.gl.uniform_1_i32(Some(&loc), 0); // Texture unit 0
            }

            self.lights.upload(&self.gl, self.shader_program);
        }

        mascot.render(&self.gl, self.shader_program);

        unsafe {
            self.gl.bind_vertex_array(None);
        }
        Ok(())
    }

    // Must run after the last frame; nothing may render once this is called.
    pub fn cleanup(&self) {
        unsafe {
            self.gl.delete_program(self.shader_program);
        }
        if let Some(mascot) = &self.mascot {
            mascot.cleanup(&self.gl);
        }
        println!("✅ Released GL resources");
    }
}
