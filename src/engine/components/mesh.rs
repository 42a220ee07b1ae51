use glow::HasContext;

// GPU-side mesh. Buffers are owned so teardown can release them.
pub struct Mesh {
    pub vao: glow::VertexArray,
    pub buffers: Vec<glow::Buffer>,
    pub index_count: usize,
    pub vertex_count: usize,
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
}

impl Mesh {
    pub fn is_valid(&self) -> bool {
        self.index_count > 0 && self.vertex_count > 0
    }

    // Largest extent of the bounding box, used to fit the model to frame.
    pub fn max_dimension(&self) -> f32 {
        let size = [
            self.bounds_max[0] - self.bounds_min[0],
            self.bounds_max[1] - self.bounds_min[1],
            self.bounds_max[2] - self.bounds_min[2],
        ];
        size[0].max(size[1]).max(size[2])
    }

    pub fn center(&self) -> [f32; 3] {
        [
            (self.bounds_min[0] + self.bounds_max[0]) * 0.5,
            (self.bounds_min[1] + self.bounds_max[1]) * 0.5,
            (self.bounds_min[2] + self.bounds_max[2]) * 0.5,
        ]
    }

    pub fn cleanup(&self, gl: &glow::Context) {
        unsafe {
            for &buffer in &self.buffers {
                gl.delete_buffer(buffer);
            }
            gl.delete_vertex_array(self.vao);
        }
    }
}
