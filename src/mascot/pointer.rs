/// Map a cursor position in surface pixels to the [-1, 1] range on both
/// axes: (-1, -1) is the top-left corner, (1, 1) the bottom-right.
pub fn normalized_pointer(x: f64, y: f64, width: u32, height: u32) -> [f32; 2] {
    if width == 0 || height == 0 {
        return [0.0, 0.0];
    }
    [
        ((x / width as f64) * 2.0 - 1.0) as f32,
        ((y / height as f64) * 2.0 - 1.0) as f32,
    ]
}
