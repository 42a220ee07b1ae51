pub type Mat4x4 = [f32; 16];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_translate(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
      1.0, 0.0, 0.0,  x,
      0.0, 1.0, 0.0,  y,
      0.0, 0.0, 1.0,  z,
      0.0, 0.0, 0.0, 1.0
    ]
}

#[allow(dead_code)]
pub fn mat4x4_rot_x(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
      1.0, 0.0, 0.0, 0.0,
      0.0,  c,  -s,  0.0,
      0.0,  s,   c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

#[allow(dead_code)]
pub fn mat4x4_rot_y(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  0.0, -s,  0.0,
      0.0, 1.0, 0.0, 0.0,
       s,  0.0,  c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

#[allow(dead_code)]
pub fn mat4x4_rot_z(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  -s,  0.0, 0.0,
       s,   c,  0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_scale(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
       x,  0.0, 0.0, 0.0,
      0.0,  y,  0.0, 0.0,
      0.0, 0.0,  z,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_from_quat(quat: [f32; 4]) -> Mat4x4 {
    let [x, y, z, w] = quat;
    let x2 = x * x;
    let y2 = y * y;
    let z2 = z * z;
    let w2 = w * w;

    let xy = 2.0 * x * y;
    let xz = 2.0 * x * z;
    let xw = 2.0 * x * w;
    let yz = 2.0 * y * z;
    let yw = 2.0 * y * w;
    let zw = 2.0 * z * w;

    [
        w2 + x2 - y2 - z2,  xy - zw,            xz + yw,            0.0,
        xy + zw,            w2 - x2 + y2 - z2,  yz - xw,            0.0,
        xz - yw,            yz + xw,            w2 - x2 - y2 + z2,  0.0,
        0.0,                0.0,                0.0,                1.0,
    ]
}

// Quaternion from Euler angles, XYZ application order.
pub fn quat_from_euler(euler: [f32; 3]) -> [f32; 4] {
    let c1 = (euler[0] * 0.5).cos();
    let s1 = (euler[0] * 0.5).sin();
    let c2 = (euler[1] * 0.5).cos();
    let s2 = (euler[1] * 0.5).sin();
    let c3 = (euler[2] * 0.5).cos();
    let s3 = (euler[2] * 0.5).sin();

    [
        s1 * c2 * c3 + c1 * s2 * s3,
        c1 * s2 * c3 - s1 * c2 * s3,
        c1 * c2 * s3 + s1 * s2 * c3,
        c1 * c2 * c3 - s1 * s2 * s3,
    ]
}

// Recover XYZ Euler angles from a rotation matrix. Near the y = ±90°
// singularity the roll folds into the pitch term and z is reported as 0.
pub fn mat4x4_extract_euler_angles(mat: &Mat4x4) -> [f32; 3] {
    let m13 = mat[2].clamp(-1.0, 1.0);
    let y = m13.asin();

    if m13.abs() < 0.9999999 {
        let x = (-mat[6]).atan2(mat[10]);
        let z = (-mat[1]).atan2(mat[0]);
        [x, y, z]
    } else {
        let x = mat[9].atan2(mat[5]);
        [x, y, 0.0]
    }
}

pub fn euler_from_quat(quat: [f32; 4]) -> [f32; 3] {
    mat4x4_extract_euler_angles(&mat4x4_from_quat(quat))
}

pub fn mat4x4_transpose(matrix: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        ret[col * 4 + row] = matrix[row * 4 + col];
    }
    ret
}

pub fn vec4_dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

pub fn mat4x4_row(mat: &Mat4x4, row: usize) -> [f32; 4] {
    let start_idx = row * 4;
    [mat[start_idx], mat[start_idx + 1], mat[start_idx + 2], mat[start_idx + 3]]
}

pub fn mat4x4_col(mat: &Mat4x4, col: usize) -> [f32; 4] {
    [mat[col], mat[4 + col], mat[8 + col], mat[12 + col]]
}

pub fn mat4x4_mul(a: Mat4x4, b: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        let a_row = mat4x4_row(&a, row);
        let b_col = mat4x4_col(&b, col);
        ret[i] = vec4_dot(a_row, b_col);
    }
    ret
}

pub fn mat4x4_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov_y_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect_ratio, 0.0, 0.0,                          0.0,
        0.0,              f,   0.0,                          0.0,
        0.0,              0.0, (near + far) * range_inv,     (2.0 * near * far) * range_inv,
        0.0,              0.0, -1.0,                         0.0,
    ]
}

fn vec3_sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn vec3_dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn vec3_cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn vec3_normalize(v: [f32; 3]) -> [f32; 3] {
    let len = vec3_dot(v, v).sqrt();
    if len == 0.0 {
        return [0.0, 0.0, 0.0];
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// Build a right-handed view matrix looking from eye toward target.
pub fn mat4x4_look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4x4 {
    let forward = vec3_normalize(vec3_sub(target, eye));
    let right = vec3_normalize(vec3_cross(forward, up));
    let true_up = vec3_cross(right, forward);

    let tx = -vec3_dot(right, eye);
    let ty = -vec3_dot(true_up, eye);
    let tz = vec3_dot(forward, eye);

    [
        right[0],    right[1],    right[2],    tx,
        true_up[0],  true_up[1],  true_up[2],  ty,
        -forward[0], -forward[1], -forward[2], tz,
        0.0,         0.0,         0.0,         1.0,
    ]
}

// Linear interpolation utility function
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
