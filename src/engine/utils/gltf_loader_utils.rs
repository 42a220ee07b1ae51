use std::io::Cursor;
use std::path::Path;

use gltf::buffer::Data;
use glow::HasContext;
use image::io::Reader as ImageReader;

use crate::engine::components::material::Material;
use crate::engine::components::mesh::Mesh;
use crate::engine::components::skeleton::{Node, Skeleton};
use crate::engine::utils::math::mat4x4_transpose;

pub struct MascotAsset {
    pub mesh: Mesh,
    pub material: Material,
    pub skeleton: Skeleton,
}

// Load a skinned GLTF from disk. Any failure is reported to the caller so the
// scene can keep running without a mascot.
pub fn load_mascot_asset(
    gl: &glow::Context,
    path: &Path,
) -> Result<MascotAsset, Box<dyn std::error::Error>> {
    let gltf::Gltf { document, blob } = gltf::Gltf::open(path)?;
    let base = path.parent();
    let buffers = gltf::import_buffers(&document, base, blob)?;

    let mesh = extract_mesh(gl, &document, &buffers)?;
    let skeleton = extract_skeleton(&document, &buffers)?;

    // A missing or undecodable texture degrades to an untextured material.
    let material = match extract_material(gl, &document, &buffers, base) {
        Ok(material) => material,
        Err(e) => {
            println!("⚠️  Material extraction failed, rendering untextured: {}", e);
            Material::new()
        }
    };

    println!(
        "✅ Loaded mascot asset: {} vertices, {} joints",
        mesh.vertex_count,
        skeleton.joint_ids.len()
    );

    Ok(MascotAsset { mesh, material, skeleton })
}

pub fn extract_mesh(
    gl: &glow::Context,
    document: &gltf::Document,
    buffers: &[Data],
) -> Result<Mesh, Box<dyn std::error::Error>> {
    let primitive = document
        .meshes()
        .next()
        .ok_or("No mesh found in asset")?
        .primitives()
        .next()
        .ok_or("No primitive found in asset")?;

    let positions: Vec<f32> = extract_buffer_data(
        buffers,
        &primitive.get(&gltf::Semantic::Positions).ok_or("Missing positions")?,
    )?;
    let normals: Vec<f32> = extract_buffer_data(
        buffers,
        &primitive.get(&gltf::Semantic::Normals).ok_or("Missing normals")?,
    )?;
    let tex_coords: Vec<f32> = extract_buffer_data(
        buffers,
        &primitive.get(&gltf::Semantic::TexCoords(0)).ok_or("Missing texture coordinates")?,
    )?;

    let index_accessor = primitive.indices().ok_or("No indices found in asset")?;
    let indices: Vec<u32> = match index_accessor.data_type() {
        gltf::accessor::DataType::U16 => extract_buffer_data::<u16>(buffers, &index_accessor)?
            .into_iter()
            .map(u32::from)
            .collect(),
        gltf::accessor::DataType::U32 => extract_buffer_data::<u32>(buffers, &index_accessor)?,
        other => {
            return Err(format!("Unsupported index type {:?}", other).into());
        }
    };

    // Skinning attributes are required for the mascot mesh.
    let joints_accessor = primitive
        .get(&gltf::Semantic::Joints(0))
        .ok_or("Missing joint indices (asset is not skinned)")?;
    let joints: Vec<u8> = match joints_accessor.data_type() {
        gltf::accessor::DataType::U8 => extract_buffer_data::<u8>(buffers, &joints_accessor)?,
        gltf::accessor::DataType::U16 => extract_buffer_data::<u16>(buffers, &joints_accessor)?
            .into_iter()
            .map(|j| j as u8)
            .collect(),
        other => {
            return Err(format!("Unsupported joint index type {:?}", other).into());
        }
    };
    let weights: Vec<f32> = extract_buffer_data(
        buffers,
        &primitive.get(&gltf::Semantic::Weights(0)).ok_or("Missing joint weights")?,
    )?;

    let mut bounds_min = [f32::INFINITY; 3];
    let mut bounds_max = [f32::NEG_INFINITY; 3];
    for p in positions.chunks_exact(3) {
        for i in 0..3 {
            bounds_min[i] = bounds_min[i].min(p[i]);
            bounds_max[i] = bounds_max[i].max(p[i]);
        }
    }

    unsafe {
        let vao = gl.create_vertex_array()?;
        gl.bind_vertex_array(Some(vao));

        let mut gl_buffers = Vec::new();
        let mut setup_attrib =
            |loc: u32, data: &[u8], size: i32, ty: u32, stride: i32, int: bool| -> Result<(), String> {
                let buf = gl.create_buffer()?;
                gl.bind_buffer(glow::ARRAY_BUFFER, Some(buf));
                gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
                gl.enable_vertex_attrib_array(loc);
                if int {
                    gl.vertex_attrib_pointer_i32(loc, size, ty, stride, 0);
                } else {
                    gl.vertex_attrib_pointer_f32(loc, size, ty, false, stride, 0);
                }
                gl_buffers.push(buf);
                Ok(())
            };

        setup_attrib(1, bytemuck::cast_slice(&positions), 3, glow::FLOAT, 12, false)?; // Position
        setup_attrib(0, bytemuck::cast_slice(&normals), 3, glow::FLOAT, 12, false)?; // Normal
        setup_attrib(4, bytemuck::cast_slice(&tex_coords), 2, glow::FLOAT, 8, false)?; // TexCoord
        setup_attrib(2, &joints, 4, glow::UNSIGNED_BYTE, 4, true)?; // Joints
        setup_attrib(3, bytemuck::cast_slice(&weights), 4, glow::FLOAT, 16, false)?; // Weights

        let ebo = gl.create_buffer()?;
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&indices),
            glow::STATIC_DRAW
        );
        gl_buffers.push(ebo);

        gl.bind_vertex_array(None);

        Ok(Mesh {
            vao,
            buffers: gl_buffers,
            index_count: indices.len(),
            vertex_count: positions.len() / 3,
            bounds_min,
            bounds_max,
        })
    }
}

pub fn extract_skeleton(
    document: &gltf::Document,
    buffers: &[Data],
) -> Result<Skeleton, Box<dyn std::error::Error>> {
    let mut node_parents = vec![u32::MAX; document.nodes().len()];
    for node in document.nodes() {
        for child in node.children() {
            node_parents[child.index()] = node.index() as u32;
        }
    }

    let nodes = document
        .nodes()
        .map(|n| {
            let (t, r, s) = n.transform().decomposed();
            Node {
                name: n.name().map(str::to_string),
                translation: t,
                rotation: r,
                scale: s,
                parent: node_parents[n.index()],
            }
        })
        .collect::<Vec<_>>();

    let skin = document.skins().next().ok_or("No skin found in asset")?;
    let joint_ids: Vec<u32> = skin.joints().map(|j| j.index() as u32).collect();

    let mut joint_inverse_mats = Vec::new();
    if let Some(ibm) = skin.inverse_bind_matrices() {
        let data: Vec<f32> = extract_buffer_data(buffers, &ibm)?;
        joint_inverse_mats = data
            .chunks(16)
            .map(|m| {
                let mut mat = [0.0; 16];
                mat.copy_from_slice(m);
                mat4x4_transpose(mat)
            })
            .collect();
    }

    if nodes.is_empty() {
        return Err("No nodes found for skeleton".into());
    }

    Ok(Skeleton {
        nodes,
        joint_ids,
        joint_inverse_mats,
    })
}

pub fn extract_material(
    gl: &glow::Context,
    document: &gltf::Document,
    buffers: &[Data],
    base: Option<&Path>,
) -> Result<Material, Box<dyn std::error::Error>> {
    let material = document.materials().next().ok_or("No material found in asset")?;
    let pbr = material.pbr_metallic_roughness();

    let mut mat = Material::new();
    mat.metallic_factor = pbr.metallic_factor();
    mat.roughness_factor = pbr.roughness_factor();
    mat.double_sided = material.double_sided();

    if let Some(base_color_info) = pbr.base_color_texture() {
        let image_bytes = match base_color_info.texture().source().source() {
            gltf::image::Source::Uri { uri, .. } => {
                let dir = base.ok_or("Texture URI with no base directory")?;
                std::fs::read(dir.join(uri))?
            }
            gltf::image::Source::View { view, .. } => {
                let buffer = &buffers[view.buffer().index()];
                buffer[view.offset()..view.offset() + view.length()].to_vec()
            }
        };

        let (width, height, rgba_pixels) = decode_image(&image_bytes)?;

        unsafe {
            let gl_texture = gl.create_texture()?;
            gl.bind_texture(glow::TEXTURE_2D, Some(gl_texture));

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(&rgba_pixels))
            );

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);

            gl.bind_texture(glow::TEXTURE_2D, None);

            mat.base_color_texture = Some(gl_texture);

            println!("✅ Texture loaded: {}x{} pixels", width, height);
        }
    }

    Ok(mat)
}

fn decode_image(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), Box<dyn std::error::Error>> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    Ok((width, height, rgba_img.into_raw()))
}

pub fn extract_buffer_data<T: bytemuck::Pod>(
    buffers: &[Data],
    accessor: &gltf::Accessor,
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let view = accessor.view().ok_or("Missing buffer view")?;
    let buffer = &buffers[view.buffer().index()];
    let start = view.offset() + accessor.offset();
    let end = start + accessor.count() * accessor.size();

    if end > buffer.len() {
        return Err("Buffer overflow".into());
    }

    // pod_collect_to_vec copies, so accessor offsets that are not aligned
    // for T cannot panic the way cast_slice would.
    let slice = &buffer[start..end];
    Ok(bytemuck::pod_collect_to_vec(slice))
}
