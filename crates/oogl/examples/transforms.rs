//! Builds a model-view transform for a spinning cube and prints the data that would be uploaded
//! as uniforms.

use std::f32::consts::PI;

use anyhow::Context;
use oogl::linalg::{uniform, vec3, Mat3f, Mat4f, Uniform, Vec3f};

const FRAMES: usize = 4;

fn main() -> anyhow::Result<()> {
    oogl::init_logger!();

    let view = Mat4f::translation(vec3(0.0, 0.0, -5.0));
    let axis = vec3(1.0, 1.0, 0.0);

    let mut models = Vec::with_capacity(FRAMES);
    for frame in 0..FRAMES {
        let angle = frame as f32 / FRAMES as f32 * 2.0 * PI;
        let model = Mat4f::rotation_axis(axis, angle)?
            .compose(Mat4f::scaling_3d(Vec3f::splat(0.5)));
        log::debug!("model matrix for frame {}: {:?}", frame, model);
        models.push(model);
    }

    let model_view = view.compose(models[1]);
    let normal_matrix = Mat3f::from_fn(|row, col| model_view[(row, col)])
        .inverse()
        .context("model-view transform is not invertible")?
        .transposed();

    let mut buf = [0.0; 16];
    model_view.write_flat(&mut buf)?;
    println!("u_modelView   = {:?}", buf);
    println!("u_normal      = {:?}", normal_matrix.as_flat());

    let corner = model_view * vec3(1.0, 1.0, 1.0).extend(1.0);
    println!("corner        = {}", corner);

    let light = Vec3f::Y.plus(Vec3f::Z).normalized();
    println!("u_light       = {:?}", light.as_flat());

    let flat = uniform::flatten(&models);
    println!("u_models[{}]  = {} floats", models.len(), flat.len());

    Ok(())
}
