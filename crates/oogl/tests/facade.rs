use approx::assert_abs_diff_eq;
use oogl::linalg::{vec3, vec4, Mat4f, Uniform};

#[test]
fn logger_init_is_idempotent() {
    oogl::init_logger!();
    oogl::init_logger!();
    log::debug!("logger initialized twice");
}

#[test]
fn model_view_upload() {
    let model = Mat4f::rotation_axis(vec3(0.0, 1.0, 0.0), std::f32::consts::PI).unwrap();
    let view = Mat4f::translation(vec3(0.0, 0.0, -5.0));
    let model_view = view.compose(model);

    let mut buf = [0.0; 16];
    model_view.write_flat(&mut buf).unwrap();
    assert_eq!(&buf[12..], &[0.0, 0.0, -5.0, 1.0]);

    let p = model_view * vec4(1.0, 0.0, 0.0, 1.0);
    assert_abs_diff_eq!(p, vec4(-1.0, 0.0, -5.0, 1.0), epsilon = 1e-6);
}

#[test]
fn errors_convert_to_anyhow() {
    fn invert(m: Mat4f) -> anyhow::Result<Mat4f> {
        Ok(m.inverse()?)
    }

    let err = invert(Mat4f::ZERO).unwrap_err();
    assert_eq!(err.to_string(), "attempt to invert a singular matrix");
    assert!(invert(Mat4f::IDENTITY).is_ok());
}
