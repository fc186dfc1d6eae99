//! One frame of a rotating tesseract, from 4-D vertices to screen space.

use std::f64::consts::FRAC_PI_3;

use approx::assert_abs_diff_eq;
use hyperview_core::prelude::*;

/// The 16 vertices of the unit tesseract as homogeneous 5x1 columns.
fn tesseract() -> Vec<Matrixd> {
    (0..16_u32)
        .map(|bits| {
            let coord = |axis: u32| if bits & (1 << axis) == 0 { -1.0 } else { 1.0 };
            Matrixd::column(&[coord(0), coord(1), coord(2), coord(3), 1.0])
        })
        .collect()
}

/// Pairs of vertices differing in exactly one coordinate.
fn edges() -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for a in 0..16_usize {
        for axis in 0..4 {
            let b = a ^ (1 << axis);
            if a < b {
                out.push((a, b));
            }
        }
    }
    out
}

/// The 3-D view: eye on the negative Z axis looking at the origin, then
/// perspective.
fn camera() -> Matrixd {
    let eye = Matrixd::column(&[0.0, 0.0, -5.0]);
    let at = Matrixd::column(&[0.0, 0.0, 0.0]);
    let view = transform::look_at(&eye, &at).unwrap();
    &transform::perspective(FRAC_PI_3, 1.0) * &view
}

#[test]
fn tesseract_has_32_edges() {
    assert_eq!(edges().len(), 32);
}

#[test]
fn frame_projects_every_vertex_in_front_of_the_eye() {
    let mut angles = PlaneAngles::default();
    angles.set(RotationPlane::Xw, 0.4, true);
    angles.set(RotationPlane::Yz, 0.25, true);
    angles.set(RotationPlane::Zw, 0.1, false);

    let world = angles.rotation(4, 2.5).unwrap();
    let to_3d = transform::orthographic(4, 3).unwrap();
    let frame = &camera() * &(&to_3d * &world);
    assert_eq!(frame.shape(), (4, 5));

    let projected = frame.transform_points(&tesseract()).unwrap();
    for p in &projected {
        let (z, w) = (p.z().unwrap(), p.w().unwrap());
        // A rotated unit tesseract stays within radius 2 of the origin.
        assert!(z > 2.9 && z < 7.1, "depth {z} outside the expected range");
        assert_eq!(z, w);
        let (sx, sy) = (p.x().unwrap() / w, p.y().unwrap() / w);
        assert!(sx.abs() < 1.0 && sy.abs() < 1.0);
    }
}

#[test]
fn frame_at_rest_matches_manual_projection() {
    let angles = PlaneAngles::<f64>::default();
    let world = angles.rotation(4, 0.0).unwrap();
    assert_eq!(world, Matrixd::identity(5));

    let to_3d = transform::orthographic(4, 3).unwrap();
    let vertex = Matrixd::column(&[1.0, 1.0, 1.0, 1.0, 1.0]);
    let p = &camera() * &(&to_3d * &vertex);

    let f = 1.0 / (FRAC_PI_3 / 2.0).tan();
    assert_abs_diff_eq!(p, Matrixd::column(&[f, f, 6.0, 6.0]), epsilon = 1e-12);
}

#[test]
fn hyper_rotation_moves_w_into_x() {
    let mut angles = PlaneAngles::default();
    angles.set(RotationPlane::Xw, std::f64::consts::FRAC_PI_2, false);
    let world = angles.rotation(4, 0.0).unwrap();
    let p = &world * &Matrixd::column(&[0.0, 0.0, 0.0, 1.0, 1.0]);
    assert_abs_diff_eq!(
        p,
        Matrixd::column(&[-1.0, 0.0, 0.0, 0.0, 1.0]),
        epsilon = 1e-12
    );
}
