use std::f64::consts::TAU;

use nalgebra::Point3;

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// Closed circle of the given radius in the XZ plane, centered on the local
/// origin. The last point repeats the first.
pub fn circle_polyline(radius: f32, segments: usize) -> Vec<Point3<f32>> {
    let radius = radius as f64;
    path_iter_parametric(
        |theta: f64| {
            let pt = Point3::new(radius * theta.cos(), 0.0, radius * theta.sin());
            nalgebra::convert(pt)
        },
        0.0,
        TAU,
        segments,
    )
    .collect()
}

/// Flat ring in the XY plane: two concentric vertex loops stitched into quads,
/// two triangles each. Indices are u16 triples ready for mesh upload.
pub fn annulus(
    inner_radius: f32,
    outer_radius: f32,
    segments: usize,
) -> (Vec<Point3<f32>>, Vec<Point3<u16>>) {
    assert!(
        segments >= 3,
        "Annulus needs at least three segments, got {}",
        segments
    );

    // The seam vertices are duplicated so the quad indexing below stays
    // uniform all the way around.
    let mut positions = Vec::with_capacity(2 * (segments + 1));
    for i in 0..=segments {
        let theta = TAU as f32 * i as f32 / segments as f32;
        let (sin, cos) = theta.sin_cos();
        positions.push(Point3::new(inner_radius * cos, inner_radius * sin, 0.0));
        positions.push(Point3::new(outer_radius * cos, outer_radius * sin, 0.0));
    }

    let mut indices = Vec::with_capacity(2 * segments);
    for i in 0..segments as u16 {
        let base = 2 * i;
        indices.push(Point3::new(base, base + 1, base + 2));
        indices.push(Point3::new(base + 2, base + 1, base + 3));
    }

    (positions, indices)
}

/// Star positions scattered over a spherical shell. Radius is uniform in
/// `[r_min, r_max]`; the direction uses the inverse-cosine polar angle so
/// stars don't bunch at the poles. Same seed, same stars.
pub fn starfield_points(count: usize, r_min: f32, r_max: f32, seed: u64) -> Vec<Point3<f32>> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| {
            let radius = r_min + (r_max - r_min) * rng.f32();
            let azimuth = TAU as f32 * rng.f32();
            let polar = (1.0 - 2.0 * rng.f32()).acos();
            Point3::new(
                radius * polar.sin() * azimuth.cos(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.sin(),
            )
        })
        .collect()
}
