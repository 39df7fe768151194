//! End-to-end behaviour of the NPHT distances across modules:
//! directions and heights feed transforms, transforms feed the metrics.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use npht_metric::{
    circle_directions,
    lebedev_26_integration,
    DiagramSet,
    DistanceConfig,
    GridFunction,
    Lebedev26,
    LebedevGrid,
    NormalizedBarycentricHeight,
    NphtDistance2d,
    NphtDistance3d,
    NphtError,
    PersistenceDiagram,
    PlanarTransform,
    SphericalTransform,
};

fn size_gap(a: &PersistenceDiagram, b: &PersistenceDiagram, _p: f64) -> f64 {
    (a.len() as f64 - b.len() as f64).abs()
}

fn lifetime_gap(a: &PersistenceDiagram, b: &PersistenceDiagram, _p: f64) -> f64 {
    (a.total_persistence() - b.total_persistence()).abs()
}

/// Dimension 0: one class from the lowest to the highest vertex
fn height_diagrams(heights: &[f64], n_dimensions: usize) -> DiagramSet {
    let low = heights.iter().copied().fold(f64::INFINITY, f64::min);
    let high = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut diagrams = vec![PersistenceDiagram::new(); n_dimensions];
    diagrams[0] = PersistenceDiagram::from_pairs([(low, f64::INFINITY)]);
    DiagramSet::new(diagrams).de_essentialize(high)
}

fn random_cloud(seed: u64, n_points: usize, dim: usize) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    Array2::from_shape_fn((n_points, dim), |_| rng.sample(normal))
}

fn spherical_transform(cloud: &Array2<f64>, lebedev: &Lebedev26) -> SphericalTransform {
    lebedev
        .grid()
        .directions()
        .unwrap()
        .into_iter()
        .map(|(point, direction)| {
            let height = NormalizedBarycentricHeight::new(cloud, &direction).unwrap();
            (point, height_diagrams(height.values(cloud).as_slice().unwrap(), 3))
        })
        .collect()
}

#[test]
fn test_identical_planar_transforms_at_zero_distance() {
    let direction = DiagramSet::new(vec![
        PersistenceDiagram::from_pairs([(0.0, 1.0)]),
        PersistenceDiagram::new(),
    ]);
    let t: PlanarTransform = vec![direction; 4];

    let metric = NphtDistance2d::new(size_gap, DistanceConfig::new(2.0, [0, 1], false)).unwrap();
    assert_eq!(metric.distance(&t, &t).unwrap(), 0.0);
}

#[test]
fn test_planar_search_invariant_to_cyclic_relabeling() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut random_transform = |n: usize| -> PlanarTransform {
        (0..n)
            .map(|_| {
                let k = rng.gen_range(0..6);
                DiagramSet::new(vec![
                    PersistenceDiagram::from_pairs((0..k).map(|j| (0.0, j as f64))),
                    PersistenceDiagram::new(),
                ])
            })
            .collect()
    };
    let t_1 = random_transform(9);
    let t_2 = random_transform(9);

    let metric = NphtDistance2d::new(size_gap, DistanceConfig::default()).unwrap();
    let reference = metric.distance(&t_1, &t_2).unwrap();

    for k in 1..9 {
        let mut shifted = t_2.clone();
        shifted.rotate_left(k);
        assert_eq!(metric.distance(&t_1, &shifted).unwrap(), reference);
    }
}

#[test]
fn test_rotated_planar_shape_recovered() {
    let n = 16;
    let cloud = random_cloud(3, 30, 2);
    // a quarter turn is a shift by n / 4 directions
    let rotated = Array2::from_shape_fn(cloud.raw_dim(), |(i, j)| {
        if j == 0 { -cloud[[i, 1]] } else { cloud[[i, 0]] }
    });

    let transform = |shape: &Array2<f64>| -> PlanarTransform {
        circle_directions(n)
            .unwrap()
            .iter()
            .map(|dir| {
                let height = NormalizedBarycentricHeight::new(shape, dir).unwrap();
                height_diagrams(height.values(shape).as_slice().unwrap(), 2)
            })
            .collect()
    };
    let t_1 = transform(&cloud);
    let t_2 = transform(&rotated);

    let metric = NphtDistance2d::new(lifetime_gap, DistanceConfig::default()).unwrap();
    let profile = metric.shift_profile(&t_1, &t_2).unwrap();
    assert!(profile[n / 4].1 < 1e-10);
    assert!(metric.distance(&t_1, &t_2).unwrap() < 1e-10);
}

#[test]
fn test_rotated_solid_shape_recovered() {
    let lebedev = Lebedev26::shared().unwrap();
    let cloud = random_cloud(5, 50, 3);

    for word in ["A", "AD", "DADAD"] {
        let rotation = lebedev.group.matrix_of(word).unwrap();
        let rotated = cloud.dot(&rotation.t());

        let t_1 = spherical_transform(&cloud, &lebedev);
        let t_2 = spherical_transform(&rotated, &lebedev);

        let config = DistanceConfig::spherical_default().with_dimensions([0]);
        let search = NphtDistance3d::new(lifetime_gap, config.clone()).unwrap();
        let fixed = NphtDistance3d::new(lifetime_gap, config.with_rotation_search(false)).unwrap();

        let d_search = search.distance(&t_1, &t_2).unwrap();
        assert!(d_search < 1e-9, "rotation {} left distance {}", word, d_search);
        assert!(fixed.distance(&t_1, &t_2).unwrap() >= d_search);
    }
}

#[test]
fn test_quadrature_on_grid_directions() {
    let grid = LebedevGrid::lebedev_26();
    let f = GridFunction::try_from_fn(&grid, |p| {
        grid.to_cartesian(p).map(|[x, y, z]| x * x * y * y * z * z)
    })
    .unwrap();
    assert_relative_eq!(lebedev_26_integration(&f).unwrap(), 4.0 * PI / 105.0, epsilon = 1e-12);
}

#[test]
fn test_transform_json_round_trip() {
    let lebedev = Lebedev26::shared().unwrap();
    let t = GridFunction::from_fn(lebedev.grid(), |p| {
        DiagramSet::new(vec![
            PersistenceDiagram::from_pairs([(0.0, f64::INFINITY), (0.25, p.number as f64)]),
            PersistenceDiagram::new(),
            PersistenceDiagram::new(),
        ])
    });

    let json = serde_json::to_string(&t).unwrap();
    assert!(json.contains("\"a2:12\""));
    assert!(json.contains("null"));

    let back: SphericalTransform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[test]
fn test_config_from_json_drives_metric() {
    let config = DistanceConfig::from_json(
        r#"{"degree": 1.0, "included_dimensions": [0, 2], "minimize_over_rotations": false}"#,
    )
    .unwrap();

    let lebedev = Lebedev26::shared().unwrap();
    let t_1 = GridFunction::from_fn(lebedev.grid(), |_| DiagramSet::empty(3));
    let t_2 = GridFunction::from_fn(lebedev.grid(), |_| {
        DiagramSet::new(vec![
            PersistenceDiagram::new(),
            PersistenceDiagram::from_pairs([(0.0, 1.0)]),
            PersistenceDiagram::from_pairs([(0.0, 1.0), (0.0, 2.0)]),
        ])
    });

    // only dimension 2 differs in size, by 2 at every direction
    let metric = NphtDistance3d::new(size_gap, config).unwrap();
    assert_relative_eq!(metric.distance(&t_1, &t_2).unwrap(), 8.0 * PI, epsilon = 1e-10);

    let planar = NphtDistance2d::new(size_gap, DistanceConfig::default()).unwrap();
    assert!(matches!(
        planar.distance(&[DiagramSet::empty(2)], &[]),
        Err(NphtError::LengthMismatch { left: 1, right: 0 })
    ));
}
