//! NPHT Demo: Rotation Recovery in 2D and 3D
//!
//! This binary compares a random shape with a rotated copy of itself using
//! both NPHT distances.
//!
//! ## Protocol
//!
//! 1. Sample a random point cloud (2D, then 3D)
//! 2. Build its transform: heights along every direction, turned into
//!    diagrams by a toy stand-in for a persistence engine
//! 3. Rotate the cloud by a grid-preserving rotation and rebuild
//! 4. Compare with and without rotation search
//!
//! Usage: `npht_demo [config.json]`. The optional JSON file sets the
//! distance degree, included dimensions and rotation flag.
//! `RUST_LOG=npht_metric=trace` shows every shift and rotation evaluated.

use std::f64::consts::PI;

use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use npht_metric::{
    circle_directions,
    DiagramSet,
    DistanceConfig,
    GridFunction,
    Lebedev26,
    NormalizedBarycentricHeight,
    NphtDistance2d,
    NphtDistance3d,
    PersistenceDiagram,
    PlanarTransform,
    SphericalTransform,
};

/// l_p distance between descending lifetime sequences, padded with zeros
fn sorted_lifetime_distance(a: &PersistenceDiagram, b: &PersistenceDiagram, p: f64) -> f64 {
    let lifetimes = |d: &PersistenceDiagram| {
        let mut l: Vec<f64> = d.iter().map(|pair| pair.persistence()).collect();
        l.sort_by(|x, y| y.total_cmp(x));
        l
    };
    let (la, lb) = (lifetimes(a), lifetimes(b));
    let n = la.len().max(lb.len());
    let gaps = (0..n).map(|i| {
        (la.get(i).copied().unwrap_or(0.0) - lb.get(i).copied().unwrap_or(0.0)).abs()
    });

    if p.is_infinite() {
        gaps.fold(0.0, f64::max)
    } else {
        gaps.map(|g| g.powf(p)).sum::<f64>().powf(1.0 / p)
    }
}

/// Toy diagrams from the heights of one direction.
///
/// Dimension 0 holds one essential class born at the lowest vertex, which is
/// exact for a connected shape. Higher dimensions pair up consecutive
/// heights separated by an above-average gap. Essential classes are capped
/// at the highest vertex.
fn toy_diagrams(heights: &Array1<f64>, n_dimensions: usize) -> DiagramSet {
    let mut sorted = heights.to_vec();
    sorted.sort_by(|x, y| x.total_cmp(y));
    let (low, high) = (sorted[0], sorted[sorted.len() - 1]);
    let mean_gap = (high - low) / (sorted.len() - 1).max(1) as f64;

    let mut diagrams = vec![PersistenceDiagram::from_pairs([(low, f64::INFINITY)])];
    for dim in 1..n_dimensions {
        diagrams.push(PersistenceDiagram::from_pairs(
            sorted
                .windows(2)
                .skip(dim - 1)
                .step_by(dim)
                .filter(|w| w[1] - w[0] > mean_gap)
                .map(|w| (w[0], w[1])),
        ));
    }

    DiagramSet::new(diagrams).de_essentialize(high)
}

fn random_cloud(
    rng: &mut StdRng,
    n_points: usize,
    dim: usize,
) -> Result<Array2<f64>, rand_distr::NormalError> {
    let normal = Normal::new(0.0, 1.0)?;
    Ok(Array2::from_shape_fn((n_points, dim), |_| rng.sample(normal)))
}

fn planar_transform(
    cloud: &Array2<f64>,
    n_directions: usize,
) -> npht_metric::Result<PlanarTransform> {
    circle_directions(n_directions)?
        .iter()
        .map(|direction| {
            let height = NormalizedBarycentricHeight::new(cloud, direction)?;
            Ok(toy_diagrams(&height.values(cloud), 2))
        })
        .collect()
}

fn spherical_transform(
    cloud: &Array2<f64>,
    lebedev: &Lebedev26,
) -> npht_metric::Result<SphericalTransform> {
    lebedev
        .grid()
        .directions()?
        .into_iter()
        .map(|(point, direction)| {
            let height = NormalizedBarycentricHeight::new(cloud, &direction)?;
            Ok((point, toy_diagrams(&height.values(cloud), 3)))
        })
        .collect::<npht_metric::Result<Vec<_>>>()
        .map(GridFunction::from_iter)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "npht_metric=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loaded = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading distance configuration");
            Some(DistanceConfig::from_json(&std::fs::read_to_string(path)?)?)
        }
        None => None,
    };
    let planar_config = loaded.clone().unwrap_or_else(DistanceConfig::planar_default);
    let spherical_config = loaded.unwrap_or_else(DistanceConfig::spherical_default);

    println!("═══════════════════════════════════════════════════════════════");
    println!("  NPHT Distance: Rotation Recovery");
    println!("═══════════════════════════════════════════════════════════════\n");

    let mut rng = StdRng::seed_from_u64(2014);

    // ─────────────────────────────────────────────────────────────────────
    // Planar
    // ─────────────────────────────────────────────────────────────────────
    let n_directions = 32;
    let steps = 3;
    let angle = 2.0 * PI * steps as f64 / n_directions as f64;
    let rotation = array![[angle.cos(), -angle.sin()], [angle.sin(), angle.cos()]];

    let cloud = random_cloud(&mut rng, 40, 2)?;
    let rotated = cloud.dot(&rotation.t());

    println!("Planar Parameters:");
    println!("  Points = {}", cloud.nrows());
    println!("  Directions = {}", n_directions);
    println!("  Rotation = {} steps ({:.4} rad)", steps, angle);
    println!(
        "  Degree = {}, dimensions = {:?}",
        planar_config.degree, planar_config.included_dimensions
    );
    println!();

    let t_1 = planar_transform(&cloud, n_directions)?;
    let t_2 = planar_transform(&rotated, n_directions)?;

    let search = NphtDistance2d::new(
        sorted_lifetime_distance,
        planar_config.clone().with_rotation_search(true),
    )?;
    let fixed = NphtDistance2d::new(
        sorted_lifetime_distance,
        planar_config.with_rotation_search(false),
    )?;

    let profile = search.shift_profile(&t_1, &t_2)?;
    let (best_shift, best_value) = profile
        .iter()
        .copied()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((0, f64::NAN));

    println!("  d without search = {:.6}", fixed.distance(&t_1, &t_2)?);
    println!("  d with search    = {:.6e}", search.distance(&t_1, &t_2)?);
    println!("  best shift       = {} (value {:.3e})", best_shift, best_value);
    println!();

    // ─────────────────────────────────────────────────────────────────────
    // Spherical
    // ─────────────────────────────────────────────────────────────────────
    let lebedev = Lebedev26::shared()?;
    let word = "DAD";
    let rotation = lebedev.group.matrix_of(word)?;

    let cloud = random_cloud(&mut rng, 60, 3)?;
    let rotated = cloud.dot(&rotation.t());

    println!("Spherical Parameters:");
    println!("  Points = {}", cloud.nrows());
    println!("  Directions = {} (Lebedev)", lebedev.grid().len());
    println!("  Rotation = {} of {} group elements", word, lebedev.group.order());
    println!(
        "  Degree = {}, dimensions = {:?}",
        spherical_config.degree, spherical_config.included_dimensions
    );
    println!();

    let t_1 = spherical_transform(&cloud, &lebedev)?;
    let t_2 = spherical_transform(&rotated, &lebedev)?;

    let search = NphtDistance3d::new(
        sorted_lifetime_distance,
        spherical_config.clone().with_rotation_search(true),
    )?;
    let fixed = NphtDistance3d::new(
        sorted_lifetime_distance,
        spherical_config.with_rotation_search(false),
    )?;

    let profile = search.rotation_profile(&t_1, &t_2)?;
    let best = profile
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(w, v)| (w.to_string(), *v));

    println!("  d without search = {:.6}", fixed.distance(&t_1, &t_2)?);
    println!("  d with search    = {:.6e}", search.distance(&t_1, &t_2)?);
    if let Some((w, v)) = best {
        println!("  best rotation    = {} (value {:.3e})", w, v);
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    Ok(())
}
