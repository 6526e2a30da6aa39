//! Walk generation for the four stochastic models.

use std::collections::HashSet;
use std::f64::consts::TAU;

use smallvec::SmallVec;
use wander_core::{ParamError, Point, Walk, WalkParams, WalkType};

use crate::lattice::{LatticeDir, LatticeSite};
use crate::prng::Mulberry32;

/// Lower bound on the uniform draw feeding the Pareto inverse CDF.
///
/// Caps a single Lévy step at `step_length * LEVY_DRAW_FLOOR^(-1/alpha)`.
pub const LEVY_DRAW_FLOOR: f64 = 0.01;

/// Generate a complete walk for `params`.
///
/// The output depends only on `(seed, steps, step_length, walk_type,
/// levy_alpha)`. Self-avoiding walks may stop early when trapped; the
/// returned walk's `params().steps` then reports the steps actually taken.
///
/// # Errors
///
/// Returns the [`ParamError`] from [`WalkParams::validate`] for a
/// non-positive step length or invalid Lévy exponent.
pub fn generate_walk(params: &WalkParams) -> Result<Walk, ParamError> {
    params.validate()?;
    let mut rng = Mulberry32::new(params.seed);
    let points = match params.walk_type {
        WalkType::Isotropic => isotropic(params, &mut rng),
        WalkType::Lattice => lattice(params, &mut rng),
        WalkType::Levy => levy(params, &mut rng),
        WalkType::SelfAvoiding => self_avoiding(params, &mut rng),
    };
    Walk::from_points(params.clone(), points)
}

/// Generate `count` independent walks; walk `i` uses seed `params.seed + i`
/// (wrapping).
pub fn generate_walks(params: &WalkParams, count: usize) -> Result<Vec<Walk>, ParamError> {
    (0..count)
        .map(|i| generate_walk(&params.with_seed(params.seed.wrapping_add(i as u32))))
        .collect()
}

fn isotropic(params: &WalkParams, rng: &mut Mulberry32) -> Vec<Point> {
    let mut points = Vec::with_capacity(params.steps + 1);
    let mut prev = Point::ORIGIN;
    points.push(prev);
    for _ in 0..params.steps {
        let angle = rng.next_f64() * TAU;
        prev = prev.offset(angle.cos() * params.step_length, angle.sin() * params.step_length);
        points.push(prev);
    }
    points
}

fn lattice(params: &WalkParams, rng: &mut Mulberry32) -> Vec<Point> {
    let mut points = Vec::with_capacity(params.steps + 1);
    let mut prev = Point::ORIGIN;
    points.push(prev);
    for _ in 0..params.steps {
        let (di, dj) = LatticeDir::ALL[rng.next_index(4)].offset();
        prev = prev.offset(
            di as f64 * params.step_length,
            dj as f64 * params.step_length,
        );
        points.push(prev);
    }
    points
}

fn levy(params: &WalkParams, rng: &mut Mulberry32) -> Vec<Point> {
    let inv_alpha = 1.0 / params.effective_levy_alpha();
    let mut points = Vec::with_capacity(params.steps + 1);
    let mut prev = Point::ORIGIN;
    points.push(prev);
    for _ in 0..params.steps {
        let angle = rng.next_f64() * TAU;
        let u = rng.next_f64().max(LEVY_DRAW_FLOOR);
        let len = params.step_length * u.powf(-inv_alpha);
        prev = prev.offset(angle.cos() * len, angle.sin() * len);
        points.push(prev);
    }
    points
}

fn self_avoiding(params: &WalkParams, rng: &mut Mulberry32) -> Vec<Point> {
    let mut points = Vec::with_capacity(params.steps + 1);
    let mut visited: HashSet<LatticeSite> = HashSet::with_capacity(params.steps + 1);
    let mut site = LatticeSite::default();
    visited.insert(site);
    points.push(Point::ORIGIN);

    for _ in 0..params.steps {
        let candidates: SmallVec<[LatticeSite; 4]> = LatticeDir::ALL
            .iter()
            .map(|&d| site.step(d))
            .filter(|s| !visited.contains(s))
            .collect();
        if candidates.is_empty() {
            tracing::debug!(
                requested = params.steps,
                taken = points.len() - 1,
                seed = params.seed,
                "self-avoiding walk trapped"
            );
            break;
        }
        site = candidates[rng.next_index(candidates.len())];
        visited.insert(site);
        points.push(Point::new(
            site.i as f64 * params.step_length,
            site.j as f64 * params.step_length,
        ));
    }
    points
}
