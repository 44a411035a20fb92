#![allow(dead_code)]
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rulinear::sparse::DesignMatrix;
use rulinear::{Dataset, Feature, Function};

pub const N_FEATURES: usize = 8;
pub const L: usize = 40;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random sparse rows, every row holding at least one feature.
pub fn random_rows(rng: &mut StdRng, l: usize, n_features: usize) -> Vec<Vec<Feature>> {
    let mut rows = Vec::with_capacity(l);
    for _ in 0..l {
        let mut row = Vec::new();
        for j in 1..=n_features {
            if rng.gen_bool(0.4) {
                row.push(Feature::new(j, rng.gen_range(-1.0..1.0)));
            }
        }
        if row.is_empty() {
            let j = rng.gen_range(1..=n_features);
            row.push(Feature::new(j, rng.gen_range(0.5..1.0)));
        }
        rows.push(row);
    }
    rows
}

pub fn classification(seed: u64) -> Dataset {
    let mut rng = rng(seed);
    let x = random_rows(&mut rng, L, N_FEATURES);
    let y = (0..L)
        .map(|_| if rng.gen_bool(0.5) { 1.0 } else { -1.0 })
        .collect();
    Dataset::with_bias(x, y, N_FEATURES, 1.0).unwrap()
}

pub fn regression(seed: u64) -> Dataset {
    let mut rng = rng(seed);
    let x = random_rows(&mut rng, L, N_FEATURES);
    let y = (0..L).map(|_| rng.gen_range(-2.0..2.0)).collect();
    Dataset::with_bias(x, y, N_FEATURES, 1.0).unwrap()
}

pub fn random_vector(rng: &mut StdRng, n: usize, scale: f64) -> Vec<f64> {
    (0..n).map(|_| scale * rng.gen_range(-1.0..1.0)).collect()
}

pub fn random_costs(rng: &mut StdRng, l: usize) -> Vec<f64> {
    (0..l).map(|_| rng.gen_range(0.5..2.0)).collect()
}

/// Scores `w'x_i` of all instances.
pub fn scores(data: &Dataset, w: &[f64]) -> Vec<f64> {
    let mut z = vec![0.0; data.l()];
    data.x_v(w, &mut z);
    z
}

/// Runs `evaluate` and `gradient` at `w`.
pub fn value_and_gradient(fun: &mut dyn Function, w: &[f64]) -> (f64, Vec<f64>) {
    let mut g = vec![0.0; fun.nr_variable()];
    let f = fun.evaluate(w).unwrap();
    fun.gradient(w, &mut g).unwrap();
    (f, g)
}

pub fn axpy(a: f64, x: &[f64], y: &[f64]) -> Vec<f64> {
    x.iter().zip(y).map(|(xi, yi)| a * xi + yi).collect()
}

pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(xi, yi)| xi * yi).sum()
}

pub fn norm(x: &[f64]) -> f64 {
    dot(x, x).sqrt()
}
