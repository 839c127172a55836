//! Deterministic lattice value noise and fractal Brownian motion.
//!
//! Every function here is a pure function of its coordinates and seed. Lattice
//! corners are hashed with splitmix64-style mixing, so results are identical on
//! every platform and every run.

use noise::NoiseFn;

/// Hash an integer lattice point with a seed.
pub fn lattice_hash(ix: i64, iy: i64, seed: u64) -> u64 {
    let mut hash = seed;

    hash = hash.wrapping_add(ix as u64);
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xbf58476d1ce4e5b9);

    hash = hash.wrapping_add((iy as u64).wrapping_mul(0x9e3779b97f4a7c15));
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94d049bb133111eb);

    hash ^= hash >> 31;
    hash
}

/// Map the top 53 bits of a hash to [0, 1).
fn unit_from_hash(hash: u64) -> f64 {
    (hash >> 11) as f64 / (1u64 << 53) as f64
}

/// Uniform draw in [0, 1) for one integer tile.
pub fn hash01(x: i64, y: i64, seed: u64) -> f64 {
    unit_from_hash(lattice_hash(x, y, seed))
}

/// Two independent uniform draws in [0, 1) for one integer tile.
pub fn hash01_pair(x: i64, y: i64, seed: u64) -> (f64, f64) {
    let first = lattice_hash(x, y, seed);
    let mut second = first ^ 0xa0761d6478bd642f;
    second ^= second >> 32;
    second = second.wrapping_mul(0xe7037ed1a0b428db);
    second ^= second >> 29;
    (unit_from_hash(first), unit_from_hash(second))
}

fn smoothstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Smooth-interpolated lattice value noise in [-1, 1].
pub fn value_noise2d(x: f64, y: f64, seed: u64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let ix = x0 as i64;
    let iy = y0 as i64;

    let corner = |dx: i64, dy: i64| unit_from_hash(lattice_hash(ix + dx, iy + dy, seed)) * 2.0 - 1.0;

    let ux = smoothstep(x - x0);
    let uy = smoothstep(y - y0);

    let nx0 = lerp(corner(0, 0), corner(1, 0), ux);
    let nx1 = lerp(corner(0, 1), corner(1, 1), ux);
    lerp(nx0, nx1, uy).clamp(-1.0, 1.0)
}

/// Fractional Brownian Motion - multi-octave value noise, normalized to [-1, 1].
///
/// Octave `i` doubles the frequency, halves the amplitude and uses seed `seed + i`.
pub fn fbm(x: f64, y: f64, seed: u64, octaves: u32) -> f64 {
    let octaves = octaves.max(1);
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for i in 0..octaves {
        total += amplitude * value_noise2d(x * frequency, y * frequency, seed.wrapping_add(i as u64));
        max_value += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    total / max_value
}

/// Ridged noise: 1 - |fbm|, sharp crests where the fbm crosses zero.
pub fn ridged(x: f64, y: f64, seed: u64, octaves: u32) -> f64 {
    1.0 - fbm(x, y, seed, octaves).abs()
}

/// Multi-octave value noise as a `noise` crate source.
#[derive(Clone, Copy, Debug)]
pub struct FbmNoise {
    pub seed: u64,
    pub octaves: u32,
}

impl FbmNoise {
    pub fn new(seed: u64, octaves: u32) -> Self {
        Self { seed, octaves: octaves.max(1) }
    }
}

impl NoiseFn<f64, 2> for FbmNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        fbm(point[0], point[1], self.seed, self.octaves)
    }
}

/// Ridged multi-octave noise in [0, 1] as a `noise` crate source.
#[derive(Clone, Copy, Debug)]
pub struct RidgedNoise {
    pub seed: u64,
    pub octaves: u32,
}

impl RidgedNoise {
    pub fn new(seed: u64, octaves: u32) -> Self {
        Self { seed, octaves: octaves.max(1) }
    }
}

impl NoiseFn<f64, 2> for RidgedNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        ridged(point[0], point[1], self.seed, self.octaves)
    }
}

/// A noise source sampled at a fixed frequency (tiles -> noise space).
#[derive(Clone, Copy, Debug)]
pub struct NoiseLayer<N> {
    pub source: N,
    pub frequency: f64,
}

impl<N: NoiseFn<f64, 2>> NoiseLayer<N> {
    pub fn new(source: N, frequency: f64) -> Self {
        Self { source, frequency }
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.source.get([x * self.frequency, y * self.frequency])
    }

    /// Sample remapped from [-1, 1] to [0, 1].
    pub fn sample01(&self, x: f64, y: f64) -> f64 {
        (self.sample(x, y) + 1.0) * 0.5
    }
}
