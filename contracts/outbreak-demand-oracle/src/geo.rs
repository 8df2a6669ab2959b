//! Great-circle distance in fixed-point integer arithmetic. Contract code
//! carries no floating point, so coordinates arrive as micro-degrees and all
//! trigonometry runs on scale-1e9 fixed-point values.

/// Fixed-point scale: 1.0 == 1e9.
const SCALE: i128 = 1_000_000_000;
const PI_FP: i128 = 3_141_592_654;
const HALF_PI_FP: i128 = 1_570_796_327;
/// sqrt(2)/2, the crossover point for the asin identity.
const SQRT_HALF_FP: i128 = 707_106_781;

const EARTH_RADIUS_M: i128 = 6_371_000;
const MICRODEG_PER_DEG: i128 = 1_000_000;

fn mul_fp(a: i128, b: i128) -> i128 {
    a * b / SCALE
}

/// Micro-degrees to fixed-point radians.
fn rad_fp(deg_e6: i64) -> i128 {
    (deg_e6 as i128) * PI_FP / (180 * MICRODEG_PER_DEG)
}

/// Maclaurin sine, terms through x^13. Accurate to ~2e-5 over [-pi, pi].
fn sin_fp(x: i128) -> i128 {
    let x2 = mul_fp(x, x);
    let mut term = x;
    let mut sum = x;
    let mut k: i128 = 1;
    while k <= 6 {
        term = -mul_fp(term, x2) / ((2 * k) * (2 * k + 1));
        sum += term;
        k += 1;
    }
    sum
}

fn cos_fp(x: i128) -> i128 {
    sin_fp(HALF_PI_FP - x)
}

/// Fixed-point square root of a value in [0, SCALE].
fn sqrt_fp(x: i128) -> i128 {
    if x <= 0 {
        return 0;
    }
    sqrt_u128((x as u128) * (SCALE as u128)) as i128
}

/// Newton's method integer square root.
fn sqrt_u128(x: u128) -> u128 {
    if x == 0 {
        return 0;
    }

    let mut z = x;
    let mut y = (x + 1) / 2;

    while y < z {
        z = y;
        y = (x / y + y) / 2;
    }

    z
}

/// Maclaurin arcsine, valid for arguments up to sqrt(2)/2.
fn asin_series(x: i128) -> i128 {
    let x2 = mul_fp(x, x);
    let x3 = mul_fp(x2, x);
    let x5 = mul_fp(x3, x2);
    let x7 = mul_fp(x5, x2);
    let x9 = mul_fp(x7, x2);
    let x11 = mul_fp(x9, x2);
    let x13 = mul_fp(x11, x2);

    x + x3 / 6
        + 3 * x5 / 40
        + 15 * x7 / 336
        + 105 * x9 / 3456
        + 945 * x11 / 42240
        + 10395 * x13 / 599040
}

fn asin_fp(x: i128) -> i128 {
    if x >= SCALE {
        return HALF_PI_FP;
    }
    if x > SQRT_HALF_FP {
        // asin(x) = pi/2 - asin(sqrt(1 - x^2)), keeping the series argument small
        let y = sqrt_fp(SCALE - mul_fp(x, x));
        return HALF_PI_FP - asin_series(y);
    }
    asin_series(x)
}

/// Haversine distance in meters between two micro-degree coordinates.
pub fn haversine_m(lat1_e6: i64, lon1_e6: i64, lat2_e6: i64, lon2_e6: i64) -> u64 {
    let phi1 = rad_fp(lat1_e6);
    let phi2 = rad_fp(lat2_e6);
    let half_dphi = rad_fp(lat2_e6 - lat1_e6) / 2;
    let half_dlam = rad_fp(lon2_e6 - lon1_e6) / 2;

    let sin_dphi = sin_fp(half_dphi);
    let sin_dlam = sin_fp(half_dlam);
    let cross = mul_fp(cos_fp(phi1), cos_fp(phi2));

    // The squares are kept at scale 1e18 so short distances survive rounding;
    // the square root lands back on the 1e9 scale.
    let mut a = sin_dphi * sin_dphi + cross * (sin_dlam * sin_dlam) / SCALE;
    if a < 0 {
        a = 0;
    }
    if a > SCALE * SCALE {
        a = SCALE * SCALE;
    }

    let sin_half_c = sqrt_u128(a as u128) as i128;
    let c = 2 * asin_fp(sin_half_c);
    (EARTH_RADIUS_M * c / SCALE) as u64
}
