//! # Galactic Density Model
//!
//! How crowded a sector is, as an integer in `[0, 256]`.
//!
//! The galaxy is modelled as a flat disc in the X/Y plane. Density falls off
//! linearly with distance from the galactic core and with height above the
//! plane. Sol's sector is the origin; the core lies `SOL_CORE_DISTANCE`
//! sectors along +X.
//!
//! Everything here is integer arithmetic so the density, and therefore the
//! system count of every sector, is identical on every platform.

/// Disc radius in sectors (50,000 ly).
pub const GALAXY_RADIUS: i64 = 6250;

/// Distance from Sol's sector to the galactic core, in sectors (26,000 ly).
pub const SOL_CORE_DISTANCE: i64 = 3250;

/// Height above the plane at which density reaches zero, in sectors.
pub const DISC_HALF_THICKNESS: i64 = 250;

/// Full density.
pub const MAX_DENSITY: u32 = 256;

/// Radial density lost between the core and the rim.
const RADIAL_FALLOFF: i64 = 192;

/// Integer square root, rounded down.
#[must_use]
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    // Newton iteration from an upper bound; monotonically decreasing
    let mut x = n;
    let mut y = x / 2 + x % 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Density of the sector at `(x, y, z)`, in `[0, 256]`.
///
/// # Example
///
/// ```rust
/// use galaxis_procedural::galaxy::{sector_density, MAX_DENSITY};
///
/// let sol = sector_density(0, 0, 0);
/// assert!(sol > 0 && sol <= MAX_DENSITY);
/// assert_eq!(sector_density(0, 0, 10_000), 0);
/// ```
#[must_use]
pub fn sector_density(x: i32, y: i32, z: i32) -> u32 {
    let dx = i64::from(x) - SOL_CORE_DISTANCE;
    let dy = i64::from(y);
    let r_squared = dx
        .unsigned_abs()
        .saturating_mul(dx.unsigned_abs())
        .saturating_add(dy.unsigned_abs().saturating_mul(dy.unsigned_abs()));
    #[allow(clippy::cast_possible_wrap)]
    let r = isqrt(r_squared) as i64;
    if r > GALAXY_RADIUS {
        return 0;
    }

    let radial = i64::from(MAX_DENSITY) - r * RADIAL_FALLOFF / GALAXY_RADIUS;
    let height = i64::from(z).abs();
    let vertical =
        (i64::from(MAX_DENSITY) - height * i64::from(MAX_DENSITY) / DISC_HALF_THICKNESS).max(0);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let density = ((radial * vertical) >> 8) as u32;
    density.min(MAX_DENSITY)
}
