//! Scrolling cloud background.
//!
//! Clouds live on a tile the size of the viewport. The tile repeats in
//! every direction and scrolls opposite to the glider's position, so the
//! glider appears to fly while staying at the center of the screen.

use rand::Rng;

use crate::vector::Vector;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    /// Location on the tile, `0 <= x < width`, `0 <= y < height`.
    pub offset: Vector,
    pub radius: f64,
}

#[derive(Clone, Debug)]
pub struct Sky {
    width: f64,
    height: f64,
    clouds: Vec<Cloud>,
}

impl Sky {
    pub fn generate<R: Rng>(rng: &mut R, count: usize, width: f64, height: f64) -> Sky {
        let clouds = (0..count)
            .map(|_| Cloud {
                offset: Vector::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
                radius: rng.random_range(8.0..40.0),
            })
            .collect();
        Sky { width, height, clouds }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    /// Screen location of every cloud with the glider at `position`.
    pub fn scrolled(&self, position: Vector) -> impl Iterator<Item = (Vector, f64)> + '_ {
        self.clouds.iter().map(move |cloud| {
            let x = wrap(cloud.offset.x - position.x, self.width);
            let y = wrap(cloud.offset.y - position.y, self.height);
            (Vector::new(x, y), cloud.radius)
        })
    }
}

/// `value` folded into `[0, extent)`.
pub fn wrap(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn wrap_into_tile() {
        assert_eq!(wrap(5.0, 100.0), 5.0);
        assert_eq!(wrap(105.0, 100.0), 5.0);
        assert_eq!(wrap(-5.0, 100.0), 95.0);
        assert_eq!(wrap(-1e-18, 100.0), 0.0);
    }

    #[test]
    fn generated_clouds_lie_on_tile() {
        let mut rng = StdRng::seed_from_u64(7);
        let sky = Sky::generate(&mut rng, 50, 640.0, 480.0);
        assert_eq!(sky.clouds().len(), 50);
        for cloud in sky.clouds() {
            assert!(cloud.offset.x >= 0.0 && cloud.offset.x < 640.0);
            assert!(cloud.offset.y >= 0.0 && cloud.offset.y < 480.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = Sky::generate(&mut StdRng::seed_from_u64(42), 10, 100.0, 100.0);
        let b = Sky::generate(&mut StdRng::seed_from_u64(42), 10, 100.0, 100.0);
        assert_eq!(a.clouds(), b.clouds());
    }

    #[test]
    fn scrolling_moves_clouds_opposite_to_position() {
        let sky = Sky {
            width: 100.0,
            height: 100.0,
            clouds: vec![Cloud { offset: Vector::new(10.0, 10.0), radius: 5.0 }],
        };
        let at = |p| sky.scrolled(p).next().map(|(v, _)| v);
        assert_eq!(at(Vector::ZERO), Some(Vector::new(10.0, 10.0)));
        assert_eq!(at(Vector::new(5.0, -5.0)), Some(Vector::new(5.0, 15.0)));
        assert_eq!(at(Vector::new(20.0, 0.0)), Some(Vector::new(90.0, 10.0)));
        assert_eq!(at(Vector::new(110.0, 210.0)), Some(Vector::new(0.0, 0.0)));
    }
}
