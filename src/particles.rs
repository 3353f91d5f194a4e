//! Ambient particle field. Purely decorative; nothing reads it back.

pub const PARTICLE_MIN_DURATION_SECONDS: f64 = 10.0;
pub const PARTICLE_DURATION_SPREAD_SECONDS: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub duration_seconds: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "--from-x: {:.1}px; --from-y: {:.1}px; --to-x: {:.1}px; --to-y: {:.1}px; animation-duration: {:.2}s;",
            self.from.0, self.from.1, self.to.0, self.to.1, self.duration_seconds
        )
    }
}

/// Places `count` particles inside `viewport` using `random`, which should
/// yield values in `[0, 1)` the way `Math.random` does.
pub fn scatter(count: usize, viewport: (f64, f64), mut random: impl FnMut() -> f64) -> Vec<Particle> {
    let (width, height) = (viewport.0.max(0.0), viewport.1.max(0.0));
    let mut unit = move || {
        let value = random();
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };

    (0..count)
        .map(|_| Particle {
            from: (unit() * width, unit() * height),
            to: (unit() * width, unit() * height),
            duration_seconds: PARTICLE_MIN_DURATION_SECONDS
                + unit() * PARTICLE_DURATION_SPREAD_SECONDS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut values = values.into_iter().cycle();
        move || values.next().unwrap_or(0.0)
    }

    #[test]
    fn particles_stay_inside_viewport_and_duration_range() {
        let particles = scatter(50, (800.0, 600.0), sequence(vec![0.0, 0.25, 0.5, 0.999]));

        assert_eq!(particles.len(), 50);
        for particle in &particles {
            for (x, y) in [particle.from, particle.to] {
                assert!((0.0..=800.0).contains(&x));
                assert!((0.0..=600.0).contains(&y));
            }
            assert!(particle.duration_seconds >= PARTICLE_MIN_DURATION_SECONDS);
            assert!(
                particle.duration_seconds
                    <= PARTICLE_MIN_DURATION_SECONDS + PARTICLE_DURATION_SPREAD_SECONDS
            );
        }
    }

    #[test]
    fn out_of_range_random_values_are_clamped() {
        let particles = scatter(1, (100.0, 100.0), sequence(vec![2.0, -1.0, f64::NAN]));
        let particle = particles[0];

        assert_eq!(particle.from, (100.0, 0.0));
        assert_eq!(particle.to, (0.0, 100.0));
        assert_eq!(particle.duration_seconds, PARTICLE_MIN_DURATION_SECONDS);
    }

    #[test]
    fn zero_count_renders_nothing() {
        assert!(scatter(0, (100.0, 100.0), || 0.5).is_empty());
    }

    #[test]
    fn style_exposes_positions_as_custom_properties() {
        let particle = Particle {
            from: (1.0, 2.0),
            to: (3.0, 4.0),
            duration_seconds: 12.5,
        };
        assert_eq!(
            particle.style(),
            "--from-x: 1.0px; --from-y: 2.0px; --to-x: 3.0px; --to-y: 4.0px; animation-duration: 12.50s;"
        );
    }
}
