/// Easing curves over normalized progress `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Fast start, decelerating to rest: `1 - (1 - t)^3`.
    OutCubic,
    /// Slow start and end.
    InOutCubic,
}

impl Ease {
    /// Eased value for progress `t`; input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_cubic_front_loads_progress() {
        assert!((Ease::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
        assert!(Ease::OutCubic.apply(0.1) > 0.25);
        assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
        assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    }

    #[test]
    fn in_out_cubic_is_symmetric_about_midpoint() {
        assert_eq!(Ease::InOutCubic.apply(0.5), 0.5);
        assert!((Ease::InOutCubic.apply(0.25) - 0.0625).abs() < 1e-12);
        for t in [0.1, 0.2, 0.3, 0.4] {
            let sum = Ease::InOutCubic.apply(t) + Ease::InOutCubic.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert_eq!(Ease::InOutCubic.apply(1.5), 1.0);
    }
}
