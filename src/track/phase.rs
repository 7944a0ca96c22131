use crate::foundation::math::clamp01;

/// Index of the phase a global progress value falls in.
///
/// The `[0, 1]` progress range is split into `phase_count` equal buckets;
/// `progress = 1.0` belongs to the last bucket rather than a phantom one past
/// the end. A `phase_count` of zero is treated as one phase so the helper
/// stays total.
pub fn active_phase(progress: f64, phase_count: usize) -> usize {
    let n = phase_count.max(1);
    let p = clamp01(progress);
    ((p * n as f64).floor() as usize).min(n - 1)
}

/// Progress through the active phase, normalized to `[0, 1]`.
///
/// Rescales the distance from the active phase's lower edge by the phase
/// width, so each phase sweeps 0..1 as the global value crosses its bucket.
pub fn phase_local_progress(progress: f64, phase_count: usize) -> f64 {
    let n = phase_count.max(1);
    let p = clamp01(progress);
    let idx = active_phase(p, n);
    clamp01((p - idx as f64 / n as f64) * n as f64)
}

/// Progress through an arbitrary phase's window, saturating outside it.
///
/// Phase `index` owns the window `[index/n, (index+1)/n]`: 0 before the
/// window opens, 1 after it closes, linear in between. Useful for driving
/// several phases from one global value at once.
pub fn phase_progress(progress: f64, index: usize, phase_count: usize) -> f64 {
    let n = phase_count.max(1);
    let p = clamp01(progress);
    clamp01((p - index as f64 / n as f64) * n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_phase_buckets_evenly() {
        assert_eq!(active_phase(0.0, 4), 0);
        assert_eq!(active_phase(0.24, 4), 0);
        assert_eq!(active_phase(0.25, 4), 1);
        assert_eq!(active_phase(0.5, 4), 2);
        assert_eq!(active_phase(0.75, 4), 3);
        assert_eq!(active_phase(0.999, 4), 3);
    }

    #[test]
    fn active_phase_clamps_at_the_ends() {
        assert_eq!(active_phase(1.0, 4), 3);
        assert_eq!(active_phase(2.5, 4), 3);
        assert_eq!(active_phase(-1.0, 4), 0);
    }

    #[test]
    fn zero_phase_count_degrades_to_a_single_phase() {
        assert_eq!(active_phase(0.7, 0), 0);
        assert_eq!(phase_local_progress(0.7, 0), 0.7);
    }

    #[test]
    fn local_progress_restarts_at_each_boundary() {
        assert_eq!(phase_local_progress(0.5, 4), 0.0);
        assert!((phase_local_progress(0.375, 4) - 0.5).abs() < 1e-12);
        assert!((phase_local_progress(0.25 - 1e-9, 4) - 1.0).abs() < 1e-6);
        assert_eq!(phase_local_progress(1.0, 4), 1.0);
    }

    #[test]
    fn local_progress_stays_in_unit_interval() {
        for n in [1usize, 2, 3, 4, 7] {
            let mut p = -0.5;
            while p <= 1.5 {
                let local = phase_local_progress(p, n);
                assert!((0.0..=1.0).contains(&local), "n={n} p={p} local={local}");
                p += 0.01;
            }
        }
    }

    #[test]
    fn window_progress_saturates_outside_its_phase() {
        assert_eq!(phase_progress(0.1, 2, 4), 0.0);
        assert_eq!(phase_progress(0.5, 2, 4), 0.0);
        assert!((phase_progress(0.625, 2, 4) - 0.5).abs() < 1e-12);
        assert_eq!(phase_progress(0.75, 2, 4), 1.0);
        assert_eq!(phase_progress(0.9, 2, 4), 1.0);
    }

    #[test]
    fn window_progress_agrees_with_local_in_the_active_phase() {
        for p in [0.0, 0.1, 0.3, 0.55, 0.8, 1.0] {
            let idx = active_phase(p, 4);
            let a = phase_local_progress(p, 4);
            let b = phase_progress(p, idx, 4);
            assert!((a - b).abs() < 1e-12, "p={p}");
        }
    }
}
