use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::host::sim::SimHost;
use crate::host::source::ViewEvent;
use crate::session::story::StorySession;
use crate::sim::script::SimScript;
use crate::track::phase::{active_phase, phase_local_progress};

/// Per-frame record produced by a simulation run.
///
/// Phase fields follow the smoothed value, like the presentation layers the
/// simulation stands in for.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimSample {
    pub frame: u64,
    pub scroll_y: f64,
    pub progress: f64,
    pub smooth_progress: f64,
    pub phase: usize,
    pub phase_local: f64,
}

#[tracing::instrument(skip(script))]
/// Run a script through a real host and session, one sample per frame.
///
/// Each frame applies the scroll key landing on it (if any), notifies the
/// session, ticks the smoother once, and records the session's view of the
/// world. Samples come back in frame order.
pub fn run_script(script: &SimScript) -> ScrollyResult<Vec<SimSample>> {
    script.validate()?;
    let host = SimHost::new(
        script.element_top,
        script.element_height,
        script.viewport_height,
    )
    .map_err(|e| ScrollyError::simulation(format!("build script host: {e}")))?;
    let mut session = StorySession::attach(host, script.story_opts())
        .map_err(|e| ScrollyError::simulation(format!("attach script session: {e}")))?;

    let mut keys = script.scroll.iter().peekable();
    let mut samples = Vec::with_capacity(script.frames as usize);
    for frame in 0..script.frames {
        if let Some(key) = keys.peek()
            && key.frame == frame
        {
            session.source_mut().set_scroll_y(key.y);
            session.notify(ViewEvent::Scrolled);
            keys.next();
        }

        let smooth = session.on_frame();
        samples.push(SimSample {
            frame,
            scroll_y: session.source().scroll_y(),
            progress: session.progress(),
            smooth_progress: smooth,
            phase: active_phase(smooth, script.phase_count),
            phase_local: phase_local_progress(smooth, script.phase_count),
        });
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::script::ScrollKey;
    use crate::track::sampler::TrackMode;

    fn sweep_script() -> SimScript {
        SimScript {
            viewport_height: 1000.0,
            element_top: 0.0,
            element_height: 2000.0,
            mode: TrackMode::Sticky,
            smoothing: 0.1,
            offset_px: 0.0,
            phase_count: 4,
            frames: 200,
            scroll: vec![
                ScrollKey { frame: 0, y: 0.0 },
                ScrollKey { frame: 20, y: 250.0 },
                ScrollKey { frame: 40, y: 500.0 },
                ScrollKey { frame: 60, y: 750.0 },
                ScrollKey { frame: 80, y: 1000.0 },
            ],
        }
    }

    #[test]
    fn sweep_produces_monotone_lagging_samples() {
        let samples = run_script(&sweep_script()).unwrap();
        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0].progress, 0.0);
        assert_eq!(samples[0].smooth_progress, 0.0);

        for pair in samples.windows(2) {
            assert!(pair[1].progress >= pair[0].progress, "raw is monotone");
            assert!(
                pair[1].smooth_progress >= pair[0].smooth_progress,
                "smooth is monotone for a monotone target"
            );
        }
        for s in &samples {
            assert!((0.0..=1.0).contains(&s.smooth_progress));
            assert!(s.smooth_progress <= s.progress + 1e-12, "smooth lags raw");
        }
    }

    #[test]
    fn sweep_settles_exactly_at_the_end() {
        let samples = run_script(&sweep_script()).unwrap();
        let last = samples.last().unwrap();
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.smooth_progress, 1.0);
        assert_eq!(last.phase, 3);
        assert_eq!(last.phase_local, 1.0);
    }

    #[test]
    fn sweep_visits_every_phase_in_order() {
        let samples = run_script(&sweep_script()).unwrap();
        assert_eq!(samples[0].phase, 0);
        for pair in samples.windows(2) {
            let step = pair[1].phase as i64 - pair[0].phase as i64;
            assert!(step == 0 || step == 1, "phases advance without skips");
        }
        assert!(samples.iter().any(|s| s.phase == 1));
        assert!(samples.iter().any(|s| s.phase == 2));
        assert_eq!(samples.last().unwrap().phase, 3);
    }

    #[test]
    fn scroll_holds_between_keys() {
        let samples = run_script(&sweep_script()).unwrap();
        assert_eq!(samples[10].scroll_y, 0.0);
        assert_eq!(samples[50].scroll_y, 500.0);
        assert_eq!(samples[199].scroll_y, 1000.0);
    }

    #[test]
    fn viewport_mode_scripts_run_too() {
        let script = SimScript {
            viewport_height: 800.0,
            element_top: 800.0,
            element_height: 600.0,
            mode: TrackMode::Viewport,
            smoothing: 1.0,
            offset_px: 0.0,
            phase_count: 1,
            frames: 3,
            scroll: vec![ScrollKey { frame: 1, y: 400.0 }],
        };
        let samples = run_script(&script).unwrap();
        // Element top starts one viewport below the fold, then crosses half.
        assert_eq!(samples[0].progress, 0.0);
        assert_eq!(samples[1].progress, 0.5);
        assert_eq!(samples[1].smooth_progress, 0.5);
    }

    #[test]
    fn invalid_scripts_are_refused() {
        let mut script = sweep_script();
        script.frames = 0;
        assert!(run_script(&script).is_err());
    }
}
