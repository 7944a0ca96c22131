use scrolly::{ScrollKey, SimScript, TrackMode, run_script};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // A steady scroll through a 3000px sticky section in a 1000px viewport:
    // 2000px of scrub distance covered over 100 frames, then idle frames
    // until the smoothed value settles on the target exactly.
    let scroll: Vec<ScrollKey> = (0..=100)
        .map(|f| ScrollKey {
            frame: f,
            y: f as f64 * 20.0,
        })
        .collect();

    let script = SimScript {
        viewport_height: 1000.0,
        element_top: 0.0,
        element_height: 3000.0,
        mode: TrackMode::Sticky,
        smoothing: 0.1,
        offset_px: 0.0,
        phase_count: 4,
        frames: 180,
        scroll,
    };

    let samples = run_script(&script)?;

    for f in [0usize, 25, 50, 75, 100, 140, 179] {
        let s = &samples[f];
        println!(
            "frame {:3}: scroll {:6.1}  raw {:.4}  smooth {:.4}  phase {} ({:.4})",
            s.frame, s.scroll_y, s.progress, s.smooth_progress, s.phase, s.phase_local
        );
    }

    Ok(())
}
