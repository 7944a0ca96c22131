use scrolly::{StackOpts, global_index, studio_deck};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let deck = studio_deck();
    deck.validate()?;

    let opts = StackOpts::default();
    let phases = deck.hero_phase_count();

    // Print the stacked-card styling for every hero phrase at a few points
    // along the smoothed scrub, the way a frame loop would consume it.
    for step in [0.0f64, 0.25, 0.5, 0.75, 1.0] {
        let g = global_index(step, phases);
        println!("progress {step:.2} (global index {g:.3})");
        for (i, phrase) in deck.hero_in_order().iter().enumerate() {
            let style = opts.style_at(g, i);
            let marker = if style.active { "*" } else { " " };
            println!(
                "  {marker} {:<24} opacity {:.3}  y {:+8.2}px  scale {:.3}  blur {:.2}px",
                phrase.text, style.opacity, style.translate_y, style.scale, style.blur
            );
        }
        println!();
    }

    Ok(())
}
