use std::path::PathBuf;

use scrolly::SimSample;

fn run_scrolly(args: &[&str]) -> std::process::ExitStatus {
    let profile_dir = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let direct_bin = std::env::var_os("CARGO_BIN_EXE_scrolly")
        .map(PathBuf::from)
        .or_else(|| {
            let mut p = PathBuf::from("target").join(profile_dir);
            p.push(if cfg!(windows) {
                "scrolly.exe"
            } else {
                "scrolly"
            });
            if p.is_file() { Some(p) } else { None }
        });

    if let Some(exe) = direct_bin {
        std::process::Command::new(exe).args(args).status().unwrap()
    } else {
        // Fallback: invoke Cargo to build and run the binary target.
        let cargo = std::env::var_os("CARGO")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cargo"));
        std::process::Command::new(cargo)
            .args(["run", "--bin", "scrolly", "--"])
            .args(args)
            .status()
            .unwrap()
    }
}

#[test]
fn cli_simulate_writes_samples() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let script_path = dir.join("script.json");
    let out_path = dir.join("samples.json");
    let _ = std::fs::remove_file(&out_path);

    let json = r#"
{
  "viewport_height": 1000,
  "element_top": 0,
  "element_height": 2000,
  "mode": "sticky",
  "smoothing": 0.5,
  "offset_px": 0,
  "phase_count": 4,
  "frames": 6,
  "scroll": [
    { "frame": 0, "y": 500 }
  ]
}
"#;
    std::fs::write(&script_path, json).unwrap();

    let script_arg = script_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();
    let status = run_scrolly(&[
        "simulate",
        "--in",
        script_arg.as_str(),
        "--out",
        out_arg.as_str(),
    ]);

    assert!(status.success());
    let bytes = std::fs::read(&out_path).unwrap();
    let samples: Vec<SimSample> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(samples.len(), 6);
    assert_eq!(samples[0].progress, 0.5);
}

#[test]
fn cli_seed_then_validate_round_trip() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let deck_path = dir.join("deck.json");
    let _ = std::fs::remove_file(&deck_path);

    let deck_arg = deck_path.to_string_lossy().to_string();
    let seed_status = run_scrolly(&["seed", "--out", deck_arg.as_str()]);
    assert!(seed_status.success());
    assert!(deck_path.exists());

    let validate_status = run_scrolly(&["validate", "--in", deck_arg.as_str()]);
    assert!(validate_status.success());
}
