use std::process::Command;

use serde_json::Value;

fn run_sim(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .env("PENTOMINO_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success(), "sim exited with {:?}", output.status);
    serde_json::from_slice(&output.stdout).expect("sim output is not JSON")
}

#[test]
fn sim_prints_game_summary() {
    let v = run_sim(&["7"]);
    assert_eq!(v["seed"], 7);
    assert_eq!(v["board"]["width"], 10);
    assert_eq!(v["board"]["height"], 6);

    let winner = v["winner"].as_str().unwrap();
    assert!(winner == "P1" || winner == "P2");

    let placements = v["placements"].as_array().unwrap();
    assert!(!placements.is_empty());
    assert_eq!(v["occupied"].as_u64().unwrap() as usize, 5 * placements.len());
    assert_eq!(placements[0]["player"], "P1");
}

#[test]
fn sim_is_deterministic_per_seed() {
    let a = run_sim(&["42", "--width", "8", "--height", "8"]);
    let b = run_sim(&["42", "--width", "8", "--height", "8"]);
    assert_eq!(a, b);
    assert_eq!(a["board"]["width"], 8);
}
