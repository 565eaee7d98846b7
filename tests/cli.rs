use std::{fs, process::Command};

use anyhow::Result;
use serde_json::Value;

const DOCUMENT: &str = r##"{
    "exportDate": "2025-03-16T10:00:00.000Z",
    "habits": [
        {
            "id": 1,
            "name": "Guitar",
            "color": "#ef4444",
            "dailyGoalHours": 1,
            "logs": [
                { "id": 1, "habitId": 1, "date": "2025-03-15", "hoursLogged": 1.5 },
                { "id": 2, "habitId": 1, "date": "2025-03-16", "hoursLogged": 0.5 }
            ]
        }
    ]
}"##;

#[test]
fn test_logging_keeps_json_output_clean() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let document = dir.path().join("habits.json");
    fs::write(&document, DOCUMENT)?;

    let output = Command::new(env!("CARGO_BIN_EXE_habitstreak"))
        .env("XDG_STATE_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(&document)
        .args(["--today", "16/03/2025", "--log", "--json", "streaks"])
        .output()?;

    assert!(output.status.success(), "{output:?}");

    let streaks: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(streaks[0]["name"], "Guitar");
    assert_eq!(streaks[0]["currentStreak"], 2);
    assert_eq!(streaks[0]["longestStreak"], 2);

    assert!(String::from_utf8_lossy(&output.stderr).contains("Counting streaks up to 2025-03-16"));
    Ok(())
}
