//! Common test utilities

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

/// One shift entry as the web layer sends it (numbers as strings)
pub fn shift(name: &str, location: &str, date: &str, sigs: u32, hours: f64) -> Value {
    json!({
        "name": name,
        "location": location,
        "date": date,
        "num_signatures": sigs.to_string(),
        "total_hours": hours.to_string(),
        "start_time": "14:00",
        "end_time": "19:00",
    })
}

/// Shift with explicit start and end times
pub fn timed_shift(name: &str, date: &str, start: &str, end: &str) -> Value {
    json!({
        "name": name,
        "location": "Library",
        "date": date,
        "num_signatures": 12,
        "total_hours": 4,
        "start_time": start,
        "end_time": end,
    })
}

/// Full request document
pub fn request(
    shifts: Vec<Value>,
    name: &str,
    location: &str,
    measurement: &str,
    all_dates: &[&str],
) -> Value {
    json!({
        "shift_info": shifts,
        "input": {
            "name": name,
            "location": location,
            "measurement": measurement,
        },
        "all_dates": all_dates,
    })
}

/// Alice on two dates, Bob on one
pub fn sample_shifts() -> Vec<Value> {
    vec![
        shift("Alice", "Library", "06/12/2019", 10, 5.0),
        shift("Alice", "Market", "06/13/2019", 20, 5.0),
        shift("Bob", "Library", "06/12/2019", 5, 5.0),
    ]
}

pub const SAMPLE_DATES: [&str; 2] = ["06/12/2019", "06/13/2019"];

/// Write a request to `dir/name.json`
pub fn write_request(dir: &Path, name: &str, request: &Value) -> std::io::Result<PathBuf> {
    let path = dir.join(format!("{}.json", name));
    std::fs::write(&path, serde_json::to_string_pretty(request)?)?;
    Ok(path)
}
