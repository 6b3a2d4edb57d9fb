//! WASM bindings for timeprogram-core.
//!
//! Exposes interval normalization, the device register codec and the per-day
//! coverage bar to JavaScript via `wasm-bindgen`. All complex types are passed
//! as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timeprogram-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/timeprogram-card/wasm/ \
//!   target/wasm32-unknown-unknown/release/timeprogram_wasm.wasm
//! ```

use serde::Serialize;
use timeprogram_core::picker::TimePicker;
use timeprogram_core::{coverage, register, Interval, TimeOfDay, WeekSchedule};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CheckedRangeDto {
    start: String,
    stop: String,
    start_minutes: u32,
    stop_minutes: u32,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_intervals_json(json: &str) -> Result<Vec<Interval>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid intervals JSON: {}", e)))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Normalize one day's intervals.
///
/// `intervals_json` is a JSON array of `{start, stop, on}` objects with
/// `HH:MM` times. Returns the normalized array in display order.
#[wasm_bindgen(js_name = "normalize")]
pub fn normalize(intervals_json: &str) -> Result<String, JsValue> {
    let intervals = parse_intervals_json(intervals_json)?;
    to_json(&timeprogram_core::normalize(&intervals))
}

/// Strip a week schedule down to the form written back to the host:
/// "on" intervals only, each day in display order.
#[wasm_bindgen(js_name = "persistable")]
pub fn persistable(week_json: &str) -> Result<String, JsValue> {
    let week = WeekSchedule::from_json(week_json).map_err(js_err)?;
    to_json(&week.persistable())
}

/// Encode a week schedule (JSON keyed `mon`..`sun`) into the 168-digit
/// device register string.
#[wasm_bindgen(js_name = "encodeRegister")]
pub fn encode_register(week_json: &str) -> Result<String, JsValue> {
    let week = WeekSchedule::from_json(week_json).map_err(js_err)?;
    Ok(register::encode(&week))
}

/// Decode a device register string into week schedule JSON.
#[wasm_bindgen(js_name = "decodeRegister")]
pub fn decode_register(hex: &str) -> Result<String, JsValue> {
    let week = register::decode(hex).map_err(js_err)?;
    to_json(&week)
}

/// Quarter-hour coverage of one day.
///
/// Returns a JSON array of 96 strings, each `"on"`, `"off"` or `"none"`.
#[wasm_bindgen(js_name = "coverageBar")]
pub fn coverage_bar(intervals_json: &str) -> Result<String, JsValue> {
    let intervals = parse_intervals_json(intervals_json)?;
    to_json(&coverage::bar(&intervals)[..])
}

/// Check a picked `start`/`stop` pair the way the stop picker does.
///
/// Fails when `stop` is not after `start`; a `stop` of `"00:00"` means end of
/// day. Returns `{start, stop, start_minutes, stop_minutes}`.
#[wasm_bindgen(js_name = "checkRange")]
pub fn check_range(start: &str, stop: &str) -> Result<String, JsValue> {
    let start: TimeOfDay = start.parse().map_err(js_err)?;
    let stop: TimeOfDay = stop.parse().map_err(js_err)?;
    let stop = TimePicker::new(stop, Some(start)).confirm().map_err(js_err)?;

    to_json(&CheckedRangeDto {
        start: start.to_string(),
        stop: stop.to_string(),
        start_minutes: start.minutes(),
        stop_minutes: stop.end_minutes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_cuts_off_span() {
        let out = normalize(
            r#"[{"start":"08:00","stop":"12:00","on":true},{"start":"10:00","stop":"11:00","on":false}]"#,
        )
        .unwrap();
        assert_eq!(
            out,
            r#"[{"start":"08:00","stop":"10:00","on":true},{"start":"10:00","stop":"11:00","on":false},{"start":"11:00","stop":"12:00","on":true}]"#
        );
    }

    #[test]
    fn persistable_drops_off_intervals_and_orders_days() {
        let out = persistable(
            r#"{"mon":{"timeslots":[{"start":"18:00","stop":"20:00","on":true},{"start":"10:00","stop":"11:00","on":false},{"start":"06:00","stop":"08:00","on":true}]}}"#,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json["mon"]["timeslots"],
            serde_json::json!([
                {"start":"06:00","stop":"08:00","on":true},
                {"start":"18:00","stop":"20:00","on":true}
            ])
        );
    }

    #[test]
    fn register_roundtrip_through_json() {
        let hex = encode_register(
            r#"{"wed":{"timeslots":[{"start":"12:00","stop":"13:30","on":true}]}}"#,
        )
        .unwrap();
        assert_eq!(hex.len(), 168);

        let json: serde_json::Value = serde_json::from_str(&decode_register(&hex).unwrap()).unwrap();
        assert_eq!(json["wed"]["timeslots"][0]["stop"], "13:30");
    }

    #[test]
    fn coverage_bar_has_96_slots() {
        let out = coverage_bar(r#"[{"start":"23:00","stop":"00:00","on":true}]"#).unwrap();
        let slots: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(slots.len(), 96);
        assert_eq!(slots[91], "none");
        assert!(slots[92..].iter().all(|s| s == "on"));
    }

    #[test]
    fn check_range_accepts_midnight_stop() {
        let out = check_range("22:00", "00:00").unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["stop_minutes"], 1440);
    }
}
