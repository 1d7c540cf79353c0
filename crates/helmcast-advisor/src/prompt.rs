//! Prompt assembly for sail-plan advice.
//!
//! Pure string templating: identical inputs produce byte-identical prompts.
//! Vessel and location text is interpolated verbatim.

use helmcast_weather::WindSample;

/// Closing instruction appended to every advice prompt.
const ADVICE_REQUEST: &str = "Based on these wind conditions, which of my sails should I use? \
Please include any safety considerations and general tips for the day.";

/// Build the advice prompt from vessel details and the wind summary.
pub fn sail_plan_prompt(
    vessel_model: &str,
    available_sails: &str,
    location: &str,
    target_date: &str,
    wind: &[WindSample],
) -> String {
    let mut prompt = String::new();

    prompt.push_str("I am planning a sailing trip and need sail selection advice.\n\n");
    prompt.push_str(&format!("Boat model: {}\n", vessel_model));
    prompt.push_str(&format!("Available sails: {}\n", available_sails));
    prompt.push_str(&format!("Location: {}\n", location));
    prompt.push_str(&format!("Date: {}\n\n", target_date));

    prompt.push_str("Wind forecast (3-hour intervals):\n");
    for sample in wind {
        prompt.push_str(&format!(
            "{}: Speed {} m/s, Direction {}°\n",
            sample.time, sample.speed, sample.direction
        ));
    }

    prompt.push('\n');
    prompt.push_str(ADVICE_REQUEST);

    prompt
}
