//! Trip-planning stub tools: location, time, weather, traffic, beaches.
//!
//! All of these return canned or randomized strings; none of them reach any
//! real service. They exist to exercise the loop.

use async_trait::async_trait;
use chrono::Local;
use rand::RngExt;

use crate::error::Result;
use crate::tools::traits::Tool;

const WIND_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Reports the user's (fixed) current location.
pub struct LocationTool;

#[async_trait]
impl Tool for LocationTool {
    fn name(&self) -> &str {
        "get_location"
    }

    fn description(&self) -> &str {
        "Get the user's current location."
    }

    fn example_argument(&self) -> &str {
        "here"
    }

    async fn invoke(&self, _argument: &str) -> Result<String> {
        Ok("Naousa, Paros, Greece".to_string())
    }
}

/// Reports the current local date and time.
pub struct TimeTool;

#[async_trait]
impl Tool for TimeTool {
    fn name(&self) -> &str {
        "get_time"
    }

    fn description(&self) -> &str {
        "Get current date and time."
    }

    fn example_argument(&self) -> &str {
        "now"
    }

    async fn invoke(&self, _argument: &str) -> Result<String> {
        Ok(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Reports simulated weather for a location.
pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get weather info including wind direction and waves."
    }

    fn example_argument(&self) -> &str {
        "Naousa"
    }

    async fn invoke(&self, _argument: &str) -> Result<String> {
        let mut rng = rand::rng();
        let direction = WIND_DIRECTIONS[rng.random_range(0..WIND_DIRECTIONS.len())];
        let wind_speed_kmh: u32 = rng.random_range(10..=30);
        let wave_height_m = (rng.random_range(0.2_f64..1.5) * 10.0).round() / 10.0;
        let temperature_c: u32 = rng.random_range(26..=32);

        Ok(format!(
            "Wind: {wind_speed_kmh} km/h from {direction}, Waves: {wave_height_m} m, Temp: {temperature_c}°C"
        ))
    }
}

/// Estimates drive time between two places.
pub struct TrafficTool;

#[async_trait]
impl Tool for TrafficTool {
    fn name(&self) -> &str {
        "get_traffic"
    }

    fn description(&self) -> &str {
        "Estimate drive time between two places. Input format: 'Naousa to Kolymbithres'."
    }

    fn example_argument(&self) -> &str {
        "Naousa to Kolymbithres"
    }

    async fn invoke(&self, argument: &str) -> Result<String> {
        // Malformed input gets a usage hint as the observation, not an error,
        // so the model can correct itself on the next turn.
        let Some((origin, destination)) = argument.split_once(" to ") else {
            return Ok("Please specify in the form 'Naousa to Kolymbithres'".to_string());
        };
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Ok("Please specify in the form 'Naousa to Kolymbithres'".to_string());
        }

        let minutes: u32 = rand::rng().random_range(5..=25);
        Ok(format!(
            "Estimated drive time from {origin} to {destination}: {minutes} minutes"
        ))
    }
}

/// Lists beaches near a location with their orientations.
pub struct BeachesTool;

#[async_trait]
impl Tool for BeachesTool {
    fn name(&self) -> &str {
        "list_beaches"
    }

    fn description(&self) -> &str {
        "List beaches near a given location."
    }

    fn example_argument(&self) -> &str {
        "Paros"
    }

    async fn invoke(&self, _argument: &str) -> Result<String> {
        let beaches = [
            ("Kolymbithres", "Northwest"),
            ("Monastiri", "North"),
            ("Santa Maria", "East"),
            ("Golden Beach", "Southeast"),
        ];
        Ok(beaches
            .iter()
            .map(|(name, orientation)| format!("{name} - facing {orientation}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn location_is_fixed() {
        let observation = LocationTool.invoke("").await.unwrap();
        assert_eq!(observation, "Naousa, Paros, Greece");
    }

    #[tokio::test]
    async fn weather_stays_in_simulated_ranges() {
        let observation = WeatherTool.invoke("Naousa").await.unwrap();
        assert!(observation.starts_with("Wind: "));
        assert!(observation.contains("km/h from"));
        assert!(observation.contains("Waves: "));
        assert!(observation.contains("Temp: "));

        let speed: u32 = observation
            .strip_prefix("Wind: ")
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|n| n.parse().ok())
            .expect("wind speed parses");
        assert!((10..=30).contains(&speed));
    }

    #[tokio::test]
    async fn traffic_parses_origin_and_destination() {
        let observation = TrafficTool
            .invoke("Naousa to Kolymbithres")
            .await
            .unwrap();
        assert!(observation.starts_with("Estimated drive time from Naousa to Kolymbithres: "));
        assert!(observation.ends_with(" minutes"));
    }

    #[tokio::test]
    async fn traffic_hints_on_malformed_input() {
        let observation = TrafficTool.invoke("Kolymbithres").await.unwrap();
        assert_eq!(
            observation,
            "Please specify in the form 'Naousa to Kolymbithres'"
        );
    }

    #[tokio::test]
    async fn beaches_list_orientations() {
        let observation = BeachesTool.invoke("Paros").await.unwrap();
        let lines: Vec<&str> = observation.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Kolymbithres - facing Northwest");
    }
}
