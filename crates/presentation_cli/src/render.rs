//! Plain-text rendering of forecasts and provider tables

use chrono_tz::Tz;
use domain::{ForecastDay, ForecastReport, Language, UnitSystem};

/// Resolve the payload's timezone, falling back to UTC
pub fn timezone(name: &str) -> Tz {
    name.parse().unwrap_or(Tz::UTC)
}

/// Local calendar date of a day, e.g. `Mon 2023-11-13`
pub fn local_date(day: &ForecastDay, tz: Tz) -> String {
    day.time_utc().map_or_else(
        || "unknown date".to_string(),
        |t| t.with_timezone(&tz).format("%a %Y-%m-%d").to_string(),
    )
}

fn degrees(value: f64, unit: &str) -> String {
    format!("{value}°{unit}")
}

fn wind(day: &ForecastDay) -> Option<String> {
    let speed = day.wind_speed?;
    let mut text = format!("{speed} {}", day.units.wind_speed);
    if let Some(direction) = day.wind_direction {
        text.push_str(&format!(" {direction}"));
    }
    Some(text.trim_end().to_string())
}

/// Current conditions block
pub fn current(report: &ForecastReport) -> String {
    let day = report.current();
    let unit = day.units.temperature;
    let tz = timezone(report.timezone());

    let mut out = format!("Now ({}, {})\n", report.timezone(), local_date(day, tz));
    out.push_str(&format!(
        "  {}  {} (feels like {})  [{}]\n",
        day.summary,
        degrees(day.temperature_round, unit),
        degrees(day.apparent_temperature_round, unit),
        day.wicon,
    ));
    out.push_str(&format!(
        "  High {} / Low {}\n",
        degrees(day.temperature_max_round, unit),
        degrees(day.temperature_min_round, unit),
    ));

    let mut extras = Vec::new();
    if let Some(humidity) = day.humidity_percent {
        extras.push(format!("Humidity {}%", humidity.round()));
    }
    if let Some(wind) = wind(day) {
        extras.push(format!("Wind {wind}"));
    }
    if !extras.is_empty() {
        out.push_str(&format!("  {}\n", extras.join("  ")));
    }
    out
}

/// One line per forecast day
pub fn daily(report: &ForecastReport) -> String {
    let tz = timezone(report.timezone());
    let mut out = String::from("Forecast\n");
    for day in report.daily() {
        let unit = day.units.temperature;
        out.push_str(&format!(
            "  {}  {:>6} / {:<6}  [{}]  {}\n",
            local_date(day, tz),
            degrees(day.temperature_max_round, unit),
            degrees(day.temperature_min_round, unit),
            day.wicon,
            day.summary,
        ));
    }
    out
}

/// Supported unit systems with their labels
pub fn units_table(units: &[UnitSystem]) -> String {
    let mut out = String::new();
    for system in units {
        let labels = system.labels();
        out.push_str(&format!(
            "{:<5} {:<52} temp={:<1} wind={:<3} visibility={}\n",
            system.id(),
            system.description(),
            labels.temperature,
            labels.wind_speed,
            labels.visibility,
        ));
    }
    out
}

/// Supported languages, code then name
pub fn languages_table(languages: &[Language]) -> String {
    let mut out = String::new();
    for language in languages {
        out.push_str(&format!("{:<12} {}\n", language.code(), language.name()));
    }
    out
}

#[cfg(test)]
mod tests {
    use domain::CompassDirection;

    use super::*;

    fn day(time: i64, summary: &str, temperature: f64, high: f64, low: f64) -> ForecastDay {
        ForecastDay {
            time,
            summary: summary.to_string(),
            icon: "clear-day".to_string(),
            wicon: "wi-day-sunny",
            temperature,
            temperature_round: temperature.round(),
            apparent_temperature: temperature,
            apparent_temperature_round: temperature.round(),
            temperature_high: high,
            temperature_max_round: high.round(),
            temperature_low: low,
            temperature_min_round: low.round(),
            dew_point: None,
            humidity: Some(0.5),
            humidity_percent: Some(50.0),
            pressure: None,
            wind_speed: Some(4.0),
            wind_bearing: Some(10.0),
            wind_direction: CompassDirection::from_bearing(10.0),
            cloud_cover: None,
            uv_index: None,
            visibility: None,
            ozone: None,
            units: UnitSystem::Us.labels(),
        }
    }

    fn report() -> ForecastReport {
        ForecastReport::new(
            "America/New_York",
            day(1_700_000_000, "Clear", 70.4, 70.4, 70.4),
            vec![day(1_699_938_000, "Sunny", 67.5, 75.0, 60.0)],
        )
        .unwrap()
    }

    #[test]
    fn timezone_falls_back_to_utc() {
        assert_eq!(timezone("America/New_York"), Tz::America__New_York);
        assert_eq!(timezone("Mars/Olympus"), Tz::UTC);
    }

    #[test]
    fn local_date_uses_timezone() {
        let report = report();
        // 1_700_000_000 is 2023-11-14 22:13 UTC, still the 14th in New York
        let date = local_date(report.current(), timezone(report.timezone()));
        assert_eq!(date, "Tue 2023-11-14");
        assert_eq!(local_date(report.current(), Tz::Asia__Tokyo), "Wed 2023-11-15");
    }

    #[test]
    fn current_block_shows_rounded_values_and_wind() {
        let text = current(&report());
        assert!(text.contains("70°F"));
        assert!(text.contains("High 75°F / Low 60°F"));
        assert!(text.contains("Humidity 50%"));
        assert!(text.contains("Wind 4 MPH N"));
        assert!(text.contains("[wi-day-sunny]"));
    }

    #[test]
    fn current_block_is_newline_terminated_lines() {
        let text = current(&report());
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
        assert!(text.lines().nth(1).unwrap().contains("(feels like 70°F)"));
    }

    #[test]
    fn daily_lists_each_day() {
        let text = daily(&report());
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("Sunny"));
    }

    #[test]
    fn tables_list_every_entry() {
        assert_eq!(units_table(&UnitSystem::ALL).lines().count(), 5);
        assert!(units_table(&UnitSystem::ALL).contains("uk2"));
        assert_eq!(languages_table(Language::all()).lines().count(), 38);
    }
}
