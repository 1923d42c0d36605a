use pretty_assertions::assert_eq;
use weather_core::Measurement;
use weather_engine::{measurements_from_html, ScrapeError};

const OBSERVATIONS: &str = include_str!("fixtures/obs_uppsala.html");

fn m(name: &str, value: &str, unit: &str) -> Measurement {
    Measurement::new(name, value, unit)
}

fn names(measurements: &[Measurement]) -> Vec<&str> {
    measurements.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn observation_table_yields_all_thirteen_measurements() {
    let measurements = measurements_from_html(OBSERVATIONS).unwrap();

    assert_eq!(
        measurements,
        vec![
            m("temperature", "29.2", "°C"),
            m("temperature -max last 12h", "29.7", "°C"),
            m("temperature -min last 12h", "16.4", "°C"),
            m("wind speed", "2.0", "m/s"),
            m("wind direction", "326", "°"),
            m("air pressure", "1016.3", "hPa"),
            m("air humidity", "48.6", "%"),
            m("global radiation", "705", "W/m2"),
            m("precipitation last hour", "0.0", "mm (tipping bucket)"),
            m("precipitation last hour", "0.00", "mm (disdrometer)"),
            m("precipitation 24 hours", "0.0", "mm (tipping bucket)"),
            m("precipitation 24 hours", "0.00", "mm (disdrometer)"),
            m("snow depth/grass height", "0", "cm"),
        ]
    );
}

#[test]
fn rows_without_four_cells_are_skipped() {
    let html = r#"
    <table>
        <tr><th>Observation</th><th>Value</th></tr>
        <tr><td></td><td>Temperature</td><td>29.2</td><td>C</td></tr>
        <tr><td colspan="4">Updated every ten minutes</td></tr>
        <tr><td></td><td>-max last 12h</td><td>29.7</td><td>C</td><td>extra</td></tr>
        <tr><td></td><td>-min last 12h</td><td>16.4</td><td>C</td></tr>
    </table>"#;

    let measurements = measurements_from_html(html).unwrap();
    assert_eq!(
        names(&measurements),
        vec!["temperature", "temperature -min last 12h"]
    );
}

#[test]
fn leading_continuation_row_keeps_its_own_label() {
    let html = r#"
    <table>
        <tr><td></td><td>-Max last 12h</td><td>29.7</td><td>C</td></tr>
        <tr><td></td><td>Temperature</td><td>29.2</td><td>C</td></tr>
        <tr><td></td><td>-min last 12h</td><td>16.4</td><td>C</td></tr>
    </table>"#;

    let measurements = measurements_from_html(html).unwrap();
    assert_eq!(
        names(&measurements),
        vec!["-max last 12h", "temperature", "temperature -min last 12h"]
    );
}

#[test]
fn label_whitespace_and_case_are_normalized() {
    let html = "<table><tr><td></td><td>\n   Wind SPEED  </td><td>2.0</td><td>m/s</td></tr></table>";

    let measurements = measurements_from_html(html).unwrap();
    assert_eq!(measurements, vec![m("wind speed", "2.0", "m/s")]);
}

#[test]
fn rows_across_tables_keep_document_order() {
    let html = r#"
    <table><tr><td></td><td>B</td><td>1</td><td>u</td></tr></table>
    <div><table><tr><td></td><td>A</td><td>2</td><td>u</td></tr></table></div>
    <table><tr><td></td><td>C</td><td>3</td><td>u</td></tr></table>"#;

    let measurements = measurements_from_html(html).unwrap();
    assert_eq!(names(&measurements), vec!["b", "a", "c"]);
}

#[test]
fn page_without_rows_is_empty_not_an_error() {
    let measurements = measurements_from_html("<p>Station offline</p>").unwrap();
    assert!(measurements.is_empty());
}

#[test]
fn blank_page_is_an_empty_document() {
    assert_eq!(measurements_from_html(""), Err(ScrapeError::EmptyDocument));
    assert_eq!(measurements_from_html(" \n\t"), Err(ScrapeError::EmptyDocument));
}
