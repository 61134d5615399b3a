//! End-to-end runs of the analysis through the public library API.

use expplot::app::pipeline::{analyze, load_and_derive};
use expplot::config::{DisplayMode, RenderConfig, StyleSheet};
use expplot::generate::{Grid, write_results};
use expplot::plot::render_figure;
use ratatui::{Terminal, backend::TestBackend};

const HEADER: &str =
    "x_float,exp_float,exp_fast_float,exp_very_fast_float,x_double,exp_double,exp_fast_double,exp_very_fast_double";

fn csv(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for row in rows {
        out.push('\n');
        out.push_str(row);
    }
    out.push('\n');
    out
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(1.0)
}

#[test]
fn single_row_scenario() {
    let input = csv(&["1.0,2.718,2.719,2.700,1.0,2.71828,2.71829,2.71900"]);
    let (table, figure) = analyze(input.as_bytes()).unwrap();

    let err = table.numeric("exp_fast_float_err").unwrap()[0].unwrap();
    let rerr = table.numeric("exp_fast_float_rerr").unwrap()[0].unwrap();
    assert!(approx(err, 0.001), "{err}");
    assert!(approx(rerr, 0.001 / 2.718), "{rerr}");
    // exact floating-point identities
    assert_eq!(err, 2.719 - 2.718);
    assert_eq!(rerr, (2.719 - 2.718) / 2.718);

    assert_eq!(figure.panels.len(), 2);
    assert_eq!(figure.panels[0].series.len(), 2);
    assert_eq!(figure.panels[1].series.len(), 3);
    let labels: Vec<&str> = figure.panels.iter().flat_map(|p| &p.series).map(|s| s.label).collect();
    assert_eq!(
        labels,
        [
            "Fast Float Relative Error",
            "Very Fast Float Relative Error",
            "Float Relative Error",
            "Fast Double Relative Error",
            "Very Fast Double Relative Error",
        ]
    );

    let text = render_figure(&figure, 60, 10);
    assert!(text.starts_with("Analysis of Exponential Function Results\n"));

    let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
    terminal
        .draw(|f| expplot::tui::draw(f, &figure, &StyleSheet::DarkGrid.theme()))
        .unwrap();
    let buf = terminal.backend().buffer();
    let rows: Vec<String> = (0..buf.area.height)
        .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
        .collect();
    for label in labels {
        assert!(rows.iter().any(|r| r.contains(label)), "legend `{label}` not drawn");
    }
}

#[test]
fn generated_results_analyze_within_known_error_bounds() {
    let mut input = Vec::new();
    let n = write_results(&mut input, &Grid { min: -5.0, max: 5.0, step: 0.5 }).unwrap();
    assert_eq!(n, 20);

    let (table, figure) = analyze(input.as_slice()).unwrap();
    assert_eq!(table.n_rows(), 20);

    let max_abs = |name: &str| {
        table
            .numeric(name)
            .unwrap()
            .iter()
            .map(|c| c.unwrap().abs())
            .fold(0.0, f64::max)
    };
    assert!(max_abs("exp_very_fast_float_rerr") < 0.031);
    assert!(max_abs("exp_very_fast_double_rerr") < 0.031);
    assert!(max_abs("exp_fast_float_rerr") < 0.007);
    assert!(max_abs("exp_fast_double_rerr") < 0.007);
    // single precision against double precision
    assert!(max_abs("exp_float_rerr") < 1e-6);

    for series in figure.panels.iter().flat_map(|p| &p.series) {
        assert_eq!(series.finite_runs().concat().len(), 20, "{}", series.label);
    }
}

#[test]
fn rows_and_order_are_preserved() {
    let input = csv(&[
        "-1,0.36787,0.36788,0.3,-1,0.367879,0.367880,0.36",
        "0,1,1,1,0,1,1,1",
        "1,2.718,2.719,2.7,1,2.71828,2.71829,2.719",
    ]);
    let (table, figure) = analyze(input.as_bytes()).unwrap();

    assert_eq!(table.n_rows(), 3);
    assert_eq!(table.numeric("x_float").unwrap(), &[Some(-1.0), Some(0.0), Some(1.0)]);
    for series in figure.panels.iter().flat_map(|p| &p.series) {
        assert_eq!(series.points.len(), 3);
    }
    let xs: Vec<_> = figure.panels[0].series[0].points.iter().map(|p| p.0).collect();
    assert_eq!(xs, [Some(-1.0), Some(0.0), Some(1.0)]);
}

#[test]
fn bad_cells_become_missing_in_err_and_rerr() {
    let input = csv(&[
        "1,oops,2.719,2.7,1,2.71828,2.71829,2.719",
        "2,0,1,0,2,,1,1",
    ]);
    let table = load_and_derive(input.as_bytes()).unwrap();

    // row 0: exp_float unparseable
    assert_eq!(table.numeric("exp_fast_float_err").unwrap()[0], None);
    assert_eq!(table.numeric("exp_fast_float_rerr").unwrap()[0], None);
    assert_eq!(table.numeric("exp_float_rerr").unwrap()[0], None);
    // row 1: zero reference
    assert_eq!(table.numeric("exp_fast_float_rerr").unwrap()[1], Some(f64::INFINITY));
    assert!(table.numeric("exp_very_fast_float_rerr").unwrap()[1].is_some_and(f64::is_nan));
    // row 1: empty exp_double
    assert_eq!(table.numeric("exp_fast_double_err").unwrap()[1], None);
    assert_eq!(table.numeric("exp_fast_double_rerr").unwrap()[1], None);
}

#[test]
fn missing_expected_column_fails_with_schema_code() {
    let err = analyze("x_float,exp_float\n1,2\n".as_bytes()).unwrap_err();
    assert_eq!(err.exit_code(), expplot::error::EXIT_SCHEMA);
}

#[test]
fn malformed_csv_fails_with_input_code() {
    let input = format!("{HEADER}\n1,2,3\n");
    let err = analyze(input.as_bytes()).unwrap_err();
    assert_eq!(err.exit_code(), expplot::error::EXIT_INPUT);
}

#[test]
fn ascii_mode_renders_through_app() {
    let input = csv(&["1.0,2.718,2.719,2.700,1.0,2.71828,2.71829,2.71900"]);
    let (_, figure) = analyze(input.as_bytes()).unwrap();
    let config = RenderConfig {
        mode: DisplayMode::Ascii,
        ..RenderConfig::default()
    };
    expplot::app::render(&figure, &config).unwrap();
}
