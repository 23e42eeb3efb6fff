#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::print_stdout)]

//! Replays the reference walkthrough of the table, then measures how probe lengths grow with
//! the load factor and plots them.

use std::sync::Once;

use env_logger::Builder;
use log::{LevelFilter, info};
use plotters::prelude::*;
use quadtable::{OpenAddressTable, TableConfig, TableError};
use rand::{Rng, distr::Alphanumeric};

/// Prime capacity of the study table, so quadratic probing reaches half of its slots
const STUDY_CAPACITY: usize = 10_007;
/// Number of load factors sampled between 0.1 and 0.95
const NUM_LOAD_FACTORS: usize = 10;
/// Length of the random study keys
const KEY_LENGTH: usize = 12;
/// Where the probe length chart is written
const CHART_PATH: &str = "probe_lengths.png";

/// Guards the one-time logger setup
static INIT: Once = Once::new();

/// Installs `env_logger` at `Info`, overridable through `RUST_LOG`
fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("quadtable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed
        if builder.try_init().is_err() {
            log::debug!("logger already initialized");
        }
    });
}

/// Prints every slot followed by the size line
fn print_table(table: &OpenAddressTable) {
    print!("{table}");
    println!(
        "Number of items in the table: {}, Is Empty: {}",
        table.len(),
        if table.is_empty() { "Yes" } else { "No" }
    );
}

/// Insert five entries, look one up, remove another, then clear, printing the table each time
fn run_reference_scenario() -> Result<(), TableError> {
    let mut table = OpenAddressTable::new();

    for (name, weight) in [("Dars", 25), ("Gretta", 10), ("Belka", 5), ("Strelka", 6), ("Gaston", 1)]
    {
        table.insert(name, weight)?;
    }

    println!("Hash table after adding elements:");
    print_table(&table);

    match table.find("Dars") {
        Some(weight) => println!("Found a Dars with a weight of: {weight}"),
        None => println!("Dars was not found"),
    }

    if table.remove("Gretta") {
        println!("Gretta has been deleted");
    } else {
        println!("Gretta was not found to be deleted");
    }

    println!("Hash table after deleting elements:");
    print_table(&table);

    table.clear();
    println!("Hash table after cleaning:");
    print_table(&table);

    Ok(())
}

/// Probe statistics of a table filled to one load factor
#[derive(Debug, Clone, Copy)]
struct StudyPoint {
    /// Load factor actually reached
    load_factor: f64,
    /// Mean lookup probe length over the inserted keys
    average_probes: f64,
    /// Longest lookup probe length over the inserted keys
    worst_probes: usize,
    /// Inserts rejected because their probe sequence was saturated
    failed_inserts: usize,
}

/// Fills a fixed-size table to each sampled load factor and measures lookup probe lengths
fn run_probe_study(keys: &[String]) -> Result<Vec<StudyPoint>, TableError> {
    let config = TableConfig::default()
        .initial_capacity(STUDY_CAPACITY)
        .load_factor_threshold(1.0)
        .max_exhaustion_growths(0);
    let mut points = Vec::with_capacity(NUM_LOAD_FACTORS);

    for step in 0..NUM_LOAD_FACTORS {
        let target_load = 0.1 + (0.95 - 0.1) * step as f64 / (NUM_LOAD_FACTORS - 1) as f64;
        let target_len = (STUDY_CAPACITY as f64 * target_load) as usize;

        let mut table = OpenAddressTable::with_config(config)?;
        let mut inserted: Vec<&str> = Vec::with_capacity(target_len);
        let mut failed_inserts = 0;
        for key in keys {
            if table.len() >= target_len {
                break;
            }
            match table.insert(key.as_str(), 0) {
                Ok(_) => inserted.push(key),
                Err(TableError::ProbeExhausted { .. }) => failed_inserts += 1,
                Err(other) => return Err(other),
            }
        }

        let probe_lengths: Vec<usize> = inserted.iter().map(|key| table.probe_length(key)).collect();
        let point = StudyPoint {
            load_factor: table.load_factor(),
            average_probes: probe_lengths.iter().sum::<usize>() as f64
                / probe_lengths.len().max(1) as f64,
            worst_probes: probe_lengths.iter().copied().max().unwrap_or(0),
            failed_inserts,
        };
        info!(
            "load {:.2}: avg probes = {:.2}, worst = {}, failed inserts = {}",
            point.load_factor, point.average_probes, point.worst_probes, point.failed_inserts
        );
        points.push(point);
    }

    Ok(points)
}

/// Draws average and worst probe lengths against the load factor
fn plot_probe_lengths(points: &[StudyPoint], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_probes = points.iter().map(|p| p.worst_probes as f64).fold(1.0, f64::max) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Quadratic Probing: Probe Length by Load Factor", (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..max_probes)?;

    chart
        .configure_mesh()
        .x_desc("Load Factor")
        .y_desc("Probes per Lookup")
        .axis_desc_style((font_family, 16))
        .draw()?;

    let series = [
        ("Average", RGBColor(50, 90, 220), points.iter().map(|p| (p.load_factor, p.average_probes)).collect::<Vec<_>>()),
        ("Worst case", RGBColor(220, 50, 50), points.iter().map(|p| (p.load_factor, p.worst_probes as f64)).collect()),
    ];
    for (label, color, data) in series {
        let line_style = ShapeStyle::from(&color).stroke_width(2);
        chart
            .draw_series(LineSeries::new(data.iter().copied(), line_style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        chart.draw_series(data.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    run_reference_scenario()?;

    // Twice the capacity leaves room for inserts rejected at high load
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..STUDY_CAPACITY * 2)
        .map(|_| (&mut rng).sample_iter(Alphanumeric).take(KEY_LENGTH).map(char::from).collect())
        .collect();

    let points = run_probe_study(&keys)?;
    plot_probe_lengths(&points, CHART_PATH)?;

    println!("Generated probe length chart: {CHART_PATH}");
    Ok(())
}
