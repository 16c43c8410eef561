// File: crates/atlas-demo/src/main.rs
// Summary: Demo loads the bundled CSV/GeoJSON datasets and renders map, age profile, and bar charts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use atlas_core::data::{load_age_csv, load_migration_csv, year_csv_path};
use atlas_core::geo::load_regions;
use atlas_core::{theme, AreaChart, BarChart, Choropleth, Render, RenderOptions, YEAR_MAX, YEAR_MIN};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "atlas-demo", about, version)]
struct Args {
    /// Year of the states dataset to map.
    #[clap(short, long, default_value_t = YEAR_MAX)]
    year: u16,

    /// Directory holding the CSV/GeoJSON inputs.
    #[clap(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the rendered PNGs are written to.
    #[clap(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset name (light, dark).
    #[clap(long, default_value = "light")]
    theme: String,

    /// Increase output logging verbosity.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    simple_logger::init_with_level(if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .unwrap();

    if args.year < YEAR_MIN || args.year > YEAR_MAX {
        anyhow::bail!("year {} outside the dataset range {YEAR_MIN}..={YEAR_MAX}", args.year);
    }

    let theme = theme::find(&args.theme);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    // 1) Choropleth map for the selected year
    let geo_path = args.data_dir.join("aus_state.geojson");
    let regions = load_regions(&geo_path)
        .with_context(|| format!("loading boundaries from {}", geo_path.display()))?;
    log::info!("Loaded {} regions", regions.len());

    let map_opts = RenderOptions::map();
    let mut map = Choropleth::new(&regions, theme, &map_opts);
    let ticket = map.begin_year_load(args.year);
    let csv_path = year_csv_path(&args.data_dir, ticket.year);
    let year_rows = load_migration_csv(&csv_path)
        .with_context(|| format!("loading states dataset {}", csv_path.display()))?;
    map.finish_year_load(&ticket, &year_rows);

    let out = args.out_dir.join(format!("map_{}.png", ticket.year));
    map.render_to_png(&map_opts, &out)?;
    log::info!("Wrote {}", out.display());

    // 2) Dual-series age profile
    let ages_path = args.data_dir.join("linegraph.csv");
    let ages = load_age_csv(&ages_path)
        .with_context(|| format!("loading age profile {}", ages_path.display()))?;
    let age_opts = RenderOptions::age_profile();
    let age_chart = AreaChart::new(ages, theme, &age_opts);
    let out = args.out_dir.join("age_profile.png");
    age_chart.render_to_png(&age_opts, &out)?;
    log::info!("Wrote {}", out.display());

    // 3) Arrivals by state, original order plus one sort toggle
    let bars_path = args.data_dir.join("ethnicstate.csv");
    let bar_rows = load_migration_csv(&bars_path)
        .with_context(|| format!("loading bar dataset {}", bars_path.display()))?;
    let bar_opts = RenderOptions::bars();
    let mut bars = BarChart::new(&bar_rows, theme, &bar_opts);
    let out = args.out_dir.join("arrivals_by_state.png");
    bars.render_to_png(&bar_opts, &out)?;
    log::info!("Wrote {}", out.display());

    let transitions = bars.toggle_sort();
    log::debug!("sort moved {} bars", transitions.len());
    let out = args.out_dir.join("arrivals_by_state_sorted.png");
    bars.render_to_png(&bar_opts, &out)?;
    log::info!("Wrote {}", out.display());

    Ok(())
}
