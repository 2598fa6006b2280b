//! `solar-chart`: fetch monthly solar irradiance for a location and chart it.
//!
//! ```text
//! NREL_API_KEY=... solar-chart --lat 40 --lon -105 --output golden.svg --csv golden.csv
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see progress messages.

use clap::Parser;
use nrel_solar::{
    render_svg, write_csv, ApiKey, CredentialsError, IrradianceReport, LatLon, RenderError,
    SolarResource, SolarResourceError,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "solar-chart")]
#[command(about = "Chart monthly solar irradiance from the NREL Solar Resource API")]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, default_value_t = -105.0, allow_negative_numbers = true)]
    lon: f64,

    /// NREL developer API key
    #[arg(long, env = "NREL_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Read the API key from this file instead; takes precedence over --api-key
    #[arg(long)]
    key_file: Option<PathBuf>,

    /// Endpoint to query
    #[arg(long)]
    base_url: Option<String>,

    /// Where to write the SVG chart
    #[arg(short, long, default_value = "solar_irradiance.svg")]
    output: PathBuf,

    /// Also write the monthly table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Open an interactive chart in the browser
    #[cfg(feature = "interactive")]
    #[arg(long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logger, controlled by RUST_LOG
    env_logger::init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(inner) = source {
                eprintln!("  caused by: {}", inner);
                source = inner.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), SolarResourceError> {
    let api_key = resolve_api_key(&args)?;
    let location = LatLon(args.lat, args.lon);

    // 1. Build the client
    let client = SolarResource::builder()
        .api_key(api_key)
        .maybe_base_url(args.base_url.clone())
        .build()?;

    // 2. Fetch, and show status and content type before anything else
    println!("Fetching solar resource data for {}...", location);
    let fetched = client.fetch(location).await?;
    println!("Status: {}", fetched.status);
    println!(
        "Content-Type: {}",
        fetched.content_type.as_deref().unwrap_or("(none)")
    );

    // 3. Decode and reshape
    let report = IrradianceReport::from_response(fetched, location)?;
    if !report.sources.is_empty() {
        println!("Sources: {}", report.sources.join(", "));
    }
    println!("{}", report.table.to_dataframe().map_err(RenderError::from)?);

    // 4. Render
    render_svg(&report.table, &report.chart_options(), &args.output)?;
    println!("Chart written to {}", args.output.display());

    if let Some(csv_path) = &args.csv {
        write_csv(&report.table, csv_path)?;
        println!("Table written to {}", csv_path.display());
    }

    #[cfg(feature = "interactive")]
    if args.interactive {
        nrel_solar::show_interactive(&report.table, &report.chart_options().title)?;
    }

    Ok(())
}

fn resolve_api_key(args: &Args) -> Result<ApiKey, CredentialsError> {
    if let Some(path) = &args.key_file {
        return ApiKey::from_file(path);
    }
    match &args.api_key {
        Some(key) => ApiKey::new(key),
        None => ApiKey::resolve(),
    }
}
