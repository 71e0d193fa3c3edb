use std::error::Error;

use clap::{Parser, ValueEnum};
use greatcircle::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Unit {
    Meters,
    Kilometers,
    /// Central angle on a unit sphere
    Radians,
}

#[derive(Parser)]
#[command(about = "Prints the great-circle distance between two points")]
struct Cli {
    /// The start point, as "lat,lon" in degrees
    #[arg(allow_hyphen_values = true)]
    from: GeoPoint,

    /// The end point, as "lat,lon" in degrees
    #[arg(allow_hyphen_values = true)]
    to: GeoPoint,

    /// Unit of the printed distance
    #[arg(short, long, value_enum, default_value_t = Unit::Meters)]
    unit: Unit,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    colog::init();
    let cli = Cli::parse();

    for point in [&cli.from, &cli.to] {
        if !point.is_in_range() {
            log::warn!("{} is outside of the valid lat-lon range", point);
        }
    }
    log::debug!("computing distance from {} to {}", cli.from, cli.to);

    let distance = match cli.unit {
        Unit::Meters => cli.from.distance_on_earth(&cli.to),
        Unit::Kilometers => cli.from.distance_on_earth(&cli.to) / 1000.0,
        Unit::Radians => cli.from.distance_on_sphere(&cli.to),
    };

    println!("{}", distance);
    Ok(())
}
