use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;

use std::io::{self, Write};

#[macro_use]
extern crate range_comparator_core;
use range_comparator_core::{
    comparison::{rank_by_range, RangeComparison},
    error::ReadError,
    reader::VehicleReader,
    traits::SerdeAPI,
    vehicle::{Fleet, Vehicle, VehicleKind},
};

const DEFAULT_COUNT: u32 = 2;

/// Compares the range of combustion and electric vehicles.
/// Vehicles are read interactively, one per line, as
/// ```text
/// <ice|ev> <year> <name> <capacity> <consumption>
/// ```
/// e.g. `ice 2023 ChevroletCorvette 19 30` or `ev 2025 RivianR1t 150000 300`.
/// To compare vehicles stored in a file instead, run with
/// ```bash
/// ./target/release/range-comparator --veh-file range-comparator-cli/resources/fleet.yaml
/// ```
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct RangeComparatorApi {
    #[clap(long, value_parser = clap::value_parser!(u32).range(2..), conflicts_with = "veh-file")]
    /// Number of vehicles to read from stdin [default: 2]
    count: Option<u32>,
    #[clap(long, value_parser)]
    /// Path to fleet file (yaml or json) to read vehicles from instead of stdin
    veh_file: Option<String>,
    #[clap(long, value_parser)]
    /// How to return results: `summary` (default) or `json`
    res_fmt: Option<String>,
}

#[derive(Debug, Serialize)]
struct RankedVehicle {
    rank: usize,
    vehicle: String,
    kind: VehicleKind,
    range_miles: f64,
}

#[derive(Debug, Serialize)]
struct ComparatorResults {
    comparison: RangeComparison,
    ranking: Vec<RankedVehicle>,
}

impl ComparatorResults {
    fn new(vehicles: &[Vehicle]) -> anyhow::Result<Self> {
        let (first, second) = match vehicles {
            [first, second, ..] => (first, second),
            _ => bail!(
                "At least two vehicles are required to compare ranges, got {}",
                vehicles.len()
            ),
        };
        let ranking = rank_by_range(vehicles)
            .into_iter()
            .enumerate()
            .map(|(i, veh)| RankedVehicle {
                rank: i + 1,
                vehicle: veh.to_string(),
                kind: veh.kind(),
                range_miles: veh.range(),
            })
            .collect();
        Ok(Self {
            comparison: RangeComparison::new(first, second),
            ranking,
        })
    }

    fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self)?)
    }

    fn to_summary(&self) -> String {
        let mut summary = format!("{}\n", self.comparison);
        for ranked in &self.ranking {
            summary.push_str(&format!(
                "{}. {}: {:.1} miles\n",
                ranked.rank, ranked.vehicle, ranked.range_miles
            ));
        }
        summary
    }
}

/// Prompts on stdout until `count` valid vehicles have been read from stdin
fn read_vehicles(count: u32) -> anyhow::Result<Vec<Vehicle>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = VehicleReader::new(stdin.lock(), stdout.lock());
    let mut vehicles = Vec::new();
    for i in 1..=count {
        match reader.read_vehicle() {
            Ok(veh) => vehicles.push(veh),
            Err(ReadError::EndOfInput) => {
                bail!("Input exhausted after {} of {} vehicles", i - 1, count)
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read vehicle {i} of {count}"))
            }
        }
    }
    // terminate the last prompt line before any results
    let (_, mut stdout) = reader.into_inner();
    writeln!(stdout)?;
    Ok(vehicles)
}

pub fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let api = RangeComparatorApi::parse();

    let vehicles = if let Some(veh_file) = &api.veh_file {
        Fleet::from_file(veh_file)
            .with_context(|| format_dbg!(veh_file))?
            .vehicles
    } else {
        read_vehicles(api.count.unwrap_or(DEFAULT_COUNT))?
    };
    log::info!("comparing {} vehicles", vehicles.len());

    let results = ComparatorResults::new(&vehicles)?;
    let res_fmt = api.res_fmt.unwrap_or_else(|| String::from("summary"));
    match res_fmt.as_str() {
        "summary" => print!("{}", results.to_summary()),
        "json" => println!("{}", results.to_json()?),
        _ => bail!("Invalid option `{}` for `--res-fmt`", res_fmt),
    }
    Ok(())
}
