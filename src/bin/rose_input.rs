//! rose-input CLI
//!
//! A standalone binary that assembles the dashboard input JSON from a
//! sources-of-strength file and embankment parameters given on the command
//! line.

use std::path::PathBuf;

use rose_input::{Assembler, Embankment};

/// CLI configuration
struct Config {
    /// Path of the SoS input file
    sos_path: PathBuf,
    /// Path of the output JSON file
    output_path: PathBuf,
    /// Project name, None for the library default
    project_name: Option<String>,
    /// Embankment material label
    material: String,
    /// Embankment Young's modulus [N/m2]
    young_modulus: f64,
    /// Embankment Poisson ratio
    poisson_ratio: f64,
    /// Embankment density [kg/m3]
    density: f64,
    /// First embankment damping coefficient
    damping_1: f64,
    /// Second embankment damping coefficient
    damping_2: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sos_path: PathBuf::from("data_SoS/SOS.json"),
            output_path: PathBuf::from("example_rose_input.json"),
            project_name: None,
            material: "embankment".to_string(),
            young_modulus: 100e6,
            poisson_ratio: 0.2,
            density: 2000.0,
            damping_1: 0.05,
            damping_2: 0.8,
        }
    }
}

fn parse_float(args: &[String], i: usize, flag: &str) -> f64 {
    if i + 1 >= args.len() {
        eprintln!("error: {flag} requires a value");
        std::process::exit(1);
    }
    args[i + 1].parse().unwrap_or_else(|_| {
        eprintln!("error: invalid number for {}: {}", flag, args[i + 1]);
        std::process::exit(1);
    })
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sos" | "-s" => {
                if i + 1 < args.len() {
                    config.sos_path = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("error: --sos requires a value");
                    std::process::exit(1);
                }
            }
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    config.output_path = PathBuf::from(&args[i + 1]);
                    i += 2;
                } else {
                    eprintln!("error: --output requires a value");
                    std::process::exit(1);
                }
            }
            "--project-name" => {
                if i + 1 < args.len() {
                    config.project_name = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("error: --project-name requires a value");
                    std::process::exit(1);
                }
            }
            "--material" => {
                if i + 1 < args.len() {
                    config.material = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("error: --material requires a value");
                    std::process::exit(1);
                }
            }
            "--young-modulus" => {
                config.young_modulus = parse_float(&args, i, "--young-modulus");
                i += 2;
            }
            "--poisson-ratio" => {
                config.poisson_ratio = parse_float(&args, i, "--poisson-ratio");
                i += 2;
            }
            "--density" => {
                config.density = parse_float(&args, i, "--density");
                i += 2;
            }
            "--damping-1" => {
                config.damping_1 = parse_float(&args, i, "--damping-1");
                i += 2;
            }
            "--damping-2" => {
                config.damping_2 = parse_float(&args, i, "--damping-2");
                i += 2;
            }
            "--help" | "-h" => {
                println!("rose-input - ROSE dashboard input assembler");
                println!();
                println!("USAGE:");
                println!("    rose-input [OPTIONS]");
                println!();
                println!("OPTIONS:");
                println!("    -s, --sos <FILE>            SoS input file [default: data_SoS/SOS.json]");
                println!("    -o, --output <FILE>         Output JSON file [default: example_rose_input.json]");
                println!("        --project-name <NAME>   Project name [default: ROSEcalculations]");
                println!("        --material <NAME>       Embankment material label [default: embankment]");
                println!("        --young-modulus <E>     Embankment Young's modulus [default: 100e6]");
                println!("        --poisson-ratio <NU>    Embankment Poisson ratio [default: 0.2]");
                println!("        --density <RHO>         Embankment density [default: 2000]");
                println!("        --damping-1 <C1>        First damping coefficient [default: 0.05]");
                println!("        --damping-2 <C2>        Second damping coefficient [default: 0.8]");
                println!("    -h, --help                  Print help information");
                std::process::exit(0);
            }
            arg => {
                eprintln!("error: unknown argument: {arg}");
                std::process::exit(1);
            }
        }
    }

    config
}

fn main() {
    env_logger::init();
    let config = parse_args();

    let embankment = Embankment::from_elastic(
        config.material.clone(),
        config.young_modulus,
        config.poisson_ratio,
        config.density,
        config.damping_1,
        config.damping_2,
    );

    let mut builder = Assembler::builder()
        .sos_path(&config.sos_path)
        .output_path(&config.output_path)
        .embankment(embankment);
    if let Some(name) = &config.project_name {
        builder = builder.project_name(name);
    }

    let assembler = match builder.build() {
        Ok(assembler) => assembler,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match assembler.run() {
        Ok(doc) => {
            println!(
                "wrote {} ({} segments, {} trains)",
                config.output_path.display(),
                doc.sos_data.len(),
                doc.traffic_data.len()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
