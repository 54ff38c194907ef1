//! # Slabcheck CLI
//!
//! Command-line front end for `slab_core`. Reads an analysis request in the
//! client JSON shape, prints a design report, and optionally the JSON
//! response for tooling.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};

use slab_core::api::{analyze_with, AnalysisRequest, AnalysisResponse};
use slab_core::calculations::{CrackClass, DesignCheck};
use slab_core::materials::{BarSize, SteelGrade};
use slab_core::{CalcError, CalcResult, DesignCriteria};

#[derive(Parser)]
#[command(name = "slab_cli")]
#[command(about = "Slabcheck - one-way reinforced concrete slab design checks", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a request file (or stdin)
    Analyze {
        /// Request JSON file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
        /// Design criteria JSON file
        #[arg(short, long)]
        criteria: Option<PathBuf>,
        /// Print only the JSON response
        #[arg(long)]
        json: bool,
    },
    /// Print the default request as JSON
    Defaults,
    /// List the available bar sizes
    Bars,
    /// List the named steel grades
    Grades,
    /// Prompt for the main inputs and print the report
    Interactive,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Analyze { input, criteria, json } => cmd_analyze(&input, criteria.as_deref(), json),
        Commands::Defaults => cmd_defaults(),
        Commands::Bars => {
            cmd_bars();
            Ok(())
        }
        Commands::Grades => {
            cmd_grades();
            Ok(())
        }
        Commands::Interactive => cmd_interactive(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn read_request(path: &Path) -> CalcResult<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))
}

fn load_criteria(path: Option<&Path>) -> CalcResult<DesignCriteria> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading design criteria");
            DesignCriteria::load(path)
        }
        None => Ok(DesignCriteria::default()),
    }
}

fn cmd_analyze(input: &Path, criteria: Option<&Path>, json_only: bool) -> CalcResult<()> {
    let criteria = load_criteria(criteria)?;
    let text = read_request(input)?;
    let request: AnalysisRequest = serde_json::from_str(&text)?;
    let response = analyze_with(&request, &criteria)?;

    if json_only {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_report(&request, &response);
        println!();
        println!("JSON Output:");
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}

fn cmd_defaults() -> CalcResult<()> {
    println!("{}", serde_json::to_string_pretty(&AnalysisRequest::default())?);
    Ok(())
}

fn cmd_bars() {
    println!("{:<6} {:>10} {:>10}", "Bar", "Dia (in)", "Area (in²)");
    for bar in BarSize::ALL {
        println!("{:<6} {:>10.3} {:>10.2}", bar.designation(), bar.diameter_in(), bar.area_in2());
    }
}

fn cmd_grades() {
    for grade in SteelGrade::ALL {
        println!("{:<20} fy = {:>5.0} ksi", grade.display_name(), grade.fy_ksi());
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    match input.trim() {
        "" => default.to_string(),
        value => value.to_string(),
    }
}

fn cmd_interactive() -> CalcResult<()> {
    println!("Slabcheck - One-Way Slab Design");
    println!("===============================");
    println!();

    let defaults = AnalysisRequest::default();
    let request = AnalysisRequest {
        m_u: Some(prompt_f64("Factored moment M_u (k-ft) [0.0]: ", 0.0)),
        v_u: Some(prompt_f64("Factored shear V_u (kips) [0.0]: ", 0.0)),
        m_s: Some(prompt_f64("Service moment M_s (k-ft) [0.0]: ", 0.0)),
        height: Some(prompt_f64("Slab thickness h (in) [8.0]: ", 8.0)),
        cover: Some(prompt_f64("Clear cover (in) [1.0]: ", 1.0)),
        size: prompt_str("Bar size [#5]: ", "#5"),
        spacing: Some(prompt_f64("Bar spacing (in) [12.0]: ", 12.0)),
        f_c: Some(prompt_f64("Concrete f'c (ksi) [4.0]: ", 4.0)),
        crack_class: prompt_str("Crack class [Class 2]: ", CrackClass::Class2.display_name()),
        ..defaults
    };

    println!();
    let response = analyze_with(&request, &DesignCriteria::default())?;
    print_report(&request, &response);
    Ok(())
}

fn print_report(request: &AnalysisRequest, r: &AnalysisResponse) {
    let d = &r.diagnostics;
    println!("═══════════════════════════════════════");
    println!("  ONE-WAY SLAB DESIGN RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Section:");
    println!(
        "  b × h:    {:.1}\" × {:.1}\" (d = {:.3}\")",
        request.width.unwrap_or_default(),
        request.height.unwrap_or_default(),
        d.effective_depth
    );
    println!(
        "  Steel:    {} @ {:.1}\" ({} bars, {:.3} in², {:.3} in²/ft)",
        request.size,
        request.spacing.unwrap_or_default(),
        d.number_of_bars,
        r.steel_area,
        r.steel_area_per_ft
    );
    println!("  Weight:   {:.3} k/ft", r.weight);
    println!();
    println!("Service:");
    println!("  M_cr  = {:.2} k-ft ({})", r.m_cr, if r.cracked { "cracked" } else { "uncracked" });
    println!("  fc    = {:.3} ksi", r.f_conc);
    println!("  fs    = {:.2} ksi (allowable {:.2} ksi)", r.f_steel, d.crack_allowable_stress);
    println!();
    println!("Strength:");
    println!("  φMn   = {:.2} k-ft (γ = {})", r.phi_mn, r.gamma_er);
    println!("  φVn   = {:.2} kips", r.phi_vn);
    println!("  εt    = {:.4}", r.epsilon_st);
    println!("  A_ts  = {:.3} in²/ft", r.a_ts);
    if d.over_reinforced {
        println!("  WARNING: neutral axis at or below the tension steel");
    }
    println!();
    println!("Checks:");
    let results = [
        (DesignCheck::MomentCapacity, r.moment_capacity),
        (DesignCheck::ShearCapacity, r.shear_capacity),
        (DesignCheck::MinReinf, r.min_reinf),
        (DesignCheck::CrackControl, r.crack_control),
        (DesignCheck::Ductility, r.ductility),
        (DesignCheck::DistReinf, r.dist_reinf),
    ];
    for (check, pass) in results {
        println!("  {:<20} {}", check.display_name(), status_icon(pass));
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if results.iter().all(|(_, pass)| *pass) { "PASS" } else { "FAIL" }
    );
    println!("═══════════════════════════════════════");
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
