use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use registrar::Registry;
use registrar::modules::ReportService;
use registrar_cli::seeder::{self, SeedConfig};
use registrar_config::{LogConfig, RegistryConfig};
use registrar_core::{AppError, ErrorBody};
use registrar_observability::init_console_logging;

#[derive(Parser)]
#[command(name = "registrar-cli")]
#[command(about = "Registrar CLI - Seed sample data and print computed reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the sample catalogue plus generated students and print their summaries
    Seed {
        /// Number of students to generate
        #[arg(short = 's', long, default_value = "10")]
        students: usize,
    },
    /// Seed the same way and print one report
    Report {
        /// Which report to print
        #[arg(value_enum)]
        kind: ReportKind,

        /// Number of students to generate
        #[arg(short = 's', long, default_value = "10")]
        students: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportKind {
    /// Per-student summary
    Students,
    /// Attendance per course, newest first
    Attendance,
    /// Grades per student and course
    Grades,
}

fn main() {
    dotenv().ok();

    if let Err(e) = init_console_logging(&LogConfig::from_env()) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { students } => handle_report(students, ReportKind::Students),
        Commands::Report { kind, students } => handle_report(students, kind),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn seed(students: usize) -> anyhow::Result<Registry> {
    let registry = seeder::seed_registry(RegistryConfig::from_env(), SeedConfig::new(students))?;
    Ok(registry)
}

fn handle_report(students: usize, kind: ReportKind) -> anyhow::Result<()> {
    let reg = seed(students)?;

    let json = match kind {
        ReportKind::Students => {
            serde_json::to_string_pretty(&ReportService::student_summaries(&reg))?
        }
        ReportKind::Attendance => {
            serde_json::to_string_pretty(&ReportService::attendance_report(&reg)?)?
        }
        ReportKind::Grades => serde_json::to_string_pretty(&ReportService::grade_report(&reg)?)?,
    };
    println!("{}", json);

    Ok(())
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<AppError>() {
        Some(app_error) => {
            let body = ErrorBody::from(app_error);
            match serde_json::to_string(&body) {
                Ok(json) => eprintln!("{}", json),
                Err(_) => eprintln!("❌ {}", app_error),
            }
        }
        None => eprintln!("❌ {}", err),
    }
}
