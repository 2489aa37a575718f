use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studystreak-cli", version, about = "Studystreak CLI")]
struct Cli {
    /// User the command acts for (defaults to $STUDYSTREAK_USER)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Committed study sessions
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Live stopwatch control
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Derived statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Activity heatmap
    Heatmap {
        #[command(subcommand)]
        action: commands::heatmap::HeatmapAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Data export and settings import
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let user = cli
        .user
        .or_else(|| std::env::var("STUDYSTREAK_USER").ok());

    let result = match cli.command {
        Commands::Session { action } => commands::session::run(action, user.as_deref()),
        Commands::Timer { action } => commands::timer::run(action, user.as_deref()),
        Commands::Stats { action } => commands::stats::run(action, user.as_deref()),
        Commands::Heatmap { action } => commands::heatmap::run(action, user.as_deref()),
        Commands::Config { action } => commands::config::run(action),
        Commands::Data { action } => commands::data::run(action, user.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
