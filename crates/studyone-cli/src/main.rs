use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyone", version, about = "StudyOne study companion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Notes
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Tasks
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Exam tracker
    Exam {
        #[command(subcommand)]
        action: commands::exam::ExamAction,
    },
    /// Job application tracker
    Job {
        #[command(subcommand)]
        action: commands::job::JobAction,
    },
    /// Flashcard decks
    Deck {
        #[command(subcommand)]
        action: commands::deck::DeckAction,
    },
    /// Daily streak
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Pomodoro countdown
    Pomodoro {
        #[command(subcommand)]
        action: commands::pomodoro::PomodoroAction,
    },
    /// Application settings
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Backup export/import
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupAction,
    },
    /// Dashboard summaries
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    // Best-effort; the CLI stays usable without a logger.
    flexi_logger::Logger::try_with_env_or_str("warn")
        .ok()?
        .start()
        .ok()
}

fn main() {
    let _logger = init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Note { action } => commands::note::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Exam { action } => commands::exam::run(action),
        Commands::Job { action } => commands::job::run(action),
        Commands::Deck { action } => commands::deck::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Pomodoro { action } => commands::pomodoro::run(action),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Backup { action } => commands::backup::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
