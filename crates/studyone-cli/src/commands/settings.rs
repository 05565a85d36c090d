//! Settings commands.

use clap::Subcommand;
use studyone_core::storage::Store;
use studyone_core::AppSettings;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show all settings
    Show,
    /// Set the display name
    SetUsername {
        /// Display name
        name: String,
    },
    /// Set the theme preset
    SetTheme {
        /// Preset name
        preset: String,
    },
    /// Set the base font size
    SetFontSize {
        /// Size in pixels
        size: u32,
    },
    /// Adjust pomodoro durations
    SetPomodoro {
        /// Focus minutes
        #[arg(long)]
        focus: Option<u32>,
        /// Short break minutes
        #[arg(long)]
        short_break: Option<u32>,
        /// Long break minutes
        #[arg(long)]
        long_break: Option<u32>,
        /// Focus sessions before a long break
        #[arg(long)]
        sessions: Option<u32>,
        /// Start breaks automatically
        #[arg(long)]
        auto_start_breaks: Option<bool>,
    },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut settings = AppSettings::load(&store)?;

    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            return Ok(());
        }
        SettingsAction::SetUsername { name } => settings.username = Some(name),
        SettingsAction::SetTheme { preset } => settings.theme_preset = preset,
        SettingsAction::SetFontSize { size } => settings.font_size = size,
        SettingsAction::SetPomodoro {
            focus,
            short_break,
            long_break,
            sessions,
            auto_start_breaks,
        } => {
            let p = &mut settings.pomodoro;
            if let Some(v) = focus {
                p.focus_minutes = v;
            }
            if let Some(v) = short_break {
                p.short_break_minutes = v;
            }
            if let Some(v) = long_break {
                p.long_break_minutes = v;
            }
            if let Some(v) = sessions {
                p.sessions_before_long_break = v;
            }
            if let Some(v) = auto_start_breaks {
                p.auto_start_breaks = v;
            }
        }
    }

    settings.save(&store)?;
    println!("Settings updated");
    Ok(())
}
