use crate::display::difficulty_line;
use crate::models::mode::enables;
use crate::models::{config, Difficulty, QuizMode};

pub fn handle_difficulty(level: Option<Difficulty>) {
    let mut user_config = config::load_config();

    match level {
        None => {
            println!("Current difficulty: {}", user_config.difficulty.display_name());
            println!(
                "Current mode: {}",
                user_config.mode.map_or("none", |m| m.as_str())
            );
            println!();
            println!("Difficulties:");
            for level in Difficulty::ALL {
                println!("  {}", difficulty_line(level));
            }
            println!();
            println!("To change: mathquiz difficulty <level>");
        }
        Some(new_level) => {
            let old_level = user_config.difficulty;
            if old_level == new_level {
                println!("Difficulty is already set to {}", new_level.display_name());
                return;
            }

            user_config.difficulty = new_level;
            if let Err(e) = config::save_config(&user_config) {
                eprintln!("Failed to save config: {}", e);
                std::process::exit(1);
            }

            println!(
                "Difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
            if !enables(user_config.mode, new_level) {
                println!(
                    "Note: {} questions need `mathquiz mode {}` before they can be played",
                    new_level.display_name(),
                    QuizMode::ImpossibleExtras
                );
            }
        }
    }
}
