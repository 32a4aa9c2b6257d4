use crate::models::mode::enables;
use crate::models::{config, QuizMode};
use crate::quiz::profile::available_difficulties;

pub fn handle_mode(mode: Option<QuizMode>, clear: bool) {
    let mut user_config = config::load_config();

    if mode.is_none() && !clear {
        match user_config.mode {
            Some(current) => println!(
                "Current mode: {} ({})",
                current.display_name(),
                current.description()
            ),
            None => println!("Current mode: none (addition and subtraction, two attempts)"),
        }
        println!();
        println!("Modes:");
        for mode in QuizMode::ALL {
            println!("  {:<18} {}", mode.as_str(), mode.description());
        }
        println!();
        println!("To change: mathquiz mode <mode>");
        println!("To clear:  mathquiz mode --clear");
        return;
    }

    if user_config.mode == mode {
        println!("Mode is already set to {}", mode.map_or("none", |m| m.as_str()));
        return;
    }

    user_config.mode = mode;
    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save config: {}", e);
        std::process::exit(1);
    }

    println!("Mode set to {}", mode.map_or("none", |m| m.as_str()));
    let levels: Vec<&str> = available_difficulties(mode)
        .iter()
        .map(|level| level.as_str())
        .collect();
    println!("Available difficulties: {}", levels.join(", "));
    if !enables(mode, user_config.difficulty) {
        println!(
            "Note: your saved difficulty ({}) is not available in this mode",
            user_config.difficulty
        );
    }
}
