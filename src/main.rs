use clap::Parser;
use lernquest::{Args, Command, Config, Quiz, QuizError, logging, option_label, report_from_query};

fn main() {
    let config = Config::from(Args::parse());

    let result = match config.command.clone() {
        None => run_interactive(&config),
        Some(Command::Report { query }) => {
            logging::init_to_stderr();
            report_from_query(&config.store(), &query).map(|report| println!("{}", report))
        }
        Some(Command::List) => {
            logging::init_to_stderr();
            print_catalog(&config);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_interactive(config: &Config) -> Result<(), QuizError> {
    if let Err(e) = logging::init_to_file(&config.log_file) {
        eprintln!(
            "Warning: cannot open log file {}: {}",
            config.log_file.display(),
            e
        );
    }
    Quiz::from_config(config).run()
}

fn print_catalog(config: &Config) {
    let questions = config.store().list();
    if questions.is_empty() {
        println!("No questions in {}", config.questions_path.display());
        return;
    }

    for question in &questions {
        println!("#{} [{}] {}", question.id, question.category, question.text);
        for (index, option) in question.options.iter().enumerate() {
            let marker = if index == question.correct_option { '*' } else { ' ' };
            println!("  {} {}. {}", marker, option_label(index), option);
        }
    }
}
