// rpntty: step-through visualizer for RPN arithmetic expressions

use std::fs::File;
use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use rpntty::expr::{infix_to_postfix, tokenize};
use rpntty::port::run_session;
use rpntty::stepper::Stepper;
use rpntty::ui::App;

#[derive(Parser)]
#[command(
    name = "rpntty",
    about = "Calculator and visualizer for RPN arithmetic expressions"
)]
struct Args {
    /// RPN expression to evaluate (whitespace-separated tokens)
    expression: String,

    /// Set this flag if the supplied expression is infix
    #[arg(long)]
    infix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // File logger only: the TUI owns stdout for the whole session.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("rpntty.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let mut expression = tokenize(&args.expression);

    // Conversion failures surface before any stepping begins.
    if args.infix {
        expression = match infix_to_postfix(&expression) {
            Ok(postfix) => postfix,
            Err(e) => {
                eprintln!("Error: invalid infix expression: {}", e);
                std::process::exit(1);
            }
        };
        log::info!("converted infix input to postfix: {}", expression.join(" "));
    }

    let mut stepper = Stepper::new(expression);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Create the display port and run the session
    let mut app = App::new(terminal);
    let res = run_session(&mut stepper, &mut app);

    // Restore terminal
    let mut terminal = app.into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
