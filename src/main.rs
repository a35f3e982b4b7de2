//! The Midnight Manuscript
//!
//! A noir detective mystery for the terminal. Explore the crime scene,
//! interrogate suspects, run forensic tests and close the case.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use midnight_manuscript::tui::App;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();

    // Main loop
    while app.running {
        // Apply finished lab tests and background checks
        app.tick();

        // Draw
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Handle input
        if !app.handle_input()? {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    println!("║  The Midnight Manuscript                               ║");
    println!("║                                                        ║");
    println!("║  The case file stays on your desk, Detective.          ║");
    println!("╚════════════════════════════════════════════════════════╝\n");

    Ok(())
}
