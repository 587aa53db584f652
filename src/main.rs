use anyhow::Context;
use crossterm::{
    event::{Event, KeyEventKind, read},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use vimi::cli;
use vimi::config::VimiConfig;
use vimi::editor::Editor;
use vimi::ui::renderer::TuiRenderer;

/// Application entry point: parse command-line arguments, load the
/// configuration, set up logging and the terminal, run the event loop and
/// restore the terminal on exit.
///
/// # Returns
///
/// `Ok(())` once the window is closed, or an error if argument parsing,
/// configuration loading, terminal setup or rendering fails.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments first (before terminal setup)
    let cli_args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => e.exit(),
    };

    let config = VimiConfig::load(cli_args.config.as_deref())?;
    let log_path = vimi::logging::init(&config);
    log::info!("Starting vimi, logging to {:?}", log_path);

    // Enable raw mode and enter alternate screen
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let result = run(Editor::with_config(&config));

    // Leave alternate screen and disable raw mode, even after an error
    crossterm::execute!(stdout, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    log::info!("Window closed");
    result
}

/// Serial event loop: each event is handled to completion before the next
/// one is read, and the window is redrawn after every event.
fn run(mut editor: Editor) -> anyhow::Result<()> {
    let mut renderer = TuiRenderer::new().context("Failed to create renderer")?;

    loop {
        renderer.draw(&mut editor)?;

        match read()? {
            // Only presses are dispatched; key-up is synthesised by the editor
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                if editor.handle_key(key_event) {
                    break;
                }
            }
            Event::Resize(cols, rows) => editor.handle_resize(cols, rows),
            _ => {}
        }
    }
    Ok(())
}
