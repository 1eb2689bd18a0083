use anyhow::Result;
use clap::Parser;
use grcview::app::App;
use grcview::cli::{completions, fetch, Cli, Commands};
use grcview::styles::init_theme;
use grcview::utils::get_log_dir;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions must not touch the config file or the log directory
    if let Some(Commands::Completions { shell }) = &cli.command {
        return completions::generate(*shell);
    }

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "grcview.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let settings = cli.load_settings()?;

    let result = match &cli.command {
        Some(Commands::Fetch { title }) => fetch::run(&settings, title, &mut std::io::stdout()),
        Some(Commands::Completions { .. }) => Ok(()),
        None => {
            init_theme(settings.config.theme);
            let title = cli.initial_title(&settings.config);
            eprintln!(
                "Logs are being written to: {:?}",
                log_dir.join("grcview.log")
            );
            App::new(settings, title).and_then(|mut app| app.run())
        }
    };

    drop(guard);
    result
}
