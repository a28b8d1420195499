use anyhow::Context;
use boksl_picker::ui::FileDialog;
use boksl_picker::utils::logging::{default_log_path, init_file_logging};
use boksl_picker::{FileSystem, IconStyle, PickerConfig, SelectionMode, Theme, ThemeManager};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "boksl-picker",
    version,
    about = "Pick a file or directory in the terminal and print its path"
)]
struct Cli {
    #[arg(help = "Directory to start in (default: current directory)")]
    dir: Option<PathBuf>,

    #[arg(long, help = "Select a directory instead of a file")]
    dirs_only: bool,

    #[arg(long, help = "Use ASCII icons")]
    ascii: bool,

    #[arg(long = "ext", value_name = "EXT", help = "Allowed file extension (repeatable)")]
    extensions: Vec<String>,

    #[arg(long, value_name = "PATH", help = "Config file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, value_name = "PATH", help = "Log file path")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_file_logging(&log_path) {
        eprintln!("Warning: logging disabled ({}): {}", log_path.display(), e);
    }

    let mut config = PickerConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.ascii {
        config.icon_style = IconStyle::Ascii;
    }
    if !cli.extensions.is_empty() {
        config.allowed_extensions = cli.extensions.clone();
    }

    let theme = load_theme(cli.theme.as_deref().unwrap_or(&config.theme));

    let mode = if cli.dirs_only {
        SelectionMode::OpenDirectory
    } else {
        SelectionMode::OpenFile
    };
    let initial_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    // 터미널을 건드리기 전에 초기 디렉토리 에러를 보고한다
    let chosen: Rc<RefCell<Option<PathBuf>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&chosen);
    let mut dialog = FileDialog::new(
        config.dialog_options(initial_dir, mode),
        FileSystem::new(),
        move |path| {
            *sink.borrow_mut() = Some(path);
        },
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_dialog(&mut terminal, &mut dialog, &theme);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;

    let chosen = chosen.borrow_mut().take();
    match chosen {
        Some(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

fn load_theme(name: &str) -> Theme {
    let mut themes = ThemeManager::new();
    if let Err(e) = themes.load_themes_from_config_dir() {
        tracing::warn!("Failed to load custom themes: {}", e);
    }
    if let Err(e) = themes.switch_theme(name) {
        tracing::warn!("{} (available: {:?})", e, themes.available_themes());
    }
    themes.current().clone()
}

fn run_dialog<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    dialog: &mut FileDialog<FileSystem>,
    theme: &Theme,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| {
            let root = f.area();
            dialog.resize(root);
            dialog.render(root, f.buffer_mut(), theme);
            if let Some(position) = dialog.cursor_position() {
                f.set_cursor_position(position);
            }
        })?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // 키 릴리스 이벤트는 무시
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    dialog.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    dialog.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        if dialog.is_closed() {
            break;
        }
    }

    Ok(())
}
