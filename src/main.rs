//! Vizdims - a terminal scatter-plot viewer for article data.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use vizdims::app::App;
use vizdims::config::{Margin, PlotGeometry, ViewerConfig};
use vizdims::controller::PlotFilterController;
use vizdims::data::DataReader;
use vizdims::filter::MatchPolicy;
use vizdims::ui;

#[derive(Parser, Debug)]
#[command(name = "vizdims")]
#[command(about = "A terminal scatter-plot viewer for article data", long_about = None)]
struct Args {
    /// CSV file with title, x, y, url and publish_date columns
    file: PathBuf,

    /// Title matching rule
    #[arg(long, value_enum, default_value_t = MatchPolicy::WholeWord)]
    policy: MatchPolicy,

    /// Run without the headline table
    #[arg(long)]
    no_table: bool,

    /// Canvas width in pixels, margins included
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Canvas height in pixels, margins included
    #[arg(long, default_value_t = 500.0)]
    height: f64,

    /// Initial search text
    #[arg(long)]
    filter: Option<String>,

    /// Print the matching headlines and exit
    #[arg(long)]
    list: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            geometry: PlotGeometry {
                margin: Margin::default(),
                width: self.width,
                height: self.height,
            },
            policy: self.policy,
            table_enabled: !self.no_table,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting vizdims");
    }

    // Nothing renders without a dataset; a failed load is final.
    let dataset = match DataReader::read_file(&args.file) {
        Ok(dataset) => dataset,
        Err(err) => {
            tracing::error!("Data load failed: {}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    let mut controller = PlotFilterController::new(dataset, args.viewer_config());
    if let Some(ref text) = args.filter {
        controller.set_filter_text_externally(text);
    }

    if args.list {
        print_headlines(&controller);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(controller);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("vizdims exited");
    }

    Ok(())
}

/// One line per matching record: date, title and URL, tab separated.
fn print_headlines(controller: &PlotFilterController) {
    let dataset = controller.dataset();
    let visible_rows = controller.table().filter(|t| t.is_visible());

    let ordered: Vec<usize> = match visible_rows {
        Some(table) => table.rows().iter().map(|r| r.record).collect(),
        None => controller.view().to_vec(),
    };

    for record in ordered.into_iter().filter_map(|idx| dataset.get(idx)) {
        println!("{}\t{}\t{}", record.short_date(), record.title, record.url);
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Search mode - every edit reruns the filter
        if app.search.is_active() {
            let changed = match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    app.search.finish();
                    false
                },
                KeyCode::Backspace => app.search.backspace(),
                KeyCode::Char(c) => app.search.input(c),
                _ => false,
            };
            if changed {
                app.apply_search();
            }
            continue;
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Search
            (KeyModifiers::NONE, KeyCode::Char('/')) => app.search.start(),
            (KeyModifiers::NONE, KeyCode::Esc) => app.clear_filter(),

            // Hover navigation
            (KeyModifiers::NONE, KeyCode::Up)
            | (KeyModifiers::NONE, KeyCode::Char('k')) => app.cursor_up(),
            (KeyModifiers::NONE, KeyCode::Down)
            | (KeyModifiers::NONE, KeyCode::Char('j')) => app.cursor_down(),
            (KeyModifiers::NONE, KeyCode::Char('h'))
            | (KeyModifiers::NONE, KeyCode::Left) => app.hover_end(),
            (KeyModifiers::NONE, KeyCode::Tab) => app.toggle_focus(),

            // Links
            (KeyModifiers::NONE, KeyCode::Enter)
            | (KeyModifiers::NONE, KeyCode::Char('o')) => app.select_hovered(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_hovered_link(),

            // Appearance
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                app.status = "Help: /=search, Esc=clear, j/k=hover, Tab=plot/table, Enter=open, y=copy url, T=theme, q=quit".to_string();
            },

            _ => {},
        }
    }
}
