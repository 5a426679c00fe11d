//! Terminal front end and entry point.
//!
//! A thin shim between the library and a real terminal. It turns crossterm
//! key and mouse events into overlay [`Event`]s, drives the latency timer
//! from the system clock, and shows the last committed product as the page
//! behind the overlay.
//!
//! # Keybindings
//!
//! Overlay closed:
//! - `/`: Open the search overlay
//! - `q`: Quit
//!
//! Overlay open:
//! - Printable keys, `Backspace`: Edit the query
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p`: Move the selection (wraps)
//! - `Enter`: Open the selected product
//! - `Esc`: Close
//! - `Tab`: Leave or re-enter the input (leaving closes when the query is empty)
//!
//! Anywhere: `Ctrl+c` quits. The mouse hovers and clicks results; a click
//! outside the overlay dismisses it. Clicking the overlay frame or the
//! results panel takes focus away from the input, which closes the overlay
//! when the query is empty.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEvent,
    KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use storefront_search::app::{HitRegion, Key};
use storefront_search::search::{normalize_query, search_products};
use storefront_search::timer::SystemClock;
use storefront_search::{
    initialize, Config, Event, Navigator, OverlayRuntime, OverlayState, ProductId, Result,
};

/// Poll interval while no timer is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Incremental product search over a storefront catalog.
#[derive(Parser, Debug)]
#[command(name = "storefront-search", version, about)]
struct Cli {
    /// Configuration file [default: <config dir>/storefront-search/config.toml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON catalog to search instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Built-in theme name (catppuccin-mocha, -latte, -frappe, -macchiato)
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[arg(long, value_name = "FILE")]
    theme_file: Option<PathBuf>,

    /// Simulated search latency
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Trace filter directive, e.g. "debug" or "storefront_search=trace"
    #[arg(long, value_name = "FILTER")]
    trace_level: Option<String>,

    /// Open the search overlay immediately
    #[arg(long)]
    open: bool,

    /// Print the products matching QUERY and exit without starting the UI
    #[arg(short, long, value_name = "QUERY")]
    query: Option<String>,
}

impl Cli {
    /// Command-line flags override file values.
    fn apply(&self, config: &mut Config) {
        if let Some(catalog) = &self.catalog {
            config.catalog_file = Some(catalog.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = Some(theme.clone());
        }
        if let Some(theme_file) = &self.theme_file {
            config.theme_file = Some(theme_file.clone());
        }
        if let Some(latency_ms) = self.latency_ms {
            config.latency_ms = latency_ms;
        }
        if let Some(trace_level) = &self.trace_level {
            config.trace_level.clone_from(trace_level);
        }
    }
}

/// Remembers the last product the overlay navigated to.
#[derive(Debug, Default)]
struct PageNavigator {
    shown: Option<ProductId>,
}

impl Navigator for PageNavigator {
    fn navigate_to_product(&mut self, id: &ProductId) {
        tracing::debug!(product_id = %id, "showing product page");
        self.shown = Some(id.clone());
    }
}

type Runtime = OverlayRuntime<SystemClock, PageNavigator>;

/// Raw mode, alternate screen and mouse capture for the guard's lifetime.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Front-end state that is not part of the overlay itself.
struct Frontend {
    runtime: Runtime,
    input_focused: bool,
    rows: usize,
    cols: usize,
}

enum Flow {
    Continue(bool),
    Quit,
}

impl Frontend {
    fn new(runtime: Runtime) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::with_size(runtime, usize::from(rows), usize::from(cols)))
    }

    const fn with_size(runtime: Runtime, rows: usize, cols: usize) -> Self {
        Self {
            runtime,
            input_focused: false,
            rows,
            cols,
        }
    }

    fn dispatch(&mut self, event: &Event) -> Result<bool> {
        let should_render = self.runtime.dispatch(event)?;
        if self.runtime.take_focus_request() {
            self.input_focused = true;
        }
        if !self.runtime.state().is_open() {
            self.input_focused = false;
        }
        Ok(should_render)
    }

    fn current_query(&self) -> String {
        self.runtime
            .state()
            .session()
            .map(|session| session.raw_query().to_string())
            .unwrap_or_default()
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<Flow> {
        if key.kind == KeyEventKind::Release {
            return Ok(Flow::Continue(false));
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Ok(Flow::Quit);
        }

        if !self.runtime.state().is_open() {
            return Ok(match key.code {
                KeyCode::Char('/') => Flow::Continue(self.dispatch(&Event::OpenRequested)?),
                KeyCode::Char('q') => Flow::Quit,
                _ => Flow::Continue(false),
            });
        }

        let event = match key.code {
            KeyCode::Down => Event::KeyPressed(Key::ArrowDown),
            KeyCode::Up => Event::KeyPressed(Key::ArrowUp),
            KeyCode::Char('n') if ctrl => Event::KeyPressed(Key::ArrowDown),
            KeyCode::Char('p') if ctrl => Event::KeyPressed(Key::ArrowUp),
            KeyCode::Enter => Event::KeyPressed(Key::Enter),
            KeyCode::Esc => Event::KeyPressed(Key::Escape),
            KeyCode::Tab if !self.input_focused => {
                self.input_focused = true;
                return Ok(Flow::Continue(true));
            }
            KeyCode::Tab => {
                self.input_focused = false;
                Event::InputBlurred
            }
            KeyCode::Backspace => {
                self.input_focused = true;
                let mut query = self.current_query();
                query.pop();
                Event::QueryChanged(query)
            }
            KeyCode::Char(c) if !ctrl => {
                self.input_focused = true;
                let mut query = self.current_query();
                query.push(c);
                Event::QueryChanged(query)
            }
            _ => Event::KeyPressed(Key::Other),
        };

        Ok(Flow::Continue(self.dispatch(&event)?))
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Result<bool> {
        let Some(vm) = self.runtime.state().compute_viewmodel(self.rows, self.cols) else {
            return Ok(false);
        };
        let region = vm
            .layout
            .hit_test(usize::from(mouse.column) + 1, usize::from(mouse.row) + 1);

        match mouse.kind {
            MouseEventKind::Moved => match region {
                HitRegion::Result(index) => self.dispatch(&Event::PointerEnteredResult(index)),
                _ => Ok(false),
            },
            MouseEventKind::Down(MouseButton::Left) => {
                let mut should_render = false;
                match region {
                    HitRegion::Input => self.input_focused = true,
                    HitRegion::Backdrop | HitRegion::ResultsPanel if self.input_focused => {
                        self.input_focused = false;
                        should_render = self.dispatch(&Event::InputBlurred)?;
                    }
                    _ => {}
                }
                Ok(self.dispatch(&Event::PointerDown(region))? || should_render)
            }
            _ => Ok(false),
        }
    }

    fn draw(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;

        let state = self.runtime.state();
        let page = self
            .runtime
            .navigator()
            .shown
            .as_ref()
            .and_then(|id| state.catalog().find(id));
        storefront_search::ui::render(state, page, self.rows, self.cols);

        stdout.flush()
    }

    fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        loop {
            if dirty {
                self.draw()?;
                dirty = false;
            }

            let timeout = self.runtime.next_timer_in().unwrap_or(IDLE_POLL);
            if event::poll(timeout)? {
                match event::read()? {
                    TermEvent::Key(key) => match self.on_key(key)? {
                        Flow::Continue(render) => dirty |= render,
                        Flow::Quit => return Ok(()),
                    },
                    TermEvent::Mouse(mouse) => dirty |= self.on_mouse(mouse)?,
                    TermEvent::Resize(cols, rows) => {
                        self.cols = usize::from(cols);
                        self.rows = usize::from(rows);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.runtime.poll_timers()?;
        }
    }
}

fn print_matches(state: &OverlayState, query: &str) {
    let normalized = normalize_query(query);
    for product in search_products(state.catalog().products(), &normalized) {
        println!("{}\t{}\t{}", product.id, product.name, product.price_label());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    if let Err(e) = storefront_search::observability::init_tracing(&config) {
        eprintln!("storefront-search: tracing disabled: {e}");
    }

    let state = initialize(&config)?;

    if let Some(query) = &cli.query {
        print_matches(&state, query);
        return Ok(());
    }

    let mut frontend = Frontend::new(OverlayRuntime::new(
        state,
        SystemClock::new(),
        PageNavigator::default(),
    ))?;
    if cli.open {
        frontend.dispatch(&Event::OpenRequested)?;
    }

    let _guard = TerminalGuard::enter()?;
    frontend.run()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("storefront-search: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_search::ui::Rect;

    fn frontend() -> Frontend {
        let state = initialize(&Config::default()).unwrap();
        let runtime = OverlayRuntime::new(state, SystemClock::new(), PageNavigator::default());
        Frontend::with_size(runtime, 24, 80)
    }

    fn press(frontend: &mut Frontend, code: KeyCode) {
        frontend
            .on_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn click(frontend: &mut Frontend, rect: Rect) -> bool {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: u16::try_from(rect.col - 1).unwrap(),
            row: u16::try_from(rect.row - 1).unwrap(),
            modifiers: KeyModifiers::NONE,
        };
        frontend.on_mouse(mouse).unwrap()
    }

    fn layout(frontend: &Frontend) -> storefront_search::ui::OverlayLayout {
        frontend
            .runtime
            .state()
            .compute_viewmodel(frontend.rows, frontend.cols)
            .unwrap()
            .layout
    }

    #[test]
    fn test_open_focuses_input() {
        let mut frontend = frontend();
        press(&mut frontend, KeyCode::Char('/'));
        assert!(frontend.runtime.state().is_open());
        assert!(frontend.input_focused);
    }

    #[test]
    fn test_frame_click_with_empty_query_blurs_and_closes() {
        let mut frontend = frontend();
        press(&mut frontend, KeyCode::Char('/'));
        let backdrop = layout(&frontend).backdrop;

        assert!(click(&mut frontend, backdrop));
        assert!(!frontend.runtime.state().is_open());
        assert!(!frontend.input_focused);
    }

    #[test]
    fn test_frame_click_with_query_only_blurs() {
        let mut frontend = frontend();
        press(&mut frontend, KeyCode::Char('/'));
        for c in "feed".chars() {
            press(&mut frontend, KeyCode::Char(c));
        }
        let backdrop = layout(&frontend).backdrop;

        click(&mut frontend, backdrop);
        assert!(frontend.runtime.state().is_open());
        assert!(!frontend.input_focused);

        let input = layout(&frontend).input;
        click(&mut frontend, input);
        assert!(frontend.input_focused);
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut frontend = frontend();
        press(&mut frontend, KeyCode::Char('/'));
        press(&mut frontend, KeyCode::Char('o'));

        press(&mut frontend, KeyCode::Tab);
        assert!(!frontend.input_focused);
        assert!(frontend.runtime.state().is_open());

        press(&mut frontend, KeyCode::Tab);
        assert!(frontend.input_focused);

        press(&mut frontend, KeyCode::Backspace);
        press(&mut frontend, KeyCode::Tab);
        assert!(!frontend.runtime.state().is_open());
    }
}
