//! Prompt loop driving a [`TableSession`].

use std::io;
use std::io::Write;

use artic_lib::PageOutcome;
use artic_lib::TableSession;
use artic_lib::source::DataSource;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;

use crate::command::Command;
use crate::command::HELP;
use crate::render::render_table;

/// Whether the prompt loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The table front-end: one session, one data source, one output.
pub struct App<'a, S: DataSource + ?Sized> {
    source: &'a S,
    session: TableSession,
}

impl<'a, S: DataSource + ?Sized> App<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            session: TableSession::new(),
        }
    }

    pub fn session(&self) -> &TableSession {
        &self.session
    }

    /// Loads the first page and draws it.
    pub async fn start<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.load(1, out).await?;
        self.draw(out)
    }

    /// Executes one command.
    pub async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        log::debug!("Command: {:?}", command);

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Unknown(line) => {
                writeln!(out, "Unknown command: {line}\n{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Redraw => {}
            Command::Next => {
                match self.session.next_page(self.source).await {
                    Some(outcome) => self.report(outcome, out)?,
                    None => {
                        writeln!(out, "Already on the last page")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            Command::Prev => {
                match self.session.prev_page(self.source).await {
                    Some(outcome) => self.report(outcome, out)?,
                    None => {
                        writeln!(out, "Already on the first page")?;
                        return Ok(Flow::Continue);
                    }
                }
            }
            Command::Goto(page) => self.load(page, out).await?,
            Command::Reload => {
                writeln!(out, "Reloading page {}…", self.session.current_page())?;
                out.flush()?;
                let outcome = self.session.reload(self.source).await;
                self.report(outcome, out)?;
            }
            Command::Select(input) => {
                self.session.select_rows(&input);
            }
            Command::Toggle(row) => {
                if self.session.toggle_row(row - 1).is_none() {
                    writeln!(out, "No row {row} on this page")?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Clear => self.session.clear_selection(),
        }

        self.draw(out)?;
        Ok(Flow::Continue)
    }

    async fn load<W: Write>(&mut self, page: u32, out: &mut W) -> io::Result<()> {
        writeln!(out, "Loading page {page}…")?;
        out.flush()?;

        let outcome = self.session.goto_page(self.source, page).await;
        self.report(outcome, out)
    }

    /// Explains an empty result; a page without pagination metadata failed.
    fn report<W: Write>(&self, outcome: PageOutcome, out: &mut W) -> io::Result<()> {
        match outcome {
            PageOutcome::Loaded { page, records: 0, .. } => {
                if self.session.total_pages() == 0 {
                    writeln!(out, "Page {page} could not be loaded")?;
                } else {
                    writeln!(out, "Page {page} has no records")?;
                }
            }
            PageOutcome::Loaded { .. } => {}
            PageOutcome::Stale { page } => log::debug!("Ignored stale page {}", page),
        }
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", render_table(&self.session))?;
        out.flush()
    }
}

/// Reads commands from `input` until `quit` or end of input.
pub async fn run<S, R, W>(source: &S, input: R, out: &mut W) -> io::Result<()>
where
    S: DataSource + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = App::new(source);
    app.start(out).await?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if app.handle(Command::parse(&line), out).await? == Flow::Quit {
            break;
        }
    }

    writeln!(out)?;
    Ok(())
}
