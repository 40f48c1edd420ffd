//! `roster shell`: the interactive command loop.
//!
//! ```text
//! cmd> info | list | coaches | staff | show <number> | search <name>
//! cmd> view category <c> | view filter <text> | view select <i> | view show
//! cmd> help | exit
//! ```
//!
//! Bad input is reported on the output and the loop continues. Only I/O
//! failures on the terminal itself end the session with an error.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_core::{format, query, JerseyNumber, RosterCategory, RosterConfig, Team};

use crate::view::{RosterView, Styles};

const COMMANDS: &str = "Commands: info | list | coaches | staff | show <number> | \
    search <name> | view ... | help | exit";

const VIEW_USAGE: &str = "Usage: view category <players|coaches|staff> | \
    view filter <text> | view select <index> | view show";

/// Arguments for `roster shell` (also the default with no subcommand).
#[derive(Args, Debug, Default)]
pub struct ShellArgs {}

impl ShellArgs {
    pub fn run(self, team: &Team, config: &RosterConfig) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut shell = Shell::new(team, config);
        shell.run(stdin.lock(), &mut stdout.lock())
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a team.
pub struct Shell<'a> {
    team: &'a Team,
    styles: Styles,
    view: RosterView<'a>,
}

impl<'a> Shell<'a> {
    pub fn new(team: &'a Team, config: &RosterConfig) -> Self {
        Self {
            team,
            styles: Styles::from_palette(&config.palette),
            view: RosterView::new(team, &config.palette),
        }
    }

    /// Read commands from `input` until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "{} {}",
            self.styles.heading(self.team.name()),
            "roster shell".color(self.styles.accent)
        )?;
        writeln!(out, "{}", self.styles.dim(COMMANDS))?;

        let mut buf = Vec::new();
        loop {
            write!(out, "cmd> ")?;
            out.flush().context("failed to flush prompt")?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .context("failed to read command")?;
            if read == 0 {
                writeln!(out)?;
                writeln!(out, "Bye")?;
                return Ok(());
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!(bytes = buf.len(), "non-UTF-8 input line");
                writeln!(out, "Invalid input: not valid UTF-8")?;
                continue;
            };
            if let Flow::Exit = self.dispatch(line.trim(), out)? {
                return Ok(());
            }
        }
    }

    fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        if line.is_empty() {
            return Ok(Flow::Continue);
        }
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        let cmd = cmd.to_lowercase();
        tracing::debug!(command = %cmd, "shell command");

        match cmd.as_str() {
            "info" => write!(out, "{}", format::summary(self.team))?,
            "list" => write!(out, "{}", format::roster(self.team))?,
            "coaches" => {
                writeln!(out, "Coaches:")?;
                for coach in self.team.list_coaches() {
                    writeln!(out, "  {coach}")?;
                }
            }
            "staff" => {
                writeln!(out, "Staff:")?;
                for staff in self.team.list_staff() {
                    writeln!(out, "  {staff}")?;
                }
            }
            "show" => self.show(rest, out)?,
            "search" => self.search(rest, out)?,
            "view" => self.view(rest, out)?,
            "help" => writeln!(out, "{COMMANDS}\n{VIEW_USAGE}")?,
            "exit" | "quit" => {
                writeln!(out, "Bye")?;
                return Ok(Flow::Exit);
            }
            other => writeln!(out, "Unknown command: {other}")?,
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, arg: &str, out: &mut W) -> Result<()> {
        if arg.is_empty() {
            writeln!(out, "Usage: show <number>")?;
            return Ok(());
        }
        let number: JerseyNumber = match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                writeln!(out, "Invalid number: {arg}")?;
                return Ok(());
            }
        };
        match query::find(self.team, number) {
            Some(player) => writeln!(out, "{player}")?,
            None => writeln!(out, "No player with number {number}")?,
        }
        Ok(())
    }

    fn search<W: Write>(&self, arg: &str, out: &mut W) -> Result<()> {
        if arg.is_empty() {
            writeln!(out, "Usage: search <name>")?;
            return Ok(());
        }
        let hits = query::search_players(self.team, arg);
        if hits.is_empty() {
            writeln!(out, "No matching players.")?;
        }
        for player in hits {
            writeln!(out, "{player}")?;
        }
        Ok(())
    }

    fn view<W: Write>(&mut self, args: &str, out: &mut W) -> Result<()> {
        let (sub, rest) = match args.split_once(char::is_whitespace) {
            Some((sub, rest)) => (sub, rest.trim()),
            None => (args, ""),
        };
        match sub.to_lowercase().as_str() {
            "category" => match rest.parse::<RosterCategory>() {
                Ok(category) => {
                    self.view.set_category(category);
                    write!(out, "{}", self.view.render())?;
                }
                Err(msg) => writeln!(out, "{msg}")?,
            },
            // An empty filter resets to the full category.
            "filter" => {
                self.view.set_query(rest);
                write!(out, "{}", self.view.render())?;
            }
            "select" => match rest.parse::<usize>() {
                Ok(index) => match self.view.select(index) {
                    Some(card) => write!(out, "{card}")?,
                    None => writeln!(out, "No row {index} ({} shown)", self.view.shown().len())?,
                },
                Err(_) => writeln!(out, "Invalid index: {rest}")?,
            },
            "show" | "" => {
                write!(out, "{}", self.view.render())?;
                if let Some(entry) = self.view.selected() {
                    write!(out, "{}", format::detail_card(entry))?;
                }
            }
            _ => writeln!(out, "{VIEW_USAGE}")?,
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
