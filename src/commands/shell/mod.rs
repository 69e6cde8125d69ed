//! Line-oriented shell
//!
//! Reads one command per line, runs it against the repository and prints the
//! outcome. A failing command prints `error: ...` and the shell keeps going;
//! only failures to read input or write output end the session.

pub mod command;
pub mod display;

use crate::areas::repository::Repository;
use crate::artifacts::core::PagerWriter;
use crate::errors::RepositoryError;
use anyhow::Context;
use colored::Colorize;
use command::{MENU, ShellCommand, parse_line};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "twig> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<O: Write, E: Write> {
    repository: Repository,
    out: O,
    err: E,
    /// Print the menu and a prompt before each line
    interactive: bool,
    /// Send long listings through the pager
    paging: bool,
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn new(repository: Repository, out: O, err: E) -> Self {
        Shell {
            repository,
            out,
            err,
            interactive: false,
            paging: false,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn paging(mut self, paging: bool) -> Self {
        self.paging = paging;
        self
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn out(&self) -> &O {
        &self.out
    }

    pub fn err(&self) -> &E {
        &self.err
    }

    /// Initialize the repository and report it
    pub fn start(&mut self) -> anyhow::Result<()> {
        let initialized = self.repository.init()?;
        display::show_initialized(&mut self.out, self.repository.path(), &initialized)?;

        if self.interactive {
            write!(self.out, "{}", MENU)?;
        }

        Ok(())
    }

    /// Run commands until `exit` or the end of input
    pub fn run(&mut self, input: impl BufRead) -> anyhow::Result<()> {
        self.prompt()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
            self.prompt()?;
        }

        self.out.flush()?;
        self.err.flush()?;

        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> anyhow::Result<Flow> {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                let usage = e.downcast::<clap::Error>()?;
                if usage.kind() == clap::error::ErrorKind::DisplayHelp {
                    write!(self.out, "{}", usage.render())?;
                } else {
                    write!(self.err, "{}", usage.render())?;
                }
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(e) => match e.downcast_ref::<RepositoryError>() {
                Some(error) => {
                    self.report(error)?;
                    Ok(Flow::Continue)
                }
                None => Err(e),
            },
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> anyhow::Result<Flow> {
        match command {
            ShellCommand::Track { files } => {
                for file in files {
                    match self.repository.track(&file) {
                        Ok(tracked) => display::show_tracked(&mut self.out, &tracked)?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            ShellCommand::Commit { message } => {
                let committed = self.repository.commit(&message)?;
                let branch = self.repository.current_branch()?;
                display::show_committed(&mut self.out, &mut self.err, &branch, &committed)?;
            }
            ShellCommand::Log => {
                let commits = self.repository.log()?;
                page(&mut self.out, self.paging, |out| display::show_log(out, commits))?;
            }
            ShellCommand::Branch { name } => {
                let head = self.repository.branch(&name)?;
                display::show_branch_created(&mut self.out, &name, &head)?;
            }
            ShellCommand::Branches => {
                let branches = self.repository.list_branches()?;
                display::show_branches(&mut self.out, &branches)?;
            }
            ShellCommand::Checkout { name } => {
                let checked_out = self.repository.checkout(&name)?;
                display::show_checked_out(&mut self.out, &mut self.err, &checked_out)?;
            }
            ShellCommand::Merge {
                first,
                second,
                message,
            } => {
                let merged = self.repository.merge(&first, &second, &message)?;
                display::show_merged(&mut self.out, &mut self.err, &first, &second, &merged)?;
            }
            ShellCommand::Find { id } => {
                // ids carry the message, which may contain spaces
                let found = self.repository.find(&id.join(" "))?;
                display::show_found(&mut self.out, &found)?;
            }
            ShellCommand::History { branch } => {
                let commits = self.repository.history(branch.as_deref())?;
                display::show_history(&mut self.out, commits)?;
            }
            ShellCommand::Graph => {
                let graph = self.repository.branch_graph()?;
                page(&mut self.out, self.paging, |out| {
                    display::show_branch_graph(out, graph)
                })?;
            }
            ShellCommand::Menu => write!(self.out, "{}", MENU)?,
            ShellCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn report(&mut self, error: &RepositoryError) -> std::io::Result<()> {
        tracing::debug!(%error, "command failed");
        writeln!(self.err, "{} {}", "error:".red(), error)
    }

    fn prompt(&mut self) -> std::io::Result<()> {
        if self.interactive {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;
        }

        Ok(())
    }
}

fn page(
    out: &mut dyn Write,
    paging: bool,
    print: impl FnOnce(&mut dyn Write) -> std::io::Result<()>,
) -> anyhow::Result<()> {
    if !paging {
        print(out)?;
        return Ok(());
    }

    let mut writer = PagerWriter::new();
    print(&mut writer)?;
    writer.page().context("failed to run the pager")
}
