use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::LazyLock;

/// A word, or a run of text inside double or single quotes
const TOKEN_REGEX: &str = r#""([^"]*)"|'([^']*)'|(\S+)"#;

static TOKEN: LazyLock<Result<regex::Regex, regex::Error>> =
    LazyLock::new(|| regex::Regex::new(TOKEN_REGEX));

/// Numbered shortcuts of the classic menu
pub const MENU_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "1" => "track",
    "2" => "commit",
    "3" => "log",
    "4" => "branch",
    "5" => "checkout",
    "6" => "merge",
    "7" => "find",
    "8" => "branches",
    "9" => "graph",
    "10" => "exit",
};

pub const MENU: &str = r"
=== twig ===
1. track <file>...            Track files
2. commit -m <message>        Commit
3. log                        Log
4. branch <name>              Create branch
5. checkout <name>            Checkout branch
6. merge <a> <b> -m <msg>     Merge branches
7. find <id>                  Search commit by id
8. branches                   List branches
9. graph                      Show commits by branch
10. exit                      Exit
";

#[derive(Parser, Debug)]
#[command(
    name = "twig",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    #[command(
        name = "track",
        visible_alias = "add",
        about = "Track files in the current branch",
        long_about = "Adds files to the current branch's working list. \
        Their content is copied into the snapshot store on the next commit."
    )]
    Track {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files to track")]
        files: Vec<PathBuf>,
    },
    #[command(name = "commit", about = "Record the tracked files in a new commit")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show every commit reachable from the current head")]
    Log,
    #[command(name = "branch", about = "Create a branch at the current head")]
    Branch {
        #[arg(index = 1, help = "The branch name")]
        name: String,
    },
    #[command(name = "branches", about = "List branches")]
    Branches,
    #[command(
        name = "checkout",
        about = "Switch branches",
        long_about = "Switches to the given branch and restores the files of its head commit \
        into the working directory."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        name: String,
    },
    #[command(
        name = "merge",
        about = "Merge two branches into a new commit on the current branch",
        long_about = "Creates a merge commit on the current branch whose parents are the heads \
        of the two branches. Files present in both are taken from the first branch."
    )]
    Merge {
        #[arg(index = 1, help = "The first branch, which wins conflicts")]
        first: String,
        #[arg(index = 2, help = "The second branch")]
        second: String,
        #[arg(short, long, help = "The merge commit message")]
        message: String,
    },
    #[command(name = "find", about = "Look a commit up by id")]
    Find {
        #[arg(index = 1, required = true, num_args = 1.., help = "The commit id")]
        id: Vec<String>,
    },
    #[command(name = "history", about = "Show the first-parent history of a branch")]
    History {
        #[arg(index = 1, help = "The branch, defaults to the current one")]
        branch: Option<String>,
    },
    #[command(name = "graph", about = "Show the first-parent history of every branch")]
    Graph,
    #[command(name = "menu", about = "Show the numbered menu")]
    Menu,
    #[command(name = "exit", visible_alias = "quit", about = "Leave the shell")]
    Exit,
}

/// Split a line into words, honouring quotes
pub fn tokenize(line: &str) -> Result<Vec<String>, regex::Error> {
    let token = TOKEN.as_ref().map_err(Clone::clone)?;

    Ok(token
        .captures_iter(line)
        .filter_map(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().to_string())
        })
        .collect())
}

/// Parse one line of input, expanding numbered menu shortcuts
///
/// Returns `Ok(None)` for blank lines. Usage mistakes come back as a
/// [`clap::Error`] inside the `anyhow::Error`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<ShellCommand>> {
    let mut tokens =
        tokenize(line).with_context(|| format!("invalid token pattern {TOKEN_REGEX}"))?;

    let Some(first) = tokens.first_mut() else {
        return Ok(None);
    };
    if let Some(alias) = MENU_ALIASES.get(first.as_str()) {
        *first = alias.to_string();
    }

    let line = ShellLine::try_parse_from(tokens)?;

    Ok(Some(line.command))
}
