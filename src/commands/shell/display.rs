//! Formatting of command outcomes
//!
//! Every function writes plain text to the given writer. Colours come from the
//! `colored` crate and are switched off by the binary when stdout is not a
//! terminal.

use crate::areas::store::SnapshotReport;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::commands::porcelain::branch::BranchListing;
use crate::commands::porcelain::checkout::CheckedOut;
use crate::commands::porcelain::commit::Committed;
use crate::commands::porcelain::find::FoundCommit;
use crate::commands::porcelain::init::Initialized;
use crate::commands::porcelain::merge::Merged;
use crate::commands::porcelain::track::Tracked;
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

pub fn show_initialized(
    out: &mut dyn Write,
    path: &Path,
    initialized: &Initialized,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Initialized empty repository in {} (branch: {})",
        path.display(),
        initialized.branch.as_ref().green()
    )
}

pub fn show_tracked(out: &mut dyn Write, tracked: &Tracked) -> std::io::Result<()> {
    match tracked {
        Tracked::Added(file) => writeln!(out, "Tracking '{}'", file.display()),
        Tracked::AlreadyTracked(file) => {
            writeln!(out, "'{}' is already tracked", file.display())
        }
        Tracked::Restaged(file) => {
            writeln!(out, "Tracking '{}' from the working directory", file.display())
        }
    }
}

pub fn show_committed(
    out: &mut dyn Write,
    err: &mut dyn Write,
    branch: &BranchName,
    committed: &Committed,
) -> std::io::Result<()> {
    show_skipped(err, &committed.report)?;
    writeln!(
        out,
        "[{} {}] {}",
        branch,
        committed.commit.id().as_ref().yellow(),
        committed.commit.short_message()
    )?;
    writeln!(
        out,
        " {} file(s) saved to snapshot",
        committed.report.copied.len()
    )
}

pub fn show_branch_created(
    out: &mut dyn Write,
    name: &str,
    head: &Arc<Commit>,
) -> std::io::Result<()> {
    writeln!(
        out,
        "Created branch '{}' at {}",
        name.green(),
        head.id().as_ref().yellow()
    )
}

pub fn show_branches(out: &mut dyn Write, branches: &[BranchListing]) -> std::io::Result<()> {
    for branch in branches {
        if branch.is_current {
            writeln!(out, "* {}", branch.name.as_ref().green())?;
        } else {
            writeln!(out, "  {}", branch.name)?;
        }
    }

    Ok(())
}

pub fn show_checked_out(
    out: &mut dyn Write,
    err: &mut dyn Write,
    checked_out: &CheckedOut,
) -> std::io::Result<()> {
    show_skipped(err, &checked_out.report)?;
    if checked_out.already_current {
        writeln!(out, "Already on '{}'", checked_out.branch)?;
    } else {
        writeln!(out, "Switched to branch '{}'", checked_out.branch)?;
    }
    writeln!(
        out,
        "Restored {} file(s) from {}",
        checked_out.report.copied.len(),
        checked_out.head.id().as_ref().yellow()
    )
}

pub fn show_merged(
    out: &mut dyn Write,
    err: &mut dyn Write,
    first: &str,
    second: &str,
    merged: &Merged,
) -> std::io::Result<()> {
    for conflict in &merged.conflicts {
        writeln!(err, "{} {}", "warning:".yellow(), conflict)?;
    }
    show_skipped(err, &merged.report)?;
    for file in &merged.stale {
        writeln!(
            err,
            "{} working copy of '{}' differs from the merge commit, `checkout {}` restores it",
            "warning:".yellow(),
            file.display(),
            merged.target
        )?;
    }
    for file in &merged.carried {
        writeln!(out, "Still tracking '{}'", file.display())?;
    }
    writeln!(
        out,
        "Merged '{}' and '{}' into {} on '{}'",
        first,
        second,
        merged.commit.id().as_ref().yellow(),
        merged.target
    )
}

/// Full record of one commit, as printed by `log`
pub fn show_commit(out: &mut dyn Write, commit: &Commit) -> std::io::Result<()> {
    writeln!(out, "{} {}", "commit".yellow(), commit.id().as_ref().yellow())?;
    if commit.is_merge() {
        let parents = commit
            .parents()
            .iter()
            .map(|parent| parent.id().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "Merge: {}", parents)?;
    }
    writeln!(out, "Date:   {}", commit.readable_timestamp())?;
    writeln!(out)?;
    for line in commit.message().as_ref().lines() {
        writeln!(out, "    {}", line)?;
    }
    writeln!(out)?;
    writeln!(out, "Files tracked:")?;
    for file in commit.snapshot().filenames() {
        writeln!(out, "    {}", file.display())?;
    }
    writeln!(out)
}

pub fn show_log(
    out: &mut dyn Write,
    commits: impl Iterator<Item = Arc<Commit>>,
) -> std::io::Result<()> {
    for commit in commits {
        show_commit(out, &commit)?;
    }

    Ok(())
}

/// One line per commit, plus the parents of merge commits
pub fn show_history(
    out: &mut dyn Write,
    commits: impl Iterator<Item = Arc<Commit>>,
) -> std::io::Result<()> {
    for commit in commits {
        writeln!(
            out,
            "   ├── {} ({})",
            commit.id().as_ref().yellow(),
            commit.short_message()
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(|parent| format!("[{}]", parent.id()))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "   │    ↳ merge of {}", parents)?;
        }
    }

    Ok(())
}

pub fn show_branch_graph(
    out: &mut dyn Write,
    graph: Vec<(BranchName, impl Iterator<Item = Arc<Commit>>)>,
) -> std::io::Result<()> {
    writeln!(out, "=== Branch Commit Graph ===")?;
    for (name, commits) in graph {
        writeln!(out)?;
        writeln!(out, "{}", name.as_ref().green())?;
        show_history(out, commits)?;
    }
    writeln!(out, "-----------------------------")
}

pub fn show_found(out: &mut dyn Write, found: &FoundCommit) -> std::io::Result<()> {
    let commit = &found.commit;

    writeln!(out, "{} {}", "commit".yellow(), commit.id().as_ref().yellow())?;
    writeln!(out, "Message: {}", commit.message())?;
    writeln!(out, "Date:    {}", commit.readable_timestamp())?;
    writeln!(out, "Parents: {}", commit.parent_count())?;
    writeln!(out, "Files:")?;
    for file in commit.snapshot().filenames() {
        writeln!(out, "    {}", file.display())?;
    }
    writeln!(out, "Snapshot saved under: {}", found.folder.display())?;
    if !found.stored_files.is_empty() {
        writeln!(out, "Stored:")?;
        for file in &found.stored_files {
            writeln!(out, "    {}", file.display())?;
        }
    }

    Ok(())
}

fn show_skipped(err: &mut dyn Write, report: &SnapshotReport) -> std::io::Result<()> {
    for skipped in &report.skipped {
        writeln!(
            err,
            "{} skipped '{}': {}",
            "warning:".yellow(),
            skipped.filename.display(),
            skipped.error
        )?;
    }

    Ok(())
}
