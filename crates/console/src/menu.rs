// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The top-level menu loop.
//!
//! The loop is an explicit state machine with typed results per transition:
//! every handler returns a `Transition`, and failure is a first-class value,
//! not control flow by unwinding. A store error during an iteration rolls
//! the session back to the savepoint taken before that iteration, shows a
//! generic notice, and continues from the menu; the process never terminates
//! because of a recoverable error.

use poise_persistence::{Persistence, PersistenceError};
use time::Date;
use tracing::warn;

use crate::console::{Console, ConsoleError};
use crate::{create, reports, search};

const BANNER: &str = "______________________\nProject Manager\n______________________";

const MENU: &str = "Main Menu\n_____________\n\
1 - Create new\n\
2 - Search - view, update or finalise projects.\n\
3 - View projects to be completed\n\
4 - View projects past due date\n\
5 - Close Project Manager";

/// A failure inside a workflow, split by how the loop recovers from it.
#[derive(Debug)]
pub enum FlowError {
    /// A store failure; recovered by rollback-to-savepoint.
    Store(PersistenceError),
    /// The console failed; ends the session.
    Console(ConsoleError),
}

impl From<PersistenceError> for FlowError {
    fn from(err: PersistenceError) -> Self {
        Self::Store(err)
    }
}

impl From<ConsoleError> for FlowError {
    fn from(err: ConsoleError) -> Self {
        Self::Console(err)
    }
}

impl std::fmt::Display for FlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Console(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FlowError {}

/// Result of one menu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Show the menu again.
    Continue,
    /// End the session.
    Exit,
}

/// The five top-level commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    NewProject,
    Search,
    ListIncomplete,
    ListOverdue,
    Exit,
}

impl MenuCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::NewProject),
            "2" => Some(Self::Search),
            "3" => Some(Self::ListIncomplete),
            "4" => Some(Self::ListOverdue),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Today's date, used for finalisation stamps and the overdue report.
pub(crate) fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

fn dispatch(
    command: MenuCommand,
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<Transition, FlowError> {
    match command {
        MenuCommand::NewProject => create::new_project(store, console),
        MenuCommand::Search => search::search_flow(store, console),
        MenuCommand::ListIncomplete => reports::list_incomplete(store, console),
        MenuCommand::ListOverdue => reports::list_overdue(store, console),
        MenuCommand::Exit => {
            console.say("Closing Project Manager...");
            Ok(Transition::Exit)
        }
    }
}

/// Runs the interactive session until the operator exits.
///
/// # Errors
///
/// Returns a console error when input ends, or a store error only when the
/// session itself is broken (the savepoint or rollback statement fails).
pub fn run_session(
    store: &mut Persistence,
    console: &mut dyn Console,
) -> Result<(), FlowError> {
    loop {
        // Bounds the blast radius of this iteration.
        store.savepoint()?;

        console.say(BANNER);
        console.say(MENU);
        let choice = console.read_line("\nSelect an option: ")?;

        let transition = match MenuCommand::parse(&choice) {
            None => {
                console.say("Option not found. Try again.");
                Transition::Continue
            }
            Some(command) => match dispatch(command, store, console) {
                Ok(transition) => transition,
                Err(FlowError::Console(err)) => return Err(FlowError::Console(err)),
                Err(FlowError::Store(err)) => {
                    warn!(error = %err, "Menu iteration failed; rolling back to savepoint");
                    store.rollback_to_savepoint()?;
                    console.say("An error has occurred.");
                    Transition::Continue
                }
            },
        };

        if transition == Transition::Exit {
            return Ok(());
        }
    }
}
