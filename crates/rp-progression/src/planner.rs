//! Interactive planning session.
//!
//! A [`Planner`] holds the class catalog, the current [`Build`] and the one
//! build it replaced. User actions swap in a new snapshot atomically; a failed
//! action leaves both untouched.

use rp_core::{Attribute, ClassCatalog};

use crate::build::Build;
use crate::config::PlannerConfig;
use crate::error::{ProgressionError, ProgressionResult};

/// A single user action against the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raise an attribute by one.
    Increment(Attribute),
    /// Lower an attribute by one.
    Decrement(Attribute),
    /// Change an attribute by several points at once.
    Adjust(Attribute, i32),
    /// Switch to the next class in catalog order.
    NextClass,
    /// Switch to the previous class in catalog order.
    PreviousClass,
    /// Switch to a class by name.
    Select(String),
    /// Return to the current class's starting attributes.
    Respec,
    /// Restore the build replaced by the last action.
    Undo,
}

/// The state behind a build-planner screen.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: ClassCatalog,
    config: PlannerConfig,
    current: Build,
    previous: Option<Build>,
}

impl Planner {
    /// Open a planner on the configured starting class.
    pub fn new(catalog: ClassCatalog, config: PlannerConfig) -> ProgressionResult<Self> {
        let class = catalog.get(&config.starting_class)?.clone();
        let current = Build::with_config(class, &config)?;
        Ok(Self {
            catalog,
            config,
            current,
            previous: None,
        })
    }

    /// The class catalog.
    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// The current build.
    pub fn build(&self) -> &Build {
        &self.current
    }

    /// True if an undo is available.
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// Apply an action and return the resulting build.
    pub fn apply(&mut self, action: Action) -> ProgressionResult<&Build> {
        let next = match action {
            Action::Undo => {
                self.current = self.previous.take().ok_or(ProgressionError::NothingToUndo)?;
                return Ok(&self.current);
            }
            Action::Increment(attribute) => self.current.increment(attribute)?,
            Action::Decrement(attribute) => self.current.decrement(attribute)?,
            Action::Adjust(attribute, delta) => self.current.adjust(attribute, delta)?,
            Action::NextClass => self.fresh(1)?,
            Action::PreviousClass => self.fresh(-1)?,
            Action::Select(name) => {
                let class = self.catalog.get(&name)?.clone();
                Build::with_config(class, &self.config)?
            }
            Action::Respec => self.current.respec()?,
        };

        if next.class().name != self.current.class().name {
            tracing::debug!(
                from = %self.current.class().name,
                to = %next.class().name,
                "class changed"
            );
        }
        self.previous = Some(std::mem::replace(&mut self.current, next));
        Ok(&self.current)
    }

    /// Fresh build for the class `delta` steps away from the current one.
    fn fresh(&self, delta: isize) -> ProgressionResult<Build> {
        let class = self.catalog.step(&self.current.class().name, delta)?.clone();
        Build::with_config(class, &self.config)
    }

    /// Process a line of user input and return a response.
    ///
    /// Recognized commands: `+<attr> [n]`, `-<attr> [n]`, `next`, `prev`,
    /// `class <name>`, `classes`, `respec`, `undo`, `cost`, `show`, `help`
    /// and `quit`.
    pub fn process(&mut self, input: &str) -> ProgressionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let rest = &parts[1..];

        let action = match cmd.as_str() {
            "help" | "?" => return Ok(HELP.to_string()),
            "quit" | "q" | "exit" => return Ok(String::new()),
            "show" | "sheet" => return Ok(self.current.to_string()),
            "classes" => return Ok(self.catalog.names().join(", ")),
            "cost" => return self.describe_cost(),
            "next" | "n" => Action::NextClass,
            "prev" | "previous" | "p" => Action::PreviousClass,
            "class" | "select" => match rest {
                [name] => Action::Select((*name).to_string()),
                _ => return Err(ProgressionError::UnknownCommand(trimmed.to_string())),
            },
            "respec" | "reset" => Action::Respec,
            "undo" | "u" => Action::Undo,
            _ => parse_adjustment(&cmd, rest)
                .ok_or_else(|| ProgressionError::UnknownCommand(trimmed.to_string()))??,
        };

        self.apply(action).map(|build| build.to_string())
    }

    fn describe_cost(&self) -> ProgressionResult<String> {
        let cost = self.current.cost()?;
        if cost.points_to_next == 0 {
            return Ok(format!(
                "Level {} is the maximum. {} runes spent.",
                self.current.level(),
                cost.total_spent
            ));
        }
        Ok(format!(
            "Level {}: {} runes to level {}, {} runes spent.",
            self.current.level(),
            cost.points_to_next,
            self.current.level() + 1,
            cost.total_spent
        ))
    }
}

/// Parse `+vigor` and `-mind 3` style commands.
///
/// Returns `None` when the input is not shaped like an adjustment at all, and
/// `Some(Err)` when it is but names an unknown attribute.
fn parse_adjustment(cmd: &str, rest: &[&str]) -> Option<ProgressionResult<Action>> {
    let (sign, name) = if let Some(name) = cmd.strip_prefix('+') {
        (1, name)
    } else if let Some(name) = cmd.strip_prefix('-') {
        (-1, name)
    } else {
        return None;
    };

    let count: i32 = match rest {
        [] => 1,
        [n] => n.parse().ok().filter(|n: &i32| *n > 0)?,
        _ => return None,
    };

    let attribute = match name.parse::<Attribute>() {
        Ok(a) => a,
        Err(e) => return Some(Err(e.into())),
    };

    Some(Ok(match (sign, count) {
        (1, 1) => Action::Increment(attribute),
        (-1, 1) => Action::Decrement(attribute),
        _ => Action::Adjust(attribute, sign * count),
    }))
}

const HELP: &str = "\
Commands:
  +<attr> [n]     raise an attribute (vigor, mind, end, str, dex, int, fai, arc)
  -<attr> [n]     lower an attribute, never below the class start
  next, prev      cycle through starting classes
  class <name>    switch to a class
  classes         list classes
  respec          return to the class's starting attributes
  undo            undo the last change
  cost            runes needed for the next level
  show            print the current build
  quit            leave the planner";
