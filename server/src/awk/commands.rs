//! Command table and rendering.
//!
//! Every sub-command maps to a render function that builds its sentence from
//! the request context and the helpers in [`super::helpers`]. The table is a
//! `static` and is never mutated, so concurrent requests read it freely.

use std::collections::HashMap;
use std::sync::LazyLock;

use rand::RngCore;

use super::error::RenderError;
use super::helpers::{adjectives, enumerate, pick_one, rand_between};
use super::words::APPENDAGES;

/// Name of the sub-command that lists the others.
pub const HELP: &str = "help";

/// Per-request values a template may read.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Remaining words of the command text, joined by single spaces.
    pub target: String,
    /// The sub-command the caller asked for.
    pub means: String,
    /// Every submitted form field, already flattened.
    pub fields: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(means: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            means: means.into(),
            fields: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: HashMap<String, String>) -> Self {
        self.fields = fields;
        self
    }
}

type RenderFn = fn(&RenderContext, &mut dyn RngCore) -> Result<String, RenderError>;

/// A registered sub-command.
pub struct Command {
    pub name: &'static str,
    render: RenderFn,
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("name", &self.name).finish()
    }
}

impl Command {
    /// Render this command. Only consumes randomness.
    pub fn render(
        &self,
        ctx: &RenderContext,
        rng: &mut dyn RngCore,
    ) -> Result<String, RenderError> {
        (self.render)(ctx, rng)
    }
}

static COMMANDS: &[Command] = &[
    Command {
        name: HELP,
        render: render_help,
    },
    Command {
        name: "grackle",
        render: render_grackle,
    },
    Command {
        name: "flamingo",
        render: render_flamingo,
    },
    Command {
        name: "trout",
        render: render_trout,
    },
    Command {
        name: "cat",
        render: render_cat,
    },
];

static COMMAND_NAMES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names: Vec<&str> = COMMANDS
        .iter()
        .map(|c| c.name)
        .filter(|name| *name != HELP)
        .collect();
    names.sort_unstable();
    names
});

/// Look up a command by its exact name.
pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Names of all commands except `help`, sorted.
pub fn command_names() -> &'static [&'static str] {
    &COMMAND_NAMES
}

/// Render the command called `name`.
pub fn render(
    name: &str,
    ctx: &RenderContext,
    rng: &mut dyn RngCore,
) -> Result<String, RenderError> {
    lookup(name)
        .ok_or_else(|| RenderError::UnknownCommand(name.to_string()))?
        .render(ctx, rng)
}

fn render_help(_ctx: &RenderContext, _rng: &mut dyn RngCore) -> Result<String, RenderError> {
    Ok(format!(
        "`/awkawk [means] [victim]` - `[means]` may be one of {}. The `[victim]` is pitiable.",
        enumerate("or", command_names())
    ))
}

fn render_grackle(ctx: &RenderContext, rng: &mut dyn RngCore) -> Result<String, RenderError> {
    Ok(format!(
        "impales {} through the {} with a high-velocity grackle. AWK AWK MOTHA-FUCKA!",
        ctx.target,
        pick_one(rng, APPENDAGES)
    ))
}

fn render_flamingo(ctx: &RenderContext, rng: &mut dyn RngCore) -> Result<String, RenderError> {
    let appendage = pick_one(rng, APPENDAGES);
    let adjective = pick_one(rng, adjectives(1));
    Ok(format!(
        "smacks {} upside the {appendage} with a {adjective} flamingo.",
        ctx.target
    ))
}

fn render_trout(ctx: &RenderContext, rng: &mut dyn RngCore) -> Result<String, RenderError> {
    Ok(format!(
        "slaps {} around a bit with a {} trout.",
        ctx.target,
        pick_one(rng, adjectives(1))
    ))
}

fn render_cat(ctx: &RenderContext, rng: &mut dyn RngCore) -> Result<String, RenderError> {
    let n = rand_between(rng, 1, 60);
    let count = if n == 1 { "a".to_string() } else { n.to_string() };
    let plural = if n == 1 { "" } else { "s" };
    Ok(format!(
        "straps {count} {} cat{plural} to {}.",
        pick_one(rng, adjectives(n)),
        ctx.target
    ))
}
