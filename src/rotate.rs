//! The `rotate` and `roster` commands.

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::skills::{Mode, RosterSource, SkillLevel};
use crate::error::Result;
use crate::session::RotationSession;

/// Colors a skill label by tier.
pub fn skill_badge(level: SkillLevel) -> ColoredString {
    match level {
        SkillLevel::Beginner => level.label().green(),
        SkillLevel::LowerIntermediate
        | SkillLevel::MiddleIntermediate
        | SkillLevel::UpperIntermediate => level.label().cyan(),
        SkillLevel::Advanced => level.label().red(),
    }
}

#[derive(Debug, Serialize)]
struct AssignmentRow<'a> {
    id: &'a str,
    name: &'a str,
    skill: SkillLevel,
}

/// Renders each member with its current skill, one per line.
pub fn format_assignment(session: &RotationSession) -> String {
    let width = session
        .roster()
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = format!("{} {}\n", "☰".blue(), session.mode().label().bold());
    for (member, skill) in session.assignment().pairs() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            member.name,
            skill_badge(*skill),
            width = width
        ));
    }
    out
}

fn assignment_json(session: &RotationSession) -> Result<String> {
    let rows: Vec<AssignmentRow> = session
        .assignment()
        .pairs()
        .map(|(member, skill)| AssignmentRow {
            id: &member.id,
            name: &member.name,
            skill: *skill,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
        .map_err(|e| anyhow::anyhow!("Failed to serialize assignment: {}", e).into())
}

/// Rotate skills a number of steps from the initial assignment and print the result
pub struct RotateCommand {
    verbose: bool,
    source: RosterSource,
    mode: Mode,
    steps: usize,
    json: bool,
}

impl RotateCommand {
    pub fn new(verbose: bool, source: RosterSource, mode: Mode) -> Self {
        Self {
            verbose,
            source,
            mode,
            steps: 1,
            json: false,
        }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Builds the session and applies the requested rotations.
    pub fn run(&self) -> Result<RotationSession> {
        let mut session = RotationSession::new(self.source.clone(), self.mode);
        for _ in 0..self.steps {
            session.rotate_now()?;
        }
        Ok(session)
    }

    pub fn execute(&self) -> Result<()> {
        let session = self.run()?;

        if self.json {
            println!("{}", assignment_json(&session)?);
            return Ok(());
        }

        if self.verbose {
            eprintln!(
                "{} Applied {} rotation(s) to {} members",
                "ℹ".blue(),
                session.rotations(),
                session.roster().len()
            );
        }
        print!("{}", format_assignment(&session));
        Ok(())
    }
}

/// Print the roster, vocabulary and initial assignment for a mode
pub struct RosterCommand {
    source: RosterSource,
    mode: Mode,
}

impl RosterCommand {
    pub fn new(source: RosterSource, mode: Mode) -> Self {
        Self { source, mode }
    }

    pub fn execute(&self) -> Result<()> {
        let session = RotationSession::new(self.source.clone(), self.mode);

        let vocabulary = session
            .vocabulary()
            .iter()
            .map(|level| skill_badge(*level).to_string())
            .collect::<Vec<_>>()
            .join(" → ");
        println!("{} Skill levels: {}", "→".green(), vocabulary);
        print!("{}", format_assignment(&session));
        Ok(())
    }
}
