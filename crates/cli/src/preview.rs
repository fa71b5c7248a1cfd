//! Text preview of a placement plan.
//!
//! Stands in for the realization collaborator: each placement becomes one
//! line naming the object it would spawn and its world-space position.
//! Grid rows grow toward negative z.
use std::fmt::Write;

use level_core::{Diagnostic, Placement, Plan};

/// World-space position of a placement: `(x * cell, 0, -y * cell)`.
pub fn world_position(placement: &Placement<'_>, cell_size: f32) -> [f32; 3] {
    let position = placement.position();
    [
        position.x as f32 * cell_size,
        0.0,
        -(position.y as f32) * cell_size,
    ]
}

pub fn render_plan(plan: &Plan<'_>, cell_size: f32) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated_{} ({} rows)", plan.grid_name(), plan.rows());

    for placement in plan.placements() {
        let [x, y, z] = world_position(placement, cell_size);
        let _ = write!(out, "  {:<24} {:>6.2} {:>6.2} {:>6.2}", placement.object_name(), x, y, z);
        if let Some(entity) = placement.entity() {
            let stats = entity.stats;
            let _ = write!(
                out,
                "  {} HP:{} ATK:{} DEF:{} EXP:{}",
                entity.name, stats.health, stats.attack, stats.defense, stats.experience
            );
        }
        out.push('\n');
    }

    let counts: Vec<String> = plan
        .counts()
        .iter()
        .map(|(kind, count)| format!("{kind}={count}"))
        .collect();
    let _ = writeln!(out, "Placements: {}", counts.join(" "));
    out
}

pub fn render_diagnostics(title: &str, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    if diagnostics.is_empty() {
        return out;
    }
    let _ = writeln!(out, "{} ({}):", title, diagnostics.len());
    for diagnostic in diagnostics {
        let _ = writeln!(out, "  - {}", diagnostic);
    }
    out
}
