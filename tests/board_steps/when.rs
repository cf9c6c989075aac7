//! When steps for board behaviour BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use trellis::board::domain::{MoveRequest, TaskDraft};

#[when("the task at position {source:usize} is moved to position {dest:usize} in the same column")]
fn move_within_column(
    world: &mut BoardWorld,
    source: usize,
    dest: usize,
) -> Result<(), eyre::Report> {
    let column = world.column()?;
    world
        .service
        .move_task(&MoveRequest::new(column, source, column).with_destination_index(dest))
        .wrap_err("move task within scenario column")?;
    Ok(())
}

#[when("the last action is undone")]
fn undo_last_action(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.service.undo() {
        return Err(eyre::eyre!("expected an undoable action"));
    }
    Ok(())
}

#[when("the undone action is redone")]
fn redo_undone_action(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.service.redo() {
        return Err(eyre::eyre!("expected a redoable action"));
    }
    Ok(())
}

#[when(r#"a task "{title}" is added to the column"#)]
fn add_task_to_column(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let column = world.column()?;
    world
        .service
        .add_task(column, TaskDraft::new(title))
        .wrap_err("add task to scenario column")?;
    Ok(())
}
