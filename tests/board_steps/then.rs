//! Then steps for board behaviour BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;

#[then(r#"the column "{title}" lists tasks "{expected}""#)]
fn column_lists_tasks(
    world: &BoardWorld,
    title: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let board = world.service.board();
    let column = board
        .columns()
        .values()
        .find(|column| column.title() == title)
        .ok_or_else(|| eyre::eyre!("no column titled '{title}' on the board"))?;

    let listed: Vec<&str> = column
        .task_ids()
        .iter()
        .filter_map(|id| board.task(*id))
        .map(trellis::board::domain::Task::title)
        .collect();
    let wanted: Vec<&str> = expected.split(", ").collect();

    if listed != wanted {
        return Err(eyre::eyre!(
            "expected tasks {wanted:?}, found {listed:?}"
        ));
    }
    Ok(())
}

#[then("nothing can be redone")]
fn nothing_to_redo(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.service.can_redo() {
        return Err(eyre::eyre!("expected the redo stack to be empty"));
    }
    Ok(())
}
