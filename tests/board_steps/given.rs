//! Given steps for board behaviour BDD scenarios.

use super::world::BoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use trellis::board::domain::TaskDraft;

#[given(r#"a board with a column "{title}" holding tasks "{task_titles}""#)]
fn board_with_column_and_tasks(
    world: &mut BoardWorld,
    title: String,
    task_titles: String,
) -> Result<(), eyre::Report> {
    let column = world
        .service
        .add_column(title)
        .wrap_err("create scenario column")?;
    world.scenario_column = Some(column.id());

    for task_title in task_titles.split(", ") {
        world
            .service
            .add_task(column.id(), TaskDraft::new(task_title))
            .wrap_err_with(|| format!("seed task '{task_title}'"))?;
    }
    Ok(())
}
