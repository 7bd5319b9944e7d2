//! `PostgreSQL` board query joining `tasks` with `staff`.

use crate::board::{
    domain::{DashboardStats, TaskBoardEntry},
    ports::{BoardQueryError, BoardQueryResult, TaskBoardQuery},
};
use crate::database::PgPool;
use crate::staff::adapters::postgres::{StaffRow, row_to_member, schema::staff};
use crate::task::adapters::postgres::{TaskRow, row_to_task, schema::tasks};
use crate::task::domain::TaskStatus;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

diesel::allow_tables_to_appear_in_same_query!(tasks, staff);


/// `PostgreSQL`-backed task board.
#[derive(Debug, Clone)]
pub struct PostgresTaskBoard {
    pool: PgPool,
}

impl PostgresTaskBoard {
    /// Creates a board query from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardQueryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardQueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardQueryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardQueryError::persistence)?
    }
}

#[async_trait]
impl TaskBoardQuery for PostgresTaskBoard {
    async fn list_board(&self) -> BoardQueryResult<Vec<TaskBoardEntry>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .left_join(staff::table.on(staff::id.eq(tasks::assigned_to)))
                .order(tasks::created_at.desc())
                .select((TaskRow::as_select(), Option::<StaffRow>::as_select()))
                .load::<(TaskRow, Option<StaffRow>)>(connection)
                .map_err(BoardQueryError::persistence)?;

            rows.into_iter()
                .map(|(task_row, staff_row)| {
                    let task = row_to_task(task_row)?;
                    let assignee = staff_row.map(row_to_member).transpose()?;
                    Ok(TaskBoardEntry::new(task, assignee))
                })
                .collect()
        })
        .await
    }

    async fn dashboard_stats(&self) -> BoardQueryResult<DashboardStats> {
        self.run_blocking(move |connection| {
            let total_staff: i64 = staff::table
                .count()
                .get_result(connection)
                .map_err(BoardQueryError::persistence)?;
            let active_tasks: i64 = tasks::table
                .filter(tasks::status.ne(TaskStatus::Done.as_str()))
                .count()
                .get_result(connection)
                .map_err(BoardQueryError::persistence)?;
            let pending_reviews: i64 = tasks::table
                .filter(tasks::status.eq(TaskStatus::Review.as_str()))
                .count()
                .get_result(connection)
                .map_err(BoardQueryError::persistence)?;

            Ok(DashboardStats {
                total_staff: to_counter(total_staff)?,
                active_tasks: to_counter(active_tasks)?,
                pending_reviews: to_counter(pending_reviews)?,
            })
        })
        .await
    }
}

fn to_counter(value: i64) -> BoardQueryResult<u64> {
    u64::try_from(value).map_err(BoardQueryError::persistence)
}
