//! Internal Diesel row structs.
//!
//! These mirror the database tables and never leave the persistence layer;
//! repositories convert them into validated domain types.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{exercises, users};

/// User row as read back from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub username: &'a str,
}

/// Exercise row as read back from `exercises`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = exercises)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExerciseRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = exercises)]
pub(crate) struct NewExerciseRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: &'a str,
    pub duration: i32,
    pub date: NaiveDate,
}
