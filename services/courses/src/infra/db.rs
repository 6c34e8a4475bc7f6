use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};

use coursevote_courses_schema::{courses, merges, notifications, users, votes};

use crate::domain::repository::{CourseRepository, UserRepository};
use crate::domain::types::{Course, NewCourse, NewUser, User};
use crate::error::CoursesServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, CoursesServiceError> {
        let model = self
            .db
            .transaction::<_, users::Model, sea_orm::DbErr>(|txn| {
                let user = user.clone();
                Box::pin(async move {
                    users::ActiveModel {
                        username: Set(user.username),
                        password: Set(user.password_hash),
                        email: Set(user.email),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                })
            })
            .await
            .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn list(&self) -> Result<Vec<User>, CoursesServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password_hash: model.password,
        email: model.email,
    }
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn create(&self, course: &NewCourse) -> Result<Course, CoursesServiceError> {
        let model = self
            .db
            .transaction::<_, courses::Model, sea_orm::DbErr>(|txn| {
                let course = course.clone();
                Box::pin(async move {
                    courses::ActiveModel {
                        title: Set(course.title),
                        summary: Set(course.summary),
                        state: Set(course.state),
                        votes: Set(course.votes),
                        created_at: Set(course.created_at),
                        updated_at: Set(course.created_at),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await
                })
            })
            .await
            .context("create course")?;
        Ok(course_from_model(model))
    }

    async fn list(&self) -> Result<Vec<Course>, CoursesServiceError> {
        let models = courses::Entity::find()
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .context("list courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, CoursesServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    // Tables created before the cascading foreign keys existed
                    // still need their dependents removed by hand.
                    votes::Entity::delete_many()
                        .filter(votes::Column::CourseId.eq(id))
                        .exec(txn)
                        .await?;
                    notifications::Entity::delete_many()
                        .filter(notifications::Column::CourseId.eq(id))
                        .exec(txn)
                        .await?;
                    merges::Entity::delete_many()
                        .filter(
                            Condition::any()
                                .add(merges::Column::FromCourseId.eq(id))
                                .add(merges::Column::ToCourseId.eq(id)),
                        )
                        .exec(txn)
                        .await?;

                    let result = courses::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete course")?;
        Ok(deleted)
    }

    async fn increment_votes(&self, id: i32) -> Result<bool, CoursesServiceError> {
        let updated = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    // Single UPDATE so concurrent upvotes never read a stale count.
                    let result = courses::Entity::update_many()
                        .col_expr(
                            courses::Column::Votes,
                            Expr::col(courses::Column::Votes).add(1),
                        )
                        .col_expr(courses::Column::UpdatedAt, Expr::value(Utc::now()))
                        .filter(courses::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("increment course votes")?;
        Ok(updated)
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        title: model.title,
        summary: model.summary,
        state: model.state,
        votes: model.votes,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
