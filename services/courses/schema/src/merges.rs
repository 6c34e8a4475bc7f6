use sea_orm::entity::prelude::*;

/// Record of one course being merged into another.
///
/// Both columns point at `courses`, so there is no `Related` impl; join
/// through `Relation::FromCourse` or `Relation::ToCourse` explicitly.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "merges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub from_course_id: i32,
    pub to_course_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::FromCourseId",
        to = "super::courses::Column::Id"
    )]
    FromCourse,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::ToCourseId",
        to = "super::courses::Column::Id"
    )]
    ToCourse,
}

impl ActiveModelBehavior for ActiveModel {}
