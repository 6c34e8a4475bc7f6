use chrono::Utc;

use crate::domain::repository::CourseRepository;
use crate::domain::types::{Course, NewCourse};
use crate::error::CoursesServiceError;

// ── CreateCourse ─────────────────────────────────────────────────────────────

pub struct CreateCourseInput {
    pub title: String,
    pub summary: Option<String>,
}

pub struct CreateCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> CreateCourseUseCase<R> {
    pub async fn execute(&self, input: CreateCourseInput) -> Result<Course, CoursesServiceError> {
        let course = self
            .repo
            .create(&NewCourse::open(input.title, input.summary, Utc::now()))
            .await?;
        tracing::info!(course_id = course.id, "course created");
        Ok(course)
    }
}

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCoursesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Course>, CoursesServiceError> {
        self.repo.list().await
    }
}

// ── DeleteCourse ─────────────────────────────────────────────────────────────

pub struct DeleteCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> DeleteCourseUseCase<R> {
    pub async fn execute(&self, course_id: i32) -> Result<(), CoursesServiceError> {
        if !self.repo.delete(course_id).await? {
            return Err(CoursesServiceError::CourseNotFound);
        }
        tracing::info!(course_id, "course deleted");
        Ok(())
    }
}

// ── UpvoteCourse ─────────────────────────────────────────────────────────────

pub struct UpvoteCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> UpvoteCourseUseCase<R> {
    pub async fn execute(&self, course_id: i32) -> Result<(), CoursesServiceError> {
        if !self.repo.increment_votes(course_id).await? {
            return Err(CoursesServiceError::CourseNotFound);
        }
        Ok(())
    }
}
