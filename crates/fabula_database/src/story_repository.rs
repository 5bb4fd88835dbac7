//! StoryRepository trait implementation.
//!
//! Provides the database-backed persistence sink for generated stories.

use crate::schema::stories;
use crate::PgPool;
use async_trait::async_trait;
use diesel::prelude::*;
use fabula_core::StoryRecord;
use fabula_error::{DatabaseError, DatabaseErrorKind, FabulaResult};
use fabula_interface::StoryRepository;
use tracing::{debug, instrument};

#[derive(Debug, Insertable)]
#[diesel(table_name = stories)]
struct NewStory<'a> {
    academic_grade: &'a str,
    subject: &'a str,
    subject_specification: Option<&'a str>,
    setting: Option<&'a str>,
    main_character: Option<&'a str>,
    word_count: i64,
    language: &'a str,
    story_text: &'a str,
}

impl<'a> From<&'a StoryRecord> for NewStory<'a> {
    fn from(record: &'a StoryRecord) -> Self {
        Self {
            academic_grade: &record.academic_grade,
            subject: &record.subject,
            subject_specification: record.subject_specification.as_deref(),
            setting: record.setting.as_deref(),
            main_character: record.main_character.as_deref(),
            word_count: record.word_count,
            language: &record.language,
            story_text: &record.story_text,
        }
    }
}

/// Database-backed story repository.
#[derive(Clone)]
pub struct DatabaseStoryRepository {
    pool: PgPool,
}

impl DatabaseStoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoryRepository for DatabaseStoryRepository {
    #[instrument(skip(self, record), fields(subject = %record.subject))]
    async fn insert_story(&self, record: &StoryRecord) -> FabulaResult<()> {
        let record = record.clone();
        let pool = self.pool.clone();

        let inserted: usize = tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            let row = NewStory::from(&record);
            diesel::insert_into(stories::table)
                .values(&row)
                .execute(&mut conn)
                .map_err(DatabaseError::from)
        })
        .await
        .map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Query(format!("join error: {}", e)))
        })??;

        debug!(inserted, "Stored story");
        Ok(())
    }
}
