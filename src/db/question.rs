use color_eyre::Result;

use super::models::Question;
use super::Db;
use crate::models::NewQuestion;

impl Db {
    /// All questions in insertion (id) order.
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn question(&self, question_id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE category = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Questions whose text contains `term`, ignoring case for all Unicode letters.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        // SQLite's LIKE and lower() only fold ASCII
        let needle = term.to_lowercase();
        let questions = self
            .questions()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();

        Ok(questions)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Insert a question and return its id. Fails if the category does not exist.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64> {
        let id = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Returns `false` when no question had this id.
    pub async fn delete_question(&self, question_id: i64) -> Result<bool> {
        let deleted = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(question_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if deleted > 0 {
            tracing::info!("question {question_id} deleted");
        }
        Ok(deleted > 0)
    }
}
