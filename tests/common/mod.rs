#![allow(dead_code)]

use std::ops::Deref;

use tempfile::TempDir;
use trivia::db::Db;
use trivia::models::NewQuestion;

/// A database in its own temporary directory, removed when dropped.
pub struct TestDb {
    pub db: Db,
    _dir: TempDir,
}

impl Deref for TestDb {
    type Target = Db;

    fn deref(&self) -> &Db {
        &self.db
    }
}

pub async fn create_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    let db = Db::new(&url, 1).await.expect("failed to create test database");
    TestDb { db, _dir: dir }
}

pub const SCIENCE: i64 = 1;
pub const ART: i64 = 2;
pub const GEOGRAPHY: i64 = 3;
pub const HISTORY: i64 = 4;
pub const SPORTS: i64 = 6;

/// Questions inserted by [`seed`], in id order (ids 1..=12 on a fresh db).
pub const SEED: &[(&str, &str, i64, i64)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", SCIENCE, 4),
    ("Who discovered penicillin?", "Alexander Fleming", SCIENCE, 3),
    ("what is the chemical symbol for gold?", "Au", SCIENCE, 2),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", SCIENCE, 4),
    ("How many bones are in the adult human body?", "206", SCIENCE, 3),
    ("Which Dutch graphic artist created mathematically inspired optical illusions?", "Escher", ART, 1),
    ("La Giaconda is better known as WHAT?", "Mona Lisa", ART, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", ART, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", GEOGRAPHY, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", GEOGRAPHY, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", HISTORY, 2),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", HISTORY, 4),
];

pub fn new_question(question: &str, answer: &str, category: i64, difficulty: i64) -> NewQuestion {
    NewQuestion {
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category),
        difficulty: Some(difficulty),
    }
}

/// Insert [`SEED`] and return the new ids.
pub async fn seed(db: &Db) -> Vec<i64> {
    let mut ids = Vec::new();
    for (question, answer, category, difficulty) in SEED {
        let id = db
            .insert_question(&new_question(question, answer, *category, *difficulty))
            .await
            .expect("failed to seed question");
        ids.push(id);
    }
    ids
}
