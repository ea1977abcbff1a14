//! Boundary to the hosted document store.
//!
//! The engine only ever sees this trait; the production backend lives in
//! the host application. [`MemoryStore`] keeps documents as raw JSON
//! values behind a lock, which is enough for tests and embedded use and
//! matches the duck-typed blobs the hosted store actually holds.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::adaptive::adapt::LessonDocument;
use crate::adaptive::types::{CompletionMerge, CompletionResult, LearnerProfile, LearningPath};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

pub fn lesson_key(path_id: &str, module_id: &str, lesson_id: &str) -> String {
    format!("lesson:{path_id}:{module_id}:{lesson_id}")
}

pub fn profile_key(user_id: &str) -> String {
    format!("user:{user_id}:profile")
}

pub fn path_key(user_id: &str) -> String {
    format!("user:{user_id}:path")
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_lesson(
        &self,
        path_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Result<LessonDocument, StoreError>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<LearnerProfile>, StoreError>;

    async fn put_profile(&self, user_id: &str, profile: &LearnerProfile)
        -> Result<(), StoreError>;

    async fn get_path(&self, user_id: &str) -> Result<Option<LearningPath>, StoreError>;

    async fn put_path(&self, user_id: &str, path: &LearningPath) -> Result<(), StoreError>;

    /// Applies a completion delta atomically: set-union on the completed
    /// set, max on the cursor. Never a blind record overwrite.
    async fn merge_completion(
        &self,
        user_id: &str,
        merge: &CompletionMerge,
    ) -> Result<LearningPath, StoreError>;

    /// Append-only completion log, one entry per attempt.
    async fn record_completion(
        &self,
        user_id: &str,
        lesson_id: &str,
        result: &CompletionResult,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub user_id: String,
    pub lesson_id: String,
    pub result: CompletionResult,
    pub recorded_at: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Value>>,
    completions: RwLock<Vec<CompletionEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a lesson document, as admin tooling would.
    pub async fn insert_lesson(&self, doc: &LessonDocument) -> Result<(), StoreError> {
        let key = lesson_key(&doc.path_id, &doc.module_id, &doc.id);
        let value = serde_json::to_value(doc)?;
        self.documents.write().await.insert(key, value);
        Ok(())
    }

    pub async fn completion_log(&self) -> Vec<CompletionEntry> {
        self.completions.read().await.clone()
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, StoreError> {
        let documents = self.documents.read().await;
        match documents.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    async fn put<T: serde::Serialize>(&self, key: String, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.documents.write().await.insert(key, value);
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_lesson(
        &self,
        path_id: &str,
        module_id: &str,
        lesson_id: &str,
    ) -> Result<LessonDocument, StoreError> {
        let key = lesson_key(path_id, module_id, lesson_id);
        self.get(&key).await?.ok_or(StoreError::NotFound(key))
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<LearnerProfile>, StoreError> {
        self.get(&profile_key(user_id)).await
    }

    async fn put_profile(
        &self,
        user_id: &str,
        profile: &LearnerProfile,
    ) -> Result<(), StoreError> {
        self.put(profile_key(user_id), profile).await
    }

    async fn get_path(&self, user_id: &str) -> Result<Option<LearningPath>, StoreError> {
        self.get(&path_key(user_id)).await
    }

    async fn put_path(&self, user_id: &str, path: &LearningPath) -> Result<(), StoreError> {
        self.put(path_key(user_id), path).await
    }

    async fn merge_completion(
        &self,
        user_id: &str,
        merge: &CompletionMerge,
    ) -> Result<LearningPath, StoreError> {
        let key = path_key(user_id);
        // Holds the write lock across read-modify-write so concurrent
        // merges for different lessons serialize instead of racing.
        let mut documents = self.documents.write().await;
        let value = documents
            .get(&key)
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        let mut path: LearningPath = serde_json::from_value(value.clone())?;

        path.completed_lessons.insert(merge.lesson_id.clone());
        path.next_lesson_index = path
            .next_lesson_index
            .max(merge.next_lesson_index)
            .min(path.lessons.len());

        documents.insert(key, serde_json::to_value(&path)?);
        Ok(path)
    }

    async fn record_completion(
        &self,
        user_id: &str,
        lesson_id: &str,
        result: &CompletionResult,
    ) -> Result<(), StoreError> {
        self.completions.write().await.push(CompletionEntry {
            user_id: user_id.to_string(),
            lesson_id: lesson_id.to_string(),
            result: result.clone(),
            recorded_at: chrono::Utc::now().timestamp_millis(),
        });
        Ok(())
    }
}
