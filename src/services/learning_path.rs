//! Store-facing operations on a user's learning path.

use crate::adaptive::types::{CompletionMerge, CompletionResult, LearningPath};
use crate::store::{DocumentStore, StoreError};

/// Persists a freshly synthesized path, replacing any existing one.
/// Retaking the assessment is the only way an existing path is replaced.
pub async fn regenerate_path(
    store: &dyn DocumentStore,
    user_id: &str,
    path: &LearningPath,
) -> Result<(), StoreError> {
    let replaced = store.get_path(user_id).await?.is_some();
    store.put_path(user_id, path).await?;
    tracing::info!(
        user_id,
        path_id = %path.id,
        lessons = path.lessons.len(),
        replaced,
        "learning path persisted"
    );
    Ok(())
}

/// Records one completed lesson: appends to the completion log, then merges
/// the cursor/set delta into the stored path. The merge is store-side and
/// atomic, so two concurrent completions for different lessons both land.
pub async fn apply_completion(
    store: &dyn DocumentStore,
    user_id: &str,
    lesson_id: &str,
    result: Option<&CompletionResult>,
) -> Result<LearningPath, StoreError> {
    let path = store
        .get_path(user_id)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("learning path for {user_id}")))?;

    // A lesson outside the current path still counts as completed work;
    // it just cannot advance the cursor.
    let next_index = match path.lesson_index(lesson_id) {
        Some(index) => index + 1,
        None => {
            tracing::warn!(user_id, lesson_id, "completion for lesson outside the active path");
            path.next_lesson_index
        }
    };

    if let Some(result) = result {
        store.record_completion(user_id, lesson_id, result).await?;
    } else {
        tracing::warn!(user_id, lesson_id, "completion arrived without telemetry");
    }

    store
        .merge_completion(
            user_id,
            &CompletionMerge {
                lesson_id: lesson_id.to_string(),
                next_lesson_index: next_index,
            },
        )
        .await
}
