use crate::domain::model::{CallResult, HttpCall};
use async_trait::async_trait;

/// Executes one HTTP call. Implementations never fail: every error is
/// folded into the returned `CallResult`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, call: &HttpCall) -> CallResult;
}
