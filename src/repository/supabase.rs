//! Hosted table store reached over the Supabase PostgREST API (`/rest/v1/{table}`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::{Repository, RepositoryError, RepositoryResult};
use crate::models::attempt::{Attempt, AttemptStats, NewAttempt};
use crate::models::lesson::Lesson;

#[derive(Clone)]
pub struct SupabaseRepository {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseRepository {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    pub fn with_client(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> RepositoryResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RepositoryError::Http(format!("{}: {}", status, body)));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Repository for SupabaseRepository {
    async fn fetch_lessons_ordered(&self) -> RepositoryResult<Vec<Lesson>> {
        let response = self
            .authorized(self.client.get(self.table_url("lessons")))
            .query(&[("select", "*"), ("order", "order_index.asc")])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn fetch_attempts_by_user(&self, user_id: &str) -> RepositoryResult<Vec<AttemptStats>> {
        let user_filter = format!("eq.{}", user_id);
        let response = self
            .authorized(self.client.get(self.table_url("attempts")))
            .query(&[
                ("select", "lesson_id,wpm,accuracy"),
                ("user_id", user_filter.as_str()),
            ])
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn insert_attempt(&self, attempt: NewAttempt) -> RepositoryResult<Attempt> {
        let response = self
            .authorized(self.client.post(self.table_url("attempts")))
            .header("Prefer", "return=representation")
            .json(&attempt)
            .send()
            .await?;
        let mut rows: Vec<Attempt> = Self::read_json(response).await?;
        if rows.is_empty() {
            return Err(RepositoryError::NotReturned);
        }
        Ok(rows.swap_remove(0))
    }
}
