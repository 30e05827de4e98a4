use anyhow::bail;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use trak_types::{CreateTask, Task, TaskId, UpdateTask};
use url::Url;

#[derive(Debug)]
pub struct TrakClient {
    endpoints: Vec<Url>,
    http_client: reqwest::Client,
}

impl TrakClient {
    pub fn new(endpoints: Vec<Url>) -> anyhow::Result<Self> {
        Ok(Self {
            endpoints,
            http_client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(3))
                .timeout(Duration::from_secs(3))
                .build()?,
        })
    }

    async fn execute<F>(&self, make_request: F) -> anyhow::Result<Response>
    where
        F: Fn(Url) -> RequestBuilder,
    {
        for url in &self.endpoints {
            let request = make_request(url.clone()).build()?;

            let Ok(response) = self.http_client.execute(request).await else {
                continue;
            };

            if !response.status().is_success() {
                bail!("{}", response.text().await?)
            }

            return Ok(response);
        }

        bail!("All API endpoints are dead");
    }

    async fn execute_json<T, F>(&self, make_request: F) -> anyhow::Result<T>
    where
        T: DeserializeOwned,
        F: Fn(Url) -> RequestBuilder,
    {
        Ok(self.execute(make_request).await?.json().await?)
    }

    pub async fn create(&self, payload: &CreateTask) -> anyhow::Result<Task> {
        self.execute_json(|mut url| {
            url.set_path("/api/tasks");
            self.http_client.request(Method::POST, url).json(payload)
        })
        .await
    }

    pub async fn list(&self) -> anyhow::Result<Vec<Task>> {
        self.execute_json(|mut url| {
            url.set_path("/api/tasks");
            self.http_client.request(Method::GET, url)
        })
        .await
    }

    pub async fn find(&self, id: TaskId) -> anyhow::Result<Task> {
        let path = format!("/api/tasks/{id}");
        self.execute_json::<Task, _>(|mut url| {
            url.set_path(&path);
            self.http_client.request(Method::GET, url)
        })
        .await
    }

    pub async fn update(&self, id: TaskId, payload: &UpdateTask) -> anyhow::Result<Task> {
        let path = format!("/api/tasks/{id}");
        self.execute_json::<Task, _>(|mut url| {
            url.set_path(&path);
            self.http_client.request(Method::PATCH, url).json(payload)
        })
        .await
    }

    pub async fn delete(&self, id: TaskId) -> anyhow::Result<()> {
        let path = format!("/api/tasks/{id}");
        self.execute(|mut url| {
            url.set_path(&path);
            self.http_client.request(Method::DELETE, url)
        })
        .await?;

        Ok(())
    }
}
