use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use reqwest::Client;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api::{
        categories,
        fetcher,
        providers::{
            self,
            ImageProvider,
        },
    },
    core::http::http_client,
};

/// Runs fetches off the GUI thread. Each dispatch spawns a worker that blocks
/// on the shared runtime and reports back over the channel; the GUI polls the
/// channel once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: Client,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let client = http_client().expect("Failed to build HTTP client");

        let (sender, receiver) = mpsc::channel();

        Self { runtime, client, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Client) {
        (self.sender.clone(), self.runtime.clone(), self.client.clone())
    }

    pub fn fetch_fact(&self, seq: u64, max_length: u32) {
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let url = providers::fact_url(max_length);
            let result =
                runtime.block_on(fetcher::fetch_text(&client, &url, providers::FACT_POINTER));

            let _ = sender.send(TaskResult::Fact { seq, result });
        });
    }

    pub fn fetch_image(&self, seq: u64, provider: ImageProvider, category: Option<String>) {
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let url = provider.search_url(category.as_deref());
            let result = runtime.block_on(fetcher::fetch_image(
                &client,
                &url,
                provider.url_pointer(),
                provider.origin(),
            ));

            let _ = sender.send(TaskResult::Image { seq, result });
        });
    }

    pub fn load_categories(&self, provider: ImageProvider) {
        let (sender, runtime, client) = self.task_context();

        thread::spawn(move || {
            let options = runtime.block_on(categories::load_categories(&client, provider));

            let _ = sender.send(TaskResult::Categories { provider, options });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
