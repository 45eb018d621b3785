//! Background worker that runs search requests off the UI thread.
//!
//! Requests are executed one at a time in the order they were sent. Each
//! result carries the [`FetchRequest`] it answers so the session can store it
//! under the right query regardless of what is active when it arrives.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, info};

use crate::client::SearchClient;
use crate::error::FetchError;
use crate::model::SearchResultPage;
use crate::session::FetchRequest;

/// Commands sent to the fetch worker thread.
#[derive(Debug)]
pub enum FetchCommand {
	/// Retrieve one page.
	Fetch(FetchRequest),
	/// Stop the worker thread.
	Shutdown,
}

/// Outcome of one request, sent back from the worker thread.
#[derive(Debug)]
pub struct FetchResult {
	pub request: FetchRequest,
	pub outcome: Result<SearchResultPage, FetchError>,
}

/// Spawn the worker thread and return its command and result channels.
pub fn spawn<C>(client: C) -> io::Result<(Sender<FetchCommand>, Receiver<FetchResult>)>
where
	C: SearchClient + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::Builder::new()
		.name("fetch-worker".into())
		.spawn(move || worker_loop(&client, command_rx, result_tx))?;

	Ok((command_tx, result_rx))
}

fn worker_loop(
	client: &dyn SearchClient,
	command_rx: Receiver<FetchCommand>,
	result_tx: Sender<FetchResult>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			FetchCommand::Fetch(request) => {
				debug!(
					"worker fetching #{} {:?} page {}",
					request.id, request.query, request.page
				);
				let outcome = client.fetch_page(&request.query, request.page);
				if result_tx.send(FetchResult { request, outcome }).is_err() {
					break;
				}
			}
			FetchCommand::Shutdown => break,
		}
	}
	info!("fetch worker stopped");
}
