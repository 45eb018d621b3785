//! Channel plumbing between the UI thread and the fetch worker.

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use hnsearch_core::fetch::{self, FetchCommand, FetchResult};
use hnsearch_core::{FetchError, FetchRequest, SearchClient};
use log::{debug, error};

use super::App;

/// Handle to the background fetch worker.
pub(crate) struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResult>,
}

impl FetchRuntime {
	pub(crate) fn spawn<C>(client: C) -> io::Result<Self>
	where
		C: SearchClient + 'static,
	{
		let (tx, rx) = fetch::spawn(client)?;
		Ok(Self { tx, rx })
	}

	pub(crate) fn dispatch(&self, request: FetchRequest) -> Result<(), FetchError> {
		self.tx
			.send(FetchCommand::Fetch(request))
			.map_err(|_| FetchError::other("fetch worker is not running"))
	}

	pub(crate) fn try_recv(&self) -> Result<FetchResult, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}
}

impl<'a> App<'a> {
	/// Hand a request produced by the session to the worker.
	///
	/// A worker that has gone away fails the request immediately so the
	/// session does not wait on it forever.
	pub(crate) fn dispatch(&mut self, request: Option<FetchRequest>) {
		let Some(request) = request else {
			return;
		};
		let id = request.id;
		if let Err(err) = self.fetch.dispatch(request) {
			error!("could not dispatch fetch #{id}: {err}");
			self.session.receive_error(id, err);
		}
	}

	/// Drain finished fetches into the session. Returns whether anything changed.
	pub fn pump_fetch_results(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.fetch.try_recv() {
				Ok(FetchResult { request, outcome }) => {
					changed = true;
					match outcome {
						Ok(page) => {
							self.session.receive_page(request.id, page);
						}
						Err(err) => {
							self.session.receive_error(request.id, err);
						}
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					changed |= self.fail_in_flight();
					break;
				}
			}
		}

		if changed {
			debug!(
				"session now shows {} hits for {:?}",
				self.session.hit_count(),
				self.session.active_query()
			);
			self.ensure_selection();
		}
		changed
	}

	fn fail_in_flight(&mut self) -> bool {
		let pending: Vec<u64> = self.session.in_flight().iter().map(|r| r.id).collect();
		for id in &pending {
			self.session
				.receive_error(*id, FetchError::other("fetch worker stopped unexpectedly"));
		}
		!pending.is_empty()
	}
}
