use super::*;

fn item(id: &str, points: u64) -> Item {
	Item {
		object_id: id.into(),
		title: format!("story {id}"),
		url: format!("https://example.com/{id}"),
		author: "author".into(),
		num_comments: 0,
		points,
	}
}

fn page(hits: Vec<Item>, page: u32) -> SearchResultPage {
	SearchResultPage { hits, page }
}

fn visible_ids(session: &Session) -> Vec<String> {
	session
		.visible()
		.into_iter()
		.map(|item| item.object_id.clone())
		.collect()
}

#[test]
fn start_activates_query_and_requests_first_page() {
	let (session, request) = Session::start("redux");
	let request = request.expect("initial fetch");

	assert_eq!(session.active_query(), "redux");
	assert_eq!(request.query, "redux");
	assert_eq!(request.page, 0);
	assert!(session.is_loading());
	assert!(session.visible().is_empty());
}

#[test]
fn redux_dismiss_and_next_page_scenario() {
	let (mut session, request) = Session::start("redux");
	let request = request.expect("initial fetch");

	assert!(session.receive_page(request.id, page(vec![item("A", 1), item("B", 2)], 0)));
	assert!(!session.is_loading());
	assert_eq!(visible_ids(&session), ["A", "B"]);

	assert!(session.dismiss("A"));
	assert_eq!(visible_ids(&session), ["B"]);

	let next = session.request_next_page().expect("next page");
	assert_eq!(next.query, "redux");
	assert_eq!(next.page, 1);
	assert!(session.is_loading());

	session.receive_page(next.id, page(vec![item("C", 3)], 1));
	assert_eq!(visible_ids(&session), ["B", "C"]);
	assert_eq!(session.active_results().map(|r| r.page), Some(1));
}

#[test]
fn hit_count_is_appended_minus_dismissed() {
	let (mut session, request) = Session::start("rust");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("1", 0), item("2", 0), item("3", 0)], 0));

	let second = session.request_next_page().expect("next");
	session.receive_page(second.id, page(vec![item("4", 0), item("5", 0)], 1));

	assert!(session.dismiss("2"));
	assert!(session.dismiss("5"));
	assert_eq!(session.hit_count(), 3 + 2 - 2);
}

#[test]
fn overlapping_pages_are_not_deduplicated() {
	let (mut session, request) = Session::start("rust");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("1", 0), item("2", 0)], 0));
	let second = session.request_next_page().expect("next");
	session.receive_page(second.id, page(vec![item("2", 0), item("3", 0)], 1));

	assert_eq!(visible_ids(&session), ["1", "2", "2", "3"]);

	assert!(session.dismiss("2"));
	assert_eq!(visible_ids(&session), ["1", "2", "3"]);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
	let (mut session, request) = Session::start("rust");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("1", 0)], 0));

	assert!(!session.dismiss("missing"));
	assert_eq!(session.hit_count(), 1);
}

#[test]
fn dismiss_without_results_is_a_no_op() {
	let (mut session, _request) = Session::start("rust");
	assert!(!session.dismiss("1"));
	assert!(session.results().is_empty());
}

#[test]
fn dismiss_only_touches_the_active_query() {
	let (mut session, request) = Session::start("a");
	let first = request.expect("fetch a");
	session.receive_page(first.id, page(vec![item("1", 0)], 0));

	let second = session.submit_query("b").expect("fetch b");
	session.receive_page(second.id, page(vec![item("1", 0)], 0));

	assert!(session.dismiss("1"));
	assert_eq!(session.hit_count(), 0);
	assert_eq!(session.results().get("a").map(|r| r.hits.len()), Some(1));
}

#[test]
fn submitting_a_cached_query_does_not_refetch() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("A", 0)], 0));

	let other = session.submit_query("react").expect("fetch react");
	session.receive_page(other.id, page(vec![item("R", 0)], 0));

	assert!(session.submit_query("redux").is_none());
	assert_eq!(session.active_query(), "redux");
	assert_eq!(visible_ids(&session), ["A"]);
}

#[test]
fn repeated_submit_while_in_flight_issues_one_request() {
	let mut session = Session::new();
	assert!(session.submit_query("redux").is_some());
	assert!(session.submit_query("redux").is_none());
	assert_eq!(session.in_flight().len(), 1);
}

#[test]
fn next_page_is_refused_while_active_query_is_loading() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	assert!(session.request_next_page().is_none());

	session.receive_page(first.id, page(vec![item("A", 0)], 0));
	let next = session.request_next_page().expect("next page");
	assert!(session.request_next_page().is_none());
	assert_eq!(next.page, 1);
}

#[test]
fn next_page_without_results_starts_at_zero() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_error(first.id, FetchError::other("offline"));

	let retry = session.request_next_page().expect("request");
	assert_eq!(retry.page, 0);
}

#[test]
fn request_ids_increase() {
	let mut session = Session::new();
	let a = session.submit_query("a").expect("a");
	let b = session.submit_query("b").expect("b");
	assert!(b.id > a.id);
}

#[test]
fn stale_response_lands_under_its_own_query() {
	let (mut session, request) = Session::start("old");
	let stale = request.expect("fetch old");
	let fresh = session.submit_query("new").expect("fetch new");

	session.receive_page(stale.id, page(vec![item("O", 0)], 0));
	assert_eq!(session.active_query(), "new");
	assert!(session.visible().is_empty());
	assert!(session.is_loading());

	session.receive_page(fresh.id, page(vec![item("N", 0)], 0));
	assert_eq!(visible_ids(&session), ["N"]);
	assert_eq!(session.results().get("old").map(|r| r.hits.len()), Some(1));
	assert!(!session.is_loading());
}

#[test]
fn unknown_request_ids_are_dropped() {
	let (mut session, _request) = Session::start("redux");
	assert!(!session.receive_page(999, page(vec![item("X", 0)], 0)));
	assert!(session.results().is_empty());
	assert!(session.is_loading());
}

#[test]
fn fetch_failure_sets_error_and_keeps_results() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("A", 0)], 0));

	let next = session.request_next_page().expect("next");
	assert!(session.receive_error(next.id, FetchError::Status { status: 503 }));

	assert!(!session.is_loading());
	assert!(matches!(
		session.last_error(),
		Some(FetchError::Status { status: 503 })
	));
	assert_eq!(visible_ids(&session), ["A"]);
	assert_eq!(session.active_results().map(|r| r.page), Some(0));
}

#[test]
fn successful_page_clears_the_error() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_error(first.id, FetchError::other("offline"));
	assert!(session.last_error().is_some());

	let retry = session.request_next_page().expect("retry");
	session.receive_page(retry.id, page(vec![item("A", 0)], 0));
	assert!(session.last_error().is_none());
}

#[test]
fn set_sort_toggles_then_resets() {
	let mut session = Session::new();
	session.set_sort(SortKey::Title);
	assert_eq!(session.sort(), SortState { key: SortKey::Title, reverse: false });

	session.set_sort(SortKey::Title);
	assert_eq!(session.sort(), SortState { key: SortKey::Title, reverse: true });

	session.set_sort(SortKey::Author);
	assert_eq!(session.sort(), SortState { key: SortKey::Author, reverse: false });
}

#[test]
fn points_sort_is_descending_then_ascending() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("low", 2), item("high", 5)], 0));

	session.set_sort(SortKey::Points);
	let points: Vec<u64> = session.visible().iter().map(|item| item.points).collect();
	assert_eq!(points, [5, 2]);

	session.set_sort(SortKey::Points);
	let points: Vec<u64> = session.visible().iter().map(|item| item.points).collect();
	assert_eq!(points, [2, 5]);
}

#[test]
fn sort_state_is_shared_across_queries() {
	let (mut session, request) = Session::start("a");
	let first = request.expect("fetch a");
	session.receive_page(first.id, page(vec![item("a1", 1), item("a2", 9)], 0));
	session.set_sort(SortKey::Points);

	let second = session.submit_query("b").expect("fetch b");
	session.receive_page(second.id, page(vec![item("b1", 3), item("b2", 4)], 0));

	assert_eq!(session.sort().key, SortKey::Points);
	assert_eq!(visible_ids(&session), ["b2", "b1"]);
}

#[test]
fn sorting_never_mutates_the_store() {
	let (mut session, request) = Session::start("redux");
	let first = request.expect("initial fetch");
	session.receive_page(first.id, page(vec![item("A", 1), item("B", 9)], 0));
	session.set_sort(SortKey::Points);
	assert_eq!(visible_ids(&session), ["B", "A"]);

	let stored: Vec<&str> = session
		.active_results()
		.map(|r| r.hits.iter().map(|hit| hit.object_id.as_str()).collect())
		.unwrap_or_default();
	assert_eq!(stored, ["A", "B"]);
}
