// Parse module tests, pulled into mod.rs via include!.

use super::*;
use crate::error_handling::{ErrorStats, ErrorType};

fn test_error_stats() -> ErrorStats {
    ErrorStats::new()
}

#[test]
fn test_forum_options_form_missing() {
    // No search form at all: valid empty outcome, never an error
    let html = r#"<html><body><p>maintenance page</p></body></html>"#;
    let stats = test_error_stats();
    let scrape = extract_forum_options(html, &stats).unwrap();
    assert!(scrape.options.is_empty());
    assert!(scrape.hints.is_empty());
    assert_eq!(scrape.status_message, "");
    assert_eq!(stats.get_count(ErrorType::SearchFormMissing), 1);
}

#[test]
fn test_forum_options_basic() {
    let html = r#"
        <form action="query.php" method="post">
        <div class="search_message standard">Thread not found</div>
        <div class="search_help">
        <div class="term">intitle:"dog breath"</div>
        <div class="term">threadid:3858657 sand</div>
        </div>
        <div class="search_forum depth0">
        <input type="checkbox" class="forumcheck" name="forums[]" value="48">
        Main
        </div>
        <div class="search_forum depth1 parent48">
        <input type="checkbox" class="forumcheck" name="forums[]" value="273">
        General Bullshit
        </div>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_forum_options(html, &stats).unwrap();

    assert_eq!(scrape.status_message, "Thread not found");
    assert_eq!(scrape.hints.len(), 2);
    assert_eq!(scrape.hints[0].text, r#"intitle:"dog breath""#);

    assert_eq!(scrape.options.len(), 2);
    assert_eq!(scrape.options[0].label, "Main");
    assert_eq!(scrape.options[0].forum_id, "48");
    assert_eq!(scrape.options[1].label, "General Bullshit");
    assert_eq!(scrape.options[1].forum_id, "273");
    assert!(!scrape.options[0].selected);
}

#[test]
fn test_forum_options_filters_select_all() {
    // The toggle entry is filtered regardless of position
    let html = r#"
        <form action="query.php">
        <div class="search_forum"><input class="forumcheck" value="48"> Main</div>
        <button class="search_forum"><input class="forumcheck" value="-1">
        Select All Forums
        </button>
        <div class="search_forum"><input class="forumcheck" value="26"> FYAD</div>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_forum_options(html, &stats).unwrap();
    let labels: Vec<&str> = scrape.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Main", "FYAD"]);
}

#[test]
fn test_forum_options_document_order_preserved() {
    // Checklist order = document order; the depth classes are not
    // interpreted, flattened order already encodes the hierarchy
    let html = r#"
        <form action="query.php">
        <div class="search_forum depth0"><input class="forumcheck" value="48"> Main</div>
        <div class="search_forum depth1"><input class="forumcheck" value="272"> The Great Outdoors</div>
        <div class="search_forum depth1"><input class="forumcheck" value="273"> General Bullshit</div>
        <div class="search_forum depth2"><input class="forumcheck" value="669"> Fuck You and Dine</div>
        </form>"#;
    let stats = test_error_stats();
    let first = extract_forum_options(html, &stats).unwrap();
    let ids: Vec<&str> = first.options.iter().map(|o| o.forum_id.as_str()).collect();
    assert_eq!(ids, vec!["48", "272", "273", "669"]);

    // Idempotent: identical input yields identical order and values
    let second = extract_forum_options(html, &stats).unwrap();
    let labels_first: Vec<&str> = first.options.iter().map(|o| o.label.as_str()).collect();
    let labels_second: Vec<&str> = second.options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels_first, labels_second);
}

#[test]
fn test_forum_options_missing_value_attribute() {
    // Checkbox without a value degrades to an empty forum_id
    let html = r#"
        <form action="query.php">
        <div class="search_forum"><input class="forumcheck"> Orphan Forum</div>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_forum_options(html, &stats).unwrap();
    assert_eq!(scrape.options.len(), 1);
    assert_eq!(scrape.options[0].label, "Orphan Forum");
    assert_eq!(scrape.options[0].forum_id, "");
    assert_eq!(stats.get_count(ErrorType::ForumCheckboxValueMissing), 1);
}

#[test]
fn test_forum_options_form_with_wrong_action_ignored() {
    let html = r#"
        <form action="login.php">
        <div class="search_forum"><input class="forumcheck" value="48"> Main</div>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_forum_options(html, &stats).unwrap();
    assert!(scrape.options.is_empty());
}

#[test]
fn test_search_results_form_missing() {
    let html = r#"<html><body></body></html>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    assert!(scrape.results.is_empty());
    assert_eq!(scrape.info, "");
}

#[test]
fn test_search_results_no_matches_with_info() {
    // Zero result elements + a summary element: legitimate "no matches"
    let html = r#"
        <form action="query.php">
        <div id="search_info">Showing results 0 to 0 of 0 results.</div>
        <ul id="search_results"></ul>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    assert!(scrape.results.is_empty());
    assert_eq!(scrape.info, "Showing results 0 to 0 of 0 results.");
}

#[test]
fn test_search_results_basic_record() {
    let html = r#"
        <form action="query.php">
        <ul>
        <li class="search_result">
        <div class="result_number">1.</div>
        <div class="threadlink"><a class="threadtitle" href="/showthread.php?goto=post&amp;postid=532903997&amp;highlight=test">A thread title</a></div>
        <div class="hit_info">by <a class="username" href="/member.php?userid=60513">Plinkey</a> in <a class="forumtitle" href="/forumdisplay.php?forumid=269">C-SPAM</a> at Jul 1, 2023 8:04 PM</div>
        <div class="blurb">there should be a <em>test</em> to be a goon</div>
        </li>
        </ul>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    assert_eq!(scrape.results.len(), 1);

    let record = &scrape.results[0];
    assert_eq!(record.result_ordinal, "1.");
    assert_eq!(record.thread_title, "A thread title");
    assert_eq!(record.author_name, "Plinkey");
    assert_eq!(record.forum_title, "C-SPAM");
    assert_eq!(record.post_id, "532903997");
    assert_eq!(
        record.posted_at,
        "by Plinkey in C-SPAM at Jul 1, 2023 8:04 PM"
    );
    // Highlighting markup is stripped, content preserved
    assert_eq!(record.blurb, "there should be a test to be a goon");
}

#[test]
fn test_search_results_missing_title_link() {
    // No title link: post_id and thread_title are empty, other fields intact
    let html = r#"
        <form action="query.php">
        <li class="search_result">
        <div class="result_number">3.</div>
        <div class="hit_info">by someone at some point</div>
        <div class="blurb">a blurb</div>
        </li>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    let record = &scrape.results[0];
    assert_eq!(record.thread_title, "");
    assert_eq!(record.post_id, "");
    assert_eq!(record.result_ordinal, "3.");
    assert_eq!(record.blurb, "a blurb");
    assert_eq!(stats.get_count(ErrorType::PostIdMissing), 1);
}

#[test]
fn test_search_results_href_without_postid_param() {
    let html = r#"
        <form action="query.php">
        <li class="search_result">
        <a class="threadtitle" href="/showthread.php?threadid=123">No postid here</a>
        </li>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    assert_eq!(scrape.results[0].post_id, "");
    assert_eq!(scrape.results[0].thread_title, "No postid here");
}

#[test]
fn test_search_results_unparsable_href() {
    // An href the URL parser rejects short-circuits to empty, not an error
    let html = r#"
        <form action="query.php">
        <li class="search_result">
        <a class="threadtitle" href="http://">broken link</a>
        </li>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    assert_eq!(scrape.results[0].post_id, "");
}

#[test]
fn test_search_results_server_order_preserved() {
    let html = r#"
        <form action="query.php">
        <li class="search_result"><div class="result_number">1.</div></li>
        <li class="search_result"><div class="result_number">2.</div></li>
        <li class="search_result"><div class="result_number">3.</div></li>
        </form>"#;
    let stats = test_error_stats();
    let scrape = extract_search_results(html, &stats).unwrap();
    let ordinals: Vec<&str> = scrape
        .results
        .iter()
        .map(|r| r.result_ordinal.as_str())
        .collect();
    assert_eq!(ordinals, vec!["1.", "2.", "3."]);
}

#[test]
fn test_query_param_absolute_href() {
    use crate::parse::helpers::query_param;
    use url::Url;

    let base = Url::parse("https://forums.somethingawful.com/").unwrap();
    let href = "https://forums.somethingawful.com/showthread.php?goto=post&postid=99";
    assert_eq!(query_param(href, &base, "postid"), Some("99".to_string()));
}

#[test]
fn test_query_param_relative_href() {
    use crate::parse::helpers::query_param;
    use url::Url;

    let base = Url::parse("https://forums.somethingawful.com/").unwrap();
    let href = "/showthread.php?goto=post&postid=532903997&highlight=test";
    assert_eq!(
        query_param(href, &base, "postid"),
        Some("532903997".to_string())
    );
}
