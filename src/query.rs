//! Search request body encoding.

use url::form_urlencoded;

/// Builds the `application/x-www-form-urlencoded` POST body the search
/// endpoint expects.
///
/// The body always carries `action=query` and `q=<query_text>`. Each
/// selected forum id appends a repeated `forums[]=<id>` pair in caller
/// order (caller order = checklist order = document order), so the encoded
/// body is deterministic for a fixed selection. An empty selection is a
/// valid body: the server defaults to searching all forums when no scope
/// parameters are present.
pub fn build_search_request_body<I, S>(query_text: &str, selected_forum_ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("q", query_text);
    serializer.append_pair("action", "query");
    for forum_id in selected_forum_ids {
        serializer.append_pair("forums[]", forum_id.as_ref());
    }
    serializer.finish()
}
