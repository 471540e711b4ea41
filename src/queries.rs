//! TypeQL query text used by the demonstration
//!
//! Every query string the application submits is built here, so the exact
//! text sent to the server can be unit tested without a running instance.
//! User-provided values are embedded as escaped single-quoted literals via
//! [`quote`]; the sample inputs contain no metacharacters, so the observable
//! query text is unchanged for them.

/// Fetch every user with full name and email as a JSON document stream.
pub const FETCH_ALL_USERS: &str = "match $u isa user; fetch $u: full-name, email;";

/// Aggregate query counting all users; the provisioning probe compares its
/// result against the expected size of the seed dataset.
pub const COUNT_USERS: &str = "match $u isa user; get $u; count;";

/// Escape a value and wrap it in single quotes for embedding in TypeQL.
pub fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Insert a new person with the given full name and email.
pub fn insert_user(name: &str, email: &str) -> String {
    format!(
        "insert $p isa person, has full-name {}, has email {};",
        quote(name),
        quote(email)
    )
}

/// Match users by exact full name, used to disambiguate before acting.
pub fn match_user_by_name(name: &str) -> String {
    format!("match $u isa user, has full-name {}; get;", quote(name))
}

/// All file paths the named user may view, sorted ascending by path.
///
/// Whether rule-derived permissions participate is decided by the
/// transaction options, not by the query text.
pub fn files_viewable_by_user(name: &str) -> String {
    format!(
        "match \
        $u isa user, has full-name {}; \
        $p($u, $pa) isa permission; \
        $o isa object, has path $fp; \
        $pa($o, $va) isa access; \
        $va isa action, has name 'view_file'; \
        get $fp; sort $fp asc;",
        quote(name)
    )
}

/// Re-point every file currently at `old_path` to `new_path`.
pub fn update_file_path(old_path: &str, new_path: &str) -> String {
    let old_path = quote(old_path);
    let new_path = quote(new_path);
    format!(
        "match $f isa file, has path {old_path}; \
        delete $f has path {old_path}; \
        insert $f has path {new_path};"
    )
}

/// Match files by exact path, used to enforce the exactly-one rule
/// before deletion.
pub fn match_file_by_path(path: &str) -> String {
    format!("match $f isa file, has path {}; get;", quote(path))
}

/// Delete the file with the given path.
pub fn delete_file_by_path(path: &str) -> String {
    format!("match $f isa file, has path {}; delete $f isa file;", quote(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain_value() {
        assert_eq!(quote("lzfkn.java"), "'lzfkn.java'");
    }

    #[test]
    fn test_quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote("O'Brien"), r"'O\'Brien'");
        assert_eq!(quote(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_insert_user_text() {
        assert_eq!(
            insert_user("Jack Keeper", "jk@typedb.com"),
            "insert $p isa person, has full-name 'Jack Keeper', has email 'jk@typedb.com';"
        );
    }

    #[test]
    fn test_match_user_by_name_text() {
        assert_eq!(
            match_user_by_name("Kevin Morrison"),
            "match $u isa user, has full-name 'Kevin Morrison'; get;"
        );
    }

    #[test]
    fn test_files_viewable_by_user_mentions_view_action() {
        let query = files_viewable_by_user("Kevin Morrison");
        assert!(query.contains("has full-name 'Kevin Morrison'"));
        assert!(query.contains("has name 'view_file'"));
        assert!(query.ends_with("sort $fp asc;"));
    }

    #[test]
    fn test_update_file_path_text() {
        let query = update_file_path("lzfkn.java", "lzfkn2.java");
        assert_eq!(
            query,
            "match $f isa file, has path 'lzfkn.java'; \
            delete $f has path 'lzfkn.java'; \
            insert $f has path 'lzfkn2.java';"
        );
    }

    #[test]
    fn test_delete_file_text() {
        assert_eq!(
            match_file_by_path("lzfkn2.java"),
            "match $f isa file, has path 'lzfkn2.java'; get;"
        );
        assert_eq!(
            delete_file_by_path("lzfkn2.java"),
            "match $f isa file, has path 'lzfkn2.java'; delete $f isa file;"
        );
    }
}
