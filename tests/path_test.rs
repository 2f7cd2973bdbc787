use ofsstat::path::{
    has_scheme, is_root, join, join_all, normpath, parse_uri, serviceid_join, volume_matches_service,
};
use ofsstat::OfsError;

// ---------------------------------------------------------------------------
// parse_uri / is_root
// ---------------------------------------------------------------------------

#[test]
fn parse_uri_splits_netloc_and_path() {
    let (netloc, path) = parse_uri("ofs://ozone1/vol/bucket/key").unwrap();
    assert_eq!(netloc, "ozone1");
    assert_eq!(path, "/vol/bucket/key");
}

#[test]
fn parse_uri_defaults_path_to_root() {
    let (netloc, path) = parse_uri("OFS://ozone1").unwrap();
    assert_eq!(netloc, "ozone1");
    assert_eq!(path, "/");
}

#[test]
fn parse_uri_rejects_other_schemes() {
    for uri in ["/vol/bucket", "hdfs://nn/tmp", "ofs:/vol", ""] {
        match parse_uri(uri) {
            Err(OfsError::InvalidUri(got)) => assert_eq!(got, uri),
            other => panic!("expected InvalidUri for {uri:?}, got {other:?}"),
        }
    }
}

#[test]
fn root_detection() {
    assert!(is_root("ofs://"));
    assert!(is_root("OFS://"));
    assert!(!is_root("ofs://svc"));
    assert!(!is_root("/"));
}

// ---------------------------------------------------------------------------
// join
// ---------------------------------------------------------------------------

#[test]
fn join_inserts_single_separator() {
    assert_eq!(join("/myvol/mydir", "file.txt"), "ofs://myvol/mydir/file.txt");
}

#[test]
fn join_does_not_double_existing_separator() {
    assert_eq!(join("/myvol/mydir/", "file.txt"), "ofs://myvol/mydir/file.txt");
    assert!(!join("/myvol/mydir/", "file.txt").contains("mydir//"));
}

#[test]
fn join_accepts_qualified_and_root_components() {
    assert_eq!(join("ofs://vol/dir", "key"), "ofs://vol/dir/key");
    assert_eq!(join("ofs://", "vol"), "ofs://vol");
    assert_eq!(join("ofs://vol", "bucket"), "ofs://vol/bucket");
}

#[test]
fn join_absolute_component_restarts() {
    assert_eq!(join("/a/b", "/c"), "ofs://c");
}

#[test]
fn join_leaves_relative_results_unqualified() {
    assert_eq!(join("rel", "x"), "rel/x");
    assert_eq!(join("", "x"), "x");
}

#[test]
fn join_all_chains_components() {
    assert_eq!(join_all("/vol", &["bucket", "dir/", "key"]), "ofs://vol/bucket/dir/key");
    assert_eq!(join_all::<&str>("/vol", &[]), "ofs://vol");
}

// ---------------------------------------------------------------------------
// serviceid_join
// ---------------------------------------------------------------------------

#[test]
fn serviceid_join_prefixes_service_segment() {
    assert_eq!(
        serviceid_join("ofs://vol/key", Some("svc"), false),
        "ofs://svc/vol/key"
    );
}

#[test]
fn serviceid_join_without_service_is_identity() {
    assert_eq!(serviceid_join("ofs://vol/key", None, false), "ofs://vol/key");
    assert_eq!(serviceid_join("ofs://vol/key", Some(""), false), "ofs://vol/key");
    assert_eq!(serviceid_join("ofs://vol/key", None, true), "ofs://vol/key");
}

#[test]
fn serviceid_join_respects_already_qualified_flag() {
    assert_eq!(serviceid_join("ofs://svc/dir/key", Some("svc"), true), "ofs://svc/dir/key");
    // Only the scheme is normalized.
    assert_eq!(serviceid_join("OFS://svc/dir/key", Some("svc"), true), "ofs://svc/dir/key");
}

#[test]
fn serviceid_join_prefixes_volume_named_like_service() {
    // The flag, not the shape of the joined path, decides.
    assert_eq!(serviceid_join("ofs://svc", Some("svc"), false), "ofs://svc/svc");
    assert_eq!(serviceid_join("ofs://svc/key", Some("svc"), false), "ofs://svc/svc/key");
    assert_eq!(serviceid_join("ofs://svc/key", Some("svc"), true), "ofs://svc/key");
}

#[test]
fn has_scheme_is_case_insensitive() {
    assert!(has_scheme("ofs://svc/vol"));
    assert!(has_scheme("OFS://svc"));
    assert!(has_scheme("ofs://"));
    assert!(!has_scheme("/svc/vol"));
    assert!(!has_scheme("ofs:/svc"));
}

#[test]
fn serviceid_join_matches_whole_segment_only() {
    assert_eq!(
        serviceid_join("ofs://svcx/key", Some("svc"), false),
        "ofs://svc/svcx/key"
    );
}

#[test]
fn serviceid_join_ignores_relative_paths() {
    assert_eq!(serviceid_join("rel/key", Some("svc"), false), "rel/key");
}

// ---------------------------------------------------------------------------
// volume_matches_service
// ---------------------------------------------------------------------------

#[test]
fn collision_check_is_a_textual_prefix_test() {
    assert!(volume_matches_service("/cluster1/mydir", Some("cluster1")));
    assert!(volume_matches_service("/cluster1", Some("cluster1")));
    // Known sharp edge: a longer volume name sharing the prefix matches too.
    assert!(volume_matches_service("/cluster10/mydir", Some("cluster1")));

    assert!(!volume_matches_service("/myvol/cluster1", Some("cluster1")));
    assert!(!volume_matches_service("cluster1/mydir", Some("cluster1")));
    assert!(!volume_matches_service("ofs://cluster1/mydir", Some("cluster1")));
}

#[test]
fn collision_check_needs_a_service_id() {
    assert!(!volume_matches_service("/cluster1/mydir", None));
    assert!(!volume_matches_service("/cluster1/mydir", Some("")));
}

// ---------------------------------------------------------------------------
// normpath
// ---------------------------------------------------------------------------

#[test]
fn normpath_cleans_absolute_paths() {
    assert_eq!(normpath("/a//b/./c/.."), "/a/b");
    assert_eq!(normpath("/a/b/"), "/a/b");
    assert_eq!(normpath("/../a"), "/a");
    assert_eq!(normpath("/"), "/");
}

#[test]
fn normpath_keeps_scheme_and_netloc() {
    assert_eq!(normpath("ofs://svc/vol//bucket/../key/"), "ofs://svc/vol/key");
    assert_eq!(normpath("ofs://svc/.."), "ofs://svc/");
    assert_eq!(normpath("ofs://svc"), "ofs://svc/");
    assert_eq!(normpath("ofs://"), "ofs://");
}

#[test]
fn normpath_relative_paths() {
    assert_eq!(normpath("a/./b/../../.."), "..");
    assert_eq!(normpath(""), ".");
}
