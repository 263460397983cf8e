mod common;

use common::{FakeCatalog, details, item, query, summary, track};
use concertprep::error::CatalogError;
use concertprep::prep::{resolve_setlist, setlist::SEARCH_LIMIT};

#[tokio::test]
async fn test_resolve_setlist_picks_most_followed() {
    let mut catalog = FakeCatalog {
        search_results: vec![
            summary("small", Some("Muse Setlist 2023")),
            summary("big", Some("Muse Will Of The People Tour")),
            summary("mix", Some("Muse Fan Mix")),
        ],
        ..Default::default()
    };
    catalog.details.insert("small".into(), details("small", "Muse Setlist 2023", 12));
    catalog
        .details
        .insert("big".into(), details("big", "Muse Will Of The People Tour", 480));
    catalog.playlist_items.insert(
        "big".into(),
        vec![item(Some(track("spotify:track:1", "Will of the People", &["Muse"])))],
    );

    let setlist = resolve_setlist(&catalog, &query("Muse", "Will of the People", "2023"))
        .await
        .unwrap()
        .expect("a setlist");

    assert_eq!(setlist.playlist.id, "big");
    assert_eq!(setlist.playlist.followers, 480);
    assert_eq!(setlist.playlist.url, "https://open.spotify.com/playlist/big");
    assert_eq!(setlist.items.len(), 1);

    // "Fan Mix" never gets its details fetched
    assert_eq!(
        *catalog.detail_requests.lock().unwrap(),
        vec!["small".to_string(), "big".to_string()]
    );
    assert_eq!(
        *catalog.searches.lock().unwrap(),
        vec![(
            "Muse Will of the People Setlist".to_string(),
            SEARCH_LIMIT
        )]
    );
}

#[tokio::test]
async fn test_resolve_setlist_tie_keeps_first_seen() {
    let catalog = FakeCatalog {
        search_results: vec![
            summary("first", Some("Muse Setlist 2023")),
            summary("second", Some("Muse Concert 2023")),
        ],
        ..Default::default()
    }
    .with_setlist("first", 50, vec![])
    .with_setlist("second", 50, vec![]);

    let setlist = resolve_setlist(&catalog, &query("Muse", "Drones", "2023"))
        .await
        .unwrap()
        .expect("a setlist");

    assert_eq!(setlist.playlist.id, "first");
}

#[tokio::test]
async fn test_resolve_setlist_skips_failing_details() {
    // "broken" has no details in the fake and answers 404
    let catalog = FakeCatalog {
        search_results: vec![
            summary("broken", Some("Muse Setlist 2023")),
            summary("ok", Some("Muse Setlist 2023 (live)")),
        ],
        ..Default::default()
    }
    .with_setlist("ok", 3, vec![item(None)]);

    let setlist = resolve_setlist(&catalog, &query("Muse", "Drones", "2023"))
        .await
        .unwrap()
        .expect("a setlist");

    assert_eq!(setlist.playlist.id, "ok");
    assert_eq!(catalog.detail_requests.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_resolve_setlist_no_candidates() {
    let catalog = FakeCatalog {
        search_results: vec![
            None,
            summary("unnamed", None),
            summary("mix", Some("Muse Fan Mix")),
        ],
        ..Default::default()
    };

    let result = resolve_setlist(&catalog, &query("Muse", "Drones", "2023"))
        .await
        .unwrap();

    assert!(result.is_none());
    assert!(catalog.detail_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_resolve_setlist_no_details_retrievable() {
    let catalog = FakeCatalog {
        search_results: vec![summary("gone", Some("Muse Setlist 2023"))],
        ..Default::default()
    };

    let result = resolve_setlist(&catalog, &query("Muse", "Drones", "2023"))
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_resolve_setlist_search_failure_is_error() {
    let catalog = FakeCatalog {
        fail_search: true,
        ..Default::default()
    };

    let result = resolve_setlist(&catalog, &query("Muse", "Drones", "2023")).await;

    match result {
        Err(CatalogError::Status { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected search failure, got {:?}", other.map(|s| s.is_some())),
    }
}

#[tokio::test]
async fn test_resolve_setlist_unfollowed_candidate_is_no_setlist() {
    let catalog = FakeCatalog {
        search_results: vec![summary("fresh", Some("Muse Setlist 2023"))],
        ..Default::default()
    }
    .with_setlist("fresh", 0, vec![item(None)]);

    let result = resolve_setlist(&catalog, &query("Muse", "Drones", "2023"))
        .await
        .unwrap();

    assert!(result.is_none());
    assert_eq!(*catalog.detail_requests.lock().unwrap(), vec!["fresh".to_string()]);
}
