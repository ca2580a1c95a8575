use std::cell::RefCell;

use campsite_directory::domain::like::{LikeRequest, LikeStatus};
use campsite_directory::domain::listing::ListingPage;
use campsite_directory::domain::map::MapConfig;
use campsite_directory::domain::types::CampsiteId;
use campsite_directory::pagination::{PageMarker, build_page_list};
use campsite_directory::render::ListingRenderer;
use campsite_directory::repository::LikeWriter;
use campsite_directory::repository::errors::{LikeError, LikeResult};
use campsite_directory::services::likes::{LikeButton, LikeOutcome, LikeToggler};
use campsite_directory::services::map::{
    InitialView, LocationDisplay, build_scene, resolve_single_location,
};

/// Like endpoint that flips a stored flag on every call.
#[derive(Default)]
struct LikeStore {
    liked: RefCell<bool>,
    count: RefCell<i64>,
    seen: RefCell<Vec<LikeRequest>>,
    status: Option<u16>,
}

impl LikeWriter for LikeStore {
    fn toggle_like(&self, request: &LikeRequest) -> LikeResult<LikeStatus> {
        self.seen.borrow_mut().push(request.clone());
        if let Some(err) = self.status.and_then(LikeError::from_status) {
            return Err(err);
        }
        let liked = !*self.liked.borrow();
        *self.liked.borrow_mut() = liked;
        *self.count.borrow_mut() += if liked { 1 } else { -1 };
        Ok(LikeStatus {
            is_liked: liked,
            like_count: *self.count.borrow(),
        })
    }
}

#[test]
fn decoded_payload_renders_escaped_cards() {
    let payload = r#"{
        "results": [
            {
                "id": 1, "name": "<script>x</script>", "country": "HR",
                "country_name": "Croatia", "description": "one two three",
                "is_premium": true, "like_count": 2, "has_liked": true
            },
            {
                "id": 2, "name": null, "country": null, "phone_number": "",
                "website": "https://camp.example"
            }
        ],
        "count": 2,
        "current_page": 1,
        "total_pages": 1
    }"#;
    let page: ListingPage = serde_json::from_str(payload).unwrap();
    let html = ListingRenderer::new().unwrap().render_cards(&page.results).unwrap();

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Croatia"));
    assert!(html.contains("border-yellow-400"));
    assert!(!html.contains("PREMIUM"));
    assert!(html.contains("/campsites/2/"));
    assert!(html.contains("camp.example"));
    assert_eq!(html.matches("data-campsite-id=").count(), 2);
}

#[test]
fn page_list_shapes() {
    use PageMarker::{Ellipsis, Page};

    assert_eq!(build_page_list(1, 1), vec![Page(1)]);
    assert_eq!(
        build_page_list(5, 10),
        vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]
    );
    assert_eq!(
        build_page_list(1, 10),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
}

#[test]
fn like_toggles_back_and_forth() {
    let store = LikeStore::default();
    let toggler = LikeToggler::new("/login/", "/campsites/").with_cookies("csrftoken=abc");
    let mut button = LikeButton::new(CampsiteId::new(9).unwrap(), false, 0);

    let first = toggler.toggle(&mut button, &store);
    assert_eq!(
        first,
        Some(LikeOutcome::Updated(LikeStatus {
            is_liked: true,
            like_count: 1
        }))
    );
    toggler.toggle(&mut button, &store);

    assert!(!button.liked);
    assert_eq!(button.like_count, 0);
    let seen = store.seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].url, "/api/campsites/9/like/");
    assert_eq!(seen[0].csrf_token, "abc");
}

#[test]
fn rejected_like_sends_user_to_login() {
    let store = LikeStore {
        status: Some(403),
        ..LikeStore::default()
    };
    let toggler = LikeToggler::new("/login/", "/campsites/");
    let mut button = LikeButton::new(CampsiteId::new(9).unwrap(), false, 4);

    let outcome = toggler.toggle(&mut button, &store);

    assert_eq!(
        outcome,
        Some(LikeOutcome::Redirect("/login/?next=%2Fcampsites%2F".into()))
    );
    assert_eq!(button.like_count, 4);
    assert!(!button.loading);
}

#[test]
fn map_scene_from_embedded_json() {
    let config = MapConfig::from_json(
        r#"{
            "mode": "radius",
            "center": {"lat": 45.0, "lng": 14.0},
            "radius_km": 25,
            "campsites": [
                {"id": 1, "lat": 45.0, "lng": 14.0, "name": "Center", "likes": 3},
                {"id": 2, "lat": "n/a", "lng": 14.1, "name": "Broken"},
                {"id": 3, "lat": 45.1, "lng": 14.2, "name": "Near"}
            ],
            "centerCampsite": {"id": 1}
        }"#,
    )
    .unwrap();

    let scene = build_scene(&config);

    assert_eq!(scene.markers.len(), 2);
    assert!(scene.markers[0].is_center);
    assert!(!scene.markers[1].is_center);
    assert_eq!(scene.overlay.map(|o| o.radius_m), Some(25_000.0));
    assert!(matches!(scene.view, InitialView::Fit(ref points) if points.len() == 2));
}

#[test]
fn single_location_needs_valid_coordinates() {
    assert!(matches!(
        resolve_single_location("45.2", "13.6", "Camp"),
        LocationDisplay::Map { .. }
    ));
    assert!(matches!(
        resolve_single_location("", "13.6", "Camp"),
        LocationDisplay::Fallback { .. }
    ));
}
