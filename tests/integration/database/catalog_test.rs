//! Movie listing and detail tests

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serial_test::serial;

use movie_catalog::backend::catalog::images::ImageResolver;
use movie_catalog::backend::catalog::movies;
use movie_catalog::backend::error::DbError;
use movie_catalog::shared::catalog::{DEFAULT_RATING, PLACEHOLDER_IMAGE_URL};

use crate::common::{create_test_server, create_unique_test_user, TestDatabase};

#[tokio::test]
#[serial]
async fn test_search_orders_by_average_rating() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let low = fixture.seed_movie("The Room", "A misunderstood drama", None).await;
    let high = fixture.seed_movie("The Matrix", "A hacker learns the truth", None).await;
    let _other = fixture.seed_movie("Alien", "In space no one can hear you scream", None).await;
    let ada = fixture.seed_user("Ada Lovelace", "ada@example.com").await;
    let bob = fixture.seed_user("Bob Dylan", "bob@example.com").await;
    fixture.seed_rating(high, ada, 5.0).await;
    fixture.seed_rating(high, bob, 4.0).await;
    fixture.seed_rating(low, ada, 2.0).await;

    let found = crate::assert_ok!(movies::list_movies(&db, "the", 10, 0).await);

    let ids: Vec<i32> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![high, low]);
    assert_eq!(found[0].rating, 4.5);
    assert_eq!(found[1].rating, 2.0);
    assert!(found.iter().all(|m| m.image == PLACEHOLDER_IMAGE_URL));
}

#[tokio::test]
#[serial]
async fn test_average_rating_rounds_to_one_decimal() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let up = fixture.seed_movie("Rounds up", "", None).await;
    let down = fixture.seed_movie("Rounds down", "", None).await;
    let mut users = Vec::new();
    for (name, email) in [
        ("Ada Lovelace", "ada@example.com"),
        ("Bob Dylan", "bob@example.com"),
        ("Cleo Laine", "cleo@example.com"),
    ] {
        users.push(fixture.seed_user(name, email).await);
    }
    for (user, score) in users.iter().zip([5.0, 5.0, 4.0]) {
        fixture.seed_rating(up, *user, score).await;
    }
    for (user, score) in users.iter().zip([4.0, 4.0, 5.0]) {
        fixture.seed_rating(down, *user, score).await;
    }

    let all = crate::assert_ok!(movies::list_all_movies(&db).await);
    assert_eq!(all[0].rating, 4.7);
    assert_eq!(all[1].rating, 4.3);

    let detail = crate::assert_ok!(movies::get_movie(&db, &ImageResolver::new(None), up).await);
    assert_eq!(detail.rating, 4.7);
}

#[tokio::test]
#[serial]
async fn test_search_pages_with_limit_and_offset() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    for title in ["The One", "The Two", "The Three"] {
        fixture.seed_movie(title, "", None).await;
    }

    let page = crate::assert_ok!(movies::list_movies(&db, "the", 2, 1).await);
    assert_eq!(page.len(), 2);

    let rest = crate::assert_ok!(movies::list_movies(&db, "the", 2, 2).await);
    assert_eq!(rest.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_unrated_movie_reports_default_rating() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    fixture.seed_movie("Unrated", "Nobody has seen it", None).await;

    let all = crate::assert_ok!(movies::list_all_movies(&db).await);
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].rating, DEFAULT_RATING);
}

#[tokio::test]
#[serial]
async fn test_list_all_orders_by_id_with_genres() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let first = fixture.seed_movie("First", "", None).await;
    let second = fixture.seed_movie("Second", "", None).await;
    let drama = fixture.seed_genre("Drama").await;
    let crime = fixture.seed_genre("Crime").await;
    fixture.link_genre(second, drama).await;
    fixture.link_genre(second, crime).await;

    let all = crate::assert_ok!(movies::list_all_movies(&db).await);

    assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![first, second]);
    assert!(all[0].genres.is_empty());
    assert_eq!(all[1].genres.len(), 2);
    assert_eq!(all[1].genres[&drama], "Drama");
}

#[tokio::test]
#[serial]
async fn test_get_movie_loads_full_detail() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();
    let images = ImageResolver::new(Some("demo".to_string()));

    let id = fixture.seed_movie("Heat", "Cops and robbers", Some("heat.jpg")).await;
    let genre = fixture.seed_genre("Crime").await;
    fixture.link_genre(id, genre).await;
    let ada = fixture.seed_user("Ada Lovelace", "ada@example.com").await;
    let bob = fixture.seed_user("Bob Dylan", "bob@example.com").await;
    fixture.seed_comment(id, ada, "First!").await;
    fixture.seed_comment(id, bob, "Great film").await;
    fixture.seed_rating(id, ada, 3.0).await;
    fixture.seed_favorite(id, bob).await;

    let movie = crate::assert_ok!(movies::get_movie(&db, &images, id).await);

    assert_eq!(movie.title, "Heat");
    assert_eq!(movie.image, "https://res.cloudinary.com/demo/image/upload/heat.jpg");
    assert_eq!(movie.genres[&genre], "Crime");
    assert_eq!(movie.total_comments, 2);
    assert_eq!(movie.comments[0].comment, "Great film");
    assert_eq!(movie.comments[0].user_name, "Bob Dylan");
    assert_eq!(movie.ratings.len(), 1);
    assert_eq!(movie.total_favorites, 1);
    assert_eq!(movie.favorites[0].user_id, bob);
}

#[tokio::test]
#[serial]
async fn test_get_unknown_movie_is_not_found() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let result = movies::get_movie(&db, &ImageResolver::default(), 4242).await;
    crate::assert_err!(result, DbError::NotFound);

    let server = create_test_server(Some(db));
    let response = server.get("/v1/movie/4242").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_error_message!(response, "movie not found");
}

#[tokio::test]
#[serial]
async fn test_movies_by_genre_carry_full_genre_map() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let heat = fixture.seed_movie("Heat", "", None).await;
    let up = fixture.seed_movie("Up", "", None).await;
    let crime = fixture.seed_genre("Crime").await;
    let drama = fixture.seed_genre("Drama").await;
    let family = fixture.seed_genre("Family").await;
    fixture.link_genre(heat, crime).await;
    fixture.link_genre(heat, drama).await;
    fixture.link_genre(up, family).await;

    let found = crate::assert_ok!(
        movies::list_movies_by_genre(&db, &ImageResolver::default(), crime).await
    );

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, heat);
    assert!(found[0].has_genre(crime));
    assert_eq!(found[0].genres.len(), 2);
}

#[tokio::test]
#[serial]
async fn test_movies_by_unknown_genre_is_not_found() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let server = create_test_server(Some(fixture.database()));

    let response = server.get("/v1/movies/genre/999").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_error_message!(response, "genre not found");
}

#[tokio::test]
#[serial]
async fn test_latest_movies_flag_favorites_for_the_caller() {
    let Some(fixture) = TestDatabase::connect().await else { return };
    let db = fixture.database();

    let mut ids = Vec::new();
    for i in 0..6 {
        ids.push(fixture.seed_movie(&format!("Movie {}", i), "", None).await);
    }
    let user = crate::assert_ok!(create_unique_test_user(&db, "user").await);
    fixture.seed_favorite(ids[5], user.id).await;

    let anonymous = crate::assert_ok!(
        movies::list_latest_movies(&db, &ImageResolver::default(), None).await
    );
    assert_eq!(anonymous.len(), 5);
    assert!(anonymous.iter().all(|m| !m.is_favorite));

    let server = create_test_server(Some(db));
    let response = server
        .get("/v1/movies/latest")
        .add_header(header::AUTHORIZATION, HeaderValue::from_str(&user.bearer).unwrap())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let listed = body["movies"].as_array().unwrap();
    assert_eq!(listed.len(), 5);
    let favorite = listed
        .iter()
        .find(|m| m["id"] == serde_json::json!(ids[5]))
        .expect("most recent movie is listed");
    assert_eq!(favorite["is_favorite"], serde_json::json!(true));
}

#[tokio::test]
#[serial]
async fn test_list_movies_endpoint_uses_query_overrides() {
    let Some(fixture) = TestDatabase::connect().await else { return };

    fixture.seed_movie("Jaws", "A shark", None).await;
    fixture.seed_movie("Jaws 2", "Another shark", None).await;
    let server = create_test_server(Some(fixture.database()));

    let response = server
        .get("/v1/movies")
        .add_query_param("search", "jaws")
        .add_query_param("limit", 10)
        .add_query_param("offset", 0)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["movies"].as_array().unwrap().len(), 2);
}
