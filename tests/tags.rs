mod common;

use common::{fresh_db, saved_question, saved_user};
use questions_db::{PopularTag, QuestionLike, Tag};

#[tokio::test]
async fn most_popular_picks_the_most_liked_question_per_tag() {
    let db = fresh_db().await;
    let ada = saved_user(&db, "Ada", "Lovelace").await;
    let grace = saved_user(&db, "Grace", "Hopper").await;
    let engines = saved_question(&db, "Engines", &ada).await;
    let compilers = saved_question(&db, "Compilers", &grace).await;
    let looms = saved_question(&db, "Looms", &ada).await;

    for voter in [&ada, &grace] {
        QuestionLike::like(
            db.pool(),
            engines.question_id().unwrap(),
            voter.user_id().unwrap(),
        )
        .await
        .unwrap();
    }
    QuestionLike::like(
        db.pool(),
        compilers.question_id().unwrap(),
        ada.user_id().unwrap(),
    )
    .await
    .unwrap();

    let hardware = Tag::create(db.pool(), "hardware").await.unwrap();
    let software = Tag::create(db.pool(), "software").await.unwrap();
    let textiles = Tag::create(db.pool(), "textiles").await.unwrap();
    for (tag, question) in [
        (&hardware, &engines),
        (&hardware, &compilers),
        (&software, &compilers),
        (&textiles, &looms),
    ] {
        Tag::tag_question(db.pool(), tag.tag_id, question.question_id().unwrap())
            .await
            .unwrap();
    }

    let mut popular = Tag::most_popular(db.pool()).await.unwrap();
    popular.sort_by(|a, b| a.tag.cmp(&b.tag));
    assert_eq!(
        popular,
        vec![
            PopularTag {
                tag: "hardware".to_owned(),
                title: "Engines".to_owned(),
                body: "Engines?".to_owned(),
                author_id: ada.user_id().unwrap(),
                likes: 2,
            },
            PopularTag {
                tag: "software".to_owned(),
                title: "Compilers".to_owned(),
                body: "Compilers?".to_owned(),
                author_id: grace.user_id().unwrap(),
                likes: 1,
            },
        ]
    );
}

#[tokio::test]
async fn most_popular_is_empty_without_likes() {
    let db = fresh_db().await;
    let ada = saved_user(&db, "Ada", "Lovelace").await;
    let question = saved_question(&db, "Engines", &ada).await;
    let tag = Tag::create(db.pool(), "hardware").await.unwrap();
    Tag::tag_question(db.pool(), tag.tag_id, question.question_id().unwrap())
        .await
        .unwrap();

    assert!(Tag::most_popular(db.pool()).await.unwrap().is_empty());
}

#[tokio::test]
async fn tags_for_a_question() {
    let db = fresh_db().await;
    let ada = saved_user(&db, "Ada", "Lovelace").await;
    let question = saved_question(&db, "Engines", &ada).await;
    let question_id = question.question_id().unwrap();

    assert_eq!(Tag::find_by_question_id(db.pool(), question_id).await.unwrap(), None);

    let hardware = Tag::create(db.pool(), "hardware").await.unwrap();
    let link = Tag::tag_question(db.pool(), hardware.tag_id, question_id)
        .await
        .unwrap();
    assert_eq!(link.question_id, question_id);

    assert_eq!(
        Tag::find_by_question_id(db.pool(), question_id).await.unwrap(),
        Some(vec![hardware])
    );
}
