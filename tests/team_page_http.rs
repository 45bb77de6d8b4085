mod support;

use team_portal::pages::{BookmarkField, FaqField, TeamEvent};
use team_portal::{ActionError, ClientError, MemoryStore, Render, TeamPage, TeamService};

async fn team_page(store: MemoryStore) -> TeamPage<TeamService> {
    let http = support::client_for(store).await;
    let mut page = TeamPage::new(TeamService::new(http));
    page.init().await.expect("init");
    page
}

async fn add_bookmark(page: &mut TeamPage<TeamService>, title: &str, description: &str) {
    page.dispatch(TeamEvent::EditDraftBookmark(BookmarkField::Title, title.into()))
        .await
        .unwrap();
    page.dispatch(TeamEvent::EditDraftBookmark(
        BookmarkField::Description,
        description.into(),
    ))
    .await
    .unwrap();
    page.dispatch(TeamEvent::AddBookmark).await.unwrap();
}

#[tokio::test]
async fn added_bookmark_appears_with_server_id() {
    let mut page = team_page(MemoryStore::default()).await;
    assert_eq!(page.bookmarks().get().map(Vec::len), Some(0));

    add_bookmark(&mut page, "A", "B").await;

    let rows = page.bookmarks().get().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, Some(1));
    assert_eq!(rows[0].title, "A");
    assert_eq!(rows[0].description, "B");
    assert_eq!(page.new_bookmark().title, "");
    assert!(!page.notice().unwrap().is_error());
}

#[tokio::test]
async fn saved_edits_survive_a_fresh_page() {
    let http = support::client_for(MemoryStore::default()).await;
    let mut page = TeamPage::new(TeamService::new(http.clone()));
    page.init().await.unwrap();

    page.dispatch(TeamEvent::EditTeamName("Atlas".into())).await.unwrap();
    page.dispatch(TeamEvent::EditProductFocus("Search".into()))
        .await
        .unwrap();
    page.dispatch(TeamEvent::SaveTeamDetails).await.unwrap();
    assert_eq!(
        page.notice().map(|n| n.message()),
        Some("Team details updated successfully")
    );

    page.dispatch(TeamEvent::EditDraftFaq(FaqField::Question, "Who?".into()))
        .await
        .unwrap();
    page.dispatch(TeamEvent::AddFaq).await.unwrap();
    let faq_id = page.faqs().get().unwrap()[0].id.unwrap();
    page.dispatch(TeamEvent::EditFaq {
        id: faq_id,
        field: FaqField::Answer,
        value: "Us".into(),
    })
    .await
    .unwrap();
    page.dispatch(TeamEvent::SaveFaq(faq_id)).await.unwrap();

    let mut fresh = TeamPage::new(TeamService::new(http));
    fresh.init().await.unwrap();
    let details = fresh.team_details().get().unwrap();
    assert_eq!(details.team_name, "Atlas");
    assert_eq!(details.product_focus, "Search");
    let faqs = fresh.faqs().get().unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0].question, "Who?");
    assert_eq!(faqs[0].answer, "Us");
}

#[tokio::test]
async fn delete_removes_only_that_id() {
    let mut page = team_page(MemoryStore::default()).await;
    add_bookmark(&mut page, "one", "").await;
    add_bookmark(&mut page, "two", "").await;
    add_bookmark(&mut page, "three", "").await;

    page.dispatch(TeamEvent::DeleteBookmark(2)).await.unwrap();

    let titles: Vec<_> = page
        .bookmarks()
        .get()
        .unwrap()
        .iter()
        .map(|b| b.title.as_str())
        .collect();
    assert_eq!(titles, vec!["one", "three"]);
}

#[tokio::test]
async fn deleting_a_missing_record_reports_not_found() {
    let mut page = team_page(MemoryStore::default()).await;
    let err = page.delete_faq(42).await.unwrap_err();
    assert!(matches!(
        err,
        ActionError::Client(ClientError::Api { status: 404, .. })
    ));
    let notice = page.notice().unwrap();
    assert!(notice.is_error());
    assert!(notice.message().starts_with("delete faq failed"));
    assert_eq!(page.faqs().get().map(Vec::len), Some(0));
}

#[tokio::test]
async fn unreachable_backend_leaves_sections_loading() {
    let base = support::dead_base_url().await;
    let http = team_portal::HttpClient::with_base_url(&base).unwrap();
    let mut page = TeamPage::new(TeamService::new(http));

    let err = page.init().await.unwrap_err();
    assert!(matches!(err, ActionError::Client(ClientError::Request(_))));
    assert!(page.team_details().is_loading());
    assert!(page.bookmarks().is_loading());
    assert!(page.faqs().is_loading());

    let view = page.render();
    assert!(view.notice.as_ref().unwrap().is_error());
    assert!(view.to_string().contains("loading..."));
}
