//! In-memory backend against the repository contract.

use catalog_server::db::models::{
    CategoryCreate, ClientCreate, EnquiryCreate, EnquiryStatus, EnquiryType, EnquiryUpdate,
    PageKey, ProductCreate, ProductUpdate,
};
use catalog_server::db::repository::{
    CatalogRepository, MemoryRepository, PageParams, ProductFilter, ProductQuery, RepoError,
    SortKey,
};
use serde_json::json;

fn repo() -> MemoryRepository {
    MemoryRepository::with_fixtures()
}

fn product_input(name: &str, category: &str, code: &str, in_stock: bool) -> ProductCreate {
    ProductCreate {
        name: name.into(),
        slug: None,
        description: Some(format!("{name} description")),
        code: Some(code.into()),
        category: Some(category.into()),
        category_id: None,
        image: None,
        in_stock: Some(in_stock),
        featured: None,
        capacity: None,
        power: None,
        dimensions: None,
    }
}

#[tokio::test]
async fn fixture_products_resolve_by_derived_slug() {
    let repo = repo();
    let product = repo
        .product_by_slug("vibrating-screen-x1")
        .await
        .unwrap()
        .expect("fixture product should exist");
    assert_eq!(product.name, "Vibrating Screen X1");
    assert_eq!(product.code.as_deref(), Some("VS-X1"));

    assert!(repo.product_by_slug("no-such-slug").await.unwrap().is_none());
}

#[tokio::test]
async fn filters_are_exact_and_combined() {
    let repo = repo();
    let query = ProductQuery {
        filter: ProductFilter {
            category: Some("Crushers".into()),
            in_stock: Some(true),
        },
        ..Default::default()
    };
    let products = repo.filtered_products(&query).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Jaw Crusher J120");

    let count = repo
        .product_count(&query.filter, None)
        .await
        .unwrap();
    assert_eq!(count, products.len() as u64);
}

#[tokio::test]
async fn search_is_case_insensitive_and_respects_sort() {
    let repo = repo();
    let query = ProductQuery {
        search: Some("CRUSHER".into()),
        sort: SortKey::NameAsc,
        ..Default::default()
    };
    let products = repo.filtered_products(&query).await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cone Crusher C45", "Jaw Crusher J120"]);

    // Code search hits the same records
    let count = repo
        .product_count(&ProductFilter::default(), Some("jc-120"))
        .await
        .unwrap();
    assert_eq!(count, 1);

    // No match means zero, not an error
    let count = repo
        .product_count(&ProductFilter::default(), Some("excavator"))
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn pagination_windows_the_sorted_list() {
    let repo = repo();
    let query = ProductQuery {
        sort: SortKey::Oldest,
        page: PageParams { page: 2, limit: 2 },
        ..Default::default()
    };
    let page2 = repo.filtered_products(&query).await.unwrap();
    assert_eq!(page2.len(), 2);

    let all = repo
        .filtered_products(&ProductQuery {
            sort: SortKey::Oldest,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page2[0].id, all[2].id);
    assert_eq!(page2[1].id, all[3].id);

    // Past the end: empty page, no error
    let query = ProductQuery {
        page: PageParams { page: 9, limit: 50 },
        ..Default::default()
    };
    assert!(repo.filtered_products(&query).await.unwrap().is_empty());
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let repo = repo();
    let created = repo
        .create_product(product_input("Trommel T5", "Screens", "TR-5", true))
        .await
        .unwrap();

    let patch = ProductUpdate {
        in_stock: Some(false),
        ..Default::default()
    };
    let updated = repo
        .update_product(&created.id, patch)
        .await
        .unwrap()
        .expect("product exists");

    assert!(!updated.in_stock);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.code, created.code);
    assert!(updated.updated_at >= created.updated_at);

    // Unknown id is a no-match value, not an error
    let missing = repo
        .update_product("missing", ProductUpdate::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn delete_reports_no_match_on_second_attempt() {
    let repo = repo();
    let created = repo
        .create_product(product_input("Scalper S2", "Screens", "SC-2", true))
        .await
        .unwrap();

    assert!(repo.delete_product(&created.id).await.unwrap());
    assert!(!repo.delete_product(&created.id).await.unwrap());
}

#[tokio::test]
async fn bulk_delete_classifies_each_id_independently() {
    let repo = repo();
    let keep = repo
        .create_product(product_input("Feeder F1", "Conveyors", "FD-1", true))
        .await
        .unwrap();
    let goner = repo
        .create_product(product_input("Feeder F2", "Conveyors", "FD-2", true))
        .await
        .unwrap();

    let ids = vec![goner.id.clone(), "missing-id".to_string()];
    let outcome = repo.bulk_delete_products(&ids).await.unwrap();

    assert_eq!(outcome.deleted, 1);
    assert_eq!(outcome.failed, 1);
    assert_eq!(outcome.deleted + outcome.failed, ids.len());
    assert_eq!(outcome.errors, vec!["Product not found: missing-id"]);
    assert_eq!(outcome.message, "Deleted 1 product(s), 1 failed");

    // Untouched product survives
    assert!(repo
        .product_by_slug(&keep.slug)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn bulk_delete_rejects_empty_input() {
    let repo = repo();
    let result = repo.bulk_delete_products(&[]).await;
    assert!(matches!(result, Err(RepoError::Validation(_))));
}

#[tokio::test]
async fn category_scoped_delete_short_circuits_on_zero_matches() {
    let repo = repo();
    let outcome = repo
        .delete_products_by_category("Excavators")
        .await
        .unwrap();
    assert_eq!(outcome.deleted, 0);
    assert_eq!(outcome.failed, 0);
    assert_eq!(outcome.message, "No products found in category Excavators");
}

#[tokio::test]
async fn category_scoped_delete_removes_every_match() {
    let repo = repo();
    let before = repo
        .product_count(
            &ProductFilter {
                category: Some("Screens".into()),
                in_stock: None,
            },
            None,
        )
        .await
        .unwrap();
    assert!(before > 0);

    let outcome = repo.delete_products_by_category("Screens").await.unwrap();
    assert_eq!(outcome.deleted as u64, before);
    assert_eq!(outcome.failed, 0);

    let after = repo
        .product_count(
            &ProductFilter {
                category: Some("Screens".into()),
                in_stock: None,
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(after, 0);
}

#[tokio::test]
async fn stats_split_active_and_inactive_per_category() {
    let repo = repo();
    let stats = repo.stats().await.unwrap();

    assert_eq!(stats.total_products, 5);
    assert_eq!(stats.category_stats.len(), 3);

    let crushers = stats
        .category_stats
        .iter()
        .find(|c| c.category_name == "Crushers")
        .expect("fixture category");
    assert_eq!(crushers.total_products, 2);
    assert_eq!(crushers.active_products, 1);
    assert_eq!(crushers.inactive_products, 1);

    // A category with no products still appears, zeroed
    repo.create_category(CategoryCreate {
        name: "Washers".into(),
        slug: None,
        description: None,
        icon: None,
        image: None,
    })
    .await
    .unwrap();
    let stats = repo.stats().await.unwrap();
    let washers = stats
        .category_stats
        .iter()
        .find(|c| c.category_name == "Washers")
        .expect("new category");
    assert_eq!(washers.total_products, 0);
    assert_eq!(washers.active_products, 0);
}

#[tokio::test]
async fn clients_list_in_display_order() {
    let repo = repo();
    for (name, order) in [("Gamma Mining", 3), ("Alpha Quarries", 1), ("Beta Rock", 2)] {
        repo.create_client(ClientCreate {
            name: name.into(),
            logo: None,
            display_order: Some(order),
        })
        .await
        .unwrap();
    }
    let clients = repo.clients().await.unwrap();
    let names: Vec<&str> = clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Quarries", "Beta Rock", "Gamma Mining"]);
}

#[tokio::test]
async fn enquiries_start_pending_and_transition_on_update() {
    let repo = repo();
    let enquiry = repo
        .create_enquiry(EnquiryCreate {
            enquiry_type: EnquiryType::Product,
            name: "A. Buyer".into(),
            email: Some("buyer@example.com".into()),
            phone: None,
            company: None,
            message: Some("Price for the X1?".into()),
            product: Some("vibrating-screen-x1".into()),
        })
        .await
        .unwrap();
    assert_eq!(enquiry.status, EnquiryStatus::Pending);

    let updated = repo
        .update_enquiry(
            &enquiry.id,
            EnquiryUpdate {
                status: Some(EnquiryStatus::Contacted),
                message: None,
            },
        )
        .await
        .unwrap()
        .expect("enquiry exists");
    assert_eq!(updated.status, EnquiryStatus::Contacted);
    assert_eq!(updated.message.as_deref(), Some("Price for the X1?"));
}

#[tokio::test]
async fn page_content_merges_top_level_keys_only() {
    let repo = repo();

    // Unwritten page reads back as an empty object
    assert_eq!(repo.page_content(PageKey::About).await.unwrap(), json!({}));

    let first = repo
        .update_page_content(
            PageKey::About,
            json!({"hero": {"title": "About us"}, "team": ["a", "b"]}),
        )
        .await
        .unwrap();
    assert_eq!(first["hero"]["title"], "About us");

    let second = repo
        .update_page_content(PageKey::About, json!({"hero": {"title": "New title"}}))
        .await
        .unwrap();
    assert_eq!(second["hero"]["title"], "New title");
    assert!(second["hero"].get("subtitle").is_none());
    // Untouched top-level key survives the merge
    assert_eq!(second["team"], json!(["a", "b"]));
}
