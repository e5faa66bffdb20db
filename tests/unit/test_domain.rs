use content_api::domain::{
    resource::entity::ResourceInput,
    shared::{
        errors::DomainError,
        pagination::{PageResult, PaginationQuery, has_more, offset, total_pages},
    },
};
use validator::Validate;

#[test]
fn offset_matches_page_arithmetic() {
    for page in 1..=5 {
        for size in 1..=7 {
            assert_eq!(offset(page, size), (page - 1) * size);
        }
    }
}

#[test]
fn total_pages_is_ceiling_division() {
    assert_eq!(total_pages(25, 10), 3);
    assert_eq!(total_pages(30, 10), 3);
    assert_eq!(total_pages(31, 10), 4);
    assert_eq!(total_pages(0, 10), 0);
}

#[test]
fn has_more_follows_page_times_size() {
    assert!(has_more(2, 25, 10));
    assert!(!has_more(3, 25, 10));
}

#[test]
fn pagination_defaults_are_first_page_of_ten() {
    let q = PaginationQuery::default();
    assert_eq!(q.page(), 1);
    assert_eq!(q.size(), 10);
    assert_eq!(q.offset(), 0);
    assert_eq!(q.limit(), 10);
}

#[test]
fn zero_size_is_an_invalid_argument() {
    let err = PaginationQuery::new(1, 0).unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument(_)));
}

#[test]
fn empty_page_has_zeroed_metadata() {
    let q = PaginationQuery::new(4, 10).unwrap();
    let page: PageResult<()> = PageResult::empty(&q);
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 4);
    assert_eq!(page.size, 10);
    assert!(!page.has_more);
    assert!(page.items.is_empty());
}

#[test]
fn page_result_serializes_with_snake_case_fields() {
    let q = PaginationQuery::new(1, 2).unwrap();
    let page = PageResult::new(3, &q, vec!["a", "b"]);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["total_count"], 3);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["has_more"], true);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[test]
fn resource_input_enforces_minimum_lengths() {
    assert!(ResourceInput::new("Hey", "ten chars!").validate().is_ok());
    assert!(ResourceInput::new("Hi", "ten chars!").validate().is_err());
    assert!(ResourceInput::new("Hey", "too short").validate().is_err());
}
