//! Tests for LangCodeAttribute

use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::value_objects::InputType;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockRecordStore;
use crate::services::attribute::Attribute;

use super::mocks::{attribute, english_model, german_model, COLUMN, TABLE};

fn seeded_store() -> Arc<MockRecordStore> {
    let store = Arc::new(MockRecordStore::new());
    store.insert(TABLE, COLUMN, 1, Some("en"));
    store.insert(TABLE, COLUMN, 2, Some("fr"));
    store.insert(TABLE, COLUMN, 3, Some("en"));
    store
}

#[tokio::test]
async fn test_filter_options_for_id_list() {
    let attr = attribute(seeded_store(), english_model(), &["en", "fr"]);

    let options = attr.filter_options(Some(&[1, 2, 3][..]), false).await.unwrap();

    assert_eq!(options.codes(), vec!["en", "fr"]);
    assert_eq!(options.label("en"), Some("English"));
    assert_eq!(options.label("fr"), Some("French"));
    assert_eq!(options.count("en"), Some(2));
    assert_eq!(options.count("fr"), Some(1));
}

#[tokio::test]
async fn test_filter_options_follow_id_order() {
    let attr = attribute(seeded_store(), english_model(), &["en", "fr"]);

    let options = attr.filter_options(Some(&[2, 1][..]), true).await.unwrap();

    assert_eq!(options.codes(), vec!["fr", "en"]);
    assert_eq!(options.count("en"), Some(1));
}

#[tokio::test]
async fn test_filter_options_empty_id_list() {
    let store = seeded_store();
    let attr = attribute(Arc::clone(&store), english_model(), &["en", "fr"]);

    for used_only in [false, true] {
        let options = attr.filter_options(Some(&[][..]), used_only).await.unwrap();
        assert!(options.is_empty());
        assert_eq!(options.counts, Some(IndexMap::new()));
    }

    store.set_should_fail(true);
    assert!(attr.filter_options(Some(&[][..]), true).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_filter_options_used_only_ordered_by_code() {
    let store = seeded_store();
    store.insert(TABLE, COLUMN, 4, Some("de"));
    store.insert(TABLE, COLUMN, 5, None);
    store.insert(TABLE, COLUMN, 6, Some(""));
    let attr = attribute(store, german_model(), &["en"]);

    let options = attr.filter_options(None, true).await.unwrap();

    assert_eq!(options.codes(), vec!["de", "en", "fr"]);
    assert_eq!(options.label("de"), Some("Deutsch"));
    assert_eq!(options.label("fr"), Some("Französisch"));
    assert_eq!(options.count("en"), Some(2));
    assert_eq!(options.len(), 3);
}

#[tokio::test]
async fn test_filter_options_unknown_code_shows_raw_code() {
    let store = seeded_store();
    store.insert(TABLE, COLUMN, 4, Some("xx"));
    let attr = attribute(store, english_model(), &["en"]);

    let options = attr.filter_options(Some(&[4, 1][..]), false).await.unwrap();

    assert_eq!(options.label("xx"), Some("xx"));
    assert_eq!(options.codes(), vec!["xx", "en"]);
}

#[tokio::test]
async fn test_filter_options_unfiltered_returns_allowed_set() {
    let attr = attribute(seeded_store(), german_model(), &["it", "fr", "en", "zz"]);

    let options = attr.filter_options(None, false).await.unwrap();

    assert_eq!(options.codes(), vec!["en", "fr", "it", "zz"]);
    assert_eq!(options.label("fr"), Some("Französisch"));
    assert_eq!(options.label("zz"), Some("zz"));
    assert_eq!(options.counts, None);
}

#[tokio::test]
async fn test_filter_options_propagates_store_errors() {
    let store = seeded_store();
    store.set_should_fail(true);
    let attr = attribute(store, english_model(), &["en"]);

    let result = attr.filter_options(None, true).await;
    assert!(matches!(result, Err(DomainError::Storage { .. })));
}

#[test]
fn test_field_definition() {
    let attr = attribute(seeded_store(), german_model(), &["it", "en", "zz"]);

    let definition = attr.field_definition();

    assert_eq!(definition.label, "Language");
    assert_eq!(definition.input_type, InputType::Select);
    assert!(definition.chosen);
    assert!(!definition.mandatory);
    let options: Vec<(&str, &str)> = definition
        .options
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(options, vec![("en", "Englisch"), ("it", "Italian")]);
}

#[test]
fn test_render_value() {
    let attr = attribute(seeded_store(), german_model(), &["en"]);

    assert_eq!(attr.render_value(Some("en")), "Englisch");
    assert_eq!(attr.render_value(Some("es")), "Spanish");
    assert_eq!(attr.render_value(Some("")), "");
    assert_eq!(attr.render_value(None), "");
    assert_eq!(attr.render_value(Some("xx")), "");
}

#[test]
fn test_widget_conversion() {
    let attr = attribute(seeded_store(), english_model(), &["en"]);

    assert_eq!(attr.widget_to_value(""), None);
    assert_eq!(attr.widget_to_value("fr"), Some("fr".to_string()));
    assert_eq!(attr.value_to_widget(None), "");
    assert_eq!(attr.value_to_widget(Some("fr")), "fr");
}

#[test]
fn test_schema_and_settings() {
    let attr = attribute(seeded_store(), english_model(), &["en"]);

    assert_eq!(attr.type_name(), "langcode");
    assert_eq!(attr.col_name(), COLUMN);
    assert_eq!(attr.sql_data_type(), "varchar(5) NULL");
    assert_eq!(
        attr.attribute_setting_names(),
        vec![
            "tl_class",
            "be_template",
            "langcodes",
            "filterable",
            "searchable",
            "mandatory",
            "includeBlankOption",
        ]
    );
}

#[test]
fn test_settings_palette() {
    let attr = attribute(seeded_store(), english_model(), &["en"]);

    let palette = attr.settings_palette(false);
    assert_eq!(palette.presentation, vec!["tl_class", "be_template"]);
    assert_eq!(palette.functions, vec!["mandatory", "includeBlankOption"]);
    assert_eq!(palette.overview, vec!["filterable", "searchable"]);

    let palette = attr.settings_palette(true);
    assert_eq!(palette.presentation.last(), Some(&"fe_template"));
    assert_eq!(palette.fields().count(), 7);
}

#[tokio::test]
async fn test_empty_value_is_stored_as_null() {
    let store = seeded_store();
    let attr = attribute(Arc::clone(&store), english_model(), &["en"]);

    attr.set_data_for(&[(1, Some(String::new())), (2, Some(" de ".to_string()))])
        .await
        .unwrap();

    assert_eq!(store.value_of(TABLE, COLUMN, 1), Some(None));
    assert_eq!(store.value_of(TABLE, COLUMN, 2), Some(Some("de".to_string())));

    let data = attr.get_data_for(&[1, 2, 99]).await.unwrap();
    assert_eq!(data, vec![(1, None), (2, Some("de".to_string()))]);
    assert_eq!(attr.render_value(data[0].1.as_deref()), "");
    assert_eq!(attr.value_to_widget(data[0].1.as_deref()), "");
}

#[tokio::test]
async fn test_set_data_rejects_invalid_codes() {
    let store = seeded_store();
    let attr = attribute(Arc::clone(&store), english_model(), &["en"]);

    let result = attr
        .set_data_for(&[(1, Some("fr".to_string())), (2, Some("english".to_string()))])
        .await;

    match result {
        Err(DomainError::ValidationErr(ValidationError::InvalidLanguageCode { code })) => {
            assert_eq!(code, "english");
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(store.value_of(TABLE, COLUMN, 1), Some(Some("en".to_string())));
}

#[tokio::test]
async fn test_get_data_for_empty_ids() {
    let store = seeded_store();
    store.set_should_fail(true);
    let attr = attribute(store, english_model(), &["en"]);

    assert!(attr.get_data_for(&[]).await.unwrap().is_empty());
    assert!(attr.set_data_for(&[]).await.is_ok());
}
