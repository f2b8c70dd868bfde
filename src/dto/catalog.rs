//! Wire format of the external top-100 catalogs ingested by the populate route.

use serde::Deserialize;

use super::lenient_string;
use crate::{dao::models::NewGameEntity, error::ImportError};

/// A catalog document: groups of entries, flattened on import.
pub type CatalogDocument = Vec<Vec<RawCatalogEntry>>;

/// One application entry as published by a catalog source.
///
/// Sources are inconsistent about identifiers (the iOS feed ships numeric `appId`s), so every
/// field accepts a string or a number.
#[derive(Debug, Default, Deserialize)]
pub struct RawCatalogEntry {
    /// Publisher identifier, stored as the game publisher.
    #[serde(default, deserialize_with = "lenient_string")]
    pub publisher_id: Option<String>,
    /// Display name, stored as the game name.
    #[serde(default, deserialize_with = "lenient_string")]
    pub humanized_name: Option<String>,
    /// Platform label.
    #[serde(default, deserialize_with = "lenient_string")]
    pub os: Option<String>,
    /// Application bundle identifier.
    #[serde(default, deserialize_with = "lenient_string")]
    pub bundle_id: Option<String>,
    /// Published version string.
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: Option<String>,
    /// Store identifier; numeric on the iOS feed.
    #[serde(rename = "appId", default, deserialize_with = "lenient_string")]
    pub app_id: Option<String>,
}

impl RawCatalogEntry {
    /// Remap the entry onto game columns. Imported games are always published.
    ///
    /// `url` and `position` only serve to describe the entry when a required field is missing.
    pub fn into_new_game(self, url: &str, position: usize) -> Result<NewGameEntity, ImportError> {
        let missing = |field| ImportError::IncompleteEntry {
            url: url.to_owned(),
            position,
            field,
        };

        Ok(NewGameEntity {
            publisher_id: self.publisher_id.ok_or_else(|| missing("publisher_id"))?,
            name: self.humanized_name.ok_or_else(|| missing("humanized_name"))?,
            platform: self.os.ok_or_else(|| missing("os"))?,
            store_id: self.app_id,
            bundle_id: self.bundle_id,
            app_version: self.version,
            is_published: Some(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://catalog.test/ios.top100.json";

    #[test]
    fn remaps_catalog_fields_onto_game_columns() {
        let entry: RawCatalogEntry = serde_json::from_str(
            r#"{
                "publisher_id": "pub-42",
                "humanized_name": "Heli Strike",
                "os": "android",
                "bundle_id": "com.example.heli",
                "version": "2.3.1",
                "appId": "com.example.heli",
                "rank": 12
            }"#,
        )
        .unwrap();

        let game = entry.into_new_game(URL, 0).unwrap();
        assert_eq!(
            game,
            NewGameEntity {
                publisher_id: "pub-42".into(),
                name: "Heli Strike".into(),
                platform: "android".into(),
                store_id: Some("com.example.heli".into()),
                bundle_id: Some("com.example.heli".into()),
                app_version: Some("2.3.1".into()),
                is_published: Some(true),
            }
        );
    }

    #[test]
    fn numeric_identifiers_become_strings() {
        let entry: RawCatalogEntry = serde_json::from_str(
            r#"{"publisher_id": 284882218, "humanized_name": "Word Quest", "os": "ios",
                "appId": 1234567890, "version": null}"#,
        )
        .unwrap();

        let game = entry.into_new_game(URL, 0).unwrap();
        assert_eq!(game.publisher_id, "284882218");
        assert_eq!(game.store_id.as_deref(), Some("1234567890"));
        assert_eq!(game.app_version, None);
        assert_eq!(game.bundle_id, None);
    }

    #[test]
    fn missing_name_is_reported_with_position() {
        let entry: RawCatalogEntry =
            serde_json::from_str(r#"{"publisher_id": "p", "os": "ios"}"#).unwrap();

        let err = entry.into_new_game(URL, 17).unwrap_err();
        assert!(matches!(
            err,
            ImportError::IncompleteEntry {
                position: 17,
                field: "humanized_name",
                ..
            }
        ));
    }

    #[test]
    fn nested_values_are_rejected() {
        let result = serde_json::from_str::<RawCatalogEntry>(r#"{"os": ["ios"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn document_is_groups_of_entries() {
        let document: CatalogDocument = serde_json::from_str(
            r#"[[{"humanized_name": "a"}, {"humanized_name": "b"}], [], [{"humanized_name": "c"}]]"#,
        )
        .unwrap();
        assert_eq!(document.into_iter().flatten().count(), 3);
    }
}
