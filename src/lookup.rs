use tracing::debug;

use crate::catalog::{Catalog, Entity};
use crate::error::{PokekaError, Result};
use crate::kana::katakana_to_hiragana;
use crate::types::{LangMode, OptionList, SelectOption};

// Joins a Japanese name and its hiragana reading in an option value.
pub const VALUE_SEPARATOR: &str = "__";

pub const CARD_SEARCH_URL: &str = "https://www.pokemon-card.com/card-search/index.php";

/// Selectable options for `mode`, in catalog order.
///
/// Japanese options carry the hiragana reading in their value so that a
/// query typed in either syllabary matches the same row.
pub fn build_options(catalog: &Catalog, mode: LangMode) -> OptionList {
    catalog
        .iter()
        .map(|entity| match mode {
            LangMode::Ja => SelectOption {
                value: format!(
                    "{}{}{}",
                    entity.name_ja,
                    VALUE_SEPARATOR,
                    katakana_to_hiragana(&entity.name_ja)
                ),
                label: entity.name_ja.clone(),
            },
            LangMode::En => SelectOption {
                value: entity.name_en.clone(),
                label: entity.name_en.clone(),
            },
        })
        .collect()
}

/// Find the first entity whose name in `mode` equals `name` exactly.
pub fn resolve<'a>(catalog: &'a Catalog, mode: LangMode, name: &str) -> Result<&'a Entity> {
    let found = catalog.iter().find(|entity| match mode {
        LangMode::Ja => entity.name_ja == name,
        LangMode::En => entity.name_en == name,
    });

    match found {
        Some(entity) => {
            debug!(mode = %mode, name, name_ja = %entity.name_ja, name_en = %entity.name_en, "Resolved entity");
            Ok(entity)
        }
        None => Err(PokekaError::NotFound {
            mode,
            name: name.to_string(),
        }),
    }
}

/// Typeahead filter: options whose `"{label} {value}"` contains the trimmed
/// query, ignoring case. An empty query keeps every option.
pub fn filter_options<'a>(options: &'a [SelectOption], query: &str) -> Vec<&'a SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| {
            format!("{} {}", option.label, option.value)
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}

/// Card-search URL with `keyword` set to the given Japanese name.
pub fn search_url(name_ja: &str) -> String {
    format!(
        "{}?keyword={}&se_ta=&regulation_sidebar_form=XY&pg=&illust=&sm_and_keyword=true",
        CARD_SEARCH_URL,
        encode_query_component(name_ja)
    )
}

/// Percent-encode everything except the RFC 3986 unreserved set.
pub fn encode_query_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
