//! Turns a raw search string into ordered result records.

use crate::error::QueryError;
use crate::models::{Messages, RecordAction, ResultRecord, HINT_EXAMPLE};
use crate::services::detector::detect;
use crate::services::CacheStore;
use color_model::{format, Color, ColorFormat};
use std::path::PathBuf;

/// Token separator in the search string
pub const SEPARATOR: char = ';';

/// Keyword a host uses to route every query to the plugin
pub const GLOBAL_ACTION_KEYWORD: &str = "*";

/// Whether informational records (hint, error) should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// The user addressed the plugin directly: show hint and error records
    #[default]
    Direct,
    /// The plugin sees every query: stay silent unless the input is a color
    Ambient,
}

impl QueryMode {
    pub fn from_action_keyword(keyword: &str) -> Self {
        if keyword == GLOBAL_ACTION_KEYWORD {
            QueryMode::Ambient
        } else {
            QueryMode::Direct
        }
    }
}

/// Strings and icon used for hint and error records.
#[derive(Debug, Clone)]
pub struct InfoRecords {
    pub messages: Messages,
    pub icon_path: PathBuf,
}

impl InfoRecords {
    pub fn new(messages: Messages, icon_path: impl Into<PathBuf>) -> Self {
        Self {
            messages,
            icon_path: icon_path.into(),
        }
    }

    /// Record shown for empty input; activating it copies an example query.
    pub fn hint(&self) -> ResultRecord {
        ResultRecord {
            title: self.messages.hint_title.clone(),
            subtitle: self.messages.hint_subtitle.clone(),
            icon_path: self.icon_path.clone(),
            action: Some(RecordAction::CopyToClipboard(HINT_EXAMPLE.to_string())),
        }
    }

    /// Record shown when the input cannot be converted.
    pub fn conversion_error(&self) -> ResultRecord {
        ResultRecord {
            title: self.messages.plugin_name.clone(),
            subtitle: self.messages.conversion_error.clone(),
            icon_path: self.icon_path.clone(),
            action: None,
        }
    }
}

/// Run one query.
///
/// Empty input yields the hint record; any unrecognized token aborts the whole
/// query with a single error record. In [`QueryMode::Ambient`] both cases
/// yield an empty list instead. Otherwise every token produces four records
/// (hex, rgb, vec3, hsl) in input order.
pub fn run_query(
    input: &str,
    mode: QueryMode,
    cache: &CacheStore,
    info: &InfoRecords,
) -> Result<Vec<ResultRecord>, QueryError> {
    let silent_or = |record: ResultRecord| match mode {
        QueryMode::Ambient => Vec::new(),
        QueryMode::Direct => vec![record],
    };

    if input.trim().is_empty() {
        return Ok(silent_or(info.hint()));
    }

    // Detect every token before touching the cache so a bad token leaves no files behind
    let colors: Option<Vec<Color>> = input
        .split(SEPARATOR)
        .map(|token| detect(token).to_color())
        .collect();
    let Some(colors) = colors else {
        tracing::debug!(input, "Query contains an unrecognized token");
        return Ok(silent_or(info.conversion_error()));
    };

    let mut records = Vec::with_capacity(colors.len() * ColorFormat::ALL.len());
    for color in colors {
        let icon = cache.swatch_path(color)?;
        records.extend(ColorFormat::ALL.iter().map(|&notation| {
            ResultRecord::copyable(format(color, notation), notation.label(), icon.clone())
        }));
    }

    Ok(records)
}

/// Host-facing entry point owning the cache and informational strings.
pub struct QueryEngine {
    cache: CacheStore,
    info: InfoRecords,
}

impl QueryEngine {
    pub fn new(cache: CacheStore, info: InfoRecords) -> Self {
        Self { cache, info }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn info(&self) -> &InfoRecords {
        &self.info
    }

    /// Run a query, reporting cache failures as the conversion-error record.
    pub fn query(&self, input: &str, mode: QueryMode) -> Vec<ResultRecord> {
        match run_query(input, mode, &self.cache, &self.info) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(%e, input, "Query failed");
                match mode {
                    QueryMode::Ambient => Vec::new(),
                    QueryMode::Direct => vec![self.info.conversion_error()],
                }
            }
        }
    }
}
