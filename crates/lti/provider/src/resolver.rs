//! Widget resolution: external launch-path id to internal guid

use crate::traits::{StorageResult, WidgetCatalog};
use std::sync::Arc;

/// Maps the widget id from the launch path onto the catalog's guid
#[derive(Clone)]
pub struct WidgetResolver {
    catalog: Arc<dyn WidgetCatalog>,
}

impl WidgetResolver {
    pub fn new(catalog: Arc<dyn WidgetCatalog>) -> Self {
        Self { catalog }
    }

    /// Internal guid of the widget, or `None` when the catalog has no match
    pub async fn resolve(&self, external_id: &str) -> StorageResult<Option<String>> {
        let widget = self.catalog.find_widget(external_id).await?;
        if widget.is_none() {
            tracing::debug!(widget_id = %external_id, "Widget not in catalog");
        }
        Ok(widget.map(|w| w.guid))
    }
}
