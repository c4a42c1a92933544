use crate::error::StoreError;
use crate::flow::Flow;

/// A whole flow document as persisted: the raw JSON object keyed by its
/// string `id`.
///
/// The raw form is kept alongside so fields this crate does not know about
/// survive a load/save round trip — flows are replaced as whole documents,
/// never patched field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDocument {
    id: String,
    raw: serde_json::Value,
}

impl FlowDocument {
    pub fn from_flow(flow: &Flow) -> Result<Self, StoreError> {
        let raw = serde_json::to_value(flow).map_err(|e| StoreError::Codec(e.to_string()))?;
        Ok(Self {
            id: flow.id.clone(),
            raw,
        })
    }

    /// Wraps a raw JSON document. The document must carry a string `id`.
    pub fn from_json(raw: serde_json::Value) -> Result<Self, StoreError> {
        let id = raw
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or(StoreError::MissingId)?
            .to_string();
        Ok(Self { id, raw })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Decodes the typed flow out of the document. Unknown fields are
    /// ignored here but remain in the raw form.
    pub fn to_flow(&self) -> Result<Flow, StoreError> {
        serde_json::from_value(self.raw.clone()).map_err(|e| StoreError::Codec(e.to_string()))
    }
}

/// The persistence collaborator the application layer injects.
///
/// The traversal engine never calls this; it exists so the builder UI's
/// storage glue has one seam to implement. All failures are soft and
/// retryable from the caller's point of view.
pub trait FlowStore {
    /// Creates a new document; a previously saved id is rejected.
    fn save(&mut self, doc: FlowDocument) -> Result<(), StoreError>;

    fn load(&self, id: &str) -> Result<FlowDocument, StoreError>;

    /// All documents, in the order they were first saved.
    fn list(&self) -> Result<Vec<FlowDocument>, StoreError>;

    /// Full-document replacement of an existing flow.
    fn update(&mut self, id: &str, doc: FlowDocument) -> Result<(), StoreError>;
}

/// Reference in-memory implementation of [`FlowStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: Vec<FlowDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl FlowStore for MemoryStore {
    fn save(&mut self, doc: FlowDocument) -> Result<(), StoreError> {
        if self.docs.iter().any(|d| d.id() == doc.id()) {
            return Err(StoreError::Duplicate(doc.id().to_string()));
        }
        self.docs.push(doc);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<FlowDocument, StoreError> {
        self.docs
            .iter()
            .find(|d| d.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<FlowDocument>, StoreError> {
        Ok(self.docs.clone())
    }

    fn update(&mut self, id: &str, doc: FlowDocument) -> Result<(), StoreError> {
        match self.docs.iter_mut().find(|d| d.id() == id) {
            Some(slot) => {
                *slot = doc;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
