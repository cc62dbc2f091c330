// frontend_foodgram/src/head.rs
use thiserror::Error;
use web_sys::Document;

/// Document-level metadata a page publishes while it is mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaField {
    Description,
    OgTitle,
}

impl MetaField {
    pub const ALL: [MetaField; 2] = [MetaField::Description, MetaField::OgTitle];

    /// Attribute used to identify the tag (`name` or `property`).
    pub fn attribute(self) -> &'static str {
        match self {
            MetaField::Description => "name",
            MetaField::OgTitle => "property",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MetaField::Description => "description",
            MetaField::OgTitle => "og:title",
        }
    }

    pub fn selector(self) -> String {
        format!("meta[{}=\"{}\"]", self.attribute(), self.key())
    }

    fn value(self, meta: &PageMeta) -> &'static str {
        match self {
            MetaField::Description => meta.description,
            MetaField::OgTitle => meta.og_title,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeadError {
    #[error("no document available")]
    NoDocument,
    #[error("document has no <head> element")]
    NoHead,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Whatever owns the `<title>` and `<meta>` tags of the current document.
pub trait HeadTarget {
    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    /// `None` when no matching tag exists.
    fn meta_content(&self, field: MetaField) -> Option<String>;
    /// Creates the tag when it is missing.
    fn set_meta_content(&mut self, field: MetaField, content: &str) -> Result<(), HeadError>;
    fn remove_meta(&mut self, field: MetaField) -> Result<(), HeadError>;
}

/// Head state captured before a page overwrote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadSnapshot {
    title: String,
    meta: Vec<(MetaField, Option<String>)>,
}

pub fn apply<H: HeadTarget>(head: &mut H, meta: &PageMeta) -> Result<HeadSnapshot, HeadError> {
    let snapshot = HeadSnapshot {
        title: head.title(),
        meta: MetaField::ALL
            .iter()
            .map(|field| (*field, head.meta_content(*field)))
            .collect(),
    };

    head.set_title(meta.title);
    for field in MetaField::ALL {
        if let Err(err) = head.set_meta_content(field, field.value(meta)) {
            // Never leave the head half-written.
            let _ = restore(head, &snapshot);
            return Err(err);
        }
    }

    Ok(snapshot)
}

pub fn restore<H: HeadTarget>(head: &mut H, snapshot: &HeadSnapshot) -> Result<(), HeadError> {
    head.set_title(&snapshot.title);
    let mut first_error = None;
    for (field, previous) in &snapshot.meta {
        let result = match previous {
            Some(content) => head.set_meta_content(*field, content),
            None => head.remove_meta(*field),
        };
        if let Err(err) = result {
            first_error.get_or_insert(err);
        }
    }
    first_error.map_or(Ok(()), Err)
}

/// Browser head backed by `window.document`.
pub struct DomHead {
    document: Document,
}

impl DomHead {
    pub fn new() -> Result<Self, HeadError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HeadError::NoDocument)?;
        Ok(Self { document })
    }

    fn find(&self, field: MetaField) -> Option<web_sys::Element> {
        self.document.query_selector(&field.selector()).ok().flatten()
    }
}

fn dom_error(err: wasm_bindgen::JsValue) -> HeadError {
    HeadError::Dom(format!("{:?}", err))
}

impl HeadTarget for DomHead {
    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn meta_content(&self, field: MetaField) -> Option<String> {
        self.find(field).and_then(|el| el.get_attribute("content"))
    }

    fn set_meta_content(&mut self, field: MetaField, content: &str) -> Result<(), HeadError> {
        let element = match self.find(field) {
            Some(element) => element,
            None => {
                let element = self.document.create_element("meta").map_err(dom_error)?;
                element
                    .set_attribute(field.attribute(), field.key())
                    .map_err(dom_error)?;
                let head = self.document.head().ok_or(HeadError::NoHead)?;
                head.append_child(&element).map_err(dom_error)?;
                element
            }
        };
        element.set_attribute("content", content).map_err(dom_error)
    }

    fn remove_meta(&mut self, field: MetaField) -> Result<(), HeadError> {
        if let Some(element) = self.find(field) {
            element.remove();
        }
        Ok(())
    }
}
