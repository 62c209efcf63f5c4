//! WMS GetCapabilities layer discovery.
//!
//! Layer names are pulled out of the document with a small state machine
//! ([`LayerNameCollector`]) fed by a streaming [`quick_xml::Reader`]. The
//! collector only sees start/end/character events, so any other event
//! source can drive it too.
//!
//! # Transitions ([`LayerScope::Flat`])
//!
//! | State         | Event          | Next          |
//! |---------------|----------------|---------------|
//! | `Idle`        | start `Layer`  | `InLayer`     |
//! | `InLayer`     | start `Layer`  | `InLayer`     |
//! | `InLayer`     | start `Name`   | `InLayerName` |
//! | `InLayerName` | any start      | `InLayerName` |
//! | any           | end `Layer`    | `Idle`        |
//! | `InLayerName` | any other end  | `InLayer`     |
//!
//! Element names compare case-insensitively on their local part. Text seen
//! in `InLayerName` is buffered and emitted as one trimmed layer name at the
//! next end tag of any kind.
//!
//! | Buffered text at that end tag | Emitted                  |
//! |-------------------------------|--------------------------|
//! | non-blank                     | trimmed text as a `Layer`|
//! | empty or whitespace only      | nothing (entry dropped)  |

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::debug;

use wms_common::{Layer, LayerList, WmsError};

/// Failure to read a capabilities document. No partial layer list survives it.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML reader rejected the document
    #[error("Malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Bytes that cannot be decoded in the document's declared encoding
    #[error("Undecodable text at byte {position}: {source}")]
    Decode {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Input ended while an element was still open
    #[error("Unexpected end of document at byte {position}: <{name}> is never closed")]
    UnclosedElement { name: String, position: u64 },

    /// Input ended without any element at all
    #[error("No root element found before byte {position}")]
    NoRootElement { position: u64 },

    /// A second top-level element after the root closed
    #[error("Second root element <{name}> at byte {position}")]
    MultipleRoots { name: String, position: u64 },

    /// Character data before or after the root element
    #[error("Text outside the root element at byte {position}")]
    TextOutsideRoot { position: u64 },
}

impl ParseError {
    /// Byte offset into the document where parsing stopped.
    pub fn position(&self) -> u64 {
        match self {
            ParseError::Xml { position, .. }
            | ParseError::Decode { position, .. }
            | ParseError::UnclosedElement { position, .. }
            | ParseError::NoRootElement { position }
            | ParseError::MultipleRoots { position, .. }
            | ParseError::TextOutsideRoot { position } => *position,
        }
    }

    /// Split reader failures into encoding problems and everything else.
    fn from_reader(position: u64, source: quick_xml::Error) -> Self {
        match source {
            quick_xml::Error::NonDecodable(_) => ParseError::Decode { position, source },
            source => ParseError::Xml { position, source },
        }
    }
}

impl From<ParseError> for WmsError {
    fn from(err: ParseError) -> Self {
        WmsError::CapabilitiesParse(err.to_string())
    }
}

/// How `<Layer>` nesting is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerScope {
    /// Any `</Layer>` drops back to `Idle`, even when an outer `<Layer>` is
    /// still open, and every `<Name>` below a `<Layer>` counts.
    #[default]
    Flat,

    /// Track `<Layer>` depth so closing a child keeps the parent open, and
    /// only take `<Name>` elements that are direct children of a `<Layer>`
    /// (skips `<Style><Name>` and friends).
    Nested,
}

/// Where the collector currently sits relative to `<Layer>` and `<Name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Idle,
    InLayer,
    InLayerName,
}

fn is_element(name: &str, expected: &str) -> bool {
    name.eq_ignore_ascii_case(expected)
}

/// Event-driven layer name extraction.
#[derive(Debug)]
pub struct LayerNameCollector {
    scope: LayerScope,
    state: ParserState,
    layer_depth: usize,
    pending: String,
    layers: LayerList,
}

impl LayerNameCollector {
    pub fn new(scope: LayerScope) -> Self {
        Self {
            scope,
            state: ParserState::Idle,
            layer_depth: 0,
            pending: String::new(),
            layers: LayerList::new(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Names collected so far.
    pub fn layers(&self) -> &LayerList {
        &self.layers
    }

    /// Feed a start tag. `parent` is the local name of the enclosing element,
    /// if any; only [`LayerScope::Nested`] looks at it.
    pub fn start_element(&mut self, name: &str, parent: Option<&str>) {
        let is_layer = is_element(name, "layer");
        let is_name = is_element(name, "name");

        match self.scope {
            LayerScope::Flat => match self.state {
                ParserState::Idle | ParserState::InLayer if is_layer => {
                    self.state = ParserState::InLayer;
                }
                ParserState::InLayer if is_name => self.enter_name(),
                _ => {}
            },
            LayerScope::Nested => {
                if is_layer {
                    self.layer_depth += 1;
                    if self.state != ParserState::InLayerName {
                        self.state = ParserState::InLayer;
                    }
                } else if is_name
                    && self.state == ParserState::InLayer
                    && parent.is_some_and(|p| is_element(p, "layer"))
                {
                    self.enter_name();
                }
            }
        }
    }

    /// Feed an end tag. Always terminates any name being captured.
    pub fn end_element(&mut self, name: &str) {
        self.flush_name();

        if is_element(name, "layer") {
            self.state = match self.scope {
                LayerScope::Flat => ParserState::Idle,
                LayerScope::Nested => {
                    self.layer_depth = self.layer_depth.saturating_sub(1);
                    if self.layer_depth > 0 {
                        ParserState::InLayer
                    } else {
                        ParserState::Idle
                    }
                }
            };
        } else if self.state == ParserState::InLayerName {
            self.state = ParserState::InLayer;
        }
    }

    /// Feed a chunk of character data. Chunks belonging to the same name are
    /// concatenated, however the reader happens to split them.
    pub fn characters(&mut self, text: &str) {
        if self.state == ParserState::InLayerName {
            self.pending.push_str(text);
        }
    }

    /// Consume the collector and return the names in document order.
    pub fn finish(mut self) -> LayerList {
        self.flush_name();
        self.layers
    }

    fn enter_name(&mut self) {
        self.state = ParserState::InLayerName;
        self.pending.clear();
    }

    fn flush_name(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let name = self.pending.trim();
        if !name.is_empty() {
            debug!(layer = %name, "Captured layer name");
            self.layers.push(Layer::new(name));
        }
        self.pending.clear();
    }
}

/// One-shot GetCapabilities parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilitiesParser {
    scope: LayerScope,
}

impl CapabilitiesParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(scope: LayerScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> LayerScope {
        self.scope
    }

    /// Extract layer names from a GetCapabilities document.
    ///
    /// Runs to completion in a single pass. A well-formed document without
    /// layers gives an empty list; anything that is not exactly one root
    /// element (plain text, no elements, several roots) fails the whole parse.
    /// Text is decoded according to the document's `encoding` declaration.
    pub fn parse(&self, xml: &[u8]) -> Result<LayerList, ParseError> {
        let mut reader = Reader::from_reader(xml);
        let mut buf = Vec::new();
        let mut collector = LayerNameCollector::new(self.scope);

        // Local names of currently open elements; quick-xml does not report
        // elements left open at end of input, nor anything about the root.
        let mut open: Vec<String> = Vec::new();
        let mut root_seen = false;

        loop {
            let position = reader.buffer_position() as u64;
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = decode_name(&reader, e.local_name().as_ref(), position)?;
                    check_root(&mut root_seen, &open, &name, position)?;
                    collector.start_element(&name, open.last().map(String::as_str));
                    open.push(name);
                }
                Ok(Event::Empty(e)) => {
                    let name = decode_name(&reader, e.local_name().as_ref(), position)?;
                    check_root(&mut root_seen, &open, &name, position)?;
                    collector.start_element(&name, open.last().map(String::as_str));
                    collector.end_element(&name);
                }
                Ok(Event::End(e)) => {
                    let name = decode_name(&reader, e.local_name().as_ref(), position)?;
                    open.pop();
                    collector.end_element(&name);
                }
                Ok(Event::Text(t)) => {
                    let text = t
                        .unescape()
                        .map_err(|source| ParseError::from_reader(position, source))?;
                    if open.is_empty() {
                        if !text.trim().is_empty() {
                            return Err(ParseError::TextOutsideRoot { position });
                        }
                    } else {
                        collector.characters(&text);
                    }
                }
                Ok(Event::CData(c)) => {
                    if open.is_empty() {
                        return Err(ParseError::TextOutsideRoot { position });
                    }
                    let text = reader
                        .decoder()
                        .decode(&c)
                        .map_err(|source| ParseError::from_reader(position, source))?;
                    collector.characters(&text);
                }
                Ok(Event::Eof) => break,
                Err(source) => {
                    return Err(ParseError::from_reader(
                        reader.buffer_position() as u64,
                        source,
                    ))
                }
                _ => {}
            }
            buf.clear();
        }

        let position = reader.buffer_position() as u64;
        if let Some(name) = open.pop() {
            return Err(ParseError::UnclosedElement { name, position });
        }
        if !root_seen {
            return Err(ParseError::NoRootElement { position });
        }

        let layers = collector.finish();
        debug!(count = layers.len(), scope = ?self.scope, "Parsed capabilities document");
        Ok(layers)
    }
}

fn decode_name<R>(reader: &Reader<R>, raw: &[u8], position: u64) -> Result<String, ParseError> {
    reader
        .decoder()
        .decode(raw)
        .map(|name| name.into_owned())
        .map_err(|source| ParseError::from_reader(position, source))
}

/// Accept the first top-level element and reject any later one.
fn check_root(
    root_seen: &mut bool,
    open: &[String],
    name: &str,
    position: u64,
) -> Result<(), ParseError> {
    if !open.is_empty() {
        return Ok(());
    }
    if *root_seen {
        return Err(ParseError::MultipleRoots {
            name: name.to_string(),
            position,
        });
    }
    *root_seen = true;
    Ok(())
}

/// Parse with the default [`LayerScope::Flat`] behaviour.
pub fn parse_capabilities(xml: &[u8]) -> Result<LayerList, ParseError> {
    CapabilitiesParser::new().parse(xml)
}
